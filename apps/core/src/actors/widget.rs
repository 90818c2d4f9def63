use serde::Serialize;

/// Visibility of the chat widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
}

/// Kind of page interaction that may auto-open the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    PointerDown,
    KeyDown,
    Scroll,
}

/// User actions that drive the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The floating toggle button.
    Toggle,
    /// The close button inside the widget.
    Close,
    /// Escape key anywhere on the page.
    Escape,
    /// Any pointer, key or scroll event on the page.
    PageInteraction(InteractionKind),
}

/// Open/closed state machine with a one-shot auto-open.
#[derive(Debug, Clone, Default)]
pub struct ChatWidget {
    state: WidgetState,
    auto_open_triggered: bool,
}

impl ChatWidget {
    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn auto_open_triggered(&self) -> bool {
        self.auto_open_triggered
    }

    /// Applies `event` and returns the new state when it changed.
    pub fn apply(&mut self, event: WidgetEvent) -> Option<WidgetState> {
        let next = match (event, self.state) {
            (WidgetEvent::Toggle, WidgetState::Closed) => WidgetState::Open,
            (WidgetEvent::Toggle, WidgetState::Open) => WidgetState::Closed,
            (WidgetEvent::Close | WidgetEvent::Escape, _) => WidgetState::Closed,
            (WidgetEvent::PageInteraction(_), current) => {
                if self.auto_open_triggered {
                    current
                } else {
                    self.auto_open_triggered = true;
                    WidgetState::Open
                }
            }
        };

        if next == self.state {
            None
        } else {
            self.state = next;
            Some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: WidgetEvent = WidgetEvent::PageInteraction(InteractionKind::KeyDown);
    const SCROLL: WidgetEvent = WidgetEvent::PageInteraction(InteractionKind::Scroll);

    #[test]
    fn test_toggle_round_trip() {
        let mut w = ChatWidget::default();
        assert_eq!(w.apply(WidgetEvent::Toggle), Some(WidgetState::Open));
        assert_eq!(w.apply(WidgetEvent::Toggle), Some(WidgetState::Closed));
    }

    #[test]
    fn test_auto_open_fires_once() {
        let mut w = ChatWidget::default();
        assert_eq!(w.apply(KEY), Some(WidgetState::Open));
        assert_eq!(w.apply(WidgetEvent::Escape), Some(WidgetState::Closed));
        assert_eq!(w.apply(SCROLL), None);
        assert_eq!(w.state(), WidgetState::Closed);
        assert!(w.auto_open_triggered());
    }

    #[test]
    fn test_first_interaction_while_open_consumes_auto_open() {
        let mut w = ChatWidget::default();
        w.apply(WidgetEvent::Toggle);
        assert_eq!(w.apply(KEY), None);
        w.apply(WidgetEvent::Close);
        assert_eq!(w.apply(KEY), None);
        assert_eq!(w.state(), WidgetState::Closed);
    }

    #[test]
    fn test_close_and_escape_are_noops_when_closed() {
        let mut w = ChatWidget::default();
        assert_eq!(w.apply(WidgetEvent::Close), None);
        assert_eq!(w.apply(WidgetEvent::Escape), None);
    }
}
