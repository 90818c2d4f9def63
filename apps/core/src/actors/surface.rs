use crate::actors::messages::{ChatEvent, ChatSender};
use crate::actors::traits::ChatSurface;
use tokio::sync::mpsc;

/// Forwards every surface call as a [`ChatEvent`] over a channel.
///
/// Events sent after the receiver is dropped are discarded.
#[derive(Clone)]
pub struct ChannelSurface {
    sender: mpsc::UnboundedSender<ChatEvent>,
}

impl ChannelSurface {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ChatEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    fn emit(&self, event: ChatEvent) {
        let _ = self.sender.send(event);
    }
}

impl ChatSurface for ChannelSurface {
    fn append_message(&self, sender: ChatSender, body: &str, allow_markup: bool) {
        self.emit(ChatEvent::Message {
            sender,
            body: body.to_string(),
            allow_markup,
        });
    }

    fn show_typing(&self) {
        self.emit(ChatEvent::TypingShown);
    }

    fn hide_typing(&self) {
        self.emit(ChatEvent::TypingHidden);
    }

    fn set_suggestions(&self, items: &[String]) {
        self.emit(ChatEvent::Suggestions {
            items: items.to_vec(),
        });
    }

    fn set_visible(&self, open: bool) {
        self.emit(ChatEvent::Visibility { open });
    }
}
