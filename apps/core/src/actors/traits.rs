use crate::actors::messages::ChatSender;

/// Defines the rendering side of the chat widget.
///
/// This trait abstracts the page (DOM, terminal, test recorder) so that the chat
/// actor only decides *what* to show. Implementations must not block.
pub trait ChatSurface: Send + Sync + 'static {
    /// Appends one transcript entry.
    fn append_message(&self, sender: ChatSender, body: &str, allow_markup: bool);

    /// Shows the "typing" indicator.
    fn show_typing(&self);

    /// Removes the "typing" indicator.
    fn hide_typing(&self);

    /// Replaces the suggestion chips; an empty slice hides them.
    fn set_suggestions(&self, items: &[String]);

    /// Shows or hides the widget.
    fn set_visible(&self, open: bool);
}
