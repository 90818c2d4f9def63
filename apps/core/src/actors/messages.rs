use crate::actors::widget::{WidgetEvent, WidgetState};
use crate::responder::{ChatSession, Reply};
use serde::Serialize;
use tokio::sync::oneshot;

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Bot,
}

/// Updates emitted toward the chat surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A transcript entry. `allow_markup` entries are rendered as HTML.
    Message {
        sender: ChatSender,
        body: String,
        allow_markup: bool,
    },
    TypingShown,
    TypingHidden,
    /// Replaces the suggestion chips. Empty hides the row.
    Suggestions { items: Vec<String> },
    /// The widget was shown or hidden.
    Visibility { open: bool },
}

/// Snapshot of the chat actor's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatStatus {
    pub widget: WidgetState,
    pub auto_open_triggered: bool,
    pub session: ChatSession,
}

/// Channel delivering the reply once it is visible. `None` when the input was ignored.
pub type ReplyResponder = oneshot::Sender<Option<Reply>>;

/// Messages that can be sent to the chat actor.
#[derive(Debug)]
pub enum ChatMessage {
    /// Text submitted by the user (typed or via a suggestion chip).
    Input {
        text: String,
        /// Notified after the reply is delivered.
        responder: Option<ReplyResponder>,
    },
    /// A widget interaction.
    Widget {
        event: WidgetEvent,
        responder: oneshot::Sender<WidgetState>,
    },
    /// A request for the current state.
    Status {
        responder: oneshot::Sender<ChatStatus>,
    },
}

/// A classified reply waiting for its typing delay.
#[derive(Debug)]
pub struct PendingReply {
    pub reply: Reply,
    pub responder: Option<ReplyResponder>,
}
