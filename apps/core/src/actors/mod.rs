//! # Chat Actors
//!
//! Tokio tasks that own the chat widget's state.
//!
//! - `chat`: the chat actor (`ChatHandle`) and its reply dispatcher
//! - `widget`: open/closed state machine
//! - `messages`: actor messages and surface events
//! - `traits`: the `ChatSurface` rendering seam
//! - `surface`: channel-backed `ChatSurface`

pub mod chat;
pub mod messages;
pub mod surface;
pub mod traits;
pub mod widget;

pub use chat::ChatHandle;
pub use messages::{ChatEvent, ChatSender, ChatStatus};
pub use surface::ChannelSurface;
pub use traits::ChatSurface;
pub use widget::{ChatWidget, InteractionKind, WidgetEvent, WidgetState};
