//! Chat Actor Tests
//!
//! Tests for the chat actor: surface event ordering, typing delay,
//! queued replies and the widget state machine.
//!
//! Timing tests run on a paused clock so delays are exact and instant.

use crate::actors::{
    ChannelSurface, ChatEvent, ChatHandle, ChatSender, InteractionKind, WidgetEvent, WidgetState,
};
use crate::config::ContactLinks;
use crate::responder::{
    default_suggestions, ChatResponder, FixedIndex, Reply, StaticPageContent, Suggestions,
};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Duration, Instant};

fn spawn_chat(reduced_motion: bool) -> (ChatHandle, UnboundedReceiver<ChatEvent>) {
    let responder = ChatResponder::new(
        ContactLinks::default(),
        Arc::new(StaticPageContent),
        Box::new(FixedIndex(0)),
    );
    let (surface, events) = ChannelSurface::new();
    (ChatHandle::new(responder, Arc::new(surface), reduced_motion), events)
}

fn drain(events: &mut UnboundedReceiver<ChatEvent>) -> Vec<ChatEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

fn bot_messages(events: &[ChatEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            ChatEvent::Message {
                sender: ChatSender::Bot,
                body,
                ..
            } => Some(body.clone()),
            _ => None,
        })
        .collect()
}

fn user(body: &str) -> ChatEvent {
    ChatEvent::Message {
        sender: ChatSender::User,
        body: body.to_string(),
        allow_markup: false,
    }
}

fn delay_of(text: &str) -> Duration {
    Reply::plain(text, Suggestions::UseDefault).typing_delay()
}

#[cfg(test)]
mod delivery_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reply_event_order() {
        let (chat, mut events) = spawn_chat(false);

        let reply = chat.ask("  hola ").await.unwrap().expect("No reply");

        let seen = drain(&mut events);
        assert_eq!(
            seen,
            vec![
                user("hola"),
                ChatEvent::Suggestions { items: vec![] },
                ChatEvent::TypingShown,
                ChatEvent::TypingHidden,
                ChatEvent::Message {
                    sender: ChatSender::Bot,
                    body: reply.text.clone(),
                    allow_markup: false,
                },
                ChatEvent::Suggestions {
                    items: default_suggestions()
                },
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_typing_delay() {
        let (chat, _events) = spawn_chat(false);
        let started = Instant::now();

        let reply = chat.ask("gracias").await.unwrap().unwrap();

        let elapsed = started.elapsed();
        let expected = reply.typing_delay();
        assert_eq!(expected, delay_of(&reply.text));
        assert!(elapsed >= expected, "{:?} < {:?}", elapsed, expected);
        assert!(elapsed < expected + Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reduced_motion_skips_indicator_only() {
        let (chat, mut events) = spawn_chat(true);
        let started = Instant::now();

        let reply = chat.ask("hola").await.unwrap().unwrap();

        assert!(started.elapsed() >= reply.typing_delay());
        let seen = drain(&mut events);
        assert!(!seen.contains(&ChatEvent::TypingShown));
        assert!(!seen.contains(&ChatEvent::TypingHidden));
        assert_eq!(bot_messages(&seen), vec![reply.text]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submissions_are_queued_in_order() {
        let (chat, mut events) = spawn_chat(false);
        let started = Instant::now();

        assert!(chat.submit("hola").await.unwrap());
        assert!(chat.submit("gracias").await.unwrap());
        let last = chat.ask("adiós").await.unwrap().unwrap();

        let seen = drain(&mut events);
        let replies = bot_messages(&seen);
        assert_eq!(replies.len(), 3);
        assert!(replies[0].starts_with("¡Hola!"));
        assert!(replies[1].starts_with("¡Con gusto!"));
        assert_eq!(replies[2], last.text);

        let total: Duration = replies.iter().map(|r| delay_of(r)).sum();
        assert!(started.elapsed() >= total);

        // All three user messages are echoed before the first reply lands.
        let first_bot = seen
            .iter()
            .position(|e| matches!(e, ChatEvent::Message { sender: ChatSender::Bot, .. }))
            .unwrap();
        let users = seen[..first_bot]
            .iter()
            .filter(|e| matches!(e, ChatEvent::Message { sender: ChatSender::User, .. }))
            .count();
        assert_eq!(users, 3);

        // Farewell leaves the chip row empty.
        assert_eq!(seen.last(), Some(&ChatEvent::Suggestions { items: vec![] }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_email_memory_spans_the_session() {
        let (chat, _events) = spawn_chat(false);

        let first = chat.ask("correo").await.unwrap().unwrap();
        let second = chat.ask("correo").await.unwrap().unwrap();

        assert!(first.text.starts_with("Puedes escribirme"));
        assert!(second.text.starts_with("Ya te había compartido"));
        assert!(chat.status().await.unwrap().session.email_shared);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_is_ignored() {
        let (chat, mut events) = spawn_chat(false);

        assert!(!chat.submit("   ").await.unwrap());
        assert!(chat.ask("\t\n").await.unwrap().is_none());

        assert!(drain(&mut events).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_empty_after_normalization_gets_no_reply() {
        let (chat, mut events) = spawn_chat(false);

        // A lone combining accent survives trimming but not normalization.
        let reply = chat.ask("\u{301}").await.unwrap();

        assert!(reply.is_none());
        assert_eq!(drain(&mut events), vec![user("\u{301}")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_suggestion_submits_label() {
        let (chat, mut events) = spawn_chat(false);

        assert!(chat.click_suggestion("Ver certificados").await.unwrap());
        // Wait for the queued reply behind it.
        chat.ask("gracias").await.unwrap();

        let seen = drain(&mut events);
        assert_eq!(seen[0], user("Ver certificados"));
        let replies = bot_messages(&seen);
        assert!(replies[0].starts_with("<div><strong>Certificados:</strong>"));
        assert!(seen.contains(&ChatEvent::Message {
            sender: ChatSender::Bot,
            body: replies[0].clone(),
            allow_markup: true,
        }));
    }
}

#[cfg(test)]
mod widget_tests {
    use super::*;

    const KEY: WidgetEvent = WidgetEvent::PageInteraction(InteractionKind::KeyDown);
    const POINTER: WidgetEvent = WidgetEvent::PageInteraction(InteractionKind::PointerDown);

    #[tokio::test(start_paused = true)]
    async fn test_open_queues_greeting_once() {
        let (chat, mut events) = spawn_chat(false);

        assert_eq!(chat.dispatch(WidgetEvent::Toggle).await.unwrap(), WidgetState::Open);
        assert_eq!(chat.dispatch(WidgetEvent::Toggle).await.unwrap(), WidgetState::Closed);
        assert_eq!(chat.dispatch(WidgetEvent::Toggle).await.unwrap(), WidgetState::Open);
        // Replies are sequential, so this one lands after the greeting.
        chat.ask("gracias").await.unwrap();

        let seen = drain(&mut events);
        let replies = bot_messages(&seen);
        assert_eq!(replies.len(), 2);
        assert!(replies[0].starts_with("¡Hola! Soy el asistente virtual"));
        assert!(chat.status().await.unwrap().session.initialized);

        let visibility: Vec<&ChatEvent> = seen
            .iter()
            .filter(|e| matches!(e, ChatEvent::Visibility { .. }))
            .collect();
        assert_eq!(
            visibility,
            vec![
                &ChatEvent::Visibility { open: true },
                &ChatEvent::Visibility { open: false },
                &ChatEvent::Visibility { open: true },
            ]
        );
    }

    #[tokio::test]
    async fn test_auto_open_fires_once() {
        let (chat, _events) = spawn_chat(false);

        assert_eq!(chat.dispatch(KEY).await.unwrap(), WidgetState::Open);
        assert_eq!(chat.dispatch(WidgetEvent::Close).await.unwrap(), WidgetState::Closed);
        assert_eq!(chat.dispatch(POINTER).await.unwrap(), WidgetState::Closed);

        let status = chat.status().await.unwrap();
        assert!(status.auto_open_triggered);
        assert_eq!(status.widget, WidgetState::Closed);
    }

    #[tokio::test]
    async fn test_escape_closes_open_widget() {
        let (chat, mut events) = spawn_chat(false);

        chat.dispatch(WidgetEvent::Toggle).await.unwrap();
        assert_eq!(chat.dispatch(WidgetEvent::Escape).await.unwrap(), WidgetState::Closed);
        // Escape on a closed widget changes nothing.
        assert_eq!(chat.dispatch(WidgetEvent::Escape).await.unwrap(), WidgetState::Closed);

        let closes = drain(&mut events)
            .into_iter()
            .filter(|e| *e == ChatEvent::Visibility { open: false })
            .count();
        assert_eq!(closes, 1);
    }

    #[tokio::test]
    async fn test_interaction_after_manual_open_consumes_auto_open() {
        let (chat, _events) = spawn_chat(false);

        chat.dispatch(WidgetEvent::Toggle).await.unwrap();
        assert_eq!(chat.dispatch(KEY).await.unwrap(), WidgetState::Open);
        chat.dispatch(WidgetEvent::Close).await.unwrap();
        assert_eq!(chat.dispatch(KEY).await.unwrap(), WidgetState::Closed);
    }
}
