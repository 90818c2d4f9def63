use crate::actors::messages::{ChatMessage, ChatSender, ChatStatus, PendingReply};
use crate::actors::traits::ChatSurface;
use crate::actors::widget::{ChatWidget, WidgetEvent, WidgetState};
use crate::error::AppError;
use crate::responder::{ChatResponder, ChatSession, Reply};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, error, info, instrument};

const ASK_TIMEOUT: Duration = Duration::from_secs(30);

/// A handle to the chat actor.
///
/// This is the entry point for everything the chat widget does: submitting text,
/// clicking suggestions and opening/closing the widget. Cloning the handle is cheap;
/// the actor stops when the last handle is dropped.
#[derive(Clone)]
pub struct ChatHandle {
    sender: mpsc::Sender<ChatMessage>,
    surface: Arc<dyn ChatSurface>,
}

impl ChatHandle {
    /// Spawns the chat actor and its reply dispatcher.
    ///
    /// # Arguments
    ///
    /// * `responder` - The rule engine answering user input.
    /// * `surface` - Where transcript, typing indicator and chips are rendered.
    /// * `reduced_motion` - Skip the typing indicator (replies keep their delay).
    pub fn new(responder: ChatResponder, surface: Arc<dyn ChatSurface>, reduced_motion: bool) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let (delivery_tx, delivery_rx) = mpsc::unbounded_channel();

        let dispatcher = ReplyDispatcher {
            receiver: delivery_rx,
            surface: surface.clone(),
            reduced_motion,
            typing: false,
        };
        tokio::spawn(async move { dispatcher.run().await });

        let runner = ChatRunner {
            receiver,
            responder,
            session: ChatSession::default(),
            widget: ChatWidget::default(),
            surface: surface.clone(),
            deliveries: delivery_tx,
        };
        tokio::spawn(async move { runner.run().await });

        Self { sender, surface }
    }

    /// Submits user text. Whitespace-only input is ignored; otherwise the text is
    /// appended to the transcript and a reply is queued.
    ///
    /// Returns `true` when the input was accepted.
    #[instrument(skip(self))]
    pub async fn submit(&self, raw: &str) -> Result<bool, AppError> {
        let Some(text) = self.echo_user(raw) else {
            return Ok(false);
        };
        self.sender
            .send(ChatMessage::Input {
                text,
                responder: None,
            })
            .await?;
        Ok(true)
    }

    /// Submits user text and waits until its reply is visible.
    ///
    /// Returns `None` when the input was ignored.
    #[instrument(skip(self))]
    pub async fn ask(&self, raw: &str) -> Result<Option<Reply>, AppError> {
        let Some(text) = self.echo_user(raw) else {
            return Ok(None);
        };
        let (send, recv) = oneshot::channel();
        self.sender
            .send(ChatMessage::Input {
                text,
                responder: Some(send),
            })
            .await?;
        Ok(timeout(ASK_TIMEOUT, recv).await??)
    }

    /// Clicking a chip is the same as typing its label.
    pub async fn click_suggestion(&self, label: &str) -> Result<bool, AppError> {
        self.submit(label).await
    }

    /// Applies a widget interaction and returns the resulting state.
    pub async fn dispatch(&self, event: WidgetEvent) -> Result<WidgetState, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(ChatMessage::Widget {
                event,
                responder: send,
            })
            .await?;
        Ok(recv.await?)
    }

    pub async fn status(&self) -> Result<ChatStatus, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender.send(ChatMessage::Status { responder: send }).await?;
        Ok(recv.await?)
    }

    fn echo_user(&self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            debug!("Ignoring empty input");
            return None;
        }
        self.surface.append_message(ChatSender::User, text, false);
        Some(text.to_string())
    }
}

// --- Actor Runner ---
struct ChatRunner {
    receiver: mpsc::Receiver<ChatMessage>,
    responder: ChatResponder,
    session: ChatSession,
    widget: ChatWidget,
    surface: Arc<dyn ChatSurface>,
    deliveries: mpsc::UnboundedSender<PendingReply>,
}

impl ChatRunner {
    async fn run(mut self) {
        info!("Chat actor started");
        while let Some(msg) = self.receiver.recv().await {
            if let Err(e) = self.handle_message(msg) {
                error!("Error handling chat message: {:?}", e);
            }
        }
        info!("Chat actor stopped");
    }

    fn handle_message(&mut self, msg: ChatMessage) -> Result<(), AppError> {
        match msg {
            ChatMessage::Input { text, responder } => {
                match self.responder.respond(&mut self.session, &text) {
                    Some(reply) => {
                        self.surface.set_suggestions(&[]);
                        self.deliveries.send(PendingReply { reply, responder })?;
                    }
                    None => {
                        if let Some(responder) = responder {
                            let _ = responder.send(None);
                        }
                    }
                }
            }
            ChatMessage::Widget { event, responder } => {
                if let Some(state) = self.widget.apply(event) {
                    info!(?event, ?state, "Chat widget changed");
                    self.surface.set_visible(state == WidgetState::Open);
                    if state == WidgetState::Open {
                        self.prime()?;
                    }
                }
                let _ = responder.send(self.widget.state());
            }
            ChatMessage::Status { responder } => {
                let _ = responder.send(ChatStatus {
                    widget: self.widget.state(),
                    auto_open_triggered: self.widget.auto_open_triggered(),
                    session: self.session.clone(),
                });
            }
        }
        Ok(())
    }

    /// Queues the session greeting the first time the widget opens.
    fn prime(&mut self) -> Result<(), AppError> {
        if self.session.initialized {
            return Ok(());
        }
        self.session.initialized = true;
        self.deliveries.send(PendingReply {
            reply: self.responder.session_greeting(),
            responder: None,
        })?;
        Ok(())
    }
}

/// Reveals queued replies one at a time, each after its typing delay.
struct ReplyDispatcher {
    receiver: mpsc::UnboundedReceiver<PendingReply>,
    surface: Arc<dyn ChatSurface>,
    reduced_motion: bool,
    typing: bool,
}

impl ReplyDispatcher {
    async fn run(mut self) {
        while let Some(pending) = self.receiver.recv().await {
            self.deliver(pending).await;
        }
        self.hide_typing();
    }

    #[instrument(skip(self, pending), fields(chars = pending.reply.text.chars().count()))]
    async fn deliver(&mut self, pending: PendingReply) {
        let delay = pending.reply.typing_delay();
        self.show_typing();
        sleep(delay).await;
        self.hide_typing();

        let reply = pending.reply;
        self.surface
            .append_message(ChatSender::Bot, &reply.text, reply.allow_markup);
        self.surface.set_suggestions(&reply.suggestions.resolve());
        debug!(delay_ms = delay.as_millis() as u64, "Reply delivered");

        if let Some(responder) = pending.responder {
            let _ = responder.send(Some(reply));
        }
    }

    fn show_typing(&mut self) {
        if self.reduced_motion || self.typing {
            return;
        }
        self.typing = true;
        self.surface.show_typing();
    }

    fn hide_typing(&mut self) {
        if self.typing {
            self.typing = false;
            self.surface.hide_typing();
        }
    }
}
