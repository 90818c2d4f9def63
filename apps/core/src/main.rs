// Folio terminal front end
// Drives the chat widget, feed and theme from stdin.

use anyhow::{Context, Result};
use chrono::Utc;
use folio_core::actors::{
    ChannelSurface, ChatEvent, ChatHandle, ChatSender, InteractionKind, WidgetEvent, WidgetState,
};
use folio_core::config::AppConfig;
use folio_core::feed::{time_ago, FeedStore};
use folio_core::fs_manager::PortablePathManager;
use folio_core::models::{Author, Post};
use folio_core::responder::{ChatResponder, PageSnapshot, ThreadRandom};
use folio_core::storage::{LocalStore, MemoryStore, SqliteStore};
use folio_core::telemetry;
use folio_core::theme::ThemePreference;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};
use tracing::{error, info, warn};

/// Suggestion chips currently on screen, shared between the printer and `/pick`.
type VisibleChips = Arc<Mutex<Vec<String>>>;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    telemetry::init_tracing(config.log_format)?;

    // Initialize File System (Portable)
    let paths = PortablePathManager::new(config.data_dir.clone());
    if let Err(e) = paths.init() {
        error!("Failed to initialize portable file system: {}", e);
    }

    let store = open_store(&paths).await;
    let mut theme = ThemePreference::load(store.clone(), config.prefers_dark).await;
    let mut feed = FeedStore::load(store, Author::default(), config.feed_latency).await;
    info!(theme = %theme.current(), posts = feed.list().len(), "Page ready");

    let page = PageSnapshot::load_or_static(config.page_content.as_deref());
    let responder = ChatResponder::new(config.contact.clone(), page, Box::new(ThreadRandom));
    let (surface, events) = ChannelSurface::new();
    let chat = ChatHandle::new(responder, Arc::new(surface), config.reduced_motion);

    let chips: VisibleChips = Arc::new(Mutex::new(Vec::new()));
    let printer = tokio::spawn(print_events(events, chips.clone()));

    println!("Tema: {} · escribe /help para ver los comandos", theme.current().label());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        chat.dispatch(WidgetEvent::PageInteraction(InteractionKind::KeyDown))
            .await?;

        let line = line.trim();
        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        let outcome = match command {
            "/quit" => break,
            "/help" => {
                print_help();
                Ok(())
            }
            "/open" => open_widget(&chat).await,
            "/close" => chat.dispatch(WidgetEvent::Close).await.map(drop),
            "/esc" => chat.dispatch(WidgetEvent::Escape).await.map(drop),
            "/theme" => theme.toggle().await.map(|mode| {
                println!("Tema: {}", mode.label());
            }),
            "/feed" => {
                print_feed(feed.list());
                Ok(())
            }
            "/post" => feed.publish(arg, None).await.map(|post| {
                println!("Publicado {}", short_id(&post.id));
            }),
            "/like" => match find_by_prefix(feed.list(), arg) {
                Some(id) => feed.toggle_like(&id).await.map(|post| {
                    println!("{} · {} me gusta", short_id(&post.id), post.like_count);
                }),
                None => {
                    println!("No hay ninguna publicación con id {:?}", arg);
                    Ok(())
                }
            },
            "/more" => {
                println!("Cargando…");
                feed.load_more().await.map(|more| {
                    println!("{} publicaciones nuevas", more.len());
                })
            }
            "/pick" => {
                let label = pick_chip(&chips, arg).await;
                match label {
                    Some(label) => chat.click_suggestion(&label).await.map(drop),
                    None => {
                        println!("No hay sugerencia {:?}", arg);
                        Ok(())
                    }
                }
            }
            _ => chat.submit(line).await.map(drop),
        };

        if let Err(e) = outcome {
            warn!("Command {:?} failed: {}", command, e);
            println!("Error: {}", e);
        }
    }

    drop(chat);
    if let Err(e) = printer.await {
        error!("Event printer crashed: {}", e);
    }
    info!("Bye");
    Ok(())
}

/// SQLite under the data dir, or an in-memory store when the database cannot be opened.
async fn open_store(paths: &PortablePathManager) -> Arc<dyn LocalStore> {
    match SqliteStore::open(&paths.db_path()).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to open local store, state will not persist: {}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

async fn open_widget(chat: &ChatHandle) -> Result<(), folio_core::error::AppError> {
    if chat.status().await?.widget == WidgetState::Closed {
        chat.dispatch(WidgetEvent::Toggle).await?;
    }
    Ok(())
}

async fn pick_chip(chips: &VisibleChips, arg: &str) -> Option<String> {
    let index = arg.parse::<usize>().ok()?.checked_sub(1)?;
    chips.lock().await.get(index).cloned()
}

async fn print_events(mut events: mpsc::UnboundedReceiver<ChatEvent>, chips: VisibleChips) {
    while let Some(event) = events.recv().await {
        match event {
            ChatEvent::Message { sender, body, .. } => match sender {
                ChatSender::User => println!("tú › {}", body),
                ChatSender::Bot => println!("ra › {}", body),
            },
            ChatEvent::TypingShown => println!("ra está escribiendo…"),
            ChatEvent::TypingHidden => {}
            ChatEvent::Suggestions { items } => {
                for (i, item) in items.iter().enumerate() {
                    println!("   [{}] {}", i + 1, item);
                }
                *chips.lock().await = items;
            }
            ChatEvent::Visibility { open } => {
                println!("{}", if open { "── chat abierto ──" } else { "── chat cerrado ──" });
            }
        }
    }
}

fn print_feed(posts: &[Post]) {
    let now = Utc::now().timestamp_millis();
    for post in posts {
        println!(
            "{} · {} · {} · {} me gusta{} · {} comentarios",
            short_id(&post.id),
            post.author.handle,
            time_ago(post.created_at, now),
            post.like_count,
            if post.liked { " (tú)" } else { "" },
            post.comment_count
        );
        println!("    {}", post.text);
        if !post.tags.is_empty() {
            println!("    {}", post.tags.join(" "));
        }
    }
}

fn find_by_prefix(posts: &[Post], prefix: &str) -> Option<String> {
    if prefix.is_empty() {
        return None;
    }
    posts
        .iter()
        .find(|p| p.id.starts_with(prefix))
        .map(|p| p.id.clone())
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

fn print_help() {
    println!("/open /close /esc        abrir o cerrar el chat");
    println!("/feed /post <texto>      ver o publicar en el feed");
    println!("/like <id> /more         me gusta, cargar más");
    println!("/theme                   cambiar tema");
    println!("/pick <n>                elegir la sugerencia n");
    println!("/quit                    salir");
}
