use crate::error::AppError;
use crate::models::ThemeMode;
use crate::storage::{LocalStore, THEME_KEY};
use std::sync::Arc;
use tracing::{info, warn};

/// Light/dark preference persisted under [`THEME_KEY`].
pub struct ThemePreference {
    store: Arc<dyn LocalStore>,
    current: ThemeMode,
}

impl ThemePreference {
    /// Reads the stored theme. Missing, unreadable or unknown values fall back to
    /// the environment preference.
    pub async fn load(store: Arc<dyn LocalStore>, prefers_dark: bool) -> Self {
        let fallback = if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };

        let current = match store.get_item(THEME_KEY).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored theme: {}", e);
                fallback
            }),
            Ok(None) => fallback,
            Err(e) => {
                warn!("Failed to read theme preference: {}", e);
                fallback
            }
        };

        Self { store, current }
    }

    pub fn current(&self) -> ThemeMode {
        self.current
    }

    /// Switches to the other theme and persists it.
    pub async fn toggle(&mut self) -> Result<ThemeMode, AppError> {
        let next = self.current.toggled();
        self.store.set_item(THEME_KEY, next.as_str()).await?;
        self.current = next;
        info!("Theme switched to {}", next);
        Ok(next)
    }
}
