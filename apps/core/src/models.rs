use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Author shown on a feed card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// Handle including the leading `@`.
    pub handle: String,
    /// Avatar image path, relative to the page.
    pub avatar: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "Ricardo Alexis".to_string(),
            handle: "@ricardo.dev".to_string(),
            avatar: "./img/traje.png".to_string(),
        }
    }
}

/// A single feed post.
///
/// Snapshots written by older page versions used `time`, `likes` and
/// `comments`; those names are still accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub author: Author,
    /// Milliseconds since the Unix epoch.
    #[serde(alias = "time")]
    pub created_at: i64,
    pub text: String,
    #[serde(alias = "likes")]
    pub like_count: u32,
    #[serde(alias = "comments")]
    pub comment_count: u32,
    pub liked: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Local blob reference of an attached image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Post {
    /// Flips `liked` and moves `like_count` with it.
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        if self.liked {
            self.like_count = self.like_count.saturating_add(1);
        } else {
            self.like_count = self.like_count.saturating_sub(1);
        }
    }
}

/// Composer contents submitted for publication.
#[derive(Debug, Clone, Validate)]
pub struct PostDraft {
    #[validate(length(min = 1, message = "post text cannot be empty"))]
    pub text: String,
    pub image: Option<String>,
}

impl PostDraft {
    pub fn new(text: &str, image: Option<String>) -> Self {
        Self {
            text: text.trim().to_string(),
            image: image.filter(|i| !i.trim().is_empty()),
        }
    }
}

/// Page colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label shown next to the theme toggle.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Claro",
            ThemeMode::Dark => "Oscuro",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}
