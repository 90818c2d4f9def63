use serde::Serialize;
use std::time::Duration;

/// Prompts shown when a reply asks for the default set.
pub const BASE_SUGGESTIONS: [&str; 4] = [
    "Resúmeme tu experiencia",
    "Muéstrame tus proyectos",
    "¿Cuáles son tus habilidades?",
    "¿Cómo te contacto?",
];

/// Always appended to [`BASE_SUGGESTIONS`].
pub const EXTRA_SUGGESTIONS: [&str; 2] = ["Ver certificados", "Tu especialización"];

const TYPING_BASE_MS: u64 = 420;
const TYPING_PER_CHAR_MS: u64 = 15;
const TYPING_MAX_MS: u64 = 1400;

/// The extended default suggestion set, base prompts first.
pub fn default_suggestions() -> Vec<String> {
    BASE_SUGGESTIONS
        .iter()
        .chain(EXTRA_SUGGESTIONS.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Follow-up prompts declared by a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestions {
    Explicit(Vec<String>),
    UseDefault,
    Suppress,
}

impl Suggestions {
    pub fn explicit(items: &[&str]) -> Self {
        Suggestions::Explicit(items.iter().map(|s| s.to_string()).collect())
    }

    /// Chips to display. An empty list means the chip row is cleared.
    pub fn resolve(&self) -> Vec<String> {
        match self {
            Suggestions::Explicit(items) => items.clone(),
            Suggestions::UseDefault => default_suggestions(),
            Suggestions::Suppress => Vec::new(),
        }
    }
}

/// One bot reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: String,
    /// Render `text` as markup instead of plain text.
    pub allow_markup: bool,
    pub suggestions: Suggestions,
}

impl Reply {
    pub fn plain(text: impl Into<String>, suggestions: Suggestions) -> Self {
        Self {
            text: text.into(),
            allow_markup: false,
            suggestions,
        }
    }

    pub fn markup(text: impl Into<String>, suggestions: Suggestions) -> Self {
        Self {
            text: text.into(),
            allow_markup: true,
            suggestions,
        }
    }

    /// Simulated typing time: `min(1400ms, 420ms + 15ms per character)`.
    pub fn typing_delay(&self) -> Duration {
        let chars = self.text.chars().count() as u64;
        let ms = TYPING_BASE_MS.saturating_add(TYPING_PER_CHAR_MS.saturating_mul(chars));
        Duration::from_millis(ms.min(TYPING_MAX_MS))
    }
}
