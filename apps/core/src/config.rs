//! Runtime configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file (see [`AppConfig::from_env`]). Every variable has a default so the
//! binary runs with an empty environment.

use crate::error::AppError;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_CONTACT_EMAIL: &str = "ricardo.alexis031299@gmail.com";
pub const DEFAULT_CV_LINK: &str = "./client/cv/CV%20OCTUBRE%202025%20Titulo%20en%20Proceso.pdf";
const DEFAULT_FEED_LATENCY_MS: u64 = 650;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!("Unknown log format: {}", other))),
        }
    }
}

/// Links embedded verbatim in chat replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    pub email: String,
    pub cv_link: String,
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self {
            email: DEFAULT_CONTACT_EMAIL.to_string(),
            cv_link: DEFAULT_CV_LINK.to_string(),
        }
    }
}

impl ContactLinks {
    /// `<a href="mailto:...">...</a>`
    pub fn email_anchor(&self) -> String {
        format!("<a href=\"mailto:{0}\">{0}</a>", self.email)
    }

    pub fn cv_anchor(&self) -> String {
        format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">descargar el CV en PDF</a>",
            self.cv_link
        )
    }
}

/// Complete application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the portable data directory (`data/` by default).
    pub data_dir: PathBuf,
    /// Skip the typing indicator (the reply delay still applies).
    pub reduced_motion: bool,
    /// Environment colour-scheme preference, used when no theme is stored.
    pub prefers_dark: bool,
    /// Optional JSON description of the page regions read by the chat.
    pub page_content: Option<PathBuf>,
    pub log_format: LogFormat,
    /// Simulated latency of the feed's "load more" action.
    pub feed_latency: Duration,
    pub contact: ContactLinks,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            reduced_motion: false,
            prefers_dark: false,
            page_content: None,
            log_format: LogFormat::Pretty,
            feed_latency: Duration::from_millis(DEFAULT_FEED_LATENCY_MS),
            contact: ContactLinks::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the `FOLIO_*` variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get("FOLIO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let reduced_motion = get("FOLIO_REDUCED_MOTION")
            .map(|v| parse_bool("FOLIO_REDUCED_MOTION", &v))
            .transpose()?
            .unwrap_or(defaults.reduced_motion);
        let prefers_dark = get("FOLIO_PREFERS_DARK")
            .map(|v| parse_bool("FOLIO_PREFERS_DARK", &v))
            .transpose()?
            .unwrap_or(defaults.prefers_dark);
        let page_content = get("FOLIO_PAGE_CONTENT").map(PathBuf::from);
        let log_format = get("FOLIO_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or(defaults.log_format);
        let feed_latency = get("FOLIO_FEED_LATENCY_MS")
            .map(|v| {
                v.trim().parse::<u64>().map(Duration::from_millis).map_err(|e| {
                    AppError::Config(format!("FOLIO_FEED_LATENCY_MS must be milliseconds: {}", e))
                })
            })
            .transpose()?
            .unwrap_or(defaults.feed_latency);

        let contact = ContactLinks {
            email: get("FOLIO_CONTACT_EMAIL").unwrap_or(defaults.contact.email),
            cv_link: get("FOLIO_CV_LINK").unwrap_or(defaults.contact.cv_link),
        };

        Ok(Self {
            data_dir,
            reduced_motion,
            prefers_dark,
            page_content,
            log_format,
            feed_latency,
            contact,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("{} must be a boolean, got '{}'", key, other))),
    }
}
