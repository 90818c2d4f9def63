//! Read-only page regions consumed by dynamic replies.
//!
//! The certificates region holds cards with an optional heading and link; the
//! specialization region holds a descriptive paragraph. Both are best effort:
//! when a provider has nothing, replies fall back to literal content.

use crate::error::AppError;
use crate::markup::escape_html;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// At most this many cards are listed in a reply.
pub const MAX_CERTIFICATES: usize = 6;

const DEFAULT_CERTIFICATE_TITLE: &str = "Certificado";

const FALLBACK_CERTIFICATES: &[(&str, &str)] = &[
    (
        "./client/img/Programacion_fullstack_Escritorio.png",
        "Programacion Full Stack (Escritorio)",
    ),
    (
        "./client/img/Inteligencia_Artificial_aplicada_negocios_empresas.png",
        "IA aplicada a negocios y empresas",
    ),
    ("./client/img/Master_node.png", "Master en Node.js"),
    ("./client/img/desarrolloweb.png", "Desarrollo Web Completo"),
];

pub const FALLBACK_SPECIALIZATION: &str = "Ingeniero en Sistemas Computacionales con especialización en Tecnologías de Desarrollo para Sistemas Web.";

/// One certificate card as found on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateCard {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl CertificateCard {
    pub fn new(title: &str, link: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            link: Some(link.to_string()),
        }
    }
}

/// Provider of the page regions.
pub trait PageContent: Send + Sync + 'static {
    /// Cards of the certificates region, in page order. Empty when the region is missing.
    fn certificates(&self) -> Vec<CertificateCard>;

    /// Text of the specialization paragraph, if any.
    fn specialization(&self) -> Option<String>;
}

/// A page without the optional regions: every dynamic reply uses its literal fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPageContent;

impl PageContent for StaticPageContent {
    fn certificates(&self) -> Vec<CertificateCard> {
        Vec::new()
    }

    fn specialization(&self) -> Option<String> {
        None
    }
}

/// Page regions described by a JSON document:
///
/// ```json
/// { "certificates": [{ "title": "...", "link": "..." }], "specialization": "..." }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub certificates: Vec<CertificateCard>,
    #[serde(default)]
    pub specialization: Option<String>,
}

impl PageSnapshot {
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Loads the snapshot at `path`, or the static page when there is none or it is unreadable.
    pub fn load_or_static(path: Option<&Path>) -> Arc<dyn PageContent> {
        let Some(path) = path else {
            return Arc::new(StaticPageContent);
        };
        match Self::from_file(path) {
            Ok(snapshot) => {
                info!(
                    "Loaded page content from {:?} ({} certificates)",
                    path,
                    snapshot.certificates.len()
                );
                Arc::new(snapshot)
            }
            Err(e) => {
                warn!("Ignoring page content {:?}: {}", path, e);
                Arc::new(StaticPageContent)
            }
        }
    }
}

impl PageContent for PageSnapshot {
    fn certificates(&self) -> Vec<CertificateCard> {
        self.certificates.clone()
    }

    fn specialization(&self) -> Option<String> {
        self.specialization.clone()
    }
}

fn certificate_item(link: &str, title: &str) -> String {
    format!(
        "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></li>",
        escape_html(link),
        escape_html(title)
    )
}

/// Markup listing up to [`MAX_CERTIFICATES`] cards, or the four fallback certificates
/// when the page has none.
pub fn certificates_html(page: &dyn PageContent) -> String {
    let cards = page.certificates();
    let items: String = if cards.is_empty() {
        FALLBACK_CERTIFICATES
            .iter()
            .map(|(link, title)| certificate_item(link, title))
            .collect()
    } else {
        cards
            .iter()
            .take(MAX_CERTIFICATES)
            .map(|card| {
                let title = card
                    .title
                    .as_deref()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .unwrap_or(DEFAULT_CERTIFICATE_TITLE);
                let link = card
                    .link
                    .as_deref()
                    .filter(|l| !l.is_empty())
                    .unwrap_or("#");
                certificate_item(link, title)
            })
            .collect()
    };
    format!("<div><strong>Certificados:</strong><ul>{}</ul></div>", items)
}

/// Trimmed specialization text, or the fixed sentence.
pub fn specialization_text(page: &dyn PageContent) -> String {
    page.specialization()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_SPECIALIZATION.to_string())
}
