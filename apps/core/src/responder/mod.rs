//! # Responder Module
//!
//! Rule-based FAQ responder for the portfolio chat widget.
//! Maps one free-text utterance to exactly one reply plus follow-up prompts.
//!
//! ## Components
//! - `normalize`: case and accent folding of user input
//! - `matcher`: exact / substring predicates over normalized text
//! - `knowledge`: static topic rules evaluated after the special cases
//! - `page`: read-only providers for page regions (certificates, specialization)
//! - `random`: injectable random source for fallback selection
//! - `reply`: reply and suggestion types, typing delay
//! - `classifier`: ordered rule evaluation (`ChatResponder`)

pub mod classifier;
pub mod knowledge;
pub mod matcher;
pub mod normalize;
pub mod page;
pub mod random;
pub mod reply;

pub use classifier::{ChatResponder, ChatSession};
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use matcher::Matcher;
pub use normalize::normalize;
pub use page::{CertificateCard, PageContent, PageSnapshot, StaticPageContent};
pub use random::{FixedIndex, RandomSource, SeededRandom, ThreadRandom};
pub use reply::{default_suggestions, Reply, Suggestions};
