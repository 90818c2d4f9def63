//! Test Module
//!
//! Cross-module test suite for the folio core.
//!
//! ## Test Categories
//! - `responder_tests`: Rule precedence, session email memory, fallbacks, page-driven answers
//! - `feed_tests`: Publishing, likes, pagination and snapshot persistence
//! - `actor_tests`: Chat actor event ordering, typing delay, widget state machine
//! - `storage_tests`: SQLite-backed local store and theme persistence

pub mod actor_tests;
pub mod responder_tests;
