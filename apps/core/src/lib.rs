// Folio core: portfolio chat responder, local social feed and theme preference.

pub mod actors;
pub mod config;
pub mod error;
pub mod feed;
pub mod fs_manager;
pub mod markup;
pub mod models;
pub mod responder;
pub mod storage;
pub mod telemetry;
pub mod theme;

#[cfg(test)]
mod tests;
