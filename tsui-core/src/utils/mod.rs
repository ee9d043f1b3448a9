//! Serde helpers for LocalAPI payloads

pub mod datetime;
pub mod json;
