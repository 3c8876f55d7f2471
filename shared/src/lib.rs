//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the chat frontend and backend API,
//! plus the snapshot shape the frontend persists to browser storage.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - A response carries either an `answer` or an `error` field, never both
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication

pub mod dto;

pub use dto::*;
