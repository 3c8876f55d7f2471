//! # Data Transfer Objects (DTOs)
//!
//! Data structures used for communication between the chat frontend and
//! backend via the REST API, and for the persisted history snapshot.
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/chatbot
//! Content-Type: multipart/form-data
//!
//! question=What is 2+2?
//! file=<optional binary attachment>
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "answer": "4" }
//! ```

pub mod chat;

pub use chat::*;
