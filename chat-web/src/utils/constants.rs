//! Application constants

pub const API_BASE: &str = "http://127.0.0.1:3001";

// Upload limits (enforced client-side before any network call)
pub const MAX_FILE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

// UI constants
pub const NOTIFICATION_MS: u32 = 4000;
