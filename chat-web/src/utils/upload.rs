//! Client-side upload validation
//!
//! Rejects oversized or unsupported files before any network call is
//! made. The backend does not re-validate beyond its body limit.

use crate::utils::constants::MAX_FILE_BYTES;

/// Check a candidate upload by size and MIME type. Images, PDFs, and
/// plain text are accepted.
pub fn check_upload(size_bytes: f64, mime_type: &str) -> Result<(), String> {
    if size_bytes > MAX_FILE_BYTES {
        return Err("File is too large (max 10 MB)".to_string());
    }

    let accepted = mime_type.starts_with("image/")
        || mime_type == "application/pdf"
        || mime_type == "text/plain";

    if !accepted {
        return Err("Unsupported file type (images, PDF, or plain text only)".to_string());
    }

    Ok(())
}

/// Validate a selected browser file.
pub fn validate_file(file: &web_sys::File) -> Result<(), String> {
    check_upload(file.size(), &file.type_())
}
