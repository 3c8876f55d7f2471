//! # Backend API Client
//!
//! One call: POST the question (and optional file) to the chatbot
//! endpoint as a multipart form. The outcome is a discriminated result,
//! never a response object with optional fields.

use crate::utils::constants::API_BASE;
use gloo_net::http::Request;
use shared::{AnswerResponse, ErrorResponse};
use web_sys::{File, FormData};

/// Opaque failure shown to the user in a transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ask one question, optionally with a file attachment. Returns the
/// generated answer text or an error message.
pub async fn ask(question: &str, file: Option<&File>) -> Result<String, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::new("Failed to build request"))?;
    form.append_with_str("question", question)
        .map_err(|_| ApiError::new("Failed to build request"))?;

    if let Some(file) = file {
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::new("Failed to attach file"))?;
    }

    let url = format!("{}/api/chatbot", API_BASE);

    // No explicit content-type: the browser sets the multipart boundary.
    let response = Request::post(&url)
        .body(form)
        .map_err(|e| {
            log::error!("Failed to build chatbot request: {:?}", e);
            ApiError::new("Failed to build request")
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("Chatbot request failed: {:?}", e);
            ApiError::new("Could not reach the server. Is the backend running?")
        })?;

    if response.ok() {
        let answer: AnswerResponse = response
            .json()
            .await
            .map_err(|_| ApiError::new("Unexpected response from server"))?;
        Ok(answer.answer)
    } else {
        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(err) => err.error,
            Err(_) => format!("Request failed with status {}", status),
        };
        log::error!("Chatbot request rejected ({}): {}", status, message);
        Err(ApiError::new(message))
    }
}
