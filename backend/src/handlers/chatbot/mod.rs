//! # Chatbot Handler
//!
//! `POST /api/chatbot`: accepts a multipart form with a `question` text
//! field and an optional `file` attachment, forwards both to the text
//! generation provider, and returns the generated answer. Provider
//! failures are logged here and surfaced to the caller as a generic 500;
//! raw provider detail never crosses this boundary.


use crate::provider::{Attachment, TextGenerator};
use axum::{extract::Multipart, extract::State, http::StatusCode, Json};
use shared::{AnswerResponse, ErrorResponse};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Generic failure message returned for all provider-side errors.
const GENERIC_ERROR: &str = "An error occurred while processing your request.";

/// Parsed form fields of one chat submission.
struct ChatForm {
    question: String,
    attachment: Option<Attachment>,
}

async fn read_form(mut multipart: Multipart) -> Result<ChatForm, String> {
    let mut question = String::new();
    let mut attachment = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Malformed multipart body: {}", e))?
    {
        match field.name() {
            Some("question") => {
                question = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read question field: {}", e))?;
            }
            Some("file") => {
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file field: {}", e))?;

                if !data.is_empty() {
                    attachment = Some(Attachment {
                        mime_type,
                        data: data.to_vec(),
                    });
                }
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    Ok(ChatForm {
        question,
        attachment,
    })
}

/// Ask the provider a single question with an optional file attachment
pub async fn ask_chatbot(
    State(provider): State<Arc<dyn TextGenerator>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<AnswerResponse>), (StatusCode, Json<ErrorResponse>)> {
    let form = read_form(multipart).await.map_err(|e| {
        error!("[CHATBOT] Rejected request: {}", e);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid request body".to_string(),
            }),
        )
    })?;

    if form.question.trim().is_empty() && form.attachment.is_none() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Question or file is required".to_string(),
            }),
        ));
    }

    info!(
        "[CHATBOT] Question received ({} chars, attachment: {})",
        form.question.len(),
        form.attachment.is_some()
    );

    match provider
        .generate(&form.question, form.attachment.as_ref())
        .await
    {
        Ok(answer) => {
            debug!("[CHATBOT] Answer generated ({} chars)", answer.len());
            Ok((StatusCode::OK, Json(AnswerResponse { answer })))
        }
        Err(e) => {
            error!("[CHATBOT] Provider call failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: GENERIC_ERROR.to_string(),
                }),
            ))
        }
    }
}
