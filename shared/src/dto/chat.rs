use serde::{Deserialize, Serialize};

/// Successful chatbot response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// One resolved question/answer pair as persisted in the client-side
/// history snapshot. Pending or failed entries never reach this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredEntry {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_response_round_trip() {
        let resp = AnswerResponse {
            answer: "4".to_string(),
        };

        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"answer":"4"}"#);

        let back: AnswerResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resp);
    }

    #[test]
    fn stored_entry_snapshot_round_trip() {
        let entries = vec![
            StoredEntry {
                question: "What is 2+2?".to_string(),
                answer: "4".to_string(),
            },
            StoredEntry {
                question: "And 3+3?".to_string(),
                answer: "6".to_string(),
            },
        ];

        let json = serde_json::to_string(&entries).unwrap();
        let back: Vec<StoredEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
    }
}
