use serde::{Deserialize, Serialize};

/// Reply produced by the conversation engine for one user message.
///
/// Serialized with a `type` tag so the frontend can switch on
/// `ai_response` / `project_created` / `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatReply {
    AiResponse {
        message: String,
        suggestions: Vec<String>,
    },
    ProjectCreated {
        message: String,
        project_id: String,
        download_url: String,
        suggestions: Vec<String>,
    },
    Error {
        message: String,
        suggestions: Vec<String>,
    },
}

impl ChatReply {
    pub fn suggestions(&self) -> &[String] {
        match self {
            ChatReply::AiResponse { suggestions, .. }
            | ChatReply::ProjectCreated { suggestions, .. }
            | ChatReply::Error { suggestions, .. } => suggestions,
        }
    }
}
