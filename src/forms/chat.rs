use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ChatForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 2000)]
    pub message: String,
    /// Conversations are keyed per client; one shared session when omitted.
    #[serde(default = "default_session")]
    pub session_id: String,
}

fn default_session() -> String {
    "default".to_string()
}
