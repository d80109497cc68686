use serde::{Deserialize, Serialize};

/// Classified category of a user message. Exactly one intent is assigned per
/// message; assignment is a pure function of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Wellbeing,
    CreateProject,
    Capabilities,
    GameDiscussion,
    Suggestions,
    General,
}
