use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct GenerateProjectForm {
    #[validate(max_length = 2000)]
    pub description: String,
    #[serde(default = "default_project_name")]
    #[validate(max_length = 200)]
    pub project_name: String,
    #[serde(default = "default_project_type")]
    pub project_type: String,
}

fn default_project_name() -> String {
    "Мой проект".to_string()
}

fn default_project_type() -> String {
    "html".to_string()
}
