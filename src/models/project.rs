use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// A generated project: the set of files forming one static site.
///
/// Immutable after synthesis; the directory under `root` contains exactly
/// the files listed in `files`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    /// Relative paths in the order they were written.
    pub files: Vec<String>,
    /// On-disk root directory of the project.
    pub root: PathBuf,
}

/// Listing entry derived from the projects directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
