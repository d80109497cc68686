use crate::configuration::Settings;
use crate::models::ProjectSummary;
use actix_web::{get, web, Responder, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::fs;

/// GET /projects
/// Listing derived from the projects directory; nothing else is persisted.
#[tracing::instrument(name = "List projects.", skip(settings))]
#[get("/projects")]
pub async fn handler(settings: web::Data<Settings>) -> Result<impl Responder> {
    let mut projects = Vec::new();

    if let Ok(entries) = fs::read_dir(&settings.storage.projects_dir) {
        for entry in entries.flatten() {
            if !entry.path().is_dir() {
                continue;
            }
            let id = entry.file_name().to_string_lossy().to_string();
            let short: String = id.chars().take(8).collect();
            let created_at = entry
                .metadata()
                .and_then(|meta| meta.created().or_else(|_| meta.modified()))
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            projects.push(ProjectSummary {
                id,
                name: format!("Проект {}", short),
                created_at,
            });
        }
    }

    Ok(web::Json(json!({ "projects": projects })))
}
