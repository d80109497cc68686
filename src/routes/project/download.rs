use crate::configuration::Settings;
use crate::helpers::archiver::{self, ArchiveError};
use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpRequest, HttpResponse, Result};
use serde_json::json;
use uuid::Uuid;

/// GET /download/{project_id}
/// Streams the project archive, building it lazily if needed.
#[tracing::instrument(name = "Download project.", skip(req, settings))]
#[get("/download/{project_id}")]
pub async fn handler(
    req: HttpRequest,
    path: web::Path<(String,)>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse> {
    let (project_id,) = path.into_inner();

    // Project ids are uuids; anything else cannot name a project directory.
    if Uuid::parse_str(&project_id).is_err() {
        return Ok(not_found());
    }

    match archiver::archive(
        &settings.storage.projects_dir,
        &settings.storage.temp_dir,
        &project_id,
    ) {
        Ok(archive_path) => {
            let file = NamedFile::open_async(&archive_path)
                .await?
                .set_content_disposition(ContentDisposition {
                    disposition: DispositionType::Attachment,
                    parameters: vec![DispositionParam::Filename(format!(
                        "project_{}.tar.gz",
                        project_id
                    ))],
                });
            Ok(file.into_response(&req))
        }
        Err(ArchiveError::ProjectNotFound(_)) => Ok(not_found()),
        Err(err) => {
            tracing::error!(error = %err, project_id, "archive build failed");
            Ok(HttpResponse::InternalServerError()
                .json(json!({"success": false, "error": err.to_string()})))
        }
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "Проект не найден"}))
}
