use crate::configuration::Settings;
use crate::forms;
use crate::helpers::archiver;
use crate::services::ProjectGenerator;
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_json::json;
use serde_valid::Validate;

/// POST /generate-project
/// Direct synthesis, bypassing the conversation engine. Failures come back
/// as `{success:false, error}` with status 200, never as a transport fault.
#[tracing::instrument(name = "Generate project.", skip(generator, settings))]
#[post("/generate-project")]
pub async fn handler(
    form: web::Json<forms::GenerateProjectForm>,
    generator: web::Data<ProjectGenerator>,
    settings: web::Data<Settings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Ok(
            HttpResponse::BadRequest().json(json!({"success": false, "error": errors.to_string()}))
        );
    }

    let form = form.into_inner();
    let built = generator
        .synthesize(&form.project_type, &form.description, &form.project_name)
        .map_err(|err| err.to_string())
        .and_then(|project| {
            archiver::archive(
                &settings.storage.projects_dir,
                &settings.storage.temp_dir,
                &project.id.to_string(),
            )
            .map(|archive_path| (project, archive_path))
            .map_err(|err| err.to_string())
        });

    match built {
        Ok((project, archive_path)) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "project_id": project.id,
            "project_name": project.name,
            "files": project.files,
            "download_url": format!("/download/{}", project.id),
            "archive_path": archive_path,
        }))),
        Err(error) => {
            tracing::error!(%error, "project generation failed");
            Ok(HttpResponse::Ok().json(json!({"success": false, "error": error})))
        }
    }
}
