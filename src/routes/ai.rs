use actix_web::{get, web, Responder, Result};
use serde_json::json;

/// GET /ai/status
/// Static capability descriptor for the frontend service picker.
#[get("/ai/status")]
pub async fn status() -> Result<impl Responder> {
    Ok(web::Json(json!({
        "available_services": [
            {
                "name": "SiteForge",
                "enabled": true,
                "configured": true
            }
        ],
        "current_ai": "siteforge",
        "configured": true
    })))
}
