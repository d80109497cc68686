use crate::forms;
use crate::services::{ConversationEngine, SessionStore};
use actix_web::{post, web, HttpResponse, Responder, Result};
use serde_json::json;
use serde_valid::Validate;

/// POST /chat
/// Classifies the message within its session and returns the engine's reply.
#[tracing::instrument(name = "Chat message.", skip(engine, sessions))]
#[post("/chat")]
pub async fn handler(
    form: web::Json<forms::ChatForm>,
    engine: web::Data<ConversationEngine>,
    sessions: web::Data<SessionStore>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Ok(
            HttpResponse::BadRequest().json(json!({"success": false, "error": errors.to_string()}))
        );
    }

    let form = form.into_inner();
    let session = sessions.session(&form.session_id).await;
    let mut session = session.lock().await;
    let reply = engine.respond(&mut session, &form.message);

    Ok(HttpResponse::Ok().json(reply))
}
