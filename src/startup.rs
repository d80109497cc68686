use crate::configuration::Settings;
use crate::routes;
use crate::services::{ConversationEngine, ProjectGenerator, SessionStore, TemplateRegistry};
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use serde_json::json;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub fn run(listener: TcpListener, settings: Settings) -> Result<Server, std::io::Error> {
    settings.storage.ensure_dirs()?;

    let registry = TemplateRegistry::new()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let generator = ProjectGenerator::new(Arc::new(registry), settings.storage.projects_dir.clone());

    let engine = web::Data::new(ConversationEngine::new(generator.clone(), settings.clone()));
    let sessions = web::Data::new(SessionStore::default());
    let generator = web::Data::new(generator);
    let settings = web::Data::new(settings);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let body = json!({"success": false, "error": err.to_string()}).to_string();
        error::InternalError::new(body, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(routes::health_check)
            .service(routes::chat::handler)
            .service(routes::project::generate::handler)
            .service(routes::project::download::handler)
            .service(routes::project::list::handler)
            .service(routes::ai::status)
            .service(web::resource("/ws").route(web::get().to(routes::ws::project_status)))
            .app_data(json_config.clone())
            .app_data(engine.clone())
            .app_data(sessions.clone())
            .app_data(generator.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
