//! Push channel for project generation status
//!
//! One actor per connection. A `generate_project` request produces at most
//! three ordered events: `generating`, then exactly one of `completed` or
//! `error`. The build runs on the actor's own thread, so event order holds
//! without extra coordination.

use crate::configuration::Settings;
use crate::forms;
use crate::helpers::archiver;
use crate::services::ProjectGenerator;
use actix::{Actor, ActorContext, AsyncContext, StreamHandler};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, Instant};

/// WebSocket heartbeat interval
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
/// Client timeout - close connection if no heartbeat received
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum WsRequest {
    GenerateProject(forms::GenerateProjectForm),
}

pub struct ProjectStatusSocket {
    generator: ProjectGenerator,
    settings: web::Data<Settings>,
    hb: Instant,
}

impl ProjectStatusSocket {
    pub fn new(generator: ProjectGenerator, settings: web::Data<Settings>) -> Self {
        Self {
            generator,
            settings,
            hb: Instant::now(),
        }
    }

    /// Start heartbeat process to check connection health
    fn hb(&self, ctx: &mut <Self as Actor>::Context) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.hb) > CLIENT_TIMEOUT {
                tracing::warn!("project status client heartbeat failed, disconnecting");
                ctx.stop();
                return;
            }

            ctx.ping(b"");
        });
    }

    fn emit(&self, ctx: &mut ws::WebsocketContext<Self>, data: serde_json::Value) {
        let event = json!({"event": "project_status", "data": data});
        ctx.text(event.to_string());
    }

    fn handle_generate(
        &self,
        form: forms::GenerateProjectForm,
        ctx: &mut ws::WebsocketContext<Self>,
    ) {
        self.emit(
            ctx,
            json!({"status": "generating", "message": "Создаю проект..."}),
        );

        let built = self
            .generator
            .synthesize(&form.project_type, &form.description, &form.project_name)
            .map_err(|err| err.to_string())
            .and_then(|project| {
                archiver::archive(
                    &self.settings.storage.projects_dir,
                    &self.settings.storage.temp_dir,
                    &project.id.to_string(),
                )
                .map(|_| project)
                .map_err(|err| err.to_string())
            });

        match built {
            Ok(project) => self.emit(
                ctx,
                json!({
                    "status": "completed",
                    "project_id": project.id,
                    "download_url": format!("/download/{}", project.id),
                    "message": "Проект создан успешно!"
                }),
            ),
            Err(error) => {
                tracing::error!(%error, "project generation over websocket failed");
                self.emit(
                    ctx,
                    json!({"status": "error", "message": format!("Ошибка: {}", error)}),
                );
            }
        }
    }
}

impl Actor for ProjectStatusSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        tracing::info!("project status connection started");
        self.hb(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        tracing::info!("project status connection closed");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ProjectStatusSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.hb = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.hb = Instant::now();
            }
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<WsRequest>(&text) {
                Ok(WsRequest::GenerateProject(form)) => self.handle_generate(form, ctx),
                Err(err) => {
                    tracing::warn!(error = %err, "unparseable websocket request");
                    self.emit(
                        ctx,
                        json!({"status": "error", "message": format!("Ошибка: {}", err)}),
                    );
                }
            },
            Ok(ws::Message::Binary(_)) => {
                tracing::warn!("binary messages are not part of the status protocol");
            }
            Ok(ws::Message::Close(reason)) => {
                tracing::info!("project status close received: {:?}", reason);
                ctx.close(reason);
                ctx.stop();
            }
            _ => {}
        }
    }
}

/// WebSocket route handler - entry point for status connections
#[tracing::instrument(name = "Project status connection.", skip(req, stream, generator, settings))]
pub async fn project_status(
    req: HttpRequest,
    stream: web::Payload,
    generator: web::Data<ProjectGenerator>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse, Error> {
    let socket = ProjectStatusSocket::new(generator.get_ref().clone(), settings.clone());
    ws::start(socket, &req, stream)
}
