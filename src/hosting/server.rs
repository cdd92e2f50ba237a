use super::*;
use crate::gameroom::Outbox;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> anyhow::Result<()> {
        let casino = Arc::new(Casino::new(config.timers()));
        let patrol = casino.clone().patrol();
        let state = web::Data::from(casino);
        log::info!("starting hosting server on {}:{}", config.bind, config.port);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/health", web::get().to(health))
                .route("/ws", web::get().to(connect))
        })
        .bind(config.addr())?
        .run()
        .await?;
        patrol.abort();
        Ok(())
    }
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn connect(
    casino: web::Data<Casino>,
    body: web::Payload,
    req: HttpRequest,
) -> actix_web::Result<HttpResponse> {
    let (response, socket, stream) = actix_ws::handle(&req, body)?;
    let (outbox, rx) = Outbox::pair();
    let session = Session::new(casino.into_inner(), outbox);
    actix_web::rt::spawn(session.bridge(rx, socket, stream));
    Ok(response)
}
