use super::*;
use crate::Error;
use crate::RECENT_DEFAULT;
use crate::SERVICE_NAME;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::body::MessageBody;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::error::InternalError;
use actix_web::middleware::DefaultHeaders;
use actix_web::middleware::Logger;
use actix_web::middleware::Next;
use actix_web::middleware::from_fn;
use actix_web::web;
use std::time::Instant;

pub struct Server;

impl Server {
    pub async fn run(config: &Config, arena: Arena) -> Result<(), std::io::Error> {
        let state = web::Data::new(arena);
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    DefaultHeaders::new()
                        .add(("X-Content-Type-Options", "nosniff"))
                        .add(("X-Frame-Options", "SAMEORIGIN"))
                        .add(("Referrer-Policy", "no-referrer")),
                )
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .wrap(from_fn(instrument))
                .app_data(state.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await
    }
}

/// Times every request and records it under its matched route pattern,
/// or the raw path when no route matched.
pub async fn instrument(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let start = Instant::now();
    let method = req.method().to_string();
    let arena = req.app_data::<web::Data<Arena>>().cloned();
    let res = next.call(req).await?;
    if let Some(arena) = arena {
        let route = res
            .request()
            .match_pattern()
            .unwrap_or_else(|| res.request().path().to_string());
        arena
            .metrics()
            .request(&method, &route, res.status().as_u16(), start.elapsed());
    }
    Ok(res)
}

/// Registers every route plus the JSON, query and 404 fallbacks.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        InternalError::from_response(err, invalid()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _| {
        let res = HttpResponse::BadRequest().json(ErrorResponse {
            error: INVALID_QUERY,
        });
        InternalError::from_response(err, res).into()
    }))
    .route("/health", web::get().to(health))
    .route("/api/health", web::get().to(service_health))
    .route("/api/game/play", web::post().to(play))
    .route("/api/game/stats", web::get().to(stats))
    .route("/api/game/rounds", web::get().to(rounds))
    .route("/api/metrics", web::get().to(metrics))
    .default_service(web::to(missing));
}

fn invalid() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: INVALID_CHOICE,
    })
}

fn failure(e: Error) -> HttpResponse {
    match e {
        Error::InvalidChoice(_) => invalid(),
        Error::StoreUnavailable(_) => HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: UNAVAILABLE,
        }),
    }
}

async fn play(arena: web::Data<Arena>, req: web::Json<PlayRequest>) -> impl Responder {
    match arena.play(req.player_choice.as_deref().unwrap_or_default()).await {
        Ok((round, _)) => HttpResponse::Ok().json(PlayResponse::from(round)),
        Err(e) => failure(e),
    }
}

async fn stats(arena: web::Data<Arena>) -> impl Responder {
    match arena.stats().await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => failure(e),
    }
}

async fn rounds(arena: web::Data<Arena>, query: web::Query<RoundsQuery>) -> impl Responder {
    match arena.rounds(query.limit.unwrap_or(RECENT_DEFAULT)).await {
        Ok(rounds) => HttpResponse::Ok().json(rounds),
        Err(e) => failure(e),
    }
}

async fn metrics(arena: web::Data<Arena>) -> impl Responder {
    HttpResponse::Ok()
        .content_type(EXPOSITION)
        .body(arena.metrics().render())
}

async fn health(arena: web::Data<Arena>) -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "healthy",
        timestamp: crate::now(),
        uptime: arena.uptime(),
    })
}

async fn service_health() -> impl Responder {
    HttpResponse::Ok().json(ServiceHealth {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn missing() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse { error: NOT_FOUND })
}
