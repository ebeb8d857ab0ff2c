//! Games catalog and per-game roster queries.

use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

use crate::cache;
use crate::db::snapshot_repo::PgSnapshotSource;
use crate::hof::source::SnapshotSource;

/// GET /api/servers — distinct server identities.
#[get("/servers")]
pub async fn servers(db: web::Data<PgPool>) -> impl Responder {
    let source = PgSnapshotSource::new(db.get_ref().clone());
    match source.game_names().await {
        Ok(names) => HttpResponse::Ok().json(names),
        Err(e) => {
            log::error!("server listing failed: {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/games — full catalog, newest first. Refreshes the warm cache.
#[get("/games")]
pub async fn games(db: web::Data<PgPool>) -> impl Responder {
    let source = PgSnapshotSource::new(db.get_ref().clone());
    match source.list_games(None).await {
        Ok(games) => {
            cache::refresh(&games);
            HttpResponse::Ok().json(games)
        }
        Err(e) => {
            log::error!("games listing failed: {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/games/{game_id}
#[get("/games/{game_id}")]
pub async fn game_detail(path: web::Path<i64>, db: web::Data<PgPool>) -> impl Responder {
    let id = path.into_inner();
    if let Some(game) = cache::get_game(id) {
        return HttpResponse::Ok().json(game);
    }

    let source = PgSnapshotSource::new(db.get_ref().clone());
    match source.get_game(id).await {
        Ok(Some(game)) => {
            cache::refresh(std::slice::from_ref(&game));
            HttpResponse::Ok().json(game)
        }
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => {
            log::error!("game lookup failed: {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/games/{game_id}/companies
#[get("/games/{game_id}/companies")]
pub async fn companies(path: web::Path<i64>, db: web::Data<PgPool>) -> impl Responder {
    let source = PgSnapshotSource::new(db.get_ref().clone());
    match source.list_companies(path.into_inner()).await {
        Ok(companies) => HttpResponse::Ok().json(companies),
        Err(e) => {
            log::error!("company listing failed: {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// GET /api/companies/{company_id}/sessions — who played for a company.
#[get("/companies/{company_id}/sessions")]
pub async fn sessions(path: web::Path<i64>, db: web::Data<PgPool>) -> impl Responder {
    let source = PgSnapshotSource::new(db.get_ref().clone());
    match source.company_sessions(path.into_inner()).await {
        Ok(sessions) => HttpResponse::Ok().json(sessions),
        Err(e) => {
            log::error!("session listing failed: {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(servers)
        .service(games)
        .service(game_detail)
        .service(companies)
        .service(sessions);
}
