// src/http/leaderboard.rs

use actix_web::{get, web, HttpResponse, Responder};
use redis::{AsyncCommands, Client as RedisClient};
use serde::Deserialize;
use sqlx::PgPool;

use crate::config::settings;
use crate::db::snapshot_repo::PgSnapshotSource;
use crate::hof::leaderboard::build_leaderboard;
use crate::metrics::LEADERBOARD_BUILDS;

#[derive(Deserialize)]
pub struct LeaderboardParams {
    /// Literal server/game name; absent means all games.
    pub filter: Option<String>,
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
}

#[get("/leaderboard")]
pub async fn leaderboard(
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
    web::Query(params): web::Query<LeaderboardParams>,
) -> impl Responder {
    let cfg = settings();
    let limit = params
        .limit
        .unwrap_or(cfg.default_top_size)
        .min(cfg.max_top_size);
    let filter = params.filter.as_deref();

    // 1) Try to read from Redis cache
    let key = format!("leaderboard:{}:{}", filter.unwrap_or("*"), limit);
    let mut conn = match redis.get_multiplexed_async_connection().await {
        Ok(c) => c,
        Err(_) => return HttpResponse::InternalServerError().body("Redis unavailable"),
    };
    if let Ok(cached) = conn.get::<_, String>(&key).await {
        return HttpResponse::Ok()
            .content_type("application/json")
            .body(cached);
    }

    // 2) Build from the snapshot store. An empty board is a valid 200;
    //    a source failure is not.
    let source = PgSnapshotSource::new(db.get_ref().clone());
    let entries = match build_leaderboard(&source, filter, limit).await {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("leaderboard build failed: {e:?}");
            return HttpResponse::InternalServerError().body("could not compute leaderboard");
        }
    };
    LEADERBOARD_BUILDS.inc();

    // 3) Serialize and cache the result
    let body = match serde_json::to_string(&entries) {
        Ok(b) => b,
        Err(_) => return HttpResponse::InternalServerError().body("Serialization error"),
    };
    if let Err(e) = conn
        .set_ex::<_, _, ()>(&key, &body, cfg.leaderboard_cache_ttl)
        .await
    {
        log::warn!("failed to cache leaderboard: {e}");
    }

    HttpResponse::Ok()
        .content_type("application/json")
        .body(body)
}

/// Mounts the leaderboard route under `/api`
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(leaderboard);
}
