//! Country tally of distinct players (non-proxy IPs only).

use actix_web::{get, web, HttpResponse, Responder};
use sqlx::PgPool;

use crate::db::snapshot_repo::PgSnapshotSource;

/// GET /api/countries
#[get("/countries")]
pub async fn countries(db: web::Data<PgPool>) -> impl Responder {
    let source = PgSnapshotSource::new(db.get_ref().clone());
    match source.top_countries().await {
        Ok(counts) => HttpResponse::Ok().json(counts),
        Err(e) => {
            log::error!("country tally failed: {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(countries);
}
