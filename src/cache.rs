//! Warm in-memory cache of the games catalog.
//!
//! The catalog is read on every hall-of-fame page render but only grows
//! when a server starts a new game, so it is warmed once at start-up and
//! refreshed whenever the catalog endpoint re-reads Postgres.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use sqlx::PgPool;

use crate::db::models::Game;
use crate::db::snapshot_repo::PgSnapshotSource;
use crate::hof::source::SnapshotSource;

/// Global map id → Game.
pub static GAMES: Lazy<DashMap<i64, Game>> = Lazy::new(DashMap::new);

/// Insert (or overwrite) a batch of catalog rows.
pub fn refresh(games: &[Game]) {
    for game in games {
        GAMES.insert(game.id, game.clone());
    }
}

/// Cached game lookup by id.
pub fn get_game(id: i64) -> Option<Game> {
    GAMES.get(&id).map(|e| e.value().clone())
}

/// Fetch the full catalog and populate [`GAMES`]. Idempotent.
pub async fn warm_games(db: &PgPool) -> anyhow::Result<()> {
    let source = PgSnapshotSource::new(db.clone());
    refresh(&source.list_games(None).await?);
    Ok(())
}

/// Warm every in-memory cache we have (called once at startup).
pub async fn warm_all(db: &PgPool) {
    if let Err(e) = warm_games(db).await {
        log::warn!("cache warm-up failed: {e:?}");
    }
}
