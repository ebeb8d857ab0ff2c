//! Postgres-backed [`SnapshotSource`] plus the roster/country queries the
//! HTTP layer needs. Runtime `query_as` only — the crate builds without a
//! live database. The pool is handed in by the caller; there is no
//! process-wide connection.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::db::models::{
    Company, CompanySession, CountryCount, EconomySnapshot, Game, InfrastructureSnapshot,
};
use crate::hof::source::SnapshotSource;

const GAME_COLUMNS: &str = "id, game_name, server_name, started, finished, \
     generation_seed, starting_year, map_size_x, map_size_y";

#[derive(Clone)]
pub struct PgSnapshotSource {
    pool: PgPool,
}

impl PgSnapshotSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Distinct server identities, for catalog iteration.
    pub async fn game_names(&self) -> Result<Vec<String>> {
        sqlx::query_scalar("SELECT DISTINCT game_name FROM games ORDER BY 1")
            .fetch_all(&self.pool)
            .await
            .context("listing game names")
    }

    /// Single game by id (catalog cache misses land here).
    pub async fn get_game(&self, game_id: i64) -> Result<Option<Game>> {
        sqlx::query_as::<_, Game>(&format!(
            "SELECT {GAME_COLUMNS} FROM games WHERE id = $1"
        ))
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await
        .context("fetching game")
    }

    /// Who played for a company, and when.
    pub async fn company_sessions(&self, company_id: i64) -> Result<Vec<CompanySession>> {
        sqlx::query_as::<_, CompanySession>(
            "SELECT c.client_id, c.name AS client_name, c.ip, c.country, c.city, c.proxy,
                    p.ts_joined AS joined_at, p.ts_left AS left_at
               FROM players p
               JOIN clients c ON c.game_id = p.game_id AND c.client_id = p.client_id
              WHERE p.company_id = $1
              ORDER BY p.ts_joined",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .context("fetching company sessions")
    }

    /// Distinct non-proxy IPs tallied per country, busiest first.
    pub async fn top_countries(&self) -> Result<Vec<CountryCount>> {
        sqlx::query_as::<_, CountryCount>(
            "SELECT country, COUNT(*) AS players
               FROM (SELECT country
                       FROM clients
                      WHERE proxy = FALSE AND country IS NOT NULL
                      GROUP BY country, ip) sub
              GROUP BY country
              ORDER BY 2 DESC, 1",
        )
        .fetch_all(&self.pool)
        .await
        .context("tallying countries")
    }
}

impl SnapshotSource for PgSnapshotSource {
    async fn list_games(&self, filter: Option<&str>) -> Result<Vec<Game>> {
        let games = match filter {
            Some(name) => {
                sqlx::query_as::<_, Game>(&format!(
                    "SELECT {GAME_COLUMNS} FROM games WHERE game_name = $1 ORDER BY started DESC"
                ))
                .bind(name)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Game>(&format!(
                    "SELECT {GAME_COLUMNS} FROM games ORDER BY started DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        };
        games.context("listing games")
    }

    async fn list_companies(&self, game_id: i64) -> Result<Vec<Company>> {
        sqlx::query_as::<_, Company>(
            "SELECT id, game_id, company_id, color, name, founded, closed,
                    closure_reason, manager_name, password_protected
               FROM companies
              WHERE game_id = $1
              ORDER BY company_id",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .context("listing companies")
    }

    async fn economy_history(&self, company_id: i64) -> Result<Vec<EconomySnapshot>> {
        sqlx::query_as::<_, EconomySnapshot>(
            "SELECT company_id, ts, income, loan, money, value, performance
               FROM economy
              WHERE company_id = $1",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .context("fetching economy history")
    }

    async fn infrastructure_history(&self, company_id: i64) -> Result<Vec<InfrastructureSnapshot>> {
        sqlx::query_as::<_, InfrastructureSnapshot>(
            "SELECT company_id, ts, busses, lorries, trains, ships, planes,
                    bus_stops, lorry_depots, train_stations, harbours, airports
               FROM infrastructure
              WHERE company_id = $1",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .context("fetching infrastructure history")
    }
}
