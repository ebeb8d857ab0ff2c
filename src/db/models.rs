use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One server-hosted play session.
///
/// `finished` stays NULL while the game is running and is set exactly once
/// when it ends; everything else is immutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: i64,
    /// Server identity, used as the leaderboard filter key.
    pub game_name: String,
    /// Advertised display name.
    pub server_name: String,
    pub started: DateTime<Utc>,
    pub finished: Option<DateTime<Utc>>,
    pub generation_seed: i64,
    pub starting_year: i32,
    pub map_size_x: i32,
    pub map_size_y: i32,
}

/// A player-run business inside exactly one game.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Company {
    /// System-wide unique id (and the deterministic ranking tie-break).
    pub id: i64,
    pub game_id: i64,
    /// In-game sequence number, only unique within its game.
    pub company_id: i16,
    /// Palette index, 0..=15 (see [`crate::hof::colors`]).
    pub color: i16,
    pub name: String,
    pub founded: DateTime<Utc>,
    pub closed: Option<DateTime<Utc>>,
    pub closure_reason: Option<String>,
    pub manager_name: String,
    pub password_protected: bool,
}

/// Point-in-time economy measurement for one company.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EconomySnapshot {
    pub company_id: i64,
    pub ts: DateTime<Utc>,
    pub income: i64,
    pub loan: i64,
    pub money: i64,
    pub value: i64,
    pub performance: i32,
}

/// Point-in-time vehicle and facility counts for one company.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InfrastructureSnapshot {
    pub company_id: i64,
    pub ts: DateTime<Utc>,
    pub busses: i32,
    pub lorries: i32,
    pub trains: i32,
    pub ships: i32,
    pub planes: i32,
    pub bus_stops: i32,
    pub lorry_depots: i32,
    pub train_stations: i32,
    pub harbours: i32,
    pub airports: i32,
}

/// One client's stint in a company (roster display only).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanySession {
    pub client_id: i64,
    pub client_name: String,
    pub ip: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub proxy: bool,
    pub joined_at: DateTime<Utc>,
    pub left_at: Option<DateTime<Utc>>,
}

/// Distinct non-proxy players seen per country.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub players: i64,
}
