use std::collections::HashMap;

use anyhow::{bail, Result};
use chrono::{DateTime, TimeZone, Utc};
use mainline_tracker::db::models::{Company, EconomySnapshot, Game, InfrastructureSnapshot};
use mainline_tracker::hof::leaderboard::build_leaderboard;
use mainline_tracker::hof::source::SnapshotSource;

fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap()
}

fn game(id: i64, name: &str) -> Game {
    Game {
        id,
        game_name: name.to_string(),
        server_name: format!("{name} (EU)"),
        started: ts(1),
        finished: None,
        generation_seed: 0xC0FFEE,
        starting_year: 1950,
        map_size_x: 512,
        map_size_y: 512,
    }
}

fn company(id: i64, game_id: i64, seq: i16, name: &str) -> Company {
    Company {
        id,
        game_id,
        company_id: seq,
        color: (id % 16) as i16,
        name: name.to_string(),
        founded: ts(2),
        closed: None,
        closure_reason: None,
        manager_name: format!("{name} Manager"),
        password_protected: false,
    }
}

fn econ(company_id: i64, day: u32, value: i64) -> EconomySnapshot {
    EconomySnapshot {
        company_id,
        ts: ts(day),
        income: value / 10,
        loan: 100_000,
        money: value / 2,
        value,
        performance: 200,
    }
}

/// In-memory stand-in for the Postgres repository.
#[derive(Default)]
struct MemorySource {
    games: Vec<Game>,
    companies: HashMap<i64, Vec<Company>>,
    economy: HashMap<i64, Vec<EconomySnapshot>>,
    infrastructure: HashMap<i64, Vec<InfrastructureSnapshot>>,
}

impl MemorySource {
    fn with_game(mut self, game: Game) -> Self {
        self.games.push(game);
        self
    }

    fn with_company(mut self, company: Company) -> Self {
        self.companies
            .entry(company.game_id)
            .or_default()
            .push(company);
        self
    }

    fn with_economy(mut self, snapshots: Vec<EconomySnapshot>) -> Self {
        for snap in snapshots {
            self.economy.entry(snap.company_id).or_default().push(snap);
        }
        self
    }
}

impl SnapshotSource for MemorySource {
    async fn list_games(&self, filter: Option<&str>) -> Result<Vec<Game>> {
        Ok(self
            .games
            .iter()
            .filter(|g| filter.map_or(true, |f| g.game_name == f))
            .cloned()
            .collect())
    }

    async fn list_companies(&self, game_id: i64) -> Result<Vec<Company>> {
        Ok(self.companies.get(&game_id).cloned().unwrap_or_default())
    }

    async fn economy_history(&self, company_id: i64) -> Result<Vec<EconomySnapshot>> {
        Ok(self.economy.get(&company_id).cloned().unwrap_or_default())
    }

    async fn infrastructure_history(&self, company_id: i64) -> Result<Vec<InfrastructureSnapshot>> {
        Ok(self
            .infrastructure
            .get(&company_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Source that fails every call, as an unreachable database would.
struct FailingSource;

impl SnapshotSource for FailingSource {
    async fn list_games(&self, _filter: Option<&str>) -> Result<Vec<Game>> {
        bail!("connection refused")
    }

    async fn list_companies(&self, _game_id: i64) -> Result<Vec<Company>> {
        bail!("connection refused")
    }

    async fn economy_history(&self, _company_id: i64) -> Result<Vec<EconomySnapshot>> {
        bail!("connection refused")
    }

    async fn infrastructure_history(&self, _company_id: i64) -> Result<Vec<InfrastructureSnapshot>> {
        bail!("connection refused")
    }
}

fn three_company_fixture() -> MemorySource {
    // Peak values: Ajax 500k, Brunel 750k, Cargolux 750k — a tie between
    // the two leaders, held by companies 2 and 3.
    MemorySource::default()
        .with_game(game(1, "alpha"))
        .with_company(company(1, 1, 1, "Ajax Transport"))
        .with_company(company(2, 1, 2, "Brunel & Co"))
        .with_company(company(3, 1, 3, "Cargolux"))
        .with_economy(vec![
            econ(1, 3, 500_000),
            econ(1, 4, 120_000),
            econ(2, 3, 750_000),
            econ(3, 5, 750_000),
            econ(3, 6, 10_000),
        ])
}

#[tokio::test]
async fn ranks_descending_and_breaks_ties_by_company_id() {
    let source = three_company_fixture();

    let board = build_leaderboard(&source, None, 2).await.unwrap();
    let ids: Vec<i64> = board.iter().map(|e| e.company_id).collect();
    // Tie on 750k broken by the lower id.
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(board[0].economy.unwrap().value, 750_000);
}

#[tokio::test]
async fn truncates_only_after_ranking_the_full_candidate_set() {
    let source = three_company_fixture();

    let board = build_leaderboard(&source, None, 10).await.unwrap();
    assert_eq!(board.len(), 3);
    let ids: Vec<i64> = board.iter().map(|e| e.company_id).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    let top_one = build_leaderboard(&source, None, 1).await.unwrap();
    assert_eq!(top_one.len(), 1);
    assert_eq!(top_one[0].company_id, 2);
}

#[tokio::test]
async fn snapshotless_company_is_kept_but_ranks_last() {
    // Deficit Ltd has a real (negative) peak; Ghost Freight never
    // reported at all. Ghost must not outrank the negative value.
    let source = MemorySource::default()
        .with_game(game(1, "alpha"))
        .with_company(company(1, 1, 1, "Deficit Ltd"))
        .with_company(company(2, 1, 2, "Ghost Freight"))
        .with_economy(vec![econ(1, 3, -40_000)]);

    let board = build_leaderboard(&source, None, 10).await.unwrap();
    let ids: Vec<i64> = board.iter().map(|e| e.company_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(board[1].economy.is_none());
    assert!(board[1].infrastructure.is_none());
}

#[tokio::test]
async fn non_positive_limit_yields_empty_board() {
    let source = three_company_fixture();
    assert!(build_leaderboard(&source, None, 0).await.unwrap().is_empty());
    assert!(build_leaderboard(&source, None, -5).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_filter_yields_empty_board() {
    let source = three_company_fixture();
    let board = build_leaderboard(&source, Some("no-such-server"), 10)
        .await
        .unwrap();
    assert!(board.is_empty());
}

#[tokio::test]
async fn filter_scopes_to_matching_games_only() {
    let source = MemorySource::default()
        .with_game(game(1, "alpha"))
        .with_game(game(2, "beta"))
        .with_company(company(1, 1, 1, "Alpha Haulage"))
        .with_company(company(2, 2, 1, "Beta Lines"))
        .with_economy(vec![econ(1, 3, 100_000), econ(2, 3, 900_000)]);

    let board = build_leaderboard(&source, Some("alpha"), 10).await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].company_id, 1);

    // Absent filter spans both games.
    let global = build_leaderboard(&source, None, 10).await.unwrap();
    assert_eq!(global.len(), 2);
    assert_eq!(global[0].company_id, 2);
}

#[tokio::test]
async fn entries_carry_denormalized_game_metadata() {
    let mut finished_game = game(1, "alpha");
    finished_game.finished = Some(ts(20));
    let source = MemorySource::default()
        .with_game(finished_game)
        .with_company(company(1, 1, 1, "Ajax Transport"))
        .with_economy(vec![econ(1, 3, 500_000)]);

    let board = build_leaderboard(&source, None, 10).await.unwrap();
    assert_eq!(board[0].company_name, "Ajax Transport");
    assert_eq!(board[0].company_color, 1);
    assert_eq!(board[0].game_started, ts(1));
    assert_eq!(board[0].game_finished, Some(ts(20)));
}

#[tokio::test]
async fn repeated_builds_are_identical() {
    let source = three_company_fixture();
    let first = build_leaderboard(&source, None, 10).await.unwrap();
    let second = build_leaderboard(&source, None, 10).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn source_failure_aborts_the_whole_build() {
    let err = build_leaderboard(&FailingSource, None, 10).await;
    assert!(err.is_err());
}
