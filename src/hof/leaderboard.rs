//! Ranked hall-of-fame assembly.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::hof::peaks::{economy_peaks, infrastructure_peaks, EconomyPeaks, InfrastructurePeaks};
use crate::hof::source::SnapshotSource;

/// One ranked row. Self-contained: company and game metadata are resolved
/// at build time, so the row stays valid even if the underlying records
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub company_id: i64,
    pub company_name: String,
    pub company_color: i16,
    /// `None` when the company never reported economy figures.
    pub economy: Option<EconomyPeaks>,
    /// `None` when the company never reported infrastructure counts.
    pub infrastructure: Option<InfrastructurePeaks>,
    pub game_started: DateTime<Utc>,
    pub game_finished: Option<DateTime<Utc>>,
}

impl LeaderboardEntry {
    /// Primary ranking key. A missing economy history ranks below any real
    /// value, negative ones included (`None < Some(_)`).
    fn peak_value(&self) -> Option<i64> {
        self.economy.as_ref().map(|e| e.value)
    }
}

/// Build the ranked top list.
///
/// `filter` is a literal `game_name` match; absent means all games, an
/// unknown name is a valid empty result. Companies without snapshots stay
/// in the candidate set with blank peak columns. The whole candidate set
/// is ranked before truncating to `limit`: peak company value descending,
/// ties broken by ascending company id so repeated builds against an
/// unchanged store are identical.
///
/// Any source error aborts the build; no ranking over partial data.
pub async fn build_leaderboard<S: SnapshotSource>(
    source: &S,
    filter: Option<&str>,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>> {
    if limit <= 0 {
        log::warn!("leaderboard requested with non-positive limit {limit}");
        return Ok(Vec::new());
    }

    let mut entries = Vec::new();
    for game in source.list_games(filter).await? {
        for company in source.list_companies(game.id).await? {
            let economy = economy_peaks(&source.economy_history(company.id).await?);
            let infrastructure =
                infrastructure_peaks(&source.infrastructure_history(company.id).await?);
            entries.push(LeaderboardEntry {
                company_id: company.id,
                company_name: company.name,
                company_color: company.color,
                economy,
                infrastructure,
                game_started: game.started,
                game_finished: game.finished,
            });
        }
    }

    entries.sort_by(|a, b| {
        b.peak_value()
            .cmp(&a.peak_value())
            .then(a.company_id.cmp(&b.company_id))
    });
    entries.truncate(limit as usize);
    Ok(entries)
}
