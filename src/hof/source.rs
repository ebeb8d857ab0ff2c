use anyhow::Result;

use crate::db::models::{Company, EconomySnapshot, Game, InfrastructureSnapshot};

/// Read-only view of the snapshot store.
///
/// Implemented by the Postgres repository and by in-memory fixtures in
/// tests. Empty results are normal; history slices carry no ordering
/// guarantee. Implementations must not mutate anything.
#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    /// Games whose `game_name` matches `filter` literally, or every game
    /// when `filter` is absent.
    async fn list_games(&self, filter: Option<&str>) -> Result<Vec<Game>>;

    /// All companies of one game, closed ones included.
    async fn list_companies(&self, game_id: i64) -> Result<Vec<Company>>;

    /// Full economy history of one company.
    async fn economy_history(&self, company_id: i64) -> Result<Vec<EconomySnapshot>>;

    /// Full infrastructure history of one company.
    async fn infrastructure_history(&self, company_id: i64) -> Result<Vec<InfrastructureSnapshot>>;
}
