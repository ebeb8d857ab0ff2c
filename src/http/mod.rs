pub mod countries;
pub mod games;
pub mod health;
pub mod leaderboard;
pub mod routes;
