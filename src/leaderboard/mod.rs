//! Everything related to the leaderboard.
//!
//! The leaderboard is derived from the record collection at query time: records are grouped by
//! player ID, counted, and sorted by count descending. Nothing here is ever persisted.

use axum::routing::get;
use axum::Router;

use crate::middleware::cors;
use crate::State;

mod models;

#[doc(inline)]
pub use models::{GetResponse, LeaderboardEntry, RankedEntry};

pub mod rank;
pub mod handlers;

/// Returns a router with routes for `/leaderboard`.
pub fn router(state: &'static State) -> Router {
	Router::new()
		.route("/", get(handlers::root::get))
		.route_layer(cors::permissive())
		.with_state(state)
}
