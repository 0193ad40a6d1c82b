//! Handlers for the `/leaderboard` route.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::leaderboard::models::GetResponse;
use crate::records::PlayerId;
use crate::{Error, Result};

/// Query parameters for `GET /leaderboard`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GetParams {
	/// Only return the entry for this player ID, augmented with its rank.
	///
	/// Taken as a raw string so that a malformed value produces our own `invalid-argument`
	/// error *before* any query is issued, rather than a framework rejection.
	id: Option<String>,
}

/// Fetch the leaderboard.
///
/// Without an `id` parameter this returns the full leaderboard, sorted by win count descending.
/// With `id=<integer>` it returns an array of zero or one entries for that player, augmented
/// with the player's 1-based rank; an unknown ID yields an empty array, not an error.
#[tracing::instrument(level = "debug", skip_all)]
#[utoipa::path(
  get,
  path = "/leaderboard",
  tag = "Leaderboard",
  params(GetParams),
  responses(
    (status = 200, body = Vec<LeaderboardEntry>, description = "\
      The full leaderboard, or (when `id` is given) an array of zero or one ranked entries."),
    (status = 400, description = "`id` is not a valid integer."),
    (status = 500, description = "Fetching or aggregating the records failed."),
  ),
)]
pub async fn get(
	State(state): State<&'static crate::State>,
	Query(GetParams { id }): Query<GetParams>,
) -> Result<Json<GetResponse>> {
	// An absent and an empty `id` both mean "the whole leaderboard".
	let Some(raw_id) = id.filter(|raw| !raw.is_empty()) else {
		let entries = state.store.aggregate().await?;

		return Ok(Json(GetResponse::Full(entries)));
	};

	let target = raw_id
		.parse::<PlayerId>()
		.map_err(|_| Error::invalid("id"))?;

	let ranked = state.store.aggregate_rank(target).await?;

	Ok(Json(GetResponse::Ranked(ranked.into_iter().collect())))
}
