//! Handlers for the `/documents` route.

use axum::extract::State;
use axum::Json;

use crate::records::Record;
use crate::Result;

/// Fetch the entire record collection.
///
/// Records come back in whatever order the backend returns them; this endpoint is a raw dump,
/// not the leaderboard.
#[tracing::instrument(level = "debug", skip_all)]
#[utoipa::path(
  get,
  path = "/documents",
  tag = "Records",
  responses(
    (status = 200, body = Vec<Record>, description = "The full record collection."),
    (status = 500, description = "Fetching or decoding the collection failed."),
  ),
)]
pub async fn get(State(state): State<&'static crate::State>) -> Result<Json<Vec<Record>>> {
	state.store.fetch_all().await.map(Json)
}
