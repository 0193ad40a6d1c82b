//! Types used for describing stored records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A player's unique ID, as reported by the game.
pub type PlayerId = i64;

/// One stored occurrence event: a single win by one player.
///
/// There is no uniqueness constraint; a player appears once per win, and counting those
/// occurrences is what the leaderboard is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Record {
	/// The player's ID.
	#[serde(rename = "ID")]
	pub id: PlayerId,

	/// The player's display name at the time the win was observed.
	///
	/// Players can rename themselves, so different records for the same ID may carry
	/// different names.
	#[serde(rename = "Name")]
	pub name: String,

	/// When this win was observed.
	pub created_on: DateTime<Utc>,
}
