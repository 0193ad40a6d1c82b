//! Types used for describing the leaderboard.
//!
//! These are derived at query time and never stored; see [`crate::leaderboard::rank`] for how
//! they are computed.

use serde::Serialize;
use utoipa::ToSchema;

use crate::records::PlayerId;

/// One aggregated leaderboard entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
	/// The player's ID.
	///
	/// Serialized as `_id`, the aggregation group key existing dashboard consumers expect.
	#[serde(rename = "_id")]
	pub id: PlayerId,

	/// How many records share this ID, i.e. how many wins this player has.
	pub count: u64,

	/// The player's name.
	///
	/// If a player has renamed themselves, this is the first name encountered during
	/// aggregation; stable within one query, but not guaranteed to be the most recent.
	#[serde(rename = "Name")]
	pub name: String,
}

/// A leaderboard entry for one specific player, augmented with its rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RankedEntry {
	/// The player's ID.
	#[serde(rename = "ID")]
	pub id: PlayerId,

	/// How many records share this ID.
	pub count: u64,

	/// The player's name.
	#[serde(rename = "Name")]
	pub name: String,

	/// The entry's 1-based position in the full leaderboard ordering.
	pub rank: u64,
}

/// Response body for `GET /leaderboard`.
///
/// The two query modes produce different shapes: the full leaderboard has no ranks (the order
/// *is* the ranking), while a single located entry carries its rank explicitly.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum GetResponse {
	/// The full leaderboard.
	Full(Vec<LeaderboardEntry>),

	/// Zero or one located entries.
	Ranked(Vec<RankedEntry>),
}
