//! Data access for the record collection.
//!
//! [`RecordStore`] is the seam between the HTTP handlers and the backing database: handlers only
//! ever talk to the trait, so tests can swap the real [`MySqlRecordStore`] for an in-memory
//! implementation. All aggregation semantics live in [`crate::leaderboard::rank`] and are shared
//! by every implementation, so there is exactly one answer to questions like "who wins when a
//! player has renamed themselves".

use std::future::Future;
use std::time::Duration;
use std::fmt;

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::leaderboard::rank;
use crate::leaderboard::{LeaderboardEntry, RankedEntry};
use crate::records::{queries, PlayerId, Record};
use crate::{Error, Result};

/// A read-only view of the record collection.
#[async_trait]
pub trait RecordStore: Send + Sync {
	/// Fetches every stored record, in backend order.
	async fn fetch_all(&self) -> Result<Vec<Record>>;

	/// Aggregates all records into a leaderboard, sorted by count descending.
	async fn aggregate(&self) -> Result<Vec<LeaderboardEntry>>;

	/// Aggregates all records and locates `target`'s entry along with its 1-based rank.
	///
	/// Returns `Ok(None)` if no record with that ID exists; that is a valid empty result, not
	/// an error.
	async fn aggregate_rank(&self, target: PlayerId) -> Result<Option<RankedEntry>>;
}

/// The production [`RecordStore`], backed by a MySQL connection pool.
pub struct MySqlRecordStore {
	/// Connection pool to the backing database.
	database: MySqlPool,

	/// Deadline applied to every query.
	query_timeout: Duration,
}

impl fmt::Debug for MySqlRecordStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MySqlRecordStore").finish_non_exhaustive()
	}
}

impl MySqlRecordStore {
	/// Creates a new [`MySqlRecordStore`].
	pub fn new(database: MySqlPool, query_timeout: Duration) -> Self {
		Self { database, query_timeout }
	}

	/// Runs `query` with this store's deadline applied.
	async fn bounded<T, F>(&self, query: F) -> Result<T>
	where
		F: Future<Output = sqlx::Result<T>> + Send,
	{
		tokio::time::timeout(self.query_timeout, query)
			.await
			.map_err(|_| Error::QueryTimeout)?
			.map_err(Error::from)
	}
}

#[async_trait]
impl RecordStore for MySqlRecordStore {
	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	async fn fetch_all(&self) -> Result<Vec<Record>> {
		self.bounded(sqlx::query_as::<_, Record>(queries::SELECT).fetch_all(&self.database))
			.await
	}

	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	async fn aggregate(&self) -> Result<Vec<LeaderboardEntry>> {
		let records = self.fetch_all().await?;

		Ok(rank::leaderboard(&records))
	}

	#[tracing::instrument(level = "debug", skip(self), err(Debug, level = "debug"))]
	async fn aggregate_rank(&self, target: PlayerId) -> Result<Option<RankedEntry>> {
		let records = self.fetch_all().await?;

		Ok(rank::rank_for(&records, target))
	}
}

/// A [`RecordStore`] over a plain vector, for tests.
#[cfg(test)]
pub(crate) struct InMemoryRecordStore {
	/// The "collection".
	records: Vec<Record>,
}

#[cfg(test)]
impl InMemoryRecordStore {
	/// Creates a new [`InMemoryRecordStore`] holding the given records.
	pub(crate) fn new(records: Vec<Record>) -> Self {
		Self { records }
	}
}

#[cfg(test)]
#[async_trait]
impl RecordStore for InMemoryRecordStore {
	async fn fetch_all(&self) -> Result<Vec<Record>> {
		Ok(self.records.clone())
	}

	async fn aggregate(&self) -> Result<Vec<LeaderboardEntry>> {
		Ok(rank::leaderboard(&self.records))
	}

	async fn aggregate_rank(&self, target: PlayerId) -> Result<Option<RankedEntry>> {
		Ok(rank::rank_for(&self.records, target))
	}
}

/// A [`RecordStore`] whose every method fails.
///
/// Used to assert both that store failures surface as 500s and that certain handlers reject bad
/// input before issuing any query at all.
#[cfg(test)]
pub(crate) struct FailingRecordStore;

#[cfg(test)]
#[async_trait]
impl RecordStore for FailingRecordStore {
	async fn fetch_all(&self) -> Result<Vec<Record>> {
		Err(Error::QueryTimeout)
	}

	async fn aggregate(&self) -> Result<Vec<LeaderboardEntry>> {
		Err(Error::QueryTimeout)
	}

	async fn aggregate_rank(&self, _target: PlayerId) -> Result<Option<RankedEntry>> {
		Err(Error::QueryTimeout)
	}
}
