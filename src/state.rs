//! The API's main application state.
//!
//! This is initialized once on startup, and then passed around the application by axum.

use std::sync::Arc;

use derive_more::Debug;
use sqlx::MySqlPool;

use crate::records::store::{MySqlRecordStore, RecordStore};
use crate::{Config, Result};

/// The main application state.
///
/// A `'static` reference to this is passed around the application.
#[derive(Debug)]
pub struct State {
	/// The API configuration.
	pub config: Config,

	/// Handle to the record collection.
	///
	/// This is a trait object so tests can swap in an in-memory implementation.
	#[debug(skip)]
	pub store: Arc<dyn RecordStore>,
}

impl State {
	/// Creates a new [`State`] object and leaks it on the heap.
	///
	/// **This function should only ever be called once; it leaks memory.**
	pub async fn new(config: Config) -> Result<&'static Self> {
		let database = MySqlPool::connect(config.database_url.as_str()).await?;
		let store: Arc<dyn RecordStore> =
			Arc::new(MySqlRecordStore::new(database, config.query_timeout));

		Ok(Box::leak(Box::new(Self { config, store })))
	}

	/// Creates a [`State`] with a custom record store, without opening any connections.
	#[cfg(test)]
	pub(crate) fn with_store(config: Config, store: Arc<dyn RecordStore>) -> &'static Self {
		Box::leak(Box::new(Self { config, store }))
	}
}
