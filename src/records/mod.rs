//! Everything related to raw game records.
//!
//! A record is one observed win event. Records are append-only and written by an external
//! collector; this API only ever reads them.

use axum::routing::get;
use axum::Router;

use crate::middleware::cors;
use crate::State;

mod models;

#[doc(inline)]
pub use models::{PlayerId, Record};

mod queries;
pub mod handlers;
pub mod store;

/// Returns a router with routes for `/documents`.
pub fn router(state: &'static State) -> Router {
	Router::new()
		.route("/", get(handlers::root::get))
		.route_layer(cors::permissive())
		.with_state(state)
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::missing_assert_message)]
mod tests {
	use std::sync::Arc;

	use axum::body::Body;
	use axum::http::{header, Request, StatusCode};
	use chrono::Utc;
	use tower::ServiceExt;

	use super::store::{FailingRecordStore, InMemoryRecordStore};
	use super::Record;
	use crate::{Config, State};

	/// Shorthand for building a record in tests.
	fn record(id: i64, name: &str) -> Record {
		Record {
			id,
			name: name.to_owned(),
			created_on: Utc::now(),
		}
	}

	#[tokio::test]
	async fn documents_returns_the_raw_collection() {
		let records = vec![record(1, "A"), record(2, "B"), record(1, "A")];
		let store = Arc::new(InMemoryRecordStore::new(records));
		let state = State::with_store(Config::testing(), store);

		let response = crate::router(state)
			.oneshot(Request::get("/documents").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::OK);

		let body = axum::body::to_bytes(response.into_body(), usize::MAX)
			.await
			.unwrap();
		let documents: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();

		assert_eq!(documents.len(), 3);
		assert_eq!(documents[0]["ID"], 1);
		assert_eq!(documents[0]["Name"], "A");
		assert!(documents[0].get("created_on").is_some(), "records carry their timestamp");
	}

	#[tokio::test]
	async fn documents_allows_any_origin() {
		let store = Arc::new(InMemoryRecordStore::new(vec![record(1, "A")]));
		let state = State::with_store(Config::testing(), store);

		let response = crate::router(state)
			.oneshot(
				Request::get("/documents")
					.header(header::ORIGIN, "https://example.org")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(
			response
				.headers()
				.get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
				.map(|value| value.to_str().unwrap()),
			Some("*"),
		);
	}

	#[tokio::test]
	async fn store_failures_surface_as_500() {
		let state = State::with_store(Config::testing(), Arc::new(FailingRecordStore));

		let response = crate::router(state)
			.oneshot(Request::get("/documents").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}
}
