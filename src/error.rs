//! Runtime errors.
//!
//! This module exposes the [`Error`] type that is used across the code base for bubbling up
//! errors, as well as a [`Result`] type alias with [`Error`] as the default `E` parameter.
//!
//! [`Error`] implements [`IntoResponse`], which means it can be returned from HTTP handlers.
//!
//! Note that an ID which never occurs in the record collection is **not** an error; handlers
//! report it as an empty successful result.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Type alias for a [`Result<T, E>`] with its `E` parameter set to [`Error`].
///
/// [`Result`]: std::result::Result
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The API's core error type.
///
/// Any errors that ever reach the outside should be this type. Each variant maps to exactly one
/// HTTP status code, see the [`IntoResponse`] implementation.
#[derive(Debug, Error)]
pub enum Error {
	/// The client supplied a value we refuse to even query for.
	#[error("invalid {what}; expected an integer")]
	InvalidInput {
		/// Name of the offending parameter.
		what: &'static str,
	},

	/// Something went wrong communicating with the database.
	#[error("failed to fetch records")]
	Database(#[source] sqlx::Error),

	/// The database responded, but its rows could not be materialized into our types.
	#[error("failed to decode records")]
	Decode(#[source] sqlx::Error),

	/// A query did not complete within the configured deadline.
	#[error("query exceeded deadline")]
	QueryTimeout,
}

impl Error {
	/// An error signaling invalid user input.
	///
	/// Produces a `400 Bad Request` status.
	pub(crate) fn invalid(what: &'static str) -> Self {
		Self::InvalidInput { what }
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let message = self.to_string();
		let status = match self {
			Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
			Self::Database(_) | Self::Decode(_) | Self::QueryTimeout => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		};

		if status == StatusCode::INTERNAL_SERVER_ERROR {
			tracing::error!(error = ?self, "internal server error occurred");
		} else {
			tracing::debug!(error = ?self, "returning error from request handler");
		}

		(status, Json(json!({ "message": message }))).into_response()
	}
}

impl From<sqlx::Error> for Error {
	fn from(error: sqlx::Error) -> Self {
		use sqlx::Error as E;

		match error {
			// The query succeeded but the rows did not fit our types.
			error @ (E::ColumnDecode { .. } | E::ColumnNotFound(_) | E::Decode(_) | E::TypeNotFound { .. }) => {
				Self::Decode(error)
			}
			error => Self::Database(error),
		}
	}
}

#[cfg(test)]
#[allow(clippy::indexing_slicing, clippy::missing_assert_message)]
mod tests {
	use axum::http::StatusCode;
	use axum::response::IntoResponse;

	use super::Error;

	#[test]
	fn invalid_input_is_a_client_error() {
		let response = Error::invalid("id").into_response();

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn timeouts_are_server_errors() {
		let response = Error::QueryTimeout.into_response();

		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn decode_failures_are_told_apart_from_query_failures() {
		let error = Error::from(sqlx::Error::ColumnNotFound(String::from("name")));

		assert!(matches!(error, Error::Decode(_)), "expected a decode error, got {error:?}");

		let error = Error::from(sqlx::Error::PoolTimedOut);

		assert!(matches!(error, Error::Database(_)), "expected a database error, got {error:?}");
	}
}
