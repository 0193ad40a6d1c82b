//! CORS middlewares.
//!
//! Every route in this API is public and read-only, so the dashboard (and anyone else) may call
//! it from any origin.

use axum::http::Method;
use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer that allows `GET` requests from any origin.
pub fn permissive() -> CorsLayer {
	CorsLayer::permissive().allow_methods([Method::GET])
}
