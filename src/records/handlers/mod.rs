//! HTTP handlers for the `/documents` routes.

pub mod root;
