#![doc = include_str!("../README.md")]

use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::connect_info::IntoMakeServiceWithConnectInfo;
use axum::extract::ConnectInfo;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

mod error;
pub use error::{Error, Result};

mod config;
pub use config::Config;

mod state;
pub use state::State;

pub mod logging;
pub mod openapi;
pub mod middleware;

pub mod records;
pub mod leaderboard;

#[allow(clippy::missing_docs_in_private_items)]
type Server = axum::serve::Serve<
	IntoMakeServiceWithConnectInfo<Router, SocketAddr>,
	axum::middleware::AddExtension<Router, ConnectInfo<SocketAddr>>,
>;

/// Run the API.
///
/// This function will not exit until a SIGINT signal is received.
pub async fn run(config: Config) -> anyhow::Result<()> {
	server(config)
		.await
		.context("build http server")?
		.with_graceful_shutdown(sigint())
		.await
		.context("run http server")
}

/// Builds the API's routes.
///
/// Every route is read-only; the only thing shared between requests is the
/// record store inside `state`.
fn router(state: &'static State) -> Router {
	Router::new()
		.nest("/documents", records::router(state))
		.nest("/leaderboard", leaderboard::router(state))
}

/// Runs the necessary setup for the API and returns a future that will run the server when
/// polled.
///
/// See [`run()`].
async fn server(config: Config) -> anyhow::Result<Server> {
	tracing::debug!(addr = %config.addr, "establishing TCP connection");

	let tcp_listener = TcpListener::bind(config.addr)
		.await
		.context("bind tcp socket")?;

	let addr = tcp_listener.local_addr().context("get tcp addr")?;
	tracing::info!(%addr, "listening for requests");

	let state = State::new(config).await.context("initialize state")?;
	let spec = openapi::Spec::new();

	for (path, methods) in spec.routes() {
		tracing::info!("registering route: {path} => [{methods}]");
	}

	tracing::debug!("initializing API service");

	let api_service = router(state)
		.layer(middleware::logging::layer!())
		.merge(spec.swagger_ui())
		.into_make_service_with_connect_info::<SocketAddr>();

	Ok(axum::serve(tcp_listener, api_service))
}

/// Waits for a SIGINT signal from the operating system.
async fn sigint() {
	let signal_result = signal::ctrl_c().await;

	if let Err(err) = signal_result {
		tracing::error!("failed to receive SIGINT: {err}");
	} else {
		tracing::warn!("received SIGINT; shutting down...");
	}
}
