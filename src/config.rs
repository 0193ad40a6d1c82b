//! Module containing the [`Config`] struct, the API's configuration.

use std::env;
use std::error::Error as StdError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;
use derive_more::Debug;
use url::Url;

/// How long a single database query may take before it is abandoned, unless overridden by the
/// environment.
const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration values for the API.
///
/// These are read from the environment on startup and then passed around explicitly; nothing in
/// this crate reads the environment after [`Config::new()`] returns.
#[derive(Debug, Clone)]
pub struct Config {
	/// The ip address and port the API is going to listen on.
	#[debug("{addr}")]
	pub addr: SocketAddr,

	/// The database URL that the API will connect to.
	///
	/// This contains credentials, so it is masked in debug output.
	#[debug("*****")]
	pub database_url: Url,

	/// Deadline applied to every database query.
	pub query_timeout: Duration,
}

impl Config {
	/// Creates a new [`Config`] object by reading from the environment.
	pub fn new() -> anyhow::Result<Self> {
		let ip_addr = parse_from_env("CROC_API_IP")?;
		let port = parse_from_env("CROC_API_PORT")?;
		let addr = SocketAddr::new(ip_addr, port);
		let database_url = parse_from_env("DATABASE_URL")?;
		let query_timeout = parse_from_env_opt("CROC_API_QUERY_TIMEOUT")?
			.map_or(DEFAULT_QUERY_TIMEOUT, Duration::from_secs);

		Ok(Self { addr, database_url, query_timeout })
	}

	/// Creates a [`Config`] suitable for tests that never open real connections.
	#[cfg(test)]
	pub(crate) fn testing() -> Self {
		Self {
			addr: SocketAddr::from(([127, 0, 0, 1], 0)),
			database_url: "mysql://localhost:3306/croc"
				.parse()
				.expect("hardcoded url is valid"),
			query_timeout: Duration::from_secs(1),
		}
	}
}

/// Parses an environment variable into a `T`.
fn parse_from_env<T>(var: &str) -> anyhow::Result<T>
where
	T: FromStr,
	T::Err: StdError + Send + Sync + 'static,
{
	let value = env::var(var).with_context(|| format!("missing `{var}` environment variable"))?;

	if value.is_empty() {
		anyhow::bail!("`{var}` cannot be empty");
	}

	<T as FromStr>::from_str(&value).with_context(|| format!("failed to parse `{var}`"))
}

/// Parses an environment variable into an `Option<T>`, returning `None` if the variable is not
/// set or empty.
fn parse_from_env_opt<T>(var: &str) -> anyhow::Result<Option<T>>
where
	T: FromStr,
	T::Err: StdError + Send + Sync + 'static,
{
	let Some(value) = env::var(var).ok() else {
		return Ok(None);
	};

	if value.is_empty() {
		return Ok(None);
	}

	<T as FromStr>::from_str(&value)
		.map(Some)
		.with_context(|| format!("failed to parse `{var}`"))
}
