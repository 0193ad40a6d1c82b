//! A tracing layer for emitting logs to rolling files.

use std::path::PathBuf;
use std::{env, fs};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::filter::FilterFn;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Provides a tracing layer for emitting logs to daily-rotated files.
///
/// The log directory is taken from `CROC_API_LOG_DIR`. If that variable is unset, no file layer
/// is installed at all; this is the common case for local development.
pub fn layer<S>() -> anyhow::Result<(Option<impl tracing_subscriber::Layer<S>>, Option<WorkerGuard>)>
where
	S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
	let Some(log_dir) = env::var("CROC_API_LOG_DIR").ok().map(PathBuf::from) else {
		return Ok((None, None));
	};

	if !log_dir.exists() {
		fs::create_dir_all(&log_dir)?;
	}

	let log_dir = log_dir.canonicalize()?;

	let (writer, guard) = tracing_appender::rolling::Builder::new()
		.rotation(Rotation::DAILY)
		.filename_suffix("log")
		.build(&log_dir)
		.map(tracing_appender::non_blocking)?;

	let layer = tracing_subscriber::fmt::layer()
		.with_writer(writer)
		.with_ansi(false)
		.with_filter(FilterFn::new(|metadata| {
			metadata.target().starts_with("croc_api")
		}));

	Ok((Some(layer), Some(guard)))
}
