//! Log-capturing facilities.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod stderr;
mod files;

/// Initializes [`tracing_subscriber`].
///
/// NOTE: the returned [`WorkerGuard`] will perform cleanup for the tracing layer that emits logs
///       to files, which means it has to stay alive until the program exits! If no log directory
///       is configured, only the stderr layer is installed and the guard is `None`.
pub fn init() -> anyhow::Result<Option<WorkerGuard>> {
	let (files_layer, guard) = files::layer()?;

	tracing_subscriber::registry()
		.with(stderr::layer())
		.with(files_layer)
		.init();

	tracing::info!("initialized logging");

	Ok(guard)
}
