//! The API's entrypoint.

use croc_api::Config;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	if let Err(error) = dotenvy::dotenv() {
		eprintln!("Failed to load `.env` file: {error}");
	}

	let config = Config::new()?;
	let _guard = croc_api::logging::init()?;

	info!("initialized API service");

	croc_api::run(config).await
}
