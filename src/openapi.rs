//! Everything related to [OpenAPI].
//!
//! This project uses the [`utoipa`] crate for generating an OpenAPI specification from code.
//! The [`Spec`] struct in this module lists out all the relevant types, routes, and other
//! metadata that will be included in the spec.
//!
//! [OpenAPI]: https://spec.openapis.org/oas/latest.html

use derive_more::{Deref, DerefMut};
use itertools::Itertools;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Clone, Deref, DerefMut, OpenApi)]
#[openapi(
  info(
    title = "Croc Leaderboard API",
    description = "Read-only leaderboard over the Croc word game's win records.",
    license(
      name = "Licensed under the GPLv3",
      url = "https://www.gnu.org/licenses/gpl-3.0",
    ),
  ),
  paths(
    crate::records::handlers::root::get,
    crate::leaderboard::handlers::root::get,
  ),
  components(
    schemas(
      crate::records::Record,
      crate::leaderboard::LeaderboardEntry,
      crate::leaderboard::RankedEntry,
    ),
  ),
)]
#[allow(missing_docs)]
pub struct Spec(utoipa::openapi::OpenApi);

impl Spec {
	/// Creates a new [`Spec`].
	pub fn new() -> Self {
		Self(Self::openapi())
	}

	/// Returns an iterator over the registered API routes and their allowed HTTP methods.
	pub fn routes(&self) -> impl Iterator<Item = (&str, String)> {
		self.paths.paths.iter().map(|(path, handler)| {
			let methods = handler
				.operations
				.keys()
				.map(|method| format!("{method:?}").to_uppercase())
				.join(", ");

			(path.as_str(), methods)
		})
	}

	/// Creates a [`SwaggerUi`], which can be turned into an [`axum::Router`], that will serve
	/// a SwaggerUI web page and a JSON file representing this OpenAPI spec.
	pub fn swagger_ui(self) -> SwaggerUi {
		SwaggerUi::new("/docs/swagger-ui").url("/docs/openapi.json", self.0)
	}
}
