pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use sitemeta_core::{Extractor, Fetcher};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;

/// Builds the full application: routes plus tracing and CORS layers.
pub fn app<F>(extractor: Extractor<F>) -> Router
where
    F: Fetcher + Send + Sync + 'static,
{
    routes::router(extractor).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
