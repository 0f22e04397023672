//! HTTP routes.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::routing::get;
use serde::Deserialize;
use sitemeta_core::{Extractor, Fetcher, PageMetadata};

use crate::error::ApiError;

/// Query string of `GET /api/blog-info`.
#[derive(Debug, Deserialize)]
pub struct BlogInfoQuery {
    pub url: Option<String>,
}

/// Builds the route table around a shared extractor.
pub fn router<F>(extractor: Extractor<F>) -> Router
where
    F: Fetcher + Send + Sync + 'static,
{
    Router::new()
        .route("/api/blog-info", get(blog_info::<F>))
        .route("/health", get(health))
        .with_state(Arc::new(extractor))
}

/// Returns `{title, description, rssUrl}` for the page at `?url=`.
async fn blog_info<F>(
    State(extractor): State<Arc<Extractor<F>>>, Query(query): Query<BlogInfoQuery>,
) -> Result<Json<PageMetadata>, ApiError>
where
    F: Fetcher + Send + Sync + 'static,
{
    let url = query.url.unwrap_or_default();
    let metadata = extractor.extract(&url).await?;
    Ok(Json(metadata))
}

async fn health() -> &'static str {
    "ok"
}
