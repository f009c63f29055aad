use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::Response;
use axum::routing::get;
use axum::Router;

use crate::global::Global;
use crate::http::error::ApiError;
use crate::http::routes::envelope_response;
use crate::types::RequestParams;

pub const PATH: &str = "/v1/sources";

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route(PATH, get(get_sources))
}

#[tracing::instrument(skip_all)]
async fn get_sources(
    Query(query): Query<Vec<(String, String)>>,
    State(global): State<Arc<Global>>,
) -> Result<Response<Body>, ApiError> {
    let catalog = global
        .sources
        .as_ref()
        .ok_or_else(ApiError::route_not_found)?;

    let params: RequestParams = query.into_iter().collect();
    Ok(envelope_response(catalog.fetch(params).await))
}
