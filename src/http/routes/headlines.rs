use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::Response;
use axum::routing::get;
use axum::Router;

use crate::global::Global;
use crate::http::error::ApiError;
use crate::http::routes::envelope_response;
use crate::types::{PageSpec, RequestParams};

pub const PATH: &str = "/v1/headlines";

const DEFAULT_PAGE: usize = 1;
const DEFAULT_PAGE_SIZE: usize = 20;

pub fn routes() -> Router<Arc<Global>> {
    Router::new().route(PATH, get(get_headlines))
}

fn parse_positive(name: &'static str, raw: &str) -> Result<usize, ApiError> {
    raw.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ApiError::invalid_page(name))
}

/// Pulls `page` and `pageSize` out; everything else goes upstream untouched.
///
/// `Query` has already percent-decoded the values, and `Endpoint::url` does not
/// re-escape them, so `q=AT%26T` arrives upstream as `q=AT&T`.
pub(crate) fn split_query(query: Vec<(String, String)>) -> Result<(PageSpec, RequestParams), ApiError> {
    let mut page = DEFAULT_PAGE;
    let mut page_size = DEFAULT_PAGE_SIZE;
    let mut params = RequestParams::new();

    for (name, value) in query {
        match name.as_str() {
            "page" => page = parse_positive("page", &value)?,
            "pageSize" => page_size = parse_positive("pageSize", &value)?,
            _ => params.insert(name, value),
        }
    }

    let spec = PageSpec::new(page, page_size).ok_or_else(|| ApiError::invalid_page("page"))?;

    Ok((spec, params))
}

#[tracing::instrument(skip_all)]
async fn get_headlines(
    Query(query): Query<Vec<(String, String)>>,
    State(global): State<Arc<Global>>,
) -> Result<Response<Body>, ApiError> {
    let (spec, params) = split_query(query)?;
    let envelope = global.headlines.fetch(params, spec.page_size, spec.page).await;

    Ok(envelope_response(envelope))
}
