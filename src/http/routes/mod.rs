use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Response};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use hyper::StatusCode;

use crate::global::Global;
use crate::types::ResultEnvelope;

pub mod headlines;
pub mod sources;


/// The envelope code becomes the HTTP status, the payload the body.
pub(super) fn envelope_response(envelope: ResultEnvelope) -> Response<Body> {
    let status = StatusCode::from_u16(envelope.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        envelope.result,
    )
        .into_response()
}

pub fn routes(global: &Arc<Global>) -> Router<Arc<Global>> {
    let router = Router::new()
        .route("/", get(root))
        .merge(headlines::routes());

    if global.sources.is_some() {
        router.merge(sources::routes())
    } else {
        router
    }
}

#[derive(serde::Serialize)]
struct RootResponse {
    message: &'static str,
    version: &'static str,
    uptime: u64,
    endpoints: Vec<&'static str>,
}

#[tracing::instrument(skip(global))]
async fn root(State(global): State<Arc<Global>>) -> Json<RootResponse> {
    let mut endpoints = vec![headlines::PATH];
    if global.sources.is_some() {
        endpoints.push(sources::PATH);
    }

    Json(RootResponse {
        message: "Headlines API",
        version: env!("CARGO_PKG_VERSION"),
        uptime: global.started_at.elapsed().as_secs(),
        endpoints,
    })
}
