//! aqproxy-server
//!
//! Axum routes over an [`AqProxy`]:
//!
//! - `GET /api/aqi/window`: hourly window fan-out and merge.
//! - `GET /api/aqi/pollutant/{item}?at=`: first record for one pollutant.
//! - `GET /api/aqi/area/{area}?at=`: every record for one air-quality area.
//! - `GET /api/aqi/snapshot?at=`: every record for one instant.
//! - `GET /healthz`: liveness.
//!
//! Every response is JSON with a `status` tag; see [`aqproxy::response`].
#![warn(missing_docs)]

/// Command-line and environment configuration.
pub mod cli;

use std::sync::Arc;

use aqproxy::AqProxy;
use aqproxy::response::ApiResponse;
use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde::Deserialize;
use serde_json::Value;

type Reply = (StatusCode, Json<Value>);

#[derive(Debug, Default, Deserialize)]
struct AtParams {
    at: Option<String>,
}

fn reply(resp: ApiResponse) -> Reply {
    let status = StatusCode::from_u16(resp.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), body = %resp.body, "request failed");
    }
    (status, Json(resp.body))
}

fn label(what: &str, at: Option<&str>) -> String {
    match at {
        Some(at) => format!("{what} at {at}"),
        None => format!("{what} at the reference instant"),
    }
}

#[tracing::instrument(name = "aqproxy_server::window", skip(proxy))]
async fn window(State(proxy): State<Arc<AqProxy>>) -> Reply {
    reply(ApiResponse::from_result(proxy.batch().await, |r| {
        ApiResponse::batch(&r)
    }))
}

#[tracing::instrument(name = "aqproxy_server::pollutant", skip(proxy))]
async fn pollutant(
    State(proxy): State<Arc<AqProxy>>,
    Path(item): Path<String>,
    Query(params): Query<AtParams>,
) -> Reply {
    let at = params.at.as_deref();
    let what = label(&format!("pollutant '{item}'"), at);
    reply(ApiResponse::from_result(
        proxy.pollutant(&item, at).await,
        |l| ApiResponse::record(l, &what),
    ))
}

#[tracing::instrument(name = "aqproxy_server::area", skip(proxy))]
async fn area(
    State(proxy): State<Arc<AqProxy>>,
    Path(area): Path<String>,
    Query(params): Query<AtParams>,
) -> Reply {
    let at = params.at.as_deref();
    let what = label(&format!("area '{area}'"), at);
    reply(ApiResponse::from_result(proxy.area(&area, at).await, |l| {
        ApiResponse::records(l, &what)
    }))
}

#[tracing::instrument(name = "aqproxy_server::snapshot", skip(proxy))]
async fn snapshot(State(proxy): State<Arc<AqProxy>>, Query(params): Query<AtParams>) -> Reply {
    reply(ApiResponse::from_result(
        proxy.snapshot(params.at.as_deref()).await,
        ApiResponse::snapshot,
    ))
}

async fn healthz() -> Reply {
    reply(ApiResponse::health())
}

/// Build the router. The proxy is shared read-only by every handler.
pub fn app(proxy: Arc<AqProxy>) -> Router {
    Router::new()
        .route("/api/aqi/window", get(window))
        .route("/api/aqi/pollutant/{item}", get(pollutant))
        .route("/api/aqi/area/{area}", get(area))
        .route("/api/aqi/snapshot", get(snapshot))
        .route("/healthz", get(healthz))
        .with_state(proxy)
}
