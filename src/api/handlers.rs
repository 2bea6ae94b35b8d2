//! HTTP handler functions for the check-in API.

use crate::api;
use crate::core::filter::ReportFilter;
use crate::server::AppState;
use crate::utils::time::{parse_date, parse_instant};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ApiHealth {
    healthy: bool,
    version: String,
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/action`
///
/// The action-tagged protocol entry point. Always HTTP 200; the outcome
/// travels in the body's `status` field.
pub async fn action(state: web::Data<AppState>, body: web::Json<api::ActionRequest>) -> HttpResponse {
    let store = state.store.lock().expect("store mutex poisoned");
    HttpResponse::Ok().json(api::dispatch(&store, &state.config, body.into_inner()))
}

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    pub search: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub sid: Option<String>,
}

/// `GET /api/report`
///
/// Stations plus check-ins for the dashboard and live-map polls.
/// Optional filters: `search`, `from`/`to` (YYYY-MM-DD), `sid`.
pub async fn report(state: web::Data<AppState>, params: web::Query<ReportParams>) -> HttpResponse {
    let filter = match build_filter(params.into_inner()) {
        Ok(f) => f,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
        }
    };

    let store = state.store.lock().expect("store mutex poisoned");
    match api::report(&store, &state.config, &filter) {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => {
            log::error!("Failed to build report: {e}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to build report" }))
        }
    }
}

fn build_filter(params: ReportParams) -> crate::errors::AppResult<ReportFilter> {
    Ok(ReportFilter {
        text: params.search.filter(|s| !s.trim().is_empty()),
        date_from: params.from.as_deref().map(parse_date).transpose()?,
        date_to: params.to.as_deref().map(parse_date).transpose()?,
        sid: params.sid.filter(|s| !s.trim().is_empty()),
    })
}

#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    pub lat: f64,
    pub lon: f64,
}

/// `GET /api/nearby`
///
/// Geofence check for the check-in form: which stations the device may
/// check in at from its current position.
pub async fn nearby(state: web::Data<AppState>, params: web::Query<NearbyParams>) -> HttpResponse {
    let position = crate::models::station::Position {
        lat: params.lat,
        lon: params.lon,
    };
    let store = state.store.lock().expect("store mutex poisoned");
    match api::nearby(&store, position) {
        Ok(payload) => HttpResponse::Ok().json(payload),
        Err(e) => {
            log::error!("Failed to run geofence check: {e}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to run geofence check" }))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    /// RFC 3339 test-clock instant; absent means the live clock.
    pub at: Option<String>,
}

/// `GET /api/status`
pub async fn status(state: web::Data<AppState>, params: web::Query<StatusParams>) -> HttpResponse {
    let at = match params.at.as_deref().map(parse_instant).transpose() {
        Ok(at) => at,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
        }
    };

    let store = state.store.lock().expect("store mutex poisoned");
    match api::station_status(&store, &state.config, at) {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            log::error!("Failed to compute status: {e}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to compute status" }))
        }
    }
}
