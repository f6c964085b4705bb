//! HTTP handler functions for the dashboard API.

use actix_web::{HttpResponse, web};
use mapa_calor_dataset::filter::{filter_records, map_center};
use mapa_calor_dataset::selection::{CategorySelection, FilterSelection};
use mapa_calor_incident_models::{LatLng, Weekday};
use mapa_calor_map::{HeatMapOptions, INITIAL_ZOOM, render_map};
use mapa_calor_server_models::{ApiFilterOptions, ApiHealth, MapQueryParams};

use crate::AppState;
use crate::html::DASHBOARD_HTML;

/// `GET /`
pub async fn dashboard() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DASHBOARD_HTML)
}

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/filters`
///
/// Returns the option lists for the four filter controls.
pub async fn filters(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiFilterOptions {
        departments: state.dataset.departments(),
        sexes: state.dataset.sexes(),
        days: Weekday::all().to_vec(),
        age_brackets: state.dataset.age_brackets(),
    })
}

/// `GET /api/map`
///
/// Applies the filter selection from the query parameters and renders the
/// heat-map document for the matching records.
pub async fn map(state: web::Data<AppState>, params: web::Query<MapQueryParams>) -> HttpResponse {
    let selection = FilterSelection {
        departments: CategorySelection::from_values(parse_list(params.departments.as_deref())),
        sexes: CategorySelection::from_values(parse_list(params.sexes.as_deref())),
        days: parse_list(params.days.as_deref()),
        age_brackets: parse_list(params.ages.as_deref()),
    };

    let filtered = filter_records(&state.dataset, &selection);
    let center = map_center(&selection, &filtered);
    let points: Vec<LatLng> = filtered.iter().map(|r| r.location()).collect();

    log::debug!(
        "Rendering heat map for {} of {} records",
        filtered.len(),
        state.dataset.len()
    );

    match render_map(center, INITIAL_ZOOM, &points, &HeatMapOptions::default()) {
        Ok(document) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(document),
        Err(e) => {
            log::error!("Failed to render heat map: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to render heat map"
            }))
        }
    }
}

/// Splits a comma-separated query value into its non-empty items. An absent
/// parameter is an empty selection.
fn parse_list(s: Option<&str>) -> Vec<String> {
    s.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect()
    })
    .unwrap_or_default()
}
