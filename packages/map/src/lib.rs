#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Heat-map document rendering.
//!
//! Produces a self-contained Leaflet HTML document: the page pulls Leaflet
//! 1.9.4 and the heat-layer plugin from CDNs, draws OpenStreetMap tiles, and
//! feeds the filtered incident coordinates into `L.heatLayer`. The dashboard
//! serves the document into its map iframe, so no further assets are needed.

use mapa_calor_incident_models::LatLng;
use thiserror::Error;

/// Error while rendering a heat-map document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Point serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Initial zoom level of a freshly rendered map.
pub const INITIAL_ZOOM: u8 = 6;

/// Intensity color stops of the heat layer, from coolest to hottest.
pub const HEAT_GRADIENT: &[(f64, &str)] = &[
    (0.0, "blue"),
    (0.4, "lime"),
    (0.6, "yellow"),
    (0.8, "orange"),
    (1.0, "red"),
];

/// Tunable parameters of the heat layer.
#[derive(Debug, Clone)]
pub struct HeatMapOptions {
    /// Radius of each point's influence, in pixels.
    pub radius: u32,
    /// Blur applied to the layer, in pixels.
    pub blur: u32,
    /// Zoom level at which a point reaches maximum intensity.
    pub max_zoom: u8,
    /// Intensity color stops.
    pub gradient: &'static [(f64, &'static str)],
}

impl Default for HeatMapOptions {
    fn default() -> Self {
        Self {
            radius: 15,
            blur: 10,
            max_zoom: 12,
            gradient: HEAT_GRADIENT,
        }
    }
}

/// Renders a standalone Leaflet heat-map document for the given points.
///
/// # Errors
///
/// Returns [`RenderError`] if the point array cannot be serialized.
pub fn render_map(
    center: LatLng,
    zoom: u8,
    points: &[LatLng],
    options: &HeatMapOptions,
) -> Result<String, RenderError> {
    let coords: Vec<[f64; 2]> = points.iter().map(|p| [p.lat, p.lng]).collect();
    let points_json = serde_json::to_string(&coords)?;

    Ok(format!(
        r#"<!doctype html>
<html lang="es">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mapa de calor</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>
  <script src="https://unpkg.com/leaflet.heat@0.2.0/dist/leaflet-heat.js"></script>
  <style>
    html, body {{ height: 100%; margin: 0; }}
    #map {{ height: 100%; width: 100%; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    const map = L.map('map', {{center: [{lat}, {lng}], zoom: {zoom}}});
    L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      maxZoom: 19,
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
    L.heatLayer({points_json}, {{
      radius: {radius},
      blur: {blur},
      maxZoom: {max_zoom},
      gradient: {gradient}
    }}).addTo(map);
  </script>
</body>
</html>
"#,
        lat = center.lat,
        lng = center.lng,
        radius = options.radius,
        blur = options.blur,
        max_zoom = options.max_zoom,
        gradient = gradient_json(options.gradient),
    ))
}

/// Formats the gradient as a JS object literal. Stop values become the keys,
/// which is the shape `L.heatLayer` expects.
fn gradient_json(gradient: &[(f64, &str)]) -> String {
    let stops: Vec<String> = gradient
        .iter()
        .map(|(stop, color)| format!("\"{stop}\":\"{color}\""))
        .collect();
    format!("{{{}}}", stops.join(","))
}
