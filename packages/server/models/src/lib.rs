#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the dashboard server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the dataset types so the API contract can evolve independently of
//! the in-memory record shape.

use mapa_calor_incident_models::Weekday;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Option lists for the four dashboard filter controls.
///
/// The department, sex, and age-bracket lists hold the distinct values
/// present in the loaded dataset, in first-appearance order. The day list is
/// always the 7 canonical days in calendar order regardless of the data. The
/// page adds its own "All" entry to the two select controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFilterOptions {
    /// Departamento options.
    pub departments: Vec<String>,
    /// Victim sex options.
    pub sexes: Vec<String>,
    /// Day-of-occurrence options, in calendar order.
    pub days: Vec<Weekday>,
    /// Victim age bracket options.
    pub age_brackets: Vec<String>,
}

/// Query parameters for the map endpoint.
///
/// Each dimension arrives as a comma-separated list. An absent parameter is
/// an empty selection for that dimension: the department and sex dimensions
/// then match nothing (unless the list carries the `All` sentinel), while
/// empty day and age selections leave their dimension unfiltered.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// Comma-separated departamento names; `All` selects every department.
    pub departments: Option<String>,
    /// Comma-separated sex values; `All` selects every sex.
    pub sexes: Option<String>,
    /// Comma-separated canonical day names.
    pub days: Option<String>,
    /// Comma-separated age bracket names.
    pub ages: Option<String>,
}
