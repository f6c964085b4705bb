//! Dataset loading from the CSV export of the source spreadsheet.
//!
//! The loader enforces the fixed column contract, normalizes the
//! day-of-occurrence field onto the canonical weekday taxonomy, applies the
//! fixed age-bracket exclusions, projects to the six retained columns, and
//! silently drops any row with a null in one of them. Totals are logged once
//! after the pass; individual dropped rows are not surfaced.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use mapa_calor_incident_models::{IncidentRecord, Weekday, is_excluded_age_bracket};
use serde::Deserialize;

use crate::{DatasetError, IncidentSet};

/// Header names of the six retained columns. The coordinate pair comes
/// first: its absence is the classic misconfiguration and should be the
/// first error reported.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "LATITUD",
    "LONGITUD",
    "DEPARTAMENTO",
    "Sexo de la victima",
    "Dia del hecho",
    "Grupo de edad de la victima",
];

/// One raw row of the CSV export. Every retained column is optional at this
/// stage — null handling happens in [`RawRow::to_record`] — and columns not
/// named here are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "LATITUD")]
    latitude: Option<String>,
    #[serde(rename = "LONGITUD")]
    longitude: Option<String>,
    #[serde(rename = "DEPARTAMENTO")]
    department: Option<String>,
    #[serde(rename = "Sexo de la victima")]
    sex: Option<String>,
    #[serde(rename = "Dia del hecho")]
    day: Option<String>,
    #[serde(rename = "Grupo de edad de la victima")]
    age_bracket: Option<String>,
}

impl RawRow {
    /// Converts the raw row into a retained record.
    ///
    /// Returns `None` when any retained field is null: empty cells,
    /// unparseable or non-finite coordinates, and day values outside the
    /// normalization table all drop the row.
    fn to_record(&self) -> Option<IncidentRecord> {
        let (latitude, longitude) =
            parse_lat_lng(self.latitude.as_deref(), self.longitude.as_deref())?;
        let day = Weekday::normalize(self.day.as_deref()?)?;

        Some(IncidentRecord {
            latitude,
            longitude,
            department: self.department.clone()?,
            sex: self.sex.clone()?,
            day,
            age_bracket: self.age_bracket.clone()?,
        })
    }
}

/// Loads the dataset from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read, the CSV is
/// structurally malformed, or a required column is missing.
pub fn load_csv(path: &Path) -> Result<IncidentSet, DatasetError> {
    log::info!("Loading incident dataset from {}", path.display());
    let file = File::open(path)?;
    load_from_reader(file)
}

/// Loads the dataset from any CSV source (tests feed in-memory bytes).
///
/// # Errors
///
/// Returns [`DatasetError`] if the CSV is structurally malformed or a
/// required column is missing.
pub fn load_from_reader<R: Read>(reader: R) -> Result<IncidentSet, DatasetError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    ensure_required_columns(csv_reader.headers()?)?;

    let mut records = Vec::new();
    let mut dropped: u64 = 0;
    let mut excluded: u64 = 0;

    for result in csv_reader.deserialize() {
        let raw: RawRow = result?;

        // Age exclusion is applied before null handling, matching the
        // upstream cleanup order.
        if raw.age_bracket.as_deref().is_some_and(is_excluded_age_bracket) {
            excluded += 1;
            continue;
        }

        match raw.to_record() {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    log::info!(
        "Loaded {} incident records ({excluded} excluded by age bracket, {dropped} dropped for missing values)",
        records.len()
    );

    Ok(IncidentSet::new(records))
}

/// Fails fast if any retained column is absent from the header row.
fn ensure_required_columns(headers: &csv::StringRecord) -> Result<(), DatasetError> {
    for name in REQUIRED_COLUMNS.iter().copied() {
        if !headers.iter().any(|h| h == name) {
            return Err(DatasetError::MissingColumn { name });
        }
    }
    Ok(())
}

/// Parses the coordinate pair. Returns `None` if either value is missing,
/// unparseable, or non-finite.
fn parse_lat_lng(lat: Option<&str>, lng: Option<&str>) -> Option<(f64, f64)> {
    let latitude: f64 = lat?.trim().parse().ok()?;
    let longitude: f64 = lng?.trim().parse().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some((latitude, longitude))
}
