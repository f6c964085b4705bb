#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Canonical incident domain types.
//!
//! This crate defines the shared vocabulary of the dashboard: the retained
//! incident record shape, the canonical Spanish weekday taxonomy (including
//! normalization of the spelling/case variants found in the raw data), the
//! fixed set of age brackets excluded at load time, and the geographic
//! primitives used for map centering.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Day of occurrence, restricted to the 7 canonical accented Spanish
/// weekday names.
///
/// The derived `Ord` follows declaration order, which is the canonical
/// Spanish calendar order (Lunes first, Domingo last). Display, serde, and
/// `AsRef<str>` all use the accented canonical spelling; parsing additionally
/// accepts the known unaccented variants so that a capitalized raw value maps
/// straight onto its canonical day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Weekday {
    /// Monday.
    Lunes,
    /// Tuesday.
    Martes,
    /// Wednesday.
    #[serde(rename = "Miércoles")]
    #[strum(to_string = "Miércoles", serialize = "Miercoles")]
    Miercoles,
    /// Thursday.
    Jueves,
    /// Friday.
    Viernes,
    /// Saturday.
    #[serde(rename = "Sábado")]
    #[strum(to_string = "Sábado", serialize = "Sabado")]
    Sabado,
    /// Sunday.
    Domingo,
}

impl Weekday {
    /// Returns all days in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Lunes,
            Self::Martes,
            Self::Miercoles,
            Self::Jueves,
            Self::Viernes,
            Self::Sabado,
            Self::Domingo,
        ]
    }

    /// Normalizes a raw day-of-occurrence value into its canonical day.
    ///
    /// Mirrors the source data cleanup: the first letter is uppercased, the
    /// rest lowercased, and the result matched against the canonical names
    /// plus the known unaccented misspellings (`"miercoles"`, `"MARTES"`, and
    /// `"Sabado"` all normalize; `"Xunes"` does not). Returns `None` for
    /// values outside the substitution table — the loader treats those rows
    /// as null and drops them, keeping the canonical 7-value invariant.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        capitalize(raw).parse().ok()
    }
}

/// Uppercases the first character and lowercases the rest (Unicode-aware).
fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Age brackets removed from the dataset at load time (victims under 15).
pub const EXCLUDED_AGE_BRACKETS: &[&str] = &["Menor de 1 año", "1 a 4", "05 a 09", "10 a 14"];

/// Returns `true` if the given age bracket is in the fixed exclusion set.
#[must_use]
pub fn is_excluded_age_bracket(bracket: &str) -> bool {
    EXCLUDED_AGE_BRACKETS.iter().any(|b| *b == bracket)
}

/// A geographic point in WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new point from the given coordinates.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Fixed geographic centroid of Colombia, used as the map center whenever no
/// specific departamento selection narrows the view (and as the fallback when
/// a filtered set is empty).
pub const COLOMBIA_CENTROID: LatLng = LatLng::new(4.5709, -74.2973);

/// One retained incident record.
///
/// Built once at load time and immutable afterwards. Every field is
/// guaranteed non-null: rows with a missing value in any of the six retained
/// columns never make it into the record set.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentRecord {
    /// Latitude (WGS84), always finite.
    pub latitude: f64,
    /// Longitude (WGS84), always finite.
    pub longitude: f64,
    /// Departamento name, as found in the data.
    pub department: String,
    /// Victim sex, as found in the data.
    pub sex: String,
    /// Day of occurrence, normalized to the canonical taxonomy.
    pub day: Weekday,
    /// Victim age bracket, never one of [`EXCLUDED_AGE_BRACKETS`].
    pub age_bracket: String,
}

impl IncidentRecord {
    /// Returns the record's location as a point.
    #[must_use]
    pub const fn location(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}
