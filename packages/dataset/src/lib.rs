#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory incident dataset: loading, selection state, and filtering.
//!
//! The record set is read once at startup ([`loader`]) into an immutable
//! [`IncidentSet`] that handlers share read-only behind an `Arc`; filtered
//! views ([`filter`]) are ephemeral `Vec`s of references recomputed per
//! request and discarded after rendering. Because nothing ever writes to the
//! set after load, concurrent sessions read it without locking.

pub mod filter;
pub mod loader;
pub mod selection;

use mapa_calor_incident_models::IncidentRecord;

/// Errors that can occur while loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// A required column is missing from the header row. This is a
    /// configuration-time assertion: the caller is expected to abort.
    #[error("required column {name:?} is missing from the dataset")]
    MissingColumn {
        /// Header name of the missing column.
        name: &'static str,
    },

    /// The file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV structure is malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// The fully loaded, immutable incident record set.
///
/// Constructed once by the loader (or directly from synthetic records in
/// tests) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentSet {
    records: Vec<IncidentRecord>,
}

impl IncidentSet {
    /// Wraps an already-built record list.
    #[must_use]
    pub const fn new(records: Vec<IncidentRecord>) -> Self {
        Self { records }
    }

    /// All retained records, in load order.
    #[must_use]
    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records were retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct departamento names, in first-appearance order (the order the
    /// dashboard lists them in).
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.department.as_str()))
    }

    /// Distinct victim sex values, in first-appearance order.
    #[must_use]
    pub fn sexes(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.sex.as_str()))
    }

    /// Distinct retained age brackets, in first-appearance order.
    #[must_use]
    pub fn age_brackets(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.age_bracket.as_str()))
    }
}

/// Collects distinct values preserving first-appearance order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapa_calor_incident_models::Weekday;

    fn record(department: &str, sex: &str, age: &str) -> IncidentRecord {
        IncidentRecord {
            latitude: 6.25,
            longitude: -75.56,
            department: department.to_string(),
            sex: sex.to_string(),
            day: Weekday::Lunes,
            age_bracket: age.to_string(),
        }
    }

    #[test]
    fn distinct_values_keep_first_appearance_order() {
        let set = IncidentSet::new(vec![
            record("Antioquia", "Hombre", "20 a 24"),
            record("Cundinamarca", "Mujer", "15 a 19"),
            record("Antioquia", "Hombre", "20 a 24"),
            record("Valle del Cauca", "Hombre", "25 a 29"),
        ]);

        assert_eq!(
            set.departments(),
            vec!["Antioquia", "Cundinamarca", "Valle del Cauca"]
        );
        assert_eq!(set.sexes(), vec!["Hombre", "Mujer"]);
        assert_eq!(set.age_brackets(), vec!["20 a 24", "15 a 19", "25 a 29"]);
    }

    #[test]
    fn len_and_emptiness() {
        let empty = IncidentSet::new(Vec::new());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());

        let set = IncidentSet::new(vec![record("Antioquia", "Hombre", "20 a 24")]);
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }
}
