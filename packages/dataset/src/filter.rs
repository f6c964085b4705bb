//! In-memory filtering of the loaded record set and map-center selection.

use mapa_calor_incident_models::{COLOMBIA_CENTROID, IncidentRecord, LatLng};

use crate::IncidentSet;
use crate::selection::FilterSelection;

/// Returns the records matching every dimension of `selection`.
///
/// The two selection families behave differently when empty: an empty
/// department or sex selection matches no record at all, while an empty day
/// or age-bracket selection leaves that dimension unfiltered.
#[must_use]
pub fn filter_records<'a>(
    set: &'a IncidentSet,
    selection: &FilterSelection,
) -> Vec<&'a IncidentRecord> {
    set.records()
        .iter()
        .filter(|record| {
            selection.departments.matches(&record.department)
                && selection.sexes.matches(&record.sex)
                && matches_any(&selection.days, record.day.as_ref())
                && matches_any(&selection.age_brackets, &record.age_bracket)
        })
        .collect()
}

/// Computes the map center for a filtered view.
///
/// The fixed Colombia centroid is used when the department selection covers
/// the whole country or when the filtered set is empty. Otherwise the center
/// is the arithmetic mean of the filtered coordinates.
#[must_use]
pub fn map_center(selection: &FilterSelection, filtered: &[&IncidentRecord]) -> LatLng {
    if selection.departments.is_all() || filtered.is_empty() {
        return COLOMBIA_CENTROID;
    }

    #[allow(clippy::cast_precision_loss)]
    let count = filtered.len() as f64;
    let lat = filtered.iter().map(|r| r.latitude).sum::<f64>() / count;
    let lng = filtered.iter().map(|r| r.longitude).sum::<f64>() / count;
    LatLng::new(lat, lng)
}

/// Literal membership check used for the day and age-bracket dimensions.
/// An empty selection applies no filter.
fn matches_any(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

#[cfg(test)]
mod tests {
    use mapa_calor_incident_models::Weekday;

    use super::*;
    use crate::selection::CategorySelection;

    fn record(
        lat: f64,
        lng: f64,
        department: &str,
        sex: &str,
        day: Weekday,
        age: &str,
    ) -> IncidentRecord {
        IncidentRecord {
            latitude: lat,
            longitude: lng,
            department: department.to_string(),
            sex: sex.to_string(),
            day,
            age_bracket: age.to_string(),
        }
    }

    fn sample_set() -> IncidentSet {
        IncidentSet::new(vec![
            record(6.0, -75.0, "Antioquia", "Hombre", Weekday::Lunes, "20 a 24"),
            record(4.0, -74.0, "Cundinamarca", "Mujer", Weekday::Martes, "25 a 29"),
            record(10.0, -74.8, "Atlántico", "Hombre", Weekday::Miercoles, "30 a 34"),
            record(6.5, -75.5, "Antioquia", "Mujer", Weekday::Domingo, "15 a 19"),
        ])
    }

    #[test]
    fn unfiltered_selection_returns_everything_with_fixed_center() {
        let set = sample_set();
        let selection = FilterSelection::unfiltered();

        let filtered = filter_records(&set, &selection);
        assert_eq!(filtered.len(), 4);
        assert_eq!(map_center(&selection, &filtered), COLOMBIA_CENTROID);
    }

    #[test]
    fn department_subset_centers_on_its_mean() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.departments = CategorySelection::Only(vec!["Antioquia".to_string()]);

        let filtered = filter_records(&set, &selection);
        assert_eq!(filtered.len(), 2);

        let center = map_center(&selection, &filtered);
        assert!((center.lat - 6.25).abs() < 1e-9);
        assert!((center.lng - -75.25).abs() < 1e-9);
    }

    #[test]
    fn empty_department_selection_matches_nothing() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.departments = CategorySelection::Only(Vec::new());

        let filtered = filter_records(&set, &selection);
        assert!(filtered.is_empty());
        assert_eq!(map_center(&selection, &filtered), COLOMBIA_CENTROID);
    }

    #[test]
    fn empty_day_and_age_selections_apply_no_filter() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.days = Vec::new();
        selection.age_brackets = Vec::new();

        assert_eq!(filter_records(&set, &selection).len(), 4);
    }

    #[test]
    fn day_selection_uses_canonical_names() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.days = vec!["Miércoles".to_string()];

        let filtered = filter_records(&set, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].department, "Atlántico");
    }

    #[test]
    fn unknown_day_selection_matches_nothing() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.days = vec!["Feriado".to_string()];

        let filtered = filter_records(&set, &selection);
        assert!(filtered.is_empty());
        assert_eq!(map_center(&selection, &filtered), COLOMBIA_CENTROID);
    }

    #[test]
    fn sex_selection_narrows_records() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.sexes = CategorySelection::Only(vec!["Mujer".to_string()]);

        let filtered = filter_records(&set, &selection);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.sex == "Mujer"));
    }

    #[test]
    fn age_selection_narrows_records() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.age_brackets = vec!["15 a 19".to_string(), "20 a 24".to_string()];

        let filtered = filter_records(&set, &selection);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.departments = CategorySelection::Only(vec!["Antioquia".to_string()]);
        selection.sexes = CategorySelection::Only(vec!["Hombre".to_string()]);
        selection.days = vec!["Lunes".to_string()];

        let filtered = filter_records(&set, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].age_bracket, "20 a 24");
    }

    #[test]
    fn filtering_is_idempotent() {
        let set = sample_set();
        let mut selection = FilterSelection::unfiltered();
        selection.departments =
            CategorySelection::Only(vec!["Antioquia".to_string(), "Cundinamarca".to_string()]);

        let first = filter_records(&set, &selection);
        let narrowed = IncidentSet::new(first.iter().map(|r| (*r).clone()).collect());
        let second = filter_records(&narrowed, &selection);
        assert_eq!(first.len(), second.len());
        assert!(first.iter().zip(&second).all(|(a, b)| *a == *b));
    }

    #[test]
    fn single_record_center_is_its_location() {
        let set = IncidentSet::new(vec![record(
            6.25,
            -75.56,
            "Antioquia",
            "Hombre",
            Weekday::Lunes,
            "20 a 24",
        )]);
        let mut selection = FilterSelection::unfiltered();
        selection.departments = CategorySelection::Only(vec!["Antioquia".to_string()]);

        let filtered = filter_records(&set, &selection);
        let center = map_center(&selection, &filtered);
        assert!((center.lat - 6.25).abs() < f64::EPSILON);
        assert!((center.lng - -75.56).abs() < f64::EPSILON);
    }
}
