//! Selection state for the four filter controls.
//!
//! The departamento and sex dropdowns mix an `"All"` entry into their option
//! lists; it is parsed into the tagged [`CategorySelection`] variant here so
//! that nothing downstream compares against the magic string. Day and
//! age-bracket selections stay plain value lists.
//!
//! The two kinds of dimension have different empty-selection semantics: an
//! empty category selection (with no `"All"` entry) matches nothing, while an
//! empty day or age list applies no restriction at all. The asymmetry is
//! inherited dashboard behavior and is preserved exactly.

/// The sentinel entry the dashboard mixes into the departamento and sex
/// option lists. Matching is exact (`"ALL"` and `"all"` are ordinary values).
pub const ALL_SENTINEL: &str = "All";

/// Selection state for a category dimension (departamento or victim sex).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    /// The `"All"` entry is selected: the dimension is unrestricted.
    All,
    /// Restrict to exactly these values. An empty list matches nothing.
    Only(Vec<String>),
}

impl CategorySelection {
    /// Builds the selection from the raw control values, collapsing any
    /// occurrence of the `"All"` sentinel into [`CategorySelection::All`].
    #[must_use]
    pub fn from_values(values: Vec<String>) -> Self {
        if values.iter().any(|v| v == ALL_SENTINEL) {
            Self::All
        } else {
            Self::Only(values)
        }
    }

    /// Returns `true` if the given value passes this dimension's filter.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(values) => values.iter().any(|v| v == value),
        }
    }

    /// Returns `true` if the `"All"` entry was selected.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Default for CategorySelection {
    /// An absent control value is an empty list, which for a category
    /// dimension matches nothing.
    fn default() -> Self {
        Self::Only(Vec::new())
    }
}

/// The current state of all four filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    /// Departamento selection (supports the `"All"` entry).
    pub departments: CategorySelection,
    /// Victim sex selection (supports the `"All"` entry).
    pub sexes: CategorySelection,
    /// Selected canonical day names; empty means no day restriction.
    pub days: Vec<String>,
    /// Selected age brackets; empty means no age restriction.
    pub age_brackets: Vec<String>,
}

impl FilterSelection {
    /// The dashboard's initial state: both category dimensions on `"All"`,
    /// no day or age toggles active — every record passes.
    #[must_use]
    pub const fn unfiltered() -> Self {
        Self {
            departments: CategorySelection::All,
            sexes: CategorySelection::All,
            days: Vec::new(),
            age_brackets: Vec::new(),
        }
    }
}
