use std::fmt;

use super::model::{Enrollment, Row};

/// Label that selects every student regardless of cohort.
pub const ALL_COHORTS: &str = "All";

// ---------------------------------------------------------------------------
// Cohort predicate
// ---------------------------------------------------------------------------

/// Which students a cohort listing selects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CohortFilter {
    /// Every row that is not an instructor or ghost.
    #[default]
    All,
    /// Rows whose fifth field equals the label exactly.
    Named(String),
}

impl CohortFilter {
    /// Whether a row passes the filter.
    ///
    /// `Named` compares the raw fifth field, so `Named("I")` selects
    /// instructors.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            CohortFilter::All => matches!(row.enrollment(), Enrollment::Cohort(_)),
            CohortFilter::Named(label) => row.cohort_or_flag == *label,
        }
    }
}

impl From<&str> for CohortFilter {
    fn from(label: &str) -> Self {
        if label == ALL_COHORTS {
            CohortFilter::All
        } else {
            CohortFilter::Named(label.to_string())
        }
    }
}

impl From<Option<&str>> for CohortFilter {
    fn from(label: Option<&str>) -> Self {
        match label {
            Some(label) => CohortFilter::from(label),
            None => CohortFilter::All,
        }
    }
}

impl fmt::Display for CohortFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CohortFilter::All => f.write_str(ALL_COHORTS),
            CohortFilter::Named(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(flag: &str) -> Row {
        Row {
            first_name: "Cho".into(),
            last_name: "Chang".into(),
            house: "Ravenclaw".into(),
            advisor: "Flitwick".into(),
            cohort_or_flag: flag.into(),
        }
    }

    #[test]
    fn all_excludes_instructors_and_ghosts() {
        let filter = CohortFilter::All;
        assert!(filter.matches(&row("Fall 2015")));
        assert!(filter.matches(&row("")));
        assert!(!filter.matches(&row("I")));
        assert!(!filter.matches(&row("G")));
    }

    #[test]
    fn named_requires_exact_label() {
        let filter = CohortFilter::from("Fall 2015");
        assert!(filter.matches(&row("Fall 2015")));
        assert!(!filter.matches(&row("fall 2015")));
        assert!(!filter.matches(&row("Winter 2016")));
    }

    #[test]
    fn all_label_parses_to_all() {
        assert_eq!(CohortFilter::from("All"), CohortFilter::All);
        assert_eq!(CohortFilter::from(None), CohortFilter::All);
        assert_eq!(
            CohortFilter::from(Some("Spring 2016")),
            CohortFilter::Named("Spring 2016".into())
        );
    }
}
