// Query layer: pure filtering over the in-memory roster

use crate::models::{Employee, Gender};

/// Filter settings for the roster view: three independent, all-optional
/// predicates combined by AND. Transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Case-insensitive substring match on the full name. Empty matches all.
    pub search: String,
    /// Exact gender match when set.
    pub gender: Option<Gender>,
    /// Active-flag match when set.
    pub status: Option<StatusFilter>,
}

impl Filters {
    /// True when no predicate is set, so `apply` returns the input as-is.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.gender.is_none() && self.status.is_none()
    }

    /// Conjunction of the set predicates against one record.
    pub fn matches(&self, employee: &Employee) -> bool {
        if !self.search.is_empty()
            && !employee
                .full_name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        if let Some(gender) = self.gender {
            if employee.gender != gender {
                return false;
            }
        }
        if let Some(status) = self.status {
            if employee.active != status.wants_active() {
                return false;
            }
        }
        true
    }
}

/// Employment-status predicate values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Active,
    Inactive,
}

impl StatusFilter {
    /// The `active` flag value this predicate keeps.
    pub fn wants_active(self) -> bool {
        matches!(self, StatusFilter::Active)
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::Active => write!(f, "active"),
            StatusFilter::Inactive => write!(f, "inactive"),
        }
    }
}

/// Linear scan keeping the records that satisfy every set predicate,
/// preserving input order. No pagination, no sorting beyond input order.
pub fn apply(records: &[Employee], filters: &Filters) -> Vec<Employee> {
    records
        .iter()
        .filter(|e| filters.matches(e))
        .cloned()
        .collect()
}

/// Roster headline totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

/// Count the collection the way the dashboard header does: inactive is
/// whatever is not active.
pub fn tally(records: &[Employee]) -> Tally {
    let active = records.iter().filter(|e| e.active).count();
    Tally {
        total: records.len(),
        active,
        inactive: records.len() - active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(id: &str, name: &str, gender: Gender, active: bool) -> Employee {
        Employee {
            id: id.to_string(),
            full_name: name.to_string(),
            gender,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            state: "Goa".to_string(),
            active,
            profile_image: "x".to_string(),
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            employee("1", "Ann", Gender::Female, true),
            employee("2", "Anil", Gender::Male, false),
            employee("3", "Ben", Gender::Male, true),
        ]
    }

    #[test]
    fn test_empty_filters_are_identity() {
        let records = roster();
        let filters = Filters::default();

        assert!(filters.is_empty());
        assert_eq!(apply(&records, &filters), records);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let records = roster();
        let filters = Filters {
            search: "an".to_string(),
            ..Filters::default()
        };

        let view = apply(&records, &filters);
        let names: Vec<&str> = view.iter().map(|e| e.full_name.as_str()).collect();
        // "Ann" and "Anil" match, in original relative order; "Ben" does not
        assert_eq!(names, vec!["Ann", "Anil"]);

        let upper = Filters {
            search: "AN".to_string(),
            ..Filters::default()
        };
        assert_eq!(apply(&records, &upper), view);
    }

    #[test]
    fn test_search_matches_mid_name() {
        let records = roster();
        let filters = Filters {
            search: "en".to_string(),
            ..Filters::default()
        };

        let view = apply(&records, &filters);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].full_name, "Ben");
    }

    #[test]
    fn test_gender_filter_is_exact() {
        let records = roster();
        let filters = Filters {
            gender: Some(Gender::Male),
            ..Filters::default()
        };

        let view = apply(&records, &filters);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|e| e.gender == Gender::Male));

        let other = Filters {
            gender: Some(Gender::Other),
            ..Filters::default()
        };
        assert!(apply(&records, &other).is_empty());
    }

    #[test]
    fn test_status_filter() {
        let records = roster();

        let active = Filters {
            status: Some(StatusFilter::Active),
            ..Filters::default()
        };
        let view = apply(&records, &active);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|e| e.active));

        let inactive = Filters {
            status: Some(StatusFilter::Inactive),
            ..Filters::default()
        };
        let view = apply(&records, &inactive);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].full_name, "Anil");
    }

    #[test]
    fn test_conjunction_keeps_subset_satisfying_all_predicates() {
        let records = roster();
        let filters = Filters {
            search: "an".to_string(),
            gender: Some(Gender::Male),
            status: Some(StatusFilter::Inactive),
        };

        let view = apply(&records, &filters);
        // Subset of the input...
        assert!(view.iter().all(|e| records.contains(e)));
        // ...and every element satisfies every set predicate
        assert!(view.iter().all(|e| filters.matches(e)));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].full_name, "Anil");
    }

    #[test]
    fn test_conjunction_can_be_empty() {
        let records = roster();
        let filters = Filters {
            search: "ben".to_string(),
            gender: Some(Gender::Female),
            ..Filters::default()
        };

        assert!(apply(&records, &filters).is_empty());
    }

    #[test]
    fn test_apply_on_empty_roster() {
        let filters = Filters {
            search: "an".to_string(),
            ..Filters::default()
        };
        assert!(apply(&[], &filters).is_empty());
    }

    #[test]
    fn test_status_filter_wants_active() {
        assert!(StatusFilter::Active.wants_active());
        assert!(!StatusFilter::Inactive.wants_active());
        assert_eq!(StatusFilter::Active.to_string(), "active");
        assert_eq!(StatusFilter::Inactive.to_string(), "inactive");
    }

    #[test]
    fn test_tally() {
        let totals = tally(&roster());
        assert_eq!(totals.total, 3);
        assert_eq!(totals.active, 2);
        assert_eq!(totals.inactive, 1);

        let empty = tally(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.active, 0);
        assert_eq!(empty.inactive, 0);
    }
}
