// LogSift - core/filter.rs
//
// Filter criteria for parsed log records.
// All active criteria are AND-combined.
// Core layer: pure logic, no I/O dependencies.

use crate::core::model::LogRecord;

/// Active filter criteria. All fields are AND-combined when applied.
///
/// Criteria arrive as raw CLI text and stay as text. The level
/// criterion is uppercased but deliberately not validated against the
/// recognised levels: `--level debug` runs cleanly and matches nothing,
/// rather than failing at argument parsing.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Level to match, already uppercased (None = all levels).
    pub level: Option<String>,

    /// Exact service name, case-sensitive (None = all services).
    pub service: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw CLI values, normalising as we go.
    ///
    /// An empty string is treated the same as an absent flag, so
    /// `--level ""` disables the level criterion instead of matching
    /// nothing. The level is uppercased to mirror how record levels
    /// are normalised; the service is compared exactly as given.
    pub fn from_args(level: Option<String>, service: Option<String>) -> Self {
        Self {
            level: level
                .filter(|value| !value.is_empty())
                .map(|value| value.to_uppercase()),
            service: service.filter(|value| !value.is_empty()),
        }
    }

    /// Returns true if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.service.is_none()
    }

    /// Check if a single record matches all active criteria.
    pub fn matches(&self, record: &LogRecord) -> bool {
        // Level criterion (compared against the canonical uppercase label)
        if let Some(ref level) = self.level {
            if record.level.label() != level {
                return false;
            }
        }

        // Service criterion (exact, case-sensitive)
        if let Some(ref service) = self.service {
            if record.service != *service {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Level;

    fn make_record(level: Level, service: &str) -> LogRecord {
        LogRecord {
            timestamp: "2024-01-15 14:30:22".to_string(),
            level,
            service: service.to_string(),
            message: "something happened".to_string(),
        }
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&make_record(Level::Info, "auth")));
        assert!(criteria.matches(&make_record(Level::Error, "db")));
    }

    #[test]
    fn test_level_criterion_is_uppercased() {
        let criteria = FilterCriteria::from_args(Some("error".to_string()), None);
        assert_eq!(criteria.level.as_deref(), Some("ERROR"));
        assert!(criteria.matches(&make_record(Level::Error, "auth")));
        assert!(!criteria.matches(&make_record(Level::Info, "auth")));
    }

    #[test]
    fn test_unrecognised_level_matches_nothing() {
        // Not rejected at construction; it simply never matches a record.
        let criteria = FilterCriteria::from_args(Some("debug".to_string()), None);
        assert!(!criteria.is_empty());
        assert!(!criteria.matches(&make_record(Level::Info, "auth")));
        assert!(!criteria.matches(&make_record(Level::Warn, "auth")));
        assert!(!criteria.matches(&make_record(Level::Error, "auth")));
    }

    #[test]
    fn test_service_criterion_is_case_sensitive() {
        let criteria = FilterCriteria::from_args(None, Some("Auth".to_string()));
        assert!(criteria.matches(&make_record(Level::Info, "Auth")));
        assert!(!criteria.matches(&make_record(Level::Info, "auth")));
    }

    #[test]
    fn test_empty_strings_disable_criteria() {
        let criteria = FilterCriteria::from_args(Some(String::new()), Some(String::new()));
        assert!(criteria.is_empty());
        assert!(criteria.matches(&make_record(Level::Warn, "db")));
    }

    #[test]
    fn test_combined_criteria_are_and_combined() {
        let criteria =
            FilterCriteria::from_args(Some("warn".to_string()), Some("api".to_string()));
        assert!(criteria.matches(&make_record(Level::Warn, "api")));
        assert!(!criteria.matches(&make_record(Level::Warn, "db")));
        assert!(!criteria.matches(&make_record(Level::Info, "api")));
    }
}
