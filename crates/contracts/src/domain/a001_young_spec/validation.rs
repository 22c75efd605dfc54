//! Client-side validation of a record before create/update.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::aggregate::*;

pub const REQUIRED_MESSAGE: &str = "Обязательное поле";
pub const DATE_FORMAT_MESSAGE: &str = "Формат даты должен быть YYYY-MM-DD";

// ASCII digits only, no calendar check: "2024-99-99" is accepted.
static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date regex is valid"));

/// True iff the value is non-empty
pub fn required_present(value: &str) -> bool {
    !value.is_empty()
}

/// True iff the text is exactly `YYYY-MM-DD`
pub fn is_valid_date(text: &str) -> bool {
    DATE_RE.is_match(text)
}

/// Per-field validation messages. An empty message means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// The record is invalid iff any message is non-empty
    pub fn has_errors(&self) -> bool {
        self.0.values().any(|m| !m.is_empty())
    }

    /// Non-empty message for a field, if any
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    /// Drop the message of one field (input received focus)
    pub fn clear_field(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Validate the five checked fields of a record.
///
/// `update_date` is checked against `rep_beg_period`'s value and
/// `rep_end_period` is not checked at all.
pub fn validate_record(record: &YoungSpecRecord) -> ValidationErrors {
    let required = |value: &str| {
        if required_present(value) {
            String::new()
        } else {
            REQUIRED_MESSAGE.to_string()
        }
    };
    let date = |value: &str| {
        if is_valid_date(value) {
            String::new()
        } else {
            DATE_FORMAT_MESSAGE.to_string()
        }
    };

    let mut errors = ValidationErrors::new();
    errors.insert(FIELD_INSERT_USER, required(&record.insert_user));
    errors.insert(FIELD_ORG_EMPLOYEE, required(&record.org_employee));
    errors.insert(FIELD_REP_BEG_PERIOD, date(&record.rep_beg_period));
    errors.insert(FIELD_UPDATE_DATE, date(&record.rep_beg_period));
    errors.insert(FIELD_UPDATE_USER, required(&record.update_user));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> YoungSpecRecord {
        YoungSpecRecord {
            insert_user: "ivanov".into(),
            org_employee: "x".into(),
            rep_beg_period: "2024-01-01".into(),
            update_user: "y".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_present() {
        assert!(required_present("a"));
        assert!(required_present(" "));
        assert!(!required_present(""));
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date("2024-01-15"));
        assert!(is_valid_date("2024-99-99"));
        assert!(!is_valid_date("2024-1-15"));
        assert!(!is_valid_date("15-01-2024"));
        assert!(!is_valid_date("2024-01-15 "));
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("２０２４-01-15"));
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        let errors = validate_record(&valid());
        assert_eq!(errors.len(), 5);
        assert!(!errors.has_errors());
        assert!(errors.iter().all(|(_, m)| m.is_empty()));
    }

    #[test]
    fn test_single_missing_field() {
        let record = YoungSpecRecord {
            insert_user: String::new(),
            ..valid()
        };
        let errors = validate_record(&record);
        let messages: Vec<_> = errors.iter().filter(|(_, m)| !m.is_empty()).collect();
        assert_eq!(messages, vec![(FIELD_INSERT_USER, REQUIRED_MESSAGE)]);
    }

    #[test]
    fn test_update_date_follows_start_period() {
        let record = YoungSpecRecord {
            rep_beg_period: "01.01.2024".into(),
            update_date: "2024-01-01".into(),
            rep_end_period: "garbage".into(),
            ..valid()
        };
        let errors = validate_record(&record);
        assert_eq!(errors.message_for(FIELD_REP_BEG_PERIOD), Some(DATE_FORMAT_MESSAGE));
        assert_eq!(errors.message_for(FIELD_UPDATE_DATE), Some(DATE_FORMAT_MESSAGE));
        assert_eq!(errors.message_for(FIELD_REP_END_PERIOD), None);

        let record = YoungSpecRecord {
            update_date: "garbage".into(),
            ..valid()
        };
        assert!(!validate_record(&record).has_errors());
    }

    #[test]
    fn test_clear_field() {
        let mut errors = validate_record(&YoungSpecRecord::default());
        assert!(errors.has_errors());
        errors.clear_field(FIELD_INSERT_USER);
        assert_eq!(errors.message_for(FIELD_INSERT_USER), None);
        assert_eq!(errors.message_for(FIELD_UPDATE_USER), Some(REQUIRED_MESSAGE));
    }
}
