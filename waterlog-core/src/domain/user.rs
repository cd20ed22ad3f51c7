//! User domain model

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// A tracked consumer with a display name and a history of water
/// consumption measurements in liters.
///
/// Records are append-only within a session and keep insertion order,
/// which reflects chronological entry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub records: Vec<f64>,
}

impl User {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Parse and append a single consumption record (in liters).
    ///
    /// The raw value must parse as a finite, non-negative number.
    /// On rejection the record list is untouched. Returns the parsed
    /// value on success.
    pub fn add_record(&mut self, raw_amount: &str) -> Result<f64> {
        let value = parse_amount(raw_amount).map_err(|e| {
            Error::validation(format!(
                "Failed to add record for user {}: {}",
                self.user_id, e
            ))
        })?;
        self.records.push(value);
        Ok(value)
    }

    /// Arithmetic mean of all records, or 0 when there are none.
    pub fn average_consumption(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.records.iter().sum::<f64>() / self.records.len() as f64
    }
}

/// Parse a raw consumption amount into a validated non-negative value.
///
/// Total function from string to either a value or a description of why
/// it was rejected; no panics, no partial coercion.
fn parse_amount(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw.trim()))?;
    if !value.is_finite() {
        return Err(format!("'{}' is not a finite amount", raw.trim()));
    }
    if value < 0.0 {
        return Err("consumption amount cannot be negative".to_string());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_record_appends_parsed_value() {
        let mut user = User::new("u1", "Alice");
        assert_eq!(user.add_record("1.5").unwrap(), 1.5);
        assert_eq!(user.add_record(" 2.0 ").unwrap(), 2.0);
        assert_eq!(user.records, vec![1.5, 2.0]);
    }

    #[test]
    fn test_add_record_rejects_negative() {
        let mut user = User::new("u1", "Alice");
        let err = user.add_record("-3").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(err.to_string().contains("u1"));
        assert!(user.records.is_empty());
        assert_eq!(user.average_consumption(), 0.0);
    }

    #[test]
    fn test_add_record_rejects_non_numeric() {
        let mut user = User::new("u1", "Alice");
        assert!(matches!(
            user.add_record("two liters"),
            Err(Error::Validation(_))
        ));
        assert!(user.records.is_empty());
    }

    #[test]
    fn test_add_record_rejects_non_finite() {
        let mut user = User::new("u1", "Alice");
        assert!(user.add_record("NaN").is_err());
        assert!(user.add_record("inf").is_err());
        assert!(user.records.is_empty());
    }

    #[test]
    fn test_add_record_accepts_zero() {
        let mut user = User::new("u1", "Alice");
        assert_eq!(user.add_record("0").unwrap(), 0.0);
        assert_eq!(user.records, vec![0.0]);
    }

    #[test]
    fn test_average_consumption() {
        let mut user = User::new("u1", "Alice");
        user.add_record("1.5").unwrap();
        user.add_record("2.0").unwrap();
        assert_eq!(user.average_consumption(), 1.75);
    }

    #[test]
    fn test_average_of_no_records_is_zero() {
        let user = User::new("u1", "Alice");
        assert_eq!(user.average_consumption(), 0.0);
    }
}
