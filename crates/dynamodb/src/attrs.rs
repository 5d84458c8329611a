//! Typed accessors and builders for DynamoDB attribute maps.
//!
//! Pure functions, testable without DynamoDB access. Numeric attributes
//! hold invariant base-10 text (`AttributeValue::N`) so currency values
//! round-trip without precision loss; booleans are native; string lists
//! are unordered string sets.
//!
//! A required attribute that is missing or unparseable is a decode-contract
//! violation (`RepositoryError::InvalidData`): the write path always
//! populates required fields, so a failure here means a corrupt record.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use spazalink_core::storage::RepositoryError;

/// An attribute map as returned by the SDK.
pub type Item = HashMap<String, AttributeValue>;

fn missing(key: &str) -> RepositoryError {
    RepositoryError::InvalidData(format!("Missing or invalid field: {}", key))
}

/// Get a required string attribute.
pub fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| missing(key))
}

/// Get an optional string attribute. Missing means `None`, never an error.
pub fn get_optional_string(item: &Item, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

/// Get a required UUID attribute.
pub fn get_uuid(item: &Item, key: &str) -> Result<Uuid, RepositoryError> {
    let s = get_string(item, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

/// Get a required boolean attribute.
pub fn get_bool(item: &Item, key: &str) -> Result<bool, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| missing(key))
}

/// Get a required datetime attribute (RFC 3339 text).
pub fn get_datetime(item: &Item, key: &str) -> Result<DateTime<Utc>, RepositoryError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime {}: {}", key, e)))
}

/// Get a required decimal from a numeric attribute.
pub fn get_decimal(item: &Item, key: &str) -> Result<Decimal, RepositoryError> {
    let s = get_number(item, key)?;
    s.parse::<Decimal>()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid decimal {}: {}", key, e)))
}

/// Get a required unsigned integer from a numeric attribute.
pub fn get_u32(item: &Item, key: &str) -> Result<u32, RepositoryError> {
    let s = get_number(item, key)?;
    s.parse::<u32>()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid integer {}: {}", key, e)))
}

/// Get a required signed integer from a numeric attribute.
pub fn get_i32(item: &Item, key: &str) -> Result<i32, RepositoryError> {
    let s = get_number(item, key)?;
    s.parse::<i32>()
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid integer {}: {}", key, e)))
}

fn get_number(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| missing(key))
}

/// Get a string-set attribute. A missing key yields an empty list: string
/// sets cannot be empty in the store, so empty lists are simply not
/// written. Ordering and duplicates are not preserved by the store.
pub fn get_string_set(item: &Item, key: &str) -> Vec<String> {
    item.get(key)
        .and_then(|v| v.as_ss().ok())
        .cloned()
        .unwrap_or_default()
}

/// Build a numeric attribute from anything that renders as base-10 text.
pub fn num(value: impl ToString) -> AttributeValue {
    AttributeValue::N(value.to_string())
}

/// Insert a string-set attribute, skipping the insert when the list is
/// empty (DynamoDB rejects empty string sets).
pub fn insert_string_set(item: &mut Item, key: &str, values: &[String]) {
    if !values.is_empty() {
        item.insert(key.to_string(), AttributeValue::Ss(values.to_vec()));
    }
}

/// Insert an optional string attribute, skipping empty and absent values.
pub fn insert_optional_string(item: &mut Item, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        item.insert(key.to_string(), AttributeValue::S(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_string_missing_field() {
        let item = Item::new();
        assert!(get_string(&item, "missing").is_err());
    }

    #[test]
    fn test_get_string_wrong_kind_is_invalid_data() {
        let mut item = Item::new();
        item.insert("count".to_string(), num(3));

        let err = get_string(&item, "count").unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_get_optional_string() {
        let mut item = Item::new();
        assert!(get_optional_string(&item, "missing").is_none());

        item.insert(
            "present".to_string(),
            AttributeValue::S("value".to_string()),
        );
        assert_eq!(
            get_optional_string(&item, "present"),
            Some("value".to_string())
        );
    }

    #[test]
    fn test_decimal_round_trip_is_exact() {
        let mut item = Item::new();
        let price: Decimal = "12.50".parse().unwrap();
        item.insert("basePrice".to_string(), num(price));

        assert_eq!(get_decimal(&item, "basePrice").unwrap(), price);
        assert_eq!(
            item.get("basePrice").unwrap().as_n().unwrap(),
            "12.50"
        );
    }

    #[test]
    fn test_get_decimal_unparseable_is_invalid_data() {
        let mut item = Item::new();
        item.insert(
            "basePrice".to_string(),
            AttributeValue::N("twelve".to_string()),
        );

        assert!(get_decimal(&item, "basePrice").is_err());
    }

    #[test]
    fn test_get_i32_accepts_negative() {
        let mut item = Item::new();
        item.insert("stockLevel".to_string(), num(-4));

        assert_eq!(get_i32(&item, "stockLevel").unwrap(), -4);
    }

    #[test]
    fn test_string_set_missing_is_empty() {
        let item = Item::new();
        assert!(get_string_set(&item, "imageUrls").is_empty());
    }

    #[test]
    fn test_insert_string_set_skips_empty() {
        let mut item = Item::new();
        insert_string_set(&mut item, "imageUrls", &[]);
        assert!(!item.contains_key("imageUrls"));

        insert_string_set(&mut item, "imageUrls", &["a".to_string()]);
        assert_eq!(
            item.get("imageUrls").unwrap().as_ss().unwrap(),
            &vec!["a".to_string()]
        );
    }

    #[test]
    fn test_insert_optional_string_skips_empty_and_none() {
        let mut item = Item::new();
        insert_optional_string(&mut item, "email", None);
        insert_optional_string(&mut item, "landmark", Some(""));
        assert!(item.is_empty());

        insert_optional_string(&mut item, "email", Some("a@b.co"));
        assert_eq!(item.get("email").unwrap().as_s().unwrap(), "a@b.co");
    }

    #[test]
    fn test_datetime_round_trip() {
        let ts = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut item = Item::new();
        item.insert(
            "lastUpdated".to_string(),
            AttributeValue::S(ts.to_rfc3339()),
        );

        assert_eq!(get_datetime(&item, "lastUpdated").unwrap(), ts);
    }
}
