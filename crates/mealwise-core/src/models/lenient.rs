// ABOUTME: Lenient serde helpers that coerce malformed recipe fields instead of failing
// ABOUTME: A single bad ingredient or nutrient entry is dropped rather than rejecting the recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field-level deserializers for data arriving from the recipe catalog.
//!
//! Catalog rows are loosely typed: ingredient names may be numbers or null,
//! amounts may be strings, and nutrition may be a map or a list. These helpers
//! coerce such values to empty or absent so that downstream matching can skip
//! the record.

use super::nutrient::{NutrientAmount, NutrientRecord};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Strings pass through; anything else becomes an empty string
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Numbers and numeric strings become `Some`; anything else becomes `None`
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_number(&Value::deserialize(deserializer)?))
}

/// Non-negative whole counts; fractional values are truncated, junk becomes zero
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_number(&Value::deserialize(deserializer)?)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map_or(0, |n| n.min(f64::from(u32::MAX)) as u32))
}

/// Arrays keep their string elements; anything else becomes empty
///
/// # Errors
///
/// Only fails if the underlying deserializer cannot produce a JSON value
pub fn strings<'de, D, C>(deserializer: D) -> Result<C, D::Error>
where
    D: Deserializer<'de>,
    C: FromIterator<String>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => std::iter::empty().collect(),
    })
}

/// Accepts `{"Sodium": {"amount": 1, "unit": "mg"}}` or
/// `[{"name": "Sodium", "amount": 1, "unit": "mg"}]`; entries without a
/// usable name or amount are dropped, any other shape yields an empty record
///
/// Entries keep the order the source listed them in.
///
/// # Errors
///
/// Only fails if the underlying deserializer reports a malformed document
pub fn nutrient_record<'de, D>(deserializer: D) -> Result<NutrientRecord, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(NutrientRecordVisitor)
}

struct NutrientRecordVisitor;

impl<'de> Visitor<'de> for NutrientRecordVisitor {
    type Value = NutrientRecord;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a nutrient map or a list of named nutrients")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut record = NutrientRecord::new();
        while let Some((name, entry)) = map.next_entry::<String, Value>()? {
            if name.trim().is_empty() {
                continue;
            }
            if let Some(amount) = nutrient_amount(&entry) {
                record.insert(name, amount);
            }
        }
        Ok(record)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut record = NutrientRecord::new();
        while let Some(entry) = seq.next_element::<Value>()? {
            let Some(name) = entry.get("name").and_then(Value::as_str) else {
                continue;
            };
            if name.trim().is_empty() {
                continue;
            }
            if let Some(amount) = nutrient_amount(&entry) {
                record.insert(name, amount);
            }
        }
        Ok(record)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NutrientRecord::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NutrientRecord::new())
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(NutrientRecord::new())
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Ok(NutrientRecord::new())
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Ok(NutrientRecord::new())
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Ok(NutrientRecord::new())
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(NutrientRecord::new())
    }
}

fn nutrient_amount(entry: &Value) -> Option<NutrientAmount> {
    let amount = entry.get("amount").and_then(as_number)?;
    let unit = entry
        .get("unit")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    Some(NutrientAmount { amount, unit })
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|n: &f64| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "string_or_empty")]
        name: String,
        #[serde(default, deserialize_with = "number_or_none")]
        amount: Option<f64>,
        #[serde(default, deserialize_with = "nutrient_record")]
        nutrients: NutrientRecord,
    }

    #[test]
    fn test_non_string_name_becomes_empty() {
        let row: Row = serde_json::from_value(json!({"name": 42, "amount": "1.5"})).unwrap();
        assert_eq!(row.name, "");
        assert_eq!(row.amount, Some(1.5));
    }

    #[test]
    fn test_nutrient_list_drops_bad_entries() {
        let row: Row = serde_json::from_value(json!({
            "name": "x",
            "nutrients": [
                {"name": "Sodium", "amount": 1200, "unit": "mg"},
                {"name": "Sugar", "amount": "lots"},
                {"amount": 3},
            ]
        }))
        .unwrap();
        assert_eq!(row.nutrients.len(), 1);
        assert!((row.nutrients.get("Sodium").unwrap().amount - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nutrient_map_form() {
        let row: Row = serde_json::from_value(json!({
            "nutrients": {"Iron": {"amount": 4, "unit": "mg"}, "Junk": null}
        }))
        .unwrap();
        assert_eq!(row.nutrients.len(), 1);
        assert_eq!(row.nutrients.get("Iron").unwrap().unit, "mg");
    }

    #[test]
    fn test_nutrient_order_follows_source() {
        let from_list: Row = serde_json::from_str(
            r#"{"nutrients": [
                {"name": "Total Carbohydrates", "amount": 60, "unit": "g"},
                {"name": "Net Carbohydrates", "amount": 40, "unit": "g"},
                {"name": "Total Carbohydrates", "amount": 1, "unit": "g"}
            ]}"#,
        )
        .unwrap();
        let names: Vec<_> = from_list.nutrients.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Total Carbohydrates", "Net Carbohydrates"]);
        assert!((from_list.nutrients.get("Total Carbohydrates").unwrap().amount - 60.0).abs() < f64::EPSILON);

        let from_map: Row = serde_json::from_str(
            r#"{"nutrients": {"Sugars, total": {"amount": 20}, "Sugars, added": {"amount": 8}}}"#,
        )
        .unwrap();
        let names: Vec<_> = from_map.nutrients.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Sugars, total", "Sugars, added"]);
    }

    #[test]
    fn test_nutrient_scalar_is_empty() {
        let row: Row = serde_json::from_value(json!({"nutrients": "n/a"})).unwrap();
        assert!(row.nutrients.is_empty());
        let row: Row = serde_json::from_value(json!({"nutrients": null})).unwrap();
        assert!(row.nutrients.is_empty());
    }
}
