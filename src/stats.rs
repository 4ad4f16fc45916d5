use crate::models::{RatingEntry, RatingsMap, Summary};
use serde_json::Value;
use std::cmp::Ordering;

pub fn coerce_rating(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            text.parse::<f64>().ok()?
        }
        _ => return None,
    };
    number.is_finite().then_some(number)
}

pub fn sort_and_filter(raw: &RatingsMap) -> Vec<RatingEntry> {
    let mut entries: Vec<RatingEntry> = raw
        .iter()
        .filter_map(|(date, value)| {
            coerce_rating(value).map(|rating| RatingEntry {
                date: date.clone(),
                rating,
            })
        })
        .collect();
    // ISO dates order lexicographically the same as chronologically.
    entries.sort_by(|a, b| compare_keys(&a.date, &b.date));
    entries
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

pub fn summarize(entries: &[RatingEntry]) -> Summary {
    if entries.is_empty() {
        return Summary {
            average: None,
            count: 0,
        };
    }

    let total: f64 = entries.iter().map(|entry| entry.rating).sum();
    let mean = total / entries.len() as f64;
    Summary {
        average: Some(round_to_tenth(mean)),
        count: entries.len(),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(pairs: &[(&str, Value)]) -> RatingsMap {
        pairs
            .iter()
            .map(|(date, value)| (date.to_string(), value.clone()))
            .collect()
    }

    fn entry(date: &str, rating: f64) -> RatingEntry {
        RatingEntry {
            date: date.to_string(),
            rating,
        }
    }

    #[test]
    fn coerce_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_rating(&json!(4)), Some(4.0));
        assert_eq!(coerce_rating(&json!("3")), Some(3.0));
        assert_eq!(coerce_rating(&json!(" 2.5 ")), Some(2.5));
    }

    #[test]
    fn coerce_rejects_non_numeric_values() {
        assert_eq!(coerce_rating(&json!("not-a-number")), None);
        assert_eq!(coerce_rating(&json!("")), None);
        assert_eq!(coerce_rating(&json!("inf")), None);
        assert_eq!(coerce_rating(&json!(null)), None);
        assert_eq!(coerce_rating(&json!(true)), None);
        assert_eq!(coerce_rating(&json!([1])), None);
        assert_eq!(coerce_rating(&json!({ "value": 1 })), None);
    }

    #[test]
    fn sort_and_filter_orders_by_date_and_drops_invalid() {
        let raw = map(&[
            ("2024-01-03", json!(2)),
            ("invalid", json!("not-a-number")),
            ("2024-01-01", json!("5")),
            ("2024-01-02", json!(4)),
        ]);

        let entries = sort_and_filter(&raw);
        assert_eq!(
            entries,
            vec![
                entry("2024-01-01", 5.0),
                entry("2024-01-02", 4.0),
                entry("2024-01-03", 2.0),
            ]
        );
    }

    #[test]
    fn sort_and_filter_is_idempotent() {
        let raw = map(&[
            ("2023-12-31", json!(1)),
            ("2024-02-10", json!("3")),
            ("bogus", json!("x")),
            ("2024-01-15", json!(5)),
        ]);
        let first = sort_and_filter(&raw);
        let as_map: RatingsMap = first
            .iter()
            .map(|entry| (entry.date.clone(), json!(entry.rating)))
            .collect();
        assert_eq!(sort_and_filter(&as_map), first);
    }

    #[test]
    fn summarize_empty() {
        assert_eq!(
            summarize(&[]),
            Summary {
                average: None,
                count: 0
            }
        );
    }

    #[test]
    fn summarize_rounds_to_one_decimal() {
        let entries = [
            entry("2024-01-01", 5.0),
            entry("2024-01-02", 4.0),
            entry("2024-01-03", 2.0),
        ];
        assert_eq!(
            summarize(&entries),
            Summary {
                average: Some(3.7),
                count: 3
            }
        );
    }

    #[test]
    fn summarize_rounds_half_away_from_zero() {
        let entries = [entry("2024-01-01", 3.0), entry("2024-01-02", 4.0)];
        assert_eq!(summarize(&entries).average, Some(3.5));

        let entries = [
            entry("2024-01-01", 1.0),
            entry("2024-01-02", 1.0),
            entry("2024-01-03", 1.0),
            entry("2024-01-04", 2.0),
        ];
        // 1.25 rounds up to 1.3
        assert_eq!(summarize(&entries).average, Some(1.3));
    }

    #[test]
    fn stray_keys_sort_ignoring_case() {
        let raw = map(&[("B", json!(2)), ("a", json!(1)), ("2024-01-01", json!(3))]);
        let dates: Vec<_> = sort_and_filter(&raw).into_iter().map(|entry| entry.date).collect();
        assert_eq!(dates, ["2024-01-01", "a", "B"]);
    }
}
