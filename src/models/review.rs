// src/models/review.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ANONYMOUS: &str = "Anonymous";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    #[serde(default)]
    pub id: i64,                   // Assigned by the store, max(id) + 1
    #[serde(default)]
    pub name: String,              // Reviewer display name
    #[serde(default)]
    pub dealership: i64,           // ID of the reviewed dealership (not checked)
    #[serde(default)]
    pub review: String,            // Free text
    #[serde(default)]
    pub purchase: bool,
    #[serde(default)]
    pub purchase_date: String,     // Free-form, usually "YYYY-MM-DD"
    #[serde(default)]
    pub car_make: String,
    #[serde(default)]
    pub car_model: String,
    #[serde(default)]
    pub car_year: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>, // Extra seed fields, passed through untouched
}

/// Body of a review insertion. Every field may be omitted; unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewReview {
    pub name: String,
    pub dealership: i64,
    pub review: String,
    pub purchase: bool,
    pub purchase_date: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: Option<i64>,
}

impl NewReview {
    /// Trims the text fields and builds the stored record under `id`.
    pub fn into_review(self, id: i64) -> Review {
        let name = self.name.trim();
        Review {
            id,
            name: if name.is_empty() { ANONYMOUS.to_string() } else { name.to_string() },
            dealership: self.dealership,
            review: self.review.trim().to_string(),
            purchase: self.purchase,
            purchase_date: self.purchase_date,
            car_make: self.car_make.trim().to_string(),
            car_model: self.car_model.trim().to_string(),
            car_year: self.car_year,
            extra: Map::new(),
        }
    }
}

/// Numeric coercion of an id taken from a URL segment, in the manner of a
/// browser's `Number()`.
///
/// Surrounding whitespace is ignored and a blank segment counts as `0`.
/// Unsigned `0x`/`0o`/`0b` literals and integral decimal forms such as `"1.0"`
/// are accepted; anything else is not an id and matches nothing.
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }
    let radix = match raw.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &raw[2..];
        // a sign after the prefix is not a literal
        if digits.starts_with(['+', '-']) {
            return None;
        }
        return i64::from_str_radix(digits, radix).ok();
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 => Some(n as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_review_sanitizes_fields() {
        let new_review = NewReview {
            name: "   ".into(),
            dealership: 3,
            review: "  Friendly staff  ".into(),
            purchase: true,
            purchase_date: " 2023-05-01 ".into(),
            car_make: " Audi ".into(),
            car_model: "A4 ".into(),
            car_year: Some(2021),
        };

        let review = new_review.into_review(7);
        assert_eq!(review.id, 7);
        assert_eq!(review.name, ANONYMOUS);
        assert_eq!(review.review, "Friendly staff");
        assert_eq!(review.car_make, "Audi");
        assert_eq!(review.car_model, "A4");
        // purchase_date is kept as sent
        assert_eq!(review.purchase_date, " 2023-05-01 ");
        assert_eq!(review.car_year, Some(2021));
    }

    #[test]
    fn test_new_review_defaults_missing_fields() {
        let parsed: NewReview =
            serde_json::from_str(r#"{"dealership": 1, "time": "2023-05-01T00:00:00Z"}"#).unwrap();
        assert_eq!(parsed.dealership, 1);
        assert_eq!(parsed.name, "");
        assert!(!parsed.purchase);
        assert_eq!(parsed.car_year, None);
    }

    #[test]
    fn test_new_review_rejects_mistyped_fields() {
        assert!(serde_json::from_str::<NewReview>(r#"{"dealership": "one"}"#).is_err());
        assert!(serde_json::from_str::<NewReview>(r#""{\"dealership\": 1}""#).is_err());
    }

    #[test]
    fn test_review_keeps_extra_seed_fields() {
        let raw = r#"{"id": 4, "name": "Berkly", "dealership": 15, "review": "ok",
            "purchase": false, "purchase_date": "", "car_make": "", "car_model": "",
            "car_year": null, "time": "2021-01-01"}"#;
        let review: Review = serde_json::from_str(raw).unwrap();
        assert_eq!(review.extra.get("time"), Some(&Value::from("2021-01-01")));
        let round = serde_json::to_value(&review).unwrap();
        assert_eq!(round["time"], "2021-01-01");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("15"), Some(15));
        assert_eq!(parse_id(" 15 "), Some(15));
        assert_eq!(parse_id("15.0"), Some(15));
        assert_eq!(parse_id("-2"), Some(-2));
        assert_eq!(parse_id("15.5"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("NaN"), None);
        assert_eq!(parse_id("inf"), None);
    }

    #[test]
    fn test_parse_id_radix_literals_and_blank() {
        assert_eq!(parse_id("0x0F"), Some(15));
        assert_eq!(parse_id("0X1f"), Some(31));
        assert_eq!(parse_id("0o17"), Some(15));
        assert_eq!(parse_id("0b1111"), Some(15));
        assert_eq!(parse_id("-0x0F"), None);
        assert_eq!(parse_id("0x-1"), None);
        assert_eq!(parse_id("0x"), None);
        assert_eq!(parse_id("0b2"), None);
        assert_eq!(parse_id(""), Some(0));
        assert_eq!(parse_id("   "), Some(0));
    }
}
