//! Review data models.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ReviewsError;

const ANONYMOUS: &str = "Anonymous";
const INVALID_DATE: &str = "Invalid Date";

/// Review author, as populated by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewAuthor {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub name: Option<String>,
}

/// A published customer review.
///
/// Fields of the wrong type decode as empty rather than failing the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub images: Vec<String>,
    #[serde(rename = "userId", default, deserialize_with = "author_ref")]
    pub author: Option<ReviewAuthor>,
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_string")]
    pub created_at: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

impl Review {
    /// Author display name, or "Anonymous".
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(ANONYMOUS)
    }

    /// Creation date, e.g. `Jan 5, 2024`.
    pub fn formatted_date(&self) -> String {
        format_review_date(&self.created_at)
    }
}

/// Pagination block of a listing response.
///
/// Only `pages` is read; anything but a non-negative integer counts as 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "lenient_pages")]
    pub pages: u32,
}

/// One page of the reviews listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewsPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Review>,
    #[serde(default, deserialize_with = "lenient_pagination")]
    pub pagination: Pagination,
}

impl ReviewsPage {
    /// Read a page from a success body. Missing `data` or `pagination`
    /// default to an empty list and zero pages.
    pub fn from_json(json: Value) -> Result<Self, ReviewsError> {
        if json.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(json).map_err(|e| ReviewsError::Malformed(e.to_string()))
    }

    /// Total page count reported by the server.
    pub fn total_pages(&self) -> u32 {
        self.pagination.pages
    }
}

/// Format a review timestamp as an en-US short date.
///
/// Accepts RFC 3339 timestamps (converted to UTC), naive ISO datetimes and
/// plain `YYYY-MM-DD` dates. Anything else yields `Invalid Date`.
pub fn format_review_date(raw: &str) -> String {
    parse_review_date(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_review_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Keep the string entries of an array; anything else is empty.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_pages<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(pages_from(&Value::deserialize(deserializer)?))
}

fn lenient_pagination<'de, D>(deserializer: D) -> Result<Pagination, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Pagination {
        pages: value.get("pages").map(pages_from).unwrap_or_default(),
    })
}

fn pages_from(value: &Value) -> u32 {
    value
        .as_u64()
        .and_then(|pages| u32::try_from(pages).ok())
        .unwrap_or_default()
}

/// `userId` is either a populated author object or a bare id string.
fn author_ref<'de, D>(deserializer: D) -> Result<Option<ReviewAuthor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(fields) => Some(ReviewAuthor {
            id: fields
                .get("_id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            name: fields.get("name").and_then(Value::as_str).map(str::to_string),
        }),
        Value::String(id) => Some(ReviewAuthor { id, name: None }),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // === Review Tests ===

    #[test]
    fn test_review_deserialize_full() {
        let review: Review = serde_json::from_value(json!({
            "_id": "r1",
            "text": "Great fit.\nWould buy again.",
            "images": ["https://cdn.example.com/a.jpg"],
            "userId": {"_id": "u1", "name": "Dana"},
            "createdAt": "2024-01-05T10:30:00.000Z",
            "status": "published"
        }))
        .unwrap();

        assert_eq!(review.id, "r1");
        assert_eq!(review.author_name(), "Dana");
        assert_eq!(review.images.len(), 1);
        assert_eq!(review.formatted_date(), "Jan 5, 2024");
        assert!(review.text.contains('\n'));
    }

    #[test]
    fn test_review_author_fallbacks() {
        let missing: Review = serde_json::from_value(json!({"_id": "r1"})).unwrap();
        assert_eq!(missing.author_name(), "Anonymous");

        let nameless: Review =
            serde_json::from_value(json!({"_id": "r2", "userId": {"_id": "u2"}})).unwrap();
        assert_eq!(nameless.author_name(), "Anonymous");

        let empty: Review =
            serde_json::from_value(json!({"_id": "r3", "userId": {"_id": "u3", "name": ""}}))
                .unwrap();
        assert_eq!(empty.author_name(), "Anonymous");
    }

    #[test]
    fn test_review_unpopulated_author_id() {
        let review: Review =
            serde_json::from_value(json!({"_id": "r1", "userId": "65a0c0ffee"})).unwrap();
        assert_eq!(review.author.as_ref().unwrap().id, "65a0c0ffee");
        assert_eq!(review.author_name(), "Anonymous");
    }

    #[test]
    fn test_review_null_images() {
        let review: Review = serde_json::from_value(json!({"_id": "r1", "images": null})).unwrap();
        assert!(review.images.is_empty());
    }

    // === Page Tests ===

    #[test]
    fn test_page_from_json() {
        let page = ReviewsPage::from_json(json!({
            "data": [{"_id": "r1"}, {"_id": "r2"}],
            "pagination": {"pages": 3, "total": 25, "page": 1, "limit": 10}
        }))
        .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_page_null_or_odd_pages_count_as_zero() {
        let page = ReviewsPage::from_json(json!({
            "data": [{"_id": "r1"}],
            "pagination": {"pages": null}
        }))
        .unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total_pages(), 0);

        let page = ReviewsPage::from_json(json!({"pagination": {"pages": 2.5}})).unwrap();
        assert_eq!(page.total_pages(), 0);

        let page = ReviewsPage::from_json(json!({"pagination": "n/a"})).unwrap();
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_page_ignores_off_type_fields() {
        let page = ReviewsPage::from_json(json!({
            "data": [{
                "_id": "r1",
                "text": "Good",
                "createdAt": 123,
                "images": [null, "a.jpg", 7],
                "userId": {"_id": 42, "name": false}
            }],
            "pagination": {"pages": 3, "page": "1", "total": "many", "limit": 1.5}
        }))
        .unwrap();

        assert_eq!(page.total_pages(), 3);
        let review = &page.data[0];
        assert_eq!(review.text, "Good");
        assert_eq!(review.formatted_date(), "Invalid Date");
        assert_eq!(review.images, vec!["a.jpg".to_string()]);
        assert_eq!(review.author_name(), "Anonymous");
    }

    #[test]
    fn test_page_missing_fields_default() {
        let page = ReviewsPage::from_json(json!({})).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages(), 0);

        let page = ReviewsPage::from_json(json!({"data": null, "pagination": {}})).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages(), 0);

        let page = ReviewsPage::from_json(Value::Null).unwrap();
        assert_eq!(page, ReviewsPage::default());
    }

    #[test]
    fn test_page_wrong_shape_is_malformed() {
        let result = ReviewsPage::from_json(json!({"data": "oops"}));
        assert!(matches!(result, Err(ReviewsError::Malformed(_))));
    }

    // === Date Tests ===

    #[test]
    fn test_format_review_date_variants() {
        assert_eq!(format_review_date("2024-12-31T23:59:59Z"), "Dec 31, 2024");
        assert_eq!(format_review_date("2024-03-09T08:00:00+02:00"), "Mar 9, 2024");
        assert_eq!(format_review_date("2023-07-04T12:00:00"), "Jul 4, 2023");
        assert_eq!(format_review_date("2023-07-04"), "Jul 4, 2023");
    }

    #[test]
    fn test_format_review_date_invalid() {
        assert_eq!(format_review_date(""), "Invalid Date");
        assert_eq!(format_review_date("yesterday"), "Invalid Date");
    }
}
