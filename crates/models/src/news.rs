use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, StringList};

/// Upper bound on images attached to one news item.
pub const MAX_IMAGES: usize = 3;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Product Launch, Company News, Industry Update, ...
    pub category: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: StringList,
    pub published_date: DateTimeWithTimeZone,
    pub is_published: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Keep only the first [`MAX_IMAGES`] entries.
pub fn cap_images(mut images: Vec<String>) -> StringList {
    images.truncate(MAX_IMAGES);
    StringList(images)
}

/// `published_date` as sent by clients: a date-time string or unix seconds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PublishedDate {
    Unix(i64),
    Text(String),
}

impl PublishedDate {
    pub fn resolve(&self) -> Result<DateTimeWithTimeZone, ModelError> {
        match self {
            PublishedDate::Unix(secs) => Utc
                .timestamp_opt(*secs, 0)
                .single()
                .map(Into::into)
                .ok_or_else(|| ModelError::Validation(format!("published_date out of range: {secs}"))),
            PublishedDate::Text(s) => parse_published_date(s),
        }
    }
}

/// Parse an ISO-8601 date-time. A trailing `Z` is read as `+00:00`; a value
/// without offset is taken as UTC.
pub fn parse_published_date(raw: &str) -> Result<DateTimeWithTimeZone, ModelError> {
    let s = raw.trim();
    let normalized = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(head) => format!("{head}+00:00"),
        None => s.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return Ok(dt);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Ok(Utc.from_utc_datetime(&naive).into());
        }
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&naive).into());
        }
    }
    Err(ModelError::Validation(format!("invalid published_date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_are_capped_at_three() {
        let images = (1..=5).map(|i| format!("https://cdn.example.com/{i}.png")).collect();
        let capped = cap_images(images);
        assert_eq!(capped.len(), 3);
        assert_eq!(capped.0[2], "https://cdn.example.com/3.png");
    }

    #[test]
    fn z_suffix_is_utc() {
        let dt = parse_published_date("2024-05-01T08:30:00Z").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(dt.to_rfc3339(), "2024-05-01T08:30:00+00:00");
    }

    #[test]
    fn explicit_offset_is_kept() {
        let dt = parse_published_date("2024-05-01T16:30:00+08:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 8 * 3600);
        assert_eq!(dt.with_timezone(&Utc).to_rfc3339(), "2024-05-01T08:30:00+00:00");
    }

    #[test]
    fn naive_values_are_taken_as_utc() {
        let dt = parse_published_date("2024-05-01T08:30:00.250").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        let day = parse_published_date("2024-05-01").unwrap();
        assert_eq!(day.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn garbage_is_a_validation_error() {
        assert!(matches!(parse_published_date("yesterday"), Err(ModelError::Validation(_))));
    }

    #[test]
    fn published_date_accepts_string_or_unix_seconds() {
        let text: PublishedDate = serde_json::from_value(serde_json::json!("2024-01-01T00:00:00Z")).unwrap();
        let unix: PublishedDate = serde_json::from_value(serde_json::json!(1_704_067_200)).unwrap();
        assert_eq!(text.resolve().unwrap(), unix.resolve().unwrap());
    }
}
