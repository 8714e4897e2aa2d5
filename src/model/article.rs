use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Backend-assigned article identifier. Zero means "no article".
pub type ArticleId = u64;

/// Tags offered by the create form.
pub const CATEGORIES: [&str; 6] = [
    "FINANCE",
    "TECH",
    "CAREER",
    "EDUCATION",
    "REGULATIONS",
    "LIFESTYLE",
];

/// Cover images used when the author leaves the field empty.
pub const COVER_IMAGES: [&str; 5] = [
    "https://images.pexels.com/photos/6801648/pexels-photo-6801648.jpeg",
    "https://images.pexels.com/photos/5212327/pexels-photo-5212327.jpeg",
    "https://images.pexels.com/photos/4386373/pexels-photo-4386373.jpeg",
    "https://images.pexels.com/photos/590020/pexels-photo-590020.jpeg",
    "https://images.pexels.com/photos/3943724/pexels-photo-3943724.jpeg",
];

const WORDS_PER_MINUTE: usize = 200;

/// A blog article as exchanged with the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Vec<String>,
    pub date: String,
    #[serde(default)]
    pub cover_image: String,
}

impl Article {
    /// Parsed publication timestamp, `None` when `date` is not ISO 8601.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_iso_date(&self.date)
    }

    /// Short local display date such as "Jan 11, 2026"; falls back to the raw value.
    pub fn display_date(&self) -> String {
        match self.published_at() {
            Some(date) => date.with_timezone(&Local).format("%b %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }

    /// Reading time estimate at 200 words per minute, e.g. "3 Min".
    pub fn read_time(&self) -> String {
        let words = self.content.split_whitespace().count();
        let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
        format!("{} Min", minutes)
    }

    /// Body split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content.split("\n\n")
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category.iter().any(|c| c == category)
    }
}

/// Accepts RFC 3339, a date-time without offset (local time) and a bare
/// date (UTC midnight).
fn parse_iso_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|date| date.with_timezone(&Utc))
                .or_else(|| Some(naive.and_utc()));
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Ids arrive either as numbers or as numeric strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<ArticleId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
        Missing(#[allow(dead_code)] Option<()>),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid article id '{}'", text))),
        RawId::Missing(_) => Ok(0),
    }
}

/// Validation failures for a new article.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("Select at least one category")]
    NoCategory,
}

/// Article payload sent on create. The backend assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub description: String,
    pub content: String,
    pub category: Vec<String>,
    pub date: String,
    pub cover_image: String,
}

/// Raw form input before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub content: String,
    pub categories: Vec<String>,
    pub cover_image: String,
}

impl ArticleDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("Title", &self.title),
            ("Description", &self.description),
            ("Content", &self.content),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField { field });
            }
        }
        if self.categories.is_empty() {
            return Err(ValidationError::NoCategory);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Build the create payload, stamping the current time and picking a
    /// default cover image when none was given.
    pub fn into_new_article(self, now: DateTime<Utc>) -> Result<NewArticle, ValidationError> {
        self.validate()?;
        let cover_image = match self.cover_image.trim() {
            "" => random_cover_image().to_string(),
            url => url.to_string(),
        };
        Ok(NewArticle {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            content: self.content.trim().to_string(),
            category: self.categories,
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            cover_image,
        })
    }
}

pub fn random_cover_image() -> &'static str {
    COVER_IMAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(COVER_IMAGES[0])
}
