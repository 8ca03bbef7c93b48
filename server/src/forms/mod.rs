//! Parsing and validation of the form-encoded payloads submitted by the
//! create and edit pages.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub mod artist;
pub mod choices;
pub mod show;
pub mod venue;

pub use choices::FormChoices;

/// Longest name, city, address or phone the store accepts.
pub const MAX_TEXT_LEN: usize = 120;
/// Longest link the store accepts.
pub const MAX_LINK_LEN: usize = 500;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} has an invalid value: {value}")]
    Invalid { field: &'static str, value: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Raw `name=value` pairs of a submitted form. Keys may repeat.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First trimmed, non-empty value of `field`.
    pub fn text(&self, field: &str) -> Option<String> {
        self.pairs
            .iter()
            .filter(|(name, _)| name == field)
            .map(|(_, value)| value.trim())
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn required(&self, field: &'static str) -> Result<String, FormError> {
        let value = self.text(field).ok_or(FormError::Missing(field))?;
        bounded(field, value, MAX_TEXT_LEN)
    }

    /// Like [`FormFields::text`], capped at [`MAX_TEXT_LEN`].
    pub fn optional(&self, field: &'static str) -> Result<Option<String>, FormError> {
        self.text(field)
            .map(|value| bounded(field, value, MAX_TEXT_LEN))
            .transpose()
    }

    /// Every non-empty value of a multi-valued field, first occurrence wins.
    pub fn all(&self, field: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for (_, value) in self.pairs.iter().filter(|(name, _)| name == field) {
            let value = value.trim();
            if !value.is_empty() && !values.iter().any(|seen| seen == value) {
                values.push(value.to_string());
            }
        }
        values
    }

    /// Checkbox semantics: absent or a falsy literal means `false`.
    pub fn flag(&self, field: &str) -> bool {
        self.pairs
            .iter()
            .filter(|(name, _)| name == field)
            .any(|(_, value)| {
                let value = value.trim().to_ascii_lowercase();
                !matches!(value.as_str(), "" | "false" | "n" | "no" | "off" | "0")
            })
    }

    pub fn link(&self, field: &'static str) -> Result<Option<String>, FormError> {
        match self.text(field) {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                bounded(field, url, MAX_LINK_LEN).map(Some)
            }
            Some(url) => Err(FormError::Invalid { field, value: url }),
            None => Ok(None),
        }
    }

    pub fn uuid(&self, field: &'static str) -> Result<Uuid, FormError> {
        let raw = self.required(field)?;
        Uuid::parse_str(&raw).map_err(|_| FormError::Invalid { field, value: raw })
    }

    /// RFC 3339, or `YYYY-MM-DD HH:MM[:SS]` read as UTC.
    pub fn timestamp(&self, field: &'static str) -> Result<DateTime<Utc>, FormError> {
        let raw = self.required(field)?;
        parse_timestamp(&raw).ok_or(FormError::Invalid { field, value: raw })
    }

    pub(crate) fn state(&self) -> Result<String, FormError> {
        let state = self.required("state")?.to_ascii_uppercase();
        if choices::is_state(&state) {
            Ok(state)
        } else {
            Err(FormError::Invalid {
                field: "state",
                value: state,
            })
        }
    }

    pub(crate) fn genres(&self) -> Result<Vec<String>, FormError> {
        let genres = self.all("genres");
        if genres.is_empty() {
            return Err(FormError::Missing("genres"));
        }
        match genres.iter().find(|genre| !choices::is_genre(genre)) {
            Some(unknown) => Err(FormError::Invalid {
                field: "genres",
                value: unknown.clone(),
            }),
            None => Ok(genres),
        }
    }
}

fn bounded(field: &'static str, value: String, max: usize) -> Result<String, FormError> {
    if value.chars().count() > max {
        Err(FormError::TooLong { field, max })
    } else {
        Ok(value)
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// What the create and edit pages render: current values (if any) and the option lists.
#[derive(Debug, Clone, Serialize)]
pub struct FormPage<T: Serialize> {
    pub id: Option<Uuid>,
    pub values: Option<T>,
    pub choices: FormChoices,
}

impl<T: Serialize> FormPage<T> {
    pub fn blank() -> Self {
        Self {
            id: None,
            values: None,
            choices: FormChoices::default(),
        }
    }

    pub fn filled(id: Uuid, values: T) -> Self {
        Self {
            id: Some(id),
            values: Some(values),
            choices: FormChoices::default(),
        }
    }
}

#[cfg(test)]
pub(crate) fn fields(pairs: &[(&str, &str)]) -> FormFields {
    FormFields::new(
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    )
}
