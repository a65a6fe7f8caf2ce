//! Tag value attached to tasks.
//!
//! # Invariants
//! - Names are trimmed and lowercased on construction.
//! - Normalized names match `[a-z0-9_-]+`.

use crate::collection::record::Record;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("valid tag name regex"));

/// Normalized tag label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Normalizes and validates one tag name.
    ///
    /// # Errors
    /// - `TagValidationError::Empty` for blank input.
    /// - `TagValidationError::InvalidCharacters` when the normalized name
    ///   contains anything outside `[a-z0-9_-]`.
    pub fn new(name: &str) -> Result<Self, TagValidationError> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(TagValidationError::Empty);
        }
        if !TAG_NAME_RE.is_match(&normalized) {
            return Err(TagValidationError::InvalidCharacters(normalized));
        }
        Ok(Self { name: normalized })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Record for Tag {
    fn is_equivalent(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn reset_from(&mut self, other: &Self) {
        self.name.clone_from(&other.name);
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.name)
    }
}

impl TryFrom<String> for Tag {
    type Error = TagValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.name
    }
}

/// Tag construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    Empty,
    InvalidCharacters(String),
}

impl Display for TagValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tag name must not be empty"),
            Self::InvalidCharacters(value) => {
                write!(f, "tag name `{value}` must only contain a-z, 0-9, `_` or `-`")
            }
        }
    }
}

impl Error for TagValidationError {}
