//! Recipe data model — the stored record and the quick/long filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved recipe. Identity is the `(name, user_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Spoken recipe name.
    pub name: String,
    /// Owner, as supplied by the platform session.
    pub user_id: String,
    /// Free text describing where the recipe can be found.
    pub location: String,
    /// Quick (true) or long (false) to make.
    pub is_quick: bool,
    /// When the recipe was added.
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new recipe stamped with the current time.
    pub fn new(
        name: impl Into<String>,
        user_id: impl Into<String>,
        location: impl Into<String>,
        is_quick: bool,
    ) -> Self {
        Self {
            name: name.into(),
            user_id: user_id.into(),
            location: location.into(),
            is_quick,
            created_at: Utc::now(),
        }
    }
}

/// Classify a spoken "quick"/"long" answer for a new recipe.
///
/// Only "quick" (any case, nothing else around it) is quick; every other
/// answer is long.
pub fn is_quick_utterance(value: &str) -> bool {
    value.to_lowercase() == "quick"
}

/// Which recipes a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeFilter {
    Quick,
    Long,
    Any,
}

impl RecipeFilter {
    /// Parse a spoken filter answer. Anything but "quick" or "long" means `Any`.
    pub fn from_utterance(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "quick" => Self::Quick,
            "long" => Self::Long,
            _ => Self::Any,
        }
    }

    /// The `is_quick` value this filter pins, if any.
    pub fn is_quick(&self) -> Option<bool> {
        match self {
            Self::Quick => Some(true),
            Self::Long => Some(false),
            Self::Any => None,
        }
    }
}

impl std::fmt::Display for RecipeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Quick => "quick",
            Self::Long => "long",
            Self::Any => "any",
        };
        write!(f, "{s}")
    }
}
