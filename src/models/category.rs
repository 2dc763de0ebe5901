//! Category value object
//!
//! Categories are embedded by value in every transaction and budget. The
//! name is the grouping key; color, icon and short name are display
//! metadata carried along with it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a derived short name
pub const SHORT_NAME_LEN: usize = 3;

/// A named, colored, iconed classification bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category name (unique within a transaction type)
    pub name: String,

    /// Display color, e.g. "#FF6B6B"
    #[serde(default)]
    pub color: String,

    /// Display icon (usually an emoji)
    #[serde(default)]
    pub icon: String,

    /// Abbreviation shown on narrow chart labels
    #[serde(default)]
    pub short_name: String,
}

impl Category {
    /// Create a category, deriving the short name from the name
    pub fn new(name: impl Into<String>, color: impl Into<String>, icon: impl Into<String>) -> Self {
        let name = name.into();
        let short_name = short_name_for(&name);
        Self {
            name,
            color: color.into(),
            icon: icon.into(),
            short_name,
        }
    }

    /// Override the derived short name
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Whether two categories carry identical display metadata
    pub fn same_metadata(&self, other: &Category) -> bool {
        self.color == other.color && self.icon == other.icon && self.short_name == other.short_name
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > 50 {
            return Err(CategoryValidationError::NameTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Derive an uppercase abbreviation of at most three characters.
///
/// A single word keeps its first three letters ("Food" -> "FOO"); several
/// words use their initials ("Dining Out" -> "DO"). A blank name yields an
/// empty string.
pub fn short_name_for(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();

    let source: String = match words.as_slice() {
        [] => String::new(),
        [single] => single.to_string(),
        many => many.iter().filter_map(|w| w.chars().next()).collect(),
    };

    // Uppercasing can expand a character ("ß" -> "SS"), so truncate after it
    source.to_uppercase().chars().take(SHORT_NAME_LEN).collect()
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
        }
    }
}

impl std::error::Error for CategoryValidationError {}
