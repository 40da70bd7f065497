//! Expense categories
//!
//! A fixed, closed set of five categories. Each carries a display glyph
//! used by the terminal views; the glyph is a presentation concern and is
//! not persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OutlayError;

/// The closed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Housing,
    Food,
    Clothing,
    Transportation,
    Education,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 5] = [
        Category::Housing,
        Category::Food,
        Category::Clothing,
        Category::Transportation,
        Category::Education,
    ];

    /// Canonical label, as stored in the expense file
    pub fn label(&self) -> &'static str {
        match self {
            Category::Housing => "Housing",
            Category::Food => "Food",
            Category::Clothing => "Clothing",
            Category::Transportation => "Transportation",
            Category::Education => "Education",
        }
    }

    /// Display glyph for terminal output
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Housing => "⌂",
            Category::Food => "🍴",
            Category::Clothing => "👕",
            Category::Transportation => "🚗",
            Category::Education => "📖",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = OutlayError;

    /// Case-insensitive lookup by label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == lowered)
            .ok_or_else(|| {
                OutlayError::Validation(format!(
                    "Unknown category '{}' (expected one of: {})",
                    s,
                    Category::ALL.map(|c| c.label()).join(", ")
                ))
            })
    }
}
