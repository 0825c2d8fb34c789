//! The fixed project category taxonomy.
//!
//! The set is closed: four codes, each with a fixed human-readable label.
//! The `projects.category` column carries a CHECK constraint over the same
//! four codes, so a row can never hold a value this enum cannot represent.

use std::fmt;
use std::str::FromStr;

use portfolio_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// Project category, stored as lowercase TEXT in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum Category {
    Branding,
    Print,
    Motion,
    Video,
}

impl Category {
    /// The database/wire code for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Branding => "branding",
            Category::Print => "print",
            Category::Motion => "motion",
            Category::Video => "video",
        }
    }

    /// The fixed display label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Category::Branding => "Branding & Logos",
            Category::Print => "Print & Posters",
            Category::Motion => "Motion Graphics",
            Category::Video => "Video Editing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "branding" => Ok(Category::Branding),
            "print" => Ok(Category::Print),
            "motion" => Ok(Category::Motion),
            "video" => Ok(Category::Video),
            other => Err(CoreError::Validation(format!(
                "Unknown category code: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn labels_match_fixed_table() {
        assert_eq!(Category::Branding.label(), "Branding & Logos");
        assert_eq!(Category::Print.label(), "Print & Posters");
        assert_eq!(Category::Motion.label(), "Motion Graphics");
        assert_eq!(Category::Video.label(), "Video Editing");
    }

    #[test]
    fn codes_round_trip_through_from_str() {
        for category in [
            Category::Branding,
            Category::Print,
            Category::Motion,
            Category::Video,
        ] {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "sculpture".parse::<Category>();
        assert_matches!(err, Err(CoreError::Validation(_)));
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(
            serde_json::to_string(&Category::Branding).unwrap(),
            "\"branding\""
        );
    }
}
