//! Category enum representing the three business-relationship classes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing a label outside the fixed category set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// The three fixed business-relationship categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    BtoC,
    BtoB,
    BtoG,
}

impl Category {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[Category::BtoC, Category::BtoB, Category::BtoG]
    }

    /// Returns the short label used as the stored/wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BtoC => "BtoC",
            Category::BtoB => "BtoB",
            Category::BtoG => "BtoG",
        }
    }

    /// Returns the long label shown next to the radio widget.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::BtoC => "BtoC（一般消費者向け）",
            Category::BtoB => "BtoB（企業向け）",
            Category::BtoG => "BtoG・公共系",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BtoC" => Ok(Category::BtoC),
            "BtoB" => Ok(Category::BtoB),
            "BtoG" => Ok(Category::BtoG),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_3_categories() {
        assert_eq!(Category::all().len(), 3);
    }

    #[test]
    fn as_str_round_trips_through_from_str() {
        for category in Category::all() {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn from_str_rejects_unknown_labels() {
        let err = "BtoX".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("BtoX".to_string()));
    }

    #[test]
    fn display_name_carries_audience_annotation() {
        assert_eq!(Category::BtoC.display_name(), "BtoC（一般消費者向け）");
        assert_eq!(Category::BtoG.display_name(), "BtoG・公共系");
    }
}
