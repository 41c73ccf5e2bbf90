//! The Selection triple and its string value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::taxonomy::{self, Category};

/// A named market segment offered under a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Industry(String);

impl Industry {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Industry {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Industry {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named example product/service offered under an industry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Service(String);

impl Service {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns true if this is the "no example available" sentinel.
    pub fn is_sentinel(&self) -> bool {
        self.0 == taxonomy::NO_SERVICE_EXAMPLE
    }
}

impl From<&str> for Service {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Service {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The analysis target shared by every worksheet tab.
///
/// Invariant: `industry` is in `industries_of(category)` and `service` is in
/// `services_of(industry)`. Instances are produced only by session
/// initialization and by the resolver, both of which establish it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Category,
    pub industry: Industry,
    pub service: Service,
}

impl Selection {
    /// The default service every session starts on.
    pub const DEFAULT_SERVICE: &'static str = "オンライン自習室";

    /// The hard-coded triple a fresh session starts with: first category,
    /// its first industry, and the named default service.
    pub fn session_default() -> Self {
        let category = Category::BtoC;
        let industry = taxonomy::industries_of(category)[0];
        Self {
            category,
            industry: Industry::from(industry),
            service: Service::from(Self::DEFAULT_SERVICE),
        }
    }

    /// The summary line shown above the tabs, e.g.
    /// "BtoC / 教育業界（予備校・塾・オンライン学習） / オンライン自習室".
    pub fn summary(&self) -> String {
        format!("{} / {} / {}", self.category, self.industry, self.service)
    }

    /// Checks the data-model invariant against the taxonomy.
    pub fn is_consistent(&self) -> bool {
        taxonomy::industries_of(self.category).contains(&self.industry.as_str())
            && taxonomy::services_of(self.industry.as_str()).contains(&self.service.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_default_is_consistent() {
        let selection = Selection::session_default();
        assert_eq!(selection.category, Category::BtoC);
        assert_eq!(
            selection.industry.as_str(),
            "教育業界（予備校・塾・オンライン学習）"
        );
        assert_eq!(selection.service.as_str(), "オンライン自習室");
        assert!(selection.is_consistent());
    }

    #[test]
    fn summary_joins_the_triple_with_slashes() {
        let selection = Selection::session_default();
        assert_eq!(
            selection.summary(),
            "BtoC / 教育業界（予備校・塾・オンライン学習） / オンライン自習室"
        );
    }

    #[test]
    fn sentinel_service_is_recognized() {
        assert!(Service::from(taxonomy::NO_SERVICE_EXAMPLE).is_sentinel());
        assert!(!Service::from("オンライン自習室").is_sentinel());
    }

    #[test]
    fn summary_renders_the_sentinel_service() {
        let selection = Selection {
            category: Category::BtoC,
            industry: Industry::from("教育業界（予備校・塾・オンライン学習）"),
            service: Service::from(taxonomy::NO_SERVICE_EXAMPLE),
        };
        assert!(selection.summary().ends_with("/ サービス例なし"));
    }

    #[test]
    fn mismatched_triple_is_inconsistent() {
        let selection = Selection {
            category: Category::BtoB,
            industry: Industry::from("教育業界（予備校・塾・オンライン学習）"),
            service: Service::from("オンライン自習室"),
        };
        assert!(!selection.is_consistent());
    }
}
