//! Single-pass reconciliation of the selection triple.
//!
//! The view is recomputed in one fixed dependency order every interaction:
//! category → industry domain → industry value → service domain → service
//! value. The resolver is the pure heart of that pass; loading the previous
//! state and writing the result back belong to the application layer.
//!
//! The store keeps only the latest triple, so switching category away and
//! back falls back to the new category's first industry rather than the one
//! visited earlier. That single-step memory is intended behavior.

use crate::domain::taxonomy::{self, UnknownCategory};

use super::{Industry, Selection, SelectionError, Service};

/// The raw widget values submitted with one interaction.
///
/// `industry` and `service` are the values the widgets held when the
/// interaction fired. They may be stale: the option lists they were chosen
/// from were computed from the *previous* render's category.
#[derive(Debug, Clone, Copy)]
pub struct SelectionInput<'a> {
    pub category: &'a str,
    pub industry: Option<&'a str>,
    pub service: Option<&'a str>,
}

impl<'a> SelectionInput<'a> {
    /// An interaction that submits only a category choice.
    pub fn category_only(category: &'a str) -> Self {
        Self {
            category,
            industry: None,
            service: None,
        }
    }
}

/// The previous triple as loaded from the session store.
///
/// Values are plain strings: the store survives taxonomy changes, so
/// nothing here is guaranteed to still be a valid domain member.
#[derive(Debug, Clone, Default)]
pub struct StoredSelection {
    pub industry: Option<String>,
    pub service: Option<String>,
}

impl StoredSelection {
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            industry: Some(selection.industry.as_str().to_string()),
            service: Some(selection.service.as_str().to_string()),
        }
    }
}

/// Produces a valid selection for the current interaction.
///
/// The category must be one of the three fixed labels; anything else fails
/// with [`SelectionError::InvalidCategory`] and leaves stored state alone.
/// Industry and service are then reconciled level by level: the raw widget
/// value wins if it is a member of the freshly computed domain (an untouched
/// widget submits exactly the stored value, so this subsumes the stored
/// preference), then the stored value if still valid, then the domain's
/// first element. The result always satisfies the selection invariant, and
/// feeding it back in returns it unchanged.
pub fn resolve(
    input: &SelectionInput<'_>,
    stored: &StoredSelection,
) -> Result<Selection, SelectionError> {
    let category = input
        .category
        .parse()
        .map_err(|UnknownCategory(given)| SelectionError::InvalidCategory { given })?;

    let industry_domain = taxonomy::industries_of(category);
    let industry = prefer_member(input.industry, stored.industry.as_deref(), industry_domain);

    let service_domain = taxonomy::services_of(industry);
    let service = prefer_member(input.service, stored.service.as_deref(), service_domain);

    Ok(Selection {
        category,
        industry: Industry::from(industry),
        service: Service::from(service),
    })
}

/// First of [raw, stored] that is a member of the domain, else the domain's
/// first element. The domain is never empty by construction of the taxonomy.
fn prefer_member(
    raw: Option<&str>,
    stored: Option<&str>,
    domain: &'static [&'static str],
) -> &'static str {
    raw.and_then(|value| domain.iter().find(|member| **member == value))
        .or_else(|| stored.and_then(|value| domain.iter().find(|member| **member == value)))
        .copied()
        .unwrap_or(domain[0])
}
