//! Taxonomy module - Static category/industry/service tables.
//!
//! The taxonomy is a compiled-in, two-level mapping: each category owns an
//! ordered list of industries, and each industry owns an ordered list of
//! example services. Both lookups are total functions; an industry with no
//! configured services resolves to the single-element sentinel domain so
//! downstream code never sees an empty option list.

mod category;
mod tables;

pub use category::{Category, UnknownCategory};
pub use tables::{
    industries_of, is_configured_industry, services_of, validate, TaxonomyError, NO_SERVICE_EXAMPLE,
};
