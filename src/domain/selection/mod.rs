//! Selection module - The analysis-target triple and its reconciliation.
//!
//! The (category, industry, service) triple is the one piece of state shared
//! across the whole worksheet. It is stored per session, reconciled against
//! the taxonomy on every interaction, and read-only for every tab renderer.

mod errors;
mod resolver;
mod triple;

pub use errors::SelectionError;
pub use resolver::{resolve, SelectionInput, StoredSelection};
pub use triple::{Industry, Selection, Service};
