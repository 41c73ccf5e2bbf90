//! Selection handlers - reconciliation and read access for the triple.

mod get_selection;
mod resolve_selection;
pub(crate) mod state;

pub use get_selection::GetSelectionHandler;
pub use resolve_selection::{
    ResolveSelectionCommand, ResolveSelectionHandler, SelectionFlowError,
};
pub use state::{SelectionView, KEY_CATEGORY, KEY_INDUSTRY, KEY_SERVICE};
