//! Worksheet handlers - whole-view recomputation.

mod render_view;

pub use render_view::{
    RenderViewCommand, RenderViewHandler, StagePanel, TabInputs, TabPanels, WorksheetView,
};
