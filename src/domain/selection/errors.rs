//! Error types for selection reconciliation.

use thiserror::Error;

/// Errors that can occur while reconciling a selection.
///
/// An industry or service outside the current domain is deliberately *not*
/// an error: the resolver corrects it by falling back within the valid
/// domain, so the worksheet never loses a well-formed selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The submitted category label is outside the fixed three-element set.
    #[error("invalid category: {given}")]
    InvalidCategory { given: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_category_displays_the_offending_label() {
        let err = SelectionError::InvalidCategory {
            given: "BtoX".to_string(),
        };
        assert_eq!(format!("{}", err), "invalid category: BtoX");
    }
}
