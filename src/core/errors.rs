use crate::core::types::ProductFamily;
use thiserror::Error;

/// Error types for factory and registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// A product or factory type is missing a required capability
    #[error("Incomplete implementation: {0}")]
    IncompleteImplementation(String),
    /// A factory references a variant kind with no registered constructor
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),
    /// Unsupported label or invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// A variant kind was registered twice
    #[error("Duplicate variant: {0}")]
    DuplicateVariant(String),
    /// A factory produced, or declared, a variant outside its family
    #[error("Family mismatch: variant '{variant}' belongs to {found}, factory produces {expected}")]
    FamilyMismatch {
        variant: String,
        expected: ProductFamily,
        found: ProductFamily,
    },
}

impl FactoryError {
    /// Short name of the error kind, used in registry warnings
    pub fn kind(&self) -> &'static str {
        match self {
            FactoryError::IncompleteImplementation(_) => "IncompleteImplementation",
            FactoryError::UnknownVariant(_) => "UnknownVariant",
            FactoryError::InvalidRequest(_) => "InvalidRequest",
            FactoryError::DuplicateVariant(_) => "DuplicateVariant",
            FactoryError::FamilyMismatch { .. } => "FamilyMismatch",
        }
    }
}
