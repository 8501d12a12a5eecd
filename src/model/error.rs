//! Error values returned by the build-planning model
//!
//! All of these are recoverable: a rejected operation leaves the state it
//! targeted unchanged, and the UI reports the message on the status line.

/// Outcome signals from catalog, configuration, and comparison operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("You can compare up to {limit} builds at a time")]
    CapacityExceeded { limit: usize },

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

impl DomainError {
    /// Shorthand for the not-found case
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
