//! # Errors
//!
//! The framework itself fails in very few ways. Lookups of unregistered
//! names are not errors (they return `None`), redundant removals are no-ops,
//! and registering a mediator twice is silently ignored. What remains is
//! misuse of the multiton registry and notifiers that were never bound to a
//! core.
//!
//! Failures raised by user code during dispatch travel as [`anyhow::Error`].

use thiserror::Error;

/// Errors raised by the framework itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An actor was constructed for a multiton key that already has one
    #[error("{component} instance for multiton key '{key}' already constructed")]
    DuplicateMultiton {
        component: &'static str,
        key: String,
    },

    /// A notifier was used before a multiton key was assigned to it
    #[error("multiton key for this notifier not yet initialized")]
    NotifierUnbound,
}

impl Error {
    pub(crate) fn duplicate(component: &'static str, key: &str) -> Self {
        Self::DuplicateMultiton {
            component,
            key: key.to_string(),
        }
    }
}

/// Result alias for framework operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_multiton_should_name_component_and_key() {
        let error = Error::duplicate("Model", "core-a");
        assert_eq!(
            error.to_string(),
            "Model instance for multiton key 'core-a' already constructed"
        );
    }

    #[test]
    fn framework_errors_should_convert_into_anyhow() {
        let error: anyhow::Error = Error::NotifierUnbound.into();
        assert_eq!(
            error.downcast_ref::<Error>(),
            Some(&Error::NotifierUnbound)
        );
    }
}
