//! Credential Registry Module
//!
//! Tracks which credentials are currently bound to a live session. The
//! registry is an explicit, shareable object injected into session
//! construction rather than hidden process-wide state, so tests can build a
//! fresh one per case.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Result, WeatherError};

// == Credential Registry ==
/// Shared set of credentials with at most one live session each.
///
/// Cloning produces another handle to the same underlying set.
#[derive(Debug, Clone, Default)]
pub struct CredentialRegistry {
    active: Arc<Mutex<HashSet<String>>>,
}

impl CredentialRegistry {
    // == Constructor ==
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // == Register ==
    /// Binds a credential to a session.
    ///
    /// # Errors
    /// Returns [`WeatherError::DuplicateCredential`] if the credential is
    /// already bound to a live session.
    pub fn register(&self, credential: &str) -> Result<()> {
        let mut active = self.active.lock();
        if !active.insert(credential.to_string()) {
            return Err(WeatherError::DuplicateCredential(credential.to_string()));
        }
        Ok(())
    }

    // == Release ==
    /// Unbinds a credential. Releasing an unbound credential is a no-op.
    pub fn release(&self, credential: &str) {
        self.active.lock().remove(credential);
    }

    // == Is Active ==
    /// Checks whether a credential is currently bound.
    pub fn is_active(&self, credential: &str) -> bool {
        self.active.lock().contains(credential)
    }

    // == Length ==
    /// Returns the number of currently bound credentials.
    pub fn len(&self) -> usize {
        self.active.lock().len()
    }

    /// Returns true if no credential is bound.
    pub fn is_empty(&self) -> bool {
        self.active.lock().is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_register_and_release() {
        let registry = CredentialRegistry::new();

        registry.register("key-a").unwrap();
        assert!(registry.is_active("key-a"));
        assert_eq!(registry.len(), 1);

        registry.release("key-a");
        assert!(!registry.is_active("key-a"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_rejects_duplicate() {
        let registry = CredentialRegistry::new();

        registry.register("key-a").unwrap();
        let err = registry.register("key-a").unwrap_err();

        assert!(matches!(err, WeatherError::DuplicateCredential(_)));
    }

    #[test]
    fn test_registry_reregister_after_release() {
        let registry = CredentialRegistry::new();

        registry.register("key-a").unwrap();
        registry.release("key-a");
        registry.register("key-a").unwrap();

        assert!(registry.is_active("key-a"));
    }

    #[test]
    fn test_registry_release_unbound_is_noop() {
        let registry = CredentialRegistry::new();
        registry.release("never-registered");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_clones_share_state() {
        let registry = CredentialRegistry::new();
        let other = registry.clone();

        registry.register("key-a").unwrap();
        assert!(other.is_active("key-a"));
        assert!(other.register("key-a").is_err());
    }
}
