//! Instance identities for widget instances.
//!
//! Each widget takes one identity at construction. The identity only feeds
//! the default element identifier, so it is never reclaimed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;

/// Prefix of synthesized element identifiers.
pub const DEFAULT_INPUT_ID_PREFIX: &str = "autocomplete-input";

static GLOBAL: Lazy<InstanceRegistry> = Lazy::new(InstanceRegistry::new);

/// Hands out monotonically increasing instance identities.
///
/// Clones share the same counter.
///
/// # Example
///
/// ```rust
/// use lookahead_widget::registry::InstanceRegistry;
///
/// let registry = InstanceRegistry::new();
/// assert_eq!(registry.next_identity(), 1);
/// assert_eq!(registry.next_identity(), 2);
/// assert_eq!(InstanceRegistry::default_input_id(2), "autocomplete-input-2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    issued: Arc<AtomicU64>,
}

impl InstanceRegistry {
    /// Create an isolated registry starting at zero issued identities.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static InstanceRegistry {
        &GLOBAL
    }

    /// Take the next identity. The first call returns 1.
    pub fn next_identity(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of identities issued so far.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    /// Format the default element identifier for an identity.
    pub fn default_input_id(identity: u64) -> String {
        format!("{DEFAULT_INPUT_ID_PREFIX}-{identity}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_increment() {
        let registry = InstanceRegistry::new();
        assert_eq!(registry.issued(), 0);
        assert_eq!(registry.next_identity(), 1);
        assert_eq!(registry.next_identity(), 2);
        assert_eq!(registry.issued(), 2);
    }

    #[test]
    fn test_clones_share_counter() {
        let registry = InstanceRegistry::new();
        let clone = registry.clone();
        registry.next_identity();
        assert_eq!(clone.next_identity(), 2);
    }

    #[test]
    fn test_registries_are_isolated() {
        let a = InstanceRegistry::new();
        let b = InstanceRegistry::new();
        a.next_identity();
        a.next_identity();
        assert_eq!(b.next_identity(), 1);
    }

    #[test]
    fn test_global_is_monotonic() {
        let first = InstanceRegistry::global().next_identity();
        let second = InstanceRegistry::global().next_identity();
        assert!(second > first);
    }
}
