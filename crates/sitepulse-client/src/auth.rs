use tracing::warn;

use sitepulse_core::{KeyStore, keys};

use crate::error::Result;

/// What the transport should do after a 401 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedAction {
    /// Clear stored credentials and tell the caller to go to login.
    Redirect,
    /// Leave credentials alone and hand the error back for local handling.
    Propagate,
}

/// Policy consulted by the transport on authentication failure.
///
/// The split exists because admin surfaces run their own auth guard and
/// must see the raw failure, while public surfaces fall back to the login
/// route. Behavior differs by injected policy, not by string checks inside
/// the transport.
pub trait UnauthorizedPolicy: Send + Sync {
    fn on_unauthorized(&self, context_path: &str) -> UnauthorizedAction;
}

/// Default policy: paths under the admin prefix propagate, all other paths
/// redirect.
#[derive(Debug, Clone)]
pub struct PrefixPolicy {
    admin_prefix: String,
}

impl PrefixPolicy {
    pub fn new(admin_prefix: impl Into<String>) -> Self {
        Self {
            admin_prefix: admin_prefix.into(),
        }
    }
}

impl Default for PrefixPolicy {
    fn default() -> Self {
        Self::new("/admin")
    }
}

impl UnauthorizedPolicy for PrefixPolicy {
    fn on_unauthorized(&self, context_path: &str) -> UnauthorizedAction {
        if context_path.starts_with(&self.admin_prefix) {
            UnauthorizedAction::Propagate
        } else {
            UnauthorizedAction::Redirect
        }
    }
}

/// Persist a bearer token (and optional user record) for subsequent
/// requests. Token issuance itself is the backend's business.
pub fn store_credentials(store: &dyn KeyStore, token: &str, user: Option<&str>) -> Result<()> {
    store.set(keys::TOKEN, token)?;
    if let Some(user) = user {
        store.set(keys::USER, user)?;
    }
    Ok(())
}

/// Best-effort credential wipe. Removal failures are logged, not raised,
/// so an auth error is never masked by a storage error.
pub fn clear_credentials(store: &dyn KeyStore) {
    for key in [keys::TOKEN, keys::USER] {
        if let Err(e) = store.remove(key) {
            warn!(key, error = %e, "failed to clear stored credential");
        }
    }
}

pub fn has_token(store: &dyn KeyStore) -> bool {
    store.get(keys::TOKEN).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitepulse_core::MemoryStore;

    #[test]
    fn test_prefix_policy_splits_by_surface() {
        let policy = PrefixPolicy::default();
        assert_eq!(
            policy.on_unauthorized("/services"),
            UnauthorizedAction::Redirect
        );
        assert_eq!(policy.on_unauthorized("/"), UnauthorizedAction::Redirect);
        assert_eq!(
            policy.on_unauthorized("/admin/services"),
            UnauthorizedAction::Propagate
        );
        assert_eq!(
            policy.on_unauthorized("/admin"),
            UnauthorizedAction::Propagate
        );
    }

    #[test]
    fn test_credentials_roundtrip() {
        let store = MemoryStore::new();
        assert!(!has_token(&store));

        store_credentials(&store, "tok-1", Some("{\"id\":1}")).unwrap();
        assert!(has_token(&store));
        assert_eq!(store.get(keys::USER).as_deref(), Some("{\"id\":1}"));

        clear_credentials(&store);
        assert!(!has_token(&store));
        assert!(store.get(keys::USER).is_none());
    }
}
