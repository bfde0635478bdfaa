use std::sync::Arc;

use sitepulse_core::{IdSource, KeyStore, keys, store::get_or_insert_with};

/// Durable per-install identity used by every tracked navigation.
///
/// Both values are "set once, reuse forever" for the lifetime of the
/// backing storage. Storage failures never surface: identity is
/// best-effort like the rest of the telemetry path.
pub struct SessionIdentity {
    store: Arc<dyn KeyStore>,
    ids: Arc<dyn IdSource>,
}

impl SessionIdentity {
    pub fn new(store: Arc<dyn KeyStore>, ids: Arc<dyn IdSource>) -> Self {
        Self { store, ids }
    }

    /// The stable session token, created on first use.
    pub fn session_id(&self) -> String {
        get_or_insert_with(self.store.as_ref(), keys::SESSION_ID, || {
            self.ids.next_id()
        })
    }

    /// The first path ever seen this storage lifetime. Later paths never
    /// overwrite it.
    pub fn landing_page(&self, current_path: &str) -> String {
        get_or_insert_with(self.store.as_ref(), keys::LANDING_PAGE, || {
            current_path.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitepulse_core::{MemoryStore, SequenceSource};

    fn identity(store: Arc<MemoryStore>) -> SessionIdentity {
        SessionIdentity::new(store, Arc::new(SequenceSource::new()))
    }

    #[test]
    fn test_session_id_is_stable_until_storage_cleared() {
        let store = Arc::new(MemoryStore::new());
        let identity = identity(store.clone());

        let first = identity.session_id();
        assert_eq!(identity.session_id(), first);
        assert_eq!(identity.session_id(), first);

        store.clear();
        let second = identity.session_id();
        assert_ne!(second, first);
    }

    #[test]
    fn test_landing_page_is_first_write_wins() {
        let store = Arc::new(MemoryStore::new());
        let identity = identity(store);

        assert_eq!(identity.landing_page("/a"), "/a");
        assert_eq!(identity.landing_page("/b"), "/a");
        assert_eq!(identity.landing_page("/c"), "/a");
    }
}
