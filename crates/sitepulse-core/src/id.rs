use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of effectively-unique opaque tokens (session identifiers).
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// UUIDv4 tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic sequence for tests: "id-1", "id-2", ...
#[derive(Debug, Default)]
pub struct SequenceSource {
    counter: AtomicU64,
}

impl SequenceSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequenceSource {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("id-{}", n)
    }
}
