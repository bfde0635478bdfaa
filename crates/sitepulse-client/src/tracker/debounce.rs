use std::sync::Mutex;

struct LastTracked {
    path: String,
    at_millis: u64,
}

/// Per-tracker duplicate suppression.
///
/// In-memory only: a process restart starts fresh, matching the lifetime
/// of the page it models. Owned by the tracker instance rather than
/// ambient module state so independent trackers never share it.
pub(crate) struct DebounceState {
    last: Mutex<Option<LastTracked>>,
}

impl DebounceState {
    pub(crate) fn new() -> Self {
        Self {
            last: Mutex::new(None),
        }
    }

    /// True when `path` matches the previously tracked path and fewer than
    /// `window_ms` milliseconds have passed. A duplicate leaves the state
    /// untouched.
    pub(crate) fn is_duplicate(&self, path: &str, now_millis: u64, window_ms: u64) -> bool {
        let last = self.last.lock().unwrap();
        match last.as_ref() {
            Some(prev) => {
                prev.path == path && now_millis.saturating_sub(prev.at_millis) < window_ms
            }
            None => false,
        }
    }

    pub(crate) fn record(&self, path: &str, now_millis: u64) {
        *self.last.lock().unwrap() = Some(LastTracked {
            path: path.to_string(),
            at_millis: now_millis,
        });
    }
}
