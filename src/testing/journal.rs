use std::sync::{Arc, Mutex};

/// Ordered log of calls shared by the fakes so tests can assert cross-port ordering.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Entries mentioning `name`, with the name stripped, e.g. `["fork", "clone"]`.
    pub fn calls_for(&self, name: &str) -> Vec<String> {
        let suffix = format!(" {}", name);
        self.entries()
            .into_iter()
            .filter_map(|e| e.strip_suffix(&suffix).map(str::to_string))
            .collect()
    }
}
