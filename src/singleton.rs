// Lazy process-wide singleton. The instance slot is a Mutex-held
// Option rather than a OnceLock so tests get an explicit reset hook;
// get-or-init under the mutex keeps the at-most-one invariant when
// accessed from multiple threads.

use std::sync::{Arc, Mutex, PoisonError};

use crate::console::Console;

static INSTANCE: Mutex<Option<Arc<Database>>> = Mutex::new(None);

pub struct Database {
    // Construction goes through `instance()` only.
    _private: (),
}

impl Database {
    fn new() -> Self {
        Self { _private: () }
    }

    /// First call constructs and caches the instance; every later call
    /// returns a handle to the identical cached instance.
    pub fn instance() -> Arc<Database> {
        let mut slot = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slot.get_or_insert_with(|| Arc::new(Database::new())))
    }

    /// Clears the cached instance so the next access constructs a fresh
    /// one. Exists for test isolation; production code has no reason to
    /// call it. Handles already given out keep the old instance alive.
    pub fn reset() {
        INSTANCE
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    /// Logs the command it was asked to execute.
    pub fn query(&self, out: &dyn Console, command: &str) {
        out.line(&format!("Executing query: {}", command));
    }
}

pub fn demo(out: &dyn Console) {
    let first = Database::instance();
    first.query(out, "SELECT * FROM users");

    let second = Database::instance();
    out.line(&format!("Same instance: {}", Arc::ptr_eq(&first, &second)));
}
