// Output sink shared by all demos.
// Demos log through `&dyn Console` so tests capture lines in memory
// instead of scraping process stdout.

use std::sync::{Mutex, PoisonError};

pub trait Console {
    fn line(&self, message: &str);
}

/// Real sink: one `println!` per line.
pub struct Stdout;

impl Console for Stdout {
    fn line(&self, message: &str) {
        println!("{}", message);
    }
}

/// In-memory fake for tests. Interior mutability keeps it usable
/// through `&self`, the same shape as the real sink.
#[derive(Default)]
pub struct Memory {
    lines: Mutex<Vec<String>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far, in call order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Console for Memory {
    fn line(&self, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
