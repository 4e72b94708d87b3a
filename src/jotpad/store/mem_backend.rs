use super::backend::StorageBackend;
use crate::error::{JotpadError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since jotpad is single-threaded,
/// which lets `StorageBackend` keep `&self` on every method.
#[derive(Default)]
pub struct MemBackend {
    items: RefCell<HashMap<String, String>>,
    simulate_read_error: Cell<bool>,
    simulate_write_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `value` under `key`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Raw stored value, bypassing error simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of successful `set_item` calls.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(JotpadError::StorageRead("Simulated read error".to_string()));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(JotpadError::StorageWrite(
                "Simulated write error".to_string(),
            ));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
