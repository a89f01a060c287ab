//! Application state management
use parking_lot::RwLock;
use std::sync::Arc;
use stockroom_core::{Config, CoreError, Inventory, Result};

/// Thread-safe application state wrapper
pub struct AppState {
    inventory: Arc<RwLock<Option<Inventory>>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let inventory = Inventory::new(config)?;
        Ok(Self::from_inventory(inventory))
    }

    pub fn from_inventory(inventory: Inventory) -> Self {
        Self {
            inventory: Arc::new(RwLock::new(Some(inventory))),
        }
    }

    pub fn initialize(&self) -> Result<()> {
        self.with_inventory(|inventory| inventory.initialize())
    }

    /// Run `f` against the store. A transient persistence failure is retried
    /// once, immediately.
    pub fn with_inventory<F, T>(&self, f: F) -> Result<T>
    where
        F: Fn(&Inventory) -> Result<T>,
    {
        match self.run(&f) {
            Err(e) if e.is_retryable() => {
                tracing::warn!(error = %e, "Storage call failed, retrying once");
                self.run(&f)
            }
            other => other,
        }
    }

    fn run<F, T>(&self, f: &F) -> Result<T>
    where
        F: Fn(&Inventory) -> Result<T>,
    {
        let guard = self.inventory.read();
        match guard.as_ref() {
            Some(inventory) => f(inventory),
            None => Err(CoreError::Closed),
        }
    }

    /// Close the store. Later commands fail with `CoreError::Closed`.
    pub fn shutdown(&self) {
        if self.inventory.write().take().is_some() {
            tracing::info!("Inventory store closed");
        }
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            inventory: Arc::clone(&self.inventory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;
    use stockroom_core::{StorageError, StockDirection};

    fn state() -> AppState {
        let inventory = Inventory::open_in_memory(Config::new(PathBuf::from("unused"))).unwrap();
        let state = AppState::from_inventory(inventory);
        state.initialize().unwrap();
        state
    }

    fn transient() -> CoreError {
        CoreError::Storage(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::Interrupted,
            "interrupted",
        )))
    }

    #[test]
    fn test_retries_transient_failure_once() {
        let state = state();
        let attempts = Cell::new(0);

        let result = state.with_inventory(|inventory| {
            attempts.set(attempts.get() + 1);
            if attempts.get() == 1 {
                Err(transient())
            } else {
                inventory.list_categories()
            }
        });

        assert!(result.is_ok());
        assert_eq!(attempts.get(), 2);
    }

    #[test]
    fn test_gives_up_after_second_failure() {
        let state = state();
        let attempts = Cell::new(0);

        let result: Result<()> = state.with_inventory(|_| {
            attempts.set(attempts.get() + 1);
            Err(transient())
        });

        assert!(result.is_err());
        assert_eq!(attempts.get(), 2);
    }

    #[test]
    fn test_domain_errors_are_not_retried() {
        let state = state();
        let attempts = Cell::new(0);

        let result = state.with_inventory(|inventory| {
            attempts.set(attempts.get() + 1);
            inventory.adjust_stock("Ghost", 1, StockDirection::In)
        });

        assert!(result.is_err());
        assert_eq!(attempts.get(), 1);
    }

    #[test]
    fn test_shutdown_closes_store() {
        let state = state();
        let other = state.clone();
        state.shutdown();

        let err = other
            .with_inventory(|inventory| inventory.list_items())
            .unwrap_err();
        assert!(matches!(err, CoreError::Closed));
    }
}
