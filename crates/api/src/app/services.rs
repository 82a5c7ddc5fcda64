use std::sync::{Mutex, MutexGuard};

use coinbank_core::DomainResult;
use coinbank_ledger::LedgerStore;

use crate::app::errors::ApiError;

/// Shared state handed to every handler.
///
/// The whole ledger sits behind one lock. Each store call runs to completion
/// under a single acquisition, so check-then-mutate sequences (duplicate check
/// on create, funds check on withdraw) cannot interleave. The guard never
/// lives across an `.await`.
#[derive(Debug, Default)]
pub struct AppServices {
    store: Mutex<LedgerStore>,
}

impl AppServices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a read-only store operation.
    pub fn read<T>(&self, op: impl FnOnce(&LedgerStore) -> DomainResult<T>) -> Result<T, ApiError> {
        let store = self.lock()?;
        Ok(op(&*store)?)
    }

    /// Run a mutating store operation atomically.
    pub fn write<T>(
        &self,
        op: impl FnOnce(&mut LedgerStore) -> DomainResult<T>,
    ) -> Result<T, ApiError> {
        let mut store = self.lock()?;
        Ok(op(&mut *store)?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, LedgerStore>, ApiError> {
        self.store.lock().map_err(|_| ApiError::StoreUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinbank_core::DomainError;

    #[test]
    fn write_then_read_sees_the_change() {
        let services = AppServices::new();
        services
            .write(|store| store.create_account("111", "Alice").map(|_| ()))
            .unwrap();

        let name = services
            .read(|store| store.find("111").map(|a| a.name().to_string()))
            .unwrap();
        assert_eq!(name, "Alice");
    }

    #[test]
    fn domain_failures_surface_as_api_errors() {
        let services = AppServices::new();
        let err = services.read(|store| store.balance("nobody")).unwrap_err();
        assert!(matches!(err, ApiError::Domain(DomainError::NotFound)));
    }
}
