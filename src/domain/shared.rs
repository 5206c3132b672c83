use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{entry::LedgerEntry, registry::Registry},
};

/// A `Registry` behind one lock, for front-ends that call in from several
/// threads. Each operation holds the lock for its whole duration and hands
/// back an owned snapshot, so balance and totals are always seen together.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    // Entries are only written after every check has passed, so a panic in
    // another holder cannot leave one half-updated.
    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn create_account(
        &self,
        holder_name: impl Into<String>,
        account_number: u64,
        initial_balance: Money,
    ) -> Result<LedgerEntry, LedgerError> {
        self.lock()
            .create_account(holder_name, account_number, initial_balance)
            .cloned()
    }

    pub fn lookup(&self, account_number: u64) -> Result<LedgerEntry, LedgerError> {
        self.lock().lookup(account_number).cloned()
    }

    pub fn deposit(&self, account_number: u64, amount: Money) -> Result<LedgerEntry, LedgerError> {
        self.lock().deposit(account_number, amount).cloned()
    }

    pub fn withdraw(&self, account_number: u64, amount: Money) -> Result<LedgerEntry, LedgerError> {
        self.lock().withdraw(account_number, amount).cloned()
    }
}
