use std::collections::HashMap;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::entry::LedgerEntry,
};

/// All accounts known to the process, keyed by account number.
#[derive(Debug, Default)]
pub struct Registry {
    accounts: HashMap<u64, LedgerEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn create_account(
        &mut self,
        holder_name: impl Into<String>,
        account_number: u64,
        initial_balance: Money,
    ) -> Result<&LedgerEntry, LedgerError> {
        if self.accounts.contains_key(&account_number) {
            return Err(LedgerError::DuplicateAccount(account_number));
        }
        if initial_balance.is_negative() {
            return Err(LedgerError::NegativeInitialBalance(initial_balance));
        }

        let entry = LedgerEntry::new(holder_name, account_number, initial_balance);
        Ok(&*self.accounts.entry(account_number).or_insert(entry))
    }

    pub fn lookup(&self, account_number: u64) -> Result<&LedgerEntry, LedgerError> {
        self.accounts
            .get(&account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))
    }

    fn lookup_mut(&mut self, account_number: u64) -> Result<&mut LedgerEntry, LedgerError> {
        self.accounts
            .get_mut(&account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))
    }

    pub fn deposit(
        &mut self,
        account_number: u64,
        amount: Money,
    ) -> Result<&LedgerEntry, LedgerError> {
        let entry = self.lookup_mut(account_number)?;
        entry.deposit(amount)?;
        Ok(&*entry)
    }

    pub fn withdraw(
        &mut self,
        account_number: u64,
        amount: Money,
    ) -> Result<&LedgerEntry, LedgerError> {
        let entry = self.lookup_mut(account_number)?;
        entry.withdraw(amount)?;
        Ok(&*entry)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Entries by ascending account number.
    pub fn sorted_entries(&self) -> Vec<&LedgerEntry> {
        let mut entries: Vec<&LedgerEntry> = self.accounts.values().collect();
        entries.sort_unstable_by_key(|e| e.account_number());
        entries
    }
}
