use crate::{common::money::Money, domain::entry::LedgerEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxKind {
    AccountCreated,
    Deposit,
    Withdrawal,
}

impl TxKind {
    /// Status line shown above the account snapshot.
    pub fn headline(self) -> &'static str {
        match self {
            TxKind::AccountCreated => "Account created!",
            TxKind::Deposit => "Deposit Successful!",
            TxKind::Withdrawal => "Withdrawal Successful!",
        }
    }
}

/// A successfully applied command and the account state right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub kind: TxKind,
    pub amount: Money,
    pub snapshot: LedgerEntry,
}

impl TransactionRecord {
    pub fn new(kind: TxKind, amount: Money, snapshot: LedgerEntry) -> Self {
        Self {
            kind,
            amount,
            snapshot,
        }
    }

    /// Headline followed by the snapshot description.
    pub fn summary(&self) -> String {
        format!("{}\n{}", self.kind.headline(), self.snapshot.describe())
    }
}
