use crate::common::money::Money;

/// One user action, already parsed, handed from the reader to the processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    Create {
        holder: String,
        account: u64,
        initial_balance: Money,
    },
    Deposit {
        account: u64,
        amount: Money,
    },
    Withdraw {
        account: u64,
        amount: Money,
    },
}

impl LedgerCommand {
    pub fn account(&self) -> u64 {
        match self {
            LedgerCommand::Create { account, .. }
            | LedgerCommand::Deposit { account, .. }
            | LedgerCommand::Withdraw { account, .. } => *account,
        }
    }
}
