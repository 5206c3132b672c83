use tracing::{info, warn};

use crate::{
    common::{error::LedgerError, event::LedgerCommand},
    domain::{registry::Registry, transaction::TransactionRecord},
    worker::handlers::{create, deposit, withdrawal},
};

#[derive(Debug, Default)]
pub struct Processor {
    applied: usize,
    rejected: usize,
}

impl Processor {
    pub fn new() -> Self {
        Self {
            applied: 0,
            rejected: 0,
        }
    }

    /// Applies one command. A rejected command leaves `registry` untouched.
    pub fn process(
        &mut self,
        registry: &mut Registry,
        command: LedgerCommand,
    ) -> Result<TransactionRecord, LedgerError> {
        let account = command.account();
        let result = match command {
            LedgerCommand::Create {
                holder,
                account,
                initial_balance,
            } => create::handle(registry, &holder, account, initial_balance),
            LedgerCommand::Deposit { account, amount } => {
                deposit::handle(registry, account, amount)
            }
            LedgerCommand::Withdraw { account, amount } => {
                withdrawal::handle(registry, account, amount)
            }
        };

        match &result {
            Ok(rec) => {
                self.applied += 1;
                info!(
                    account,
                    kind = ?rec.kind,
                    amount = %rec.amount,
                    balance = %rec.snapshot.balance(),
                    "command applied"
                );
            }
            Err(err) => {
                self.rejected += 1;
                warn!(account, error = %err, "command rejected");
            }
        }
        result
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::money::Money, domain::transaction::TxKind};

    #[test]
    fn processes_the_four_step_session() {
        let mut registry = Registry::new();
        let mut processor = Processor::new();

        let rec = processor
            .process(
                &mut registry,
                LedgerCommand::Create {
                    holder: "Alice".into(),
                    account: 1001,
                    initial_balance: Money::from_units(100),
                },
            )
            .unwrap();
        assert_eq!(rec.kind, TxKind::AccountCreated);

        let rec = processor
            .process(
                &mut registry,
                LedgerCommand::Deposit {
                    account: 1001,
                    amount: Money::from_units(50),
                },
            )
            .unwrap();
        assert_eq!(rec.snapshot.balance(), Money::from_units(150));

        let err = processor
            .process(
                &mut registry,
                LedgerCommand::Withdraw {
                    account: 1001,
                    amount: Money::from_units(200),
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));

        let rec = processor
            .process(
                &mut registry,
                LedgerCommand::Withdraw {
                    account: 1001,
                    amount: Money::from_units(150),
                },
            )
            .unwrap();
        assert_eq!(rec.snapshot.balance(), Money::zero());
        assert_eq!(rec.snapshot.total_withdrawn(), Money::from_units(150));

        assert_eq!(processor.applied(), 3);
        assert_eq!(processor.rejected(), 1);
    }
}
