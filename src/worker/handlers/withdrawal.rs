use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        registry::Registry,
        transaction::{TransactionRecord, TxKind},
    },
};

pub fn handle(
    registry: &mut Registry,
    account: u64,
    amount: Money,
) -> Result<TransactionRecord, LedgerError> {
    let entry = registry.withdraw(account, amount)?;
    Ok(TransactionRecord::new(TxKind::Withdrawal, amount, entry.clone()))
}
