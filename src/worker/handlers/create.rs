use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        registry::Registry,
        transaction::{TransactionRecord, TxKind},
    },
};

pub fn handle(
    registry: &mut Registry,
    holder: &str,
    account: u64,
    initial_balance: Money,
) -> Result<TransactionRecord, LedgerError> {
    let entry = registry.create_account(holder, account, initial_balance)?;
    Ok(TransactionRecord::new(
        TxKind::AccountCreated,
        initial_balance,
        entry.clone(),
    ))
}
