use std::io::Write;

use crate::domain::registry::Registry;

#[derive(serde::Serialize)]
/// Output row; headers are `account,holder,deposited,withdrawn,balance`.
/// Amounts are rendered with two decimal places.
struct SummaryRow<'a> {
    account: u64,
    holder: &'a str,
    deposited: String,
    withdrawn: String,
    balance: String,
}

/// Writes one CSV row per account, ordered by account number.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bank_ledger::common::money::Money;
/// use bank_ledger::domain::registry::Registry;
/// use bank_ledger::io::writer::write_accounts;
///
/// let mut registry = Registry::new();
/// registry.create_account("Bob", 2, Money::zero()).unwrap();
/// registry.create_account("Alice", 1, Money::from_units(10)).unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, &registry).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert!(s.starts_with("account,holder,deposited,withdrawn,balance\n"));
/// assert!(s.contains("\n1,Alice,0.00,0.00,10.00\n2,Bob,"));
/// ```
pub fn write_accounts<W: Write>(writer: W, registry: &Registry) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for entry in registry.sorted_entries() {
        wtr.serialize(SummaryRow {
            account: entry.account_number(),
            holder: entry.holder_name(),
            deposited: entry.total_deposited().to_string(),
            withdrawn: entry.total_withdrawn().to_string(),
            balance: entry.balance().to_string(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
