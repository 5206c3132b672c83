use crate::common::{error::LedgerError, money::Money};

/// One account: who holds it, its key, and running totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    holder_name: String,
    account_number: u64,
    balance: Money,
    total_deposited: Money,
    total_withdrawn: Money,
}

impl LedgerEntry {
    pub fn new(
        holder_name: impl Into<String>,
        account_number: u64,
        initial_balance: Money,
    ) -> Self {
        Self {
            holder_name: holder_name.into(),
            account_number,
            balance: initial_balance,
            total_deposited: Money::zero(),
            total_withdrawn: Money::zero(),
        }
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_number(&self) -> u64 {
        self.account_number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn total_deposited(&self) -> Money {
        self.total_deposited
    }

    pub fn total_withdrawn(&self) -> Money {
        self.total_withdrawn
    }

    /// Credits `amount`. Nothing is modified unless both the balance and the
    /// deposit counter can absorb it.
    pub fn deposit(&mut self, amount: Money) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow(amount))?;
        let total = self
            .total_deposited
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow(amount))?;

        self.balance = balance;
        self.total_deposited = total;
        Ok(())
    }

    /// Debits `amount` if the balance covers it.
    pub fn withdraw(&mut self, amount: Money) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        let total = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow(amount))?;

        self.balance -= amount;
        self.total_withdrawn = total;
        Ok(())
    }

    /// Multi-line snapshot, one `Label: value` pair per line.
    pub fn describe(&self) -> String {
        format!(
            "Account Holder: {}\nAccount Number: {}\nWithdraw: {}\nDeposit: {}\nBalance: {}",
            self.holder_name,
            self.account_number,
            self.total_withdrawn,
            self.total_deposited,
            self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> LedgerEntry {
        LedgerEntry::new("Alice", 1001, Money::from_units(100))
    }

    #[test]
    fn new_entry_starts_with_zero_totals() {
        let entry = alice();
        assert_eq!(entry.holder_name(), "Alice");
        assert_eq!(entry.account_number(), 1001);
        assert_eq!(entry.balance(), Money::from_units(100));
        assert_eq!(entry.total_deposited(), Money::zero());
        assert_eq!(entry.total_withdrawn(), Money::zero());
    }

    #[test]
    fn deposit_raises_balance_and_total() {
        let mut entry = alice();
        entry.deposit(Money::from_units(50)).unwrap();
        assert_eq!(entry.balance(), Money::from_units(150));
        assert_eq!(entry.total_deposited(), Money::from_units(50));
        assert_eq!(entry.total_withdrawn(), Money::zero());
    }

    #[test]
    fn deposit_rejects_zero_and_negative_amounts() {
        let mut entry = alice();
        assert_eq!(
            entry.deposit(Money::zero()),
            Err(LedgerError::NonPositiveAmount(Money::zero()))
        );
        assert_eq!(
            entry.deposit(Money::from_units(-5)),
            Err(LedgerError::NonPositiveAmount(Money::from_units(-5)))
        );
        assert_eq!(entry, alice());
    }

    #[test]
    fn deposit_overflow_leaves_entry_untouched() {
        let mut entry = LedgerEntry::new("Max", 1, Money::from_cents(i64::MAX - 1));
        let before = entry.clone();
        assert_eq!(
            entry.deposit(Money::from_cents(2)),
            Err(LedgerError::AmountOverflow(Money::from_cents(2)))
        );
        assert_eq!(entry, before);
    }

    #[test]
    fn withdraw_of_entire_balance_reaches_zero() {
        let mut entry = alice();
        entry.withdraw(Money::from_units(100)).unwrap();
        assert_eq!(entry.balance(), Money::zero());
        assert_eq!(entry.total_withdrawn(), Money::from_units(100));
    }

    #[test]
    fn withdraw_beyond_balance_fails_without_side_effects() {
        let mut entry = alice();
        let err = entry.withdraw(Money::from_units(200)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                requested: Money::from_units(200),
                available: Money::from_units(100),
            }
        );
        assert_eq!(entry, alice());
    }

    #[test]
    fn withdraw_rejects_negative_amount() {
        let mut entry = alice();
        assert!(matches!(
            entry.withdraw(Money::from_units(-1)),
            Err(LedgerError::NonPositiveAmount(_))
        ));
        assert_eq!(entry.balance(), Money::from_units(100));
    }

    #[test]
    fn describe_lists_every_field_on_its_own_line() {
        let mut entry = alice();
        entry.deposit(Money::from_cents(1050)).unwrap();
        entry.withdraw(Money::from_units(20)).unwrap();
        assert_eq!(
            entry.describe(),
            "Account Holder: Alice\n\
             Account Number: 1001\n\
             Withdraw: 20.00\n\
             Deposit: 10.50\n\
             Balance: 90.50"
        );
    }
}
