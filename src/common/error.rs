use crate::common::money::Money;

/// Failures of a single ledger action. Every variant leaves the registry
/// exactly as it was before the action.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("account {0} does not exist")]
    AccountNotFound(u64),
    #[error("account {0} already exists")]
    DuplicateAccount(u64),
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: Money, available: Money },
    #[error("invalid {field}: {value:?} is not a valid number")]
    InvalidNumericInput { field: &'static str, value: String },
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Money),
    #[error("initial balance must not be negative, got {0}")]
    NegativeInitialBalance(Money),
    #[error("amount {0} overflows the account totals")]
    AmountOverflow(Money),
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

impl LedgerError {
    /// Text shown to the person who submitted the action.
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::AccountNotFound(_) => "Account does not exist.".to_string(),
            LedgerError::DuplicateAccount(_) => "Account already exists.".to_string(),
            LedgerError::InsufficientBalance { .. } => "Insufficient balance".to_string(),
            LedgerError::InvalidNumericInput { .. } => {
                "Invalid input. Please enter valid numbers.".to_string()
            }
            LedgerError::NonPositiveAmount(_) => "Amount must be greater than zero.".to_string(),
            LedgerError::NegativeInitialBalance(_) => {
                "Initial balance must not be negative.".to_string()
            }
            LedgerError::AmountOverflow(_) => "Amount is too large.".to_string(),
            LedgerError::UnknownAction(action) => format!("Unknown action: {action}"),
        }
    }
}

/// Why one input row produced no command.
#[derive(thiserror::Error, Debug)]
pub enum RowError {
    /// The input stream itself failed; nothing after this can be read.
    #[error("failed to read input: {0}")]
    Io(#[source] csv::Error),
    /// This record could not be decoded (bad UTF-8, unexpected shape).
    #[error("unreadable row: {0}")]
    Unreadable(#[source] csv::Error),
    /// The row was readable but its fields do not form a valid action.
    #[error(transparent)]
    Rejected(#[from] LedgerError),
}

impl From<csv::Error> for RowError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            RowError::Io(err)
        } else {
            RowError::Unreadable(err)
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Cli(#[from] clap::Error),
    #[error("failed to open input file: {0}")]
    OpenInput(#[source] std::io::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("transaction log error: {0}")]
    Journal(#[source] std::io::Error),
}
