use crate::common::{
    error::{LedgerError, RowError},
    event::LedgerCommand,
    money::Money,
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Raw row: the three text fields a user fills in plus the chosen action.
/// Numbers stay as text here so a bad value can be reported verbatim.
struct CsvRow {
    action: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    account: Option<String>,
    // blank means "no initial balance" for create
    #[serde(default)]
    amount: Option<String>,
}

/// Reads user actions from a CSV reader.
///
/// Expected headers: `action,name,account,amount`. `action` is one of
/// `create`, `deposit` or `withdraw` (case-insensitive, `withdrawal` is also
/// accepted). `amount` may be blank only for `create`, where it defaults to
/// zero.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_commands;
/// use bank_ledger::common::event::LedgerCommand;
/// use csv::ReaderBuilder;
///
/// let data = "action,name,account,amount\n\
/// create,Alice,1001,100.0\n\
/// deposit,,1001,50\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(LedgerCommand::Create { account: 1001, .. })));
/// assert!(matches!(commands[1], Ok(LedgerCommand::Deposit { account: 1001, .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerCommand, RowError>> + '_ {
    rdr.deserialize::<CsvRow>()
        .map(|res| -> Result<LedgerCommand, RowError> {
            let row = res?;
            Ok(parse_row(row)?)
        })
}

fn parse_row(row: CsvRow) -> Result<LedgerCommand, LedgerError> {
    let kind = row.action.trim().to_ascii_lowercase();

    match kind.as_str() {
        "create" => {
            let account = parse_account(row.account)?;
            let initial_balance = match non_blank(row.amount) {
                Some(text) => parse_amount(&text)?,
                None => Money::zero(),
            };
            Ok(LedgerCommand::Create {
                holder: row.name.unwrap_or_default().trim().to_string(),
                account,
                initial_balance,
            })
        }
        "deposit" => {
            let account = parse_account(row.account)?;
            let amount = required_amount(row.amount)?;
            Ok(LedgerCommand::Deposit { account, amount })
        }
        "withdraw" | "withdrawal" => {
            let account = parse_account(row.account)?;
            let amount = required_amount(row.amount)?;
            Ok(LedgerCommand::Withdraw { account, amount })
        }
        _ => Err(LedgerError::UnknownAction(row.action)),
    }
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

fn parse_account(field: Option<String>) -> Result<u64, LedgerError> {
    let text = field.unwrap_or_default();
    text.trim()
        .parse()
        .map_err(|_| LedgerError::InvalidNumericInput {
            field: "account",
            value: text,
        })
}

fn parse_amount(text: &str) -> Result<Money, LedgerError> {
    Money::from_str(text).map_err(|_| LedgerError::InvalidNumericInput {
        field: "amount",
        value: text.to_string(),
    })
}

fn required_amount(field: Option<String>) -> Result<Money, LedgerError> {
    let text = non_blank(field).ok_or_else(|| LedgerError::InvalidNumericInput {
        field: "amount",
        value: String::new(),
    })?;
    parse_amount(&text)
}
