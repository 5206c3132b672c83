use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

use chrono::{Local, NaiveDateTime};

use crate::domain::transaction::{TransactionRecord, TxKind};

pub const HEADER: &str = "Date,Account Holder,Account Number,Withdraw,Deposit,Balance";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only text log of applied commands.
///
/// One line per record: a local timestamp followed by the entry description
/// with its line breaks turned into commas. The header line goes out once per
/// session, right before the first account-creation record.
#[derive(Debug)]
pub struct TransactionLog<W: Write> {
    out: W,
    header_written: bool,
}

impl TransactionLog<BufWriter<File>> {
    /// Opens `path` for appending, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> TransactionLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn append(&mut self, record: &TransactionRecord) -> io::Result<()> {
        self.append_at(record, Local::now().naive_local())
    }

    pub fn append_at(&mut self, record: &TransactionRecord, at: NaiveDateTime) -> io::Result<()> {
        if record.kind == TxKind::AccountCreated && !self.header_written {
            writeln!(self.out, "{HEADER}")?;
            self.header_written = true;
        }
        writeln!(self.out, "{}", format_line(record, at))?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_line(record: &TransactionRecord, at: NaiveDateTime) -> String {
    format!(
        "{},{}",
        at.format(TIMESTAMP_FORMAT),
        record.snapshot.describe().replace('\n', ",")
    )
}
