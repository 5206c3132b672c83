use std::{
    ffi::OsString,
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};

use clap::Parser;
use tracing::{debug, info, warn};

use crate::{
    common::error::{AppError, RowError},
    domain::registry::Registry,
    io::{journal::TransactionLog, reader, writer},
    worker::processor::Processor,
};

#[derive(Parser, Debug)]
#[command(name = "bank_ledger")]
#[command(about = "Create accounts, deposit and withdraw from a CSV of actions")]
pub struct Cli {
    /// Action file with `action,name,account,amount` rows, `-` for stdin
    pub input: String,

    /// Transaction log to append to
    #[arg(long, env = "BANK_LOG_FILE", default_value = "bank_accounts.csv")]
    pub log_file: PathBuf,

    /// Do not write the transaction log
    #[arg(long, env = "BANK_NO_LOG")]
    pub no_log: bool,

    /// Print a CSV of all accounts after the last action
    #[arg(long)]
    pub summary: bool,
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stderr = io::stderr();
    let mut err = stderr.lock();

    execute(&cli, &mut out, &mut err)?;
    out.flush()?;
    Ok(())
}

/// Opens the input and the transaction log named by `cli`, runs the session
/// and, with `--summary`, appends the account CSV to `out`.
pub fn execute<O, E>(cli: &Cli, out: &mut O, err: &mut E) -> Result<SessionOutcome, AppError>
where
    O: Write,
    E: Write,
{
    info!(
        input = %cli.input,
        log_file = %cli.log_file.display(),
        no_log = cli.no_log,
        "starting"
    );

    let input: Box<dyn Read> = if cli.input == "-" {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(&cli.input).map_err(AppError::OpenInput)?)
    };

    let mut journal = if cli.no_log {
        None
    } else {
        Some(TransactionLog::open(&cli.log_file).map_err(AppError::Journal)?)
    };

    let outcome = run_session(input, out, err, journal.as_mut())?;

    if cli.summary {
        writer::write_accounts(&mut *out, &outcome.registry)?;
    }
    Ok(outcome)
}

/// What a session left behind.
#[derive(Debug)]
pub struct SessionOutcome {
    pub registry: Registry,
    pub applied: usize,
    /// Rows that changed nothing, whether refused while parsing or by the
    /// registry.
    pub rejected: usize,
}

/// Applies every row of `input` to a fresh registry.
///
/// Each row is one independent action: results go to `out`, rejections to
/// `err`, and processing carries on with the next row, including rows that
/// cannot be decoded. Only a failing input or output stream aborts the
/// session. Log write
/// failures are reported and do not undo the applied action.
pub fn run_session<R, O, E, J>(
    input: R,
    out: &mut O,
    err: &mut E,
    mut journal: Option<&mut TransactionLog<J>>,
) -> Result<SessionOutcome, AppError>
where
    R: Read,
    O: Write,
    E: Write,
    J: Write,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut registry = Registry::new();
    let mut processor = Processor::new();
    let mut skipped = 0usize;

    for (index, row) in reader::read_commands(&mut reader).enumerate() {
        let row_number = index + 1;
        let command = match row {
            Ok(command) => command,
            Err(RowError::Io(e)) => return Err(AppError::Csv(e)),
            Err(RowError::Unreadable(e)) => {
                skipped += 1;
                warn!(row = row_number, error = %e, "row unreadable");
                writeln!(err, "row {row_number}: Invalid input. Please enter valid numbers.")?;
                continue;
            }
            Err(RowError::Rejected(e)) => {
                skipped += 1;
                warn!(row = row_number, error = %e, "row rejected");
                writeln!(err, "row {row_number}: {}", e.user_message())?;
                continue;
            }
        };
        debug!(row = row_number, ?command, "parsed row");

        match processor.process(&mut registry, command) {
            Ok(record) => {
                writeln!(out, "{}\n", record.summary())?;
                if let Some(log) = journal.as_mut() {
                    if let Err(e) = log.append(&record) {
                        warn!(
                            row = row_number,
                            error = %e,
                            "failed to append transaction log"
                        );
                        writeln!(err, "warning: failed to write transaction log: {e}")?;
                    }
                }
            }
            Err(e) => writeln!(err, "row {row_number}: {}", e.user_message())?,
        }
    }

    let outcome = SessionOutcome {
        registry,
        applied: processor.applied(),
        rejected: processor.rejected() + skipped,
    };
    info!(
        applied = outcome.applied,
        rejected = outcome.rejected,
        accounts = outcome.registry.len(),
        "session finished"
    );
    Ok(outcome)
}
