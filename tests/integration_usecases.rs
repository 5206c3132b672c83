use std::fs;

use bank_ledger::{app::run_session, io::journal::TransactionLog};

struct CaseOutput {
    summary: String,
    stdout: String,
    stderr: String,
}

fn run_case(input_csv: &str) -> CaseOutput {
    let mut out = Vec::<u8>::new();
    let mut err = Vec::<u8>::new();

    let outcome =
        run_session::<_, _, _, Vec<u8>>(input_csv.as_bytes(), &mut out, &mut err, None)
            .expect("session failed");

    let mut summary = Vec::<u8>::new();
    bank_ledger::io::writer::write_accounts(&mut summary, &outcome.registry)
        .expect("failed to write summary CSV");

    CaseOutput {
        summary: String::from_utf8(summary).expect("summary was not valid UTF-8"),
        stdout: String::from_utf8(out).expect("stdout was not valid UTF-8"),
        stderr: String::from_utf8(err).expect("stderr was not valid UTF-8"),
    }
}

fn normalize_csv(s: &str) -> String {
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{name}")).unwrap()
}

#[test]
fn case1_create_deposit_overdraw_then_empty() {
    let actual = run_case(&fixture("case1_input.csv"));

    assert_eq!(
        normalize_csv(&actual.summary),
        normalize_csv(&fixture("case1_expected.csv"))
    );
    assert_eq!(actual.stderr, "row 3: Insufficient balance\n");

    let expected_stdout = "\
Account created!
Account Holder: Alice
Account Number: 1001
Withdraw: 0.00
Deposit: 0.00
Balance: 100.00

Deposit Successful!
Account Holder: Alice
Account Number: 1001
Withdraw: 0.00
Deposit: 50.00
Balance: 150.00

Withdrawal Successful!
Account Holder: Alice
Account Number: 1001
Withdraw: 150.00
Deposit: 50.00
Balance: 0.00

";
    assert_eq!(actual.stdout, expected_stdout);
}

#[test]
fn case2_rejected_rows_leave_state_untouched() {
    let actual = run_case(&fixture("case2_input.csv"));

    assert_eq!(
        normalize_csv(&actual.summary),
        normalize_csv(&fixture("case2_expected.csv"))
    );

    let errors: Vec<&str> = actual.stderr.lines().collect();
    assert_eq!(
        errors,
        vec![
            "row 3: Account already exists.",
            "row 4: Account does not exist.",
            "row 5: Amount must be greater than zero.",
            "row 6: Amount must be greater than zero.",
            "row 8: Insufficient balance",
            "row 10: Invalid input. Please enter valid numbers.",
            "row 11: Unknown action: close",
        ]
    );
}

#[test]
fn case3_decimal_amounts_stay_exact() {
    let actual = run_case(&fixture("case3_input.csv"));

    assert_eq!(
        normalize_csv(&actual.summary),
        normalize_csv(&fixture("case3_expected.csv"))
    );
    assert!(actual.stderr.is_empty());
}

#[test]
fn transaction_log_records_every_applied_action() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bank_accounts.csv");
    let mut log = TransactionLog::open(&path).unwrap();

    let mut out = Vec::<u8>::new();
    let mut err = Vec::<u8>::new();
    run_session(
        fixture("case1_input.csv").as_bytes(),
        &mut out,
        &mut err,
        Some(&mut log),
    )
    .unwrap();
    drop(log);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // header + create + deposit + successful withdrawal
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[0],
        "Date,Account Holder,Account Number,Withdraw,Deposit,Balance"
    );
    assert!(lines[1].ends_with(
        ",Account Holder: Alice,Account Number: 1001,Withdraw: 0.00,Deposit: 0.00,Balance: 100.00"
    ));
    assert!(lines[2].ends_with(",Deposit: 50.00,Balance: 150.00"));
    assert!(lines[3].ends_with(",Withdraw: 150.00,Deposit: 50.00,Balance: 0.00"));

    // "yyyy-MM-dd HH:mm:ss," prefix
    let stamp = &lines[1][..20];
    assert_eq!(stamp.len(), 20);
    assert_eq!(&stamp[4..5], "-");
    assert_eq!(&stamp[10..11], " ");
    assert_eq!(&stamp[19..20], ",");
}
