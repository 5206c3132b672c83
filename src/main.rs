use bank_ledger::{app, common::error::AppError, common::telemetry};

fn main() {
    telemetry::init();

    if let Err(err) = app::run(std::env::args()) {
        match err {
            AppError::Cli(e) => e.exit(),
            other => {
                eprintln!("error: {other}");
                std::process::exit(1);
            }
        }
    }
}
