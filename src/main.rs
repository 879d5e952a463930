use bank_ledger::common::error::AppError;

fn main() {
    match bank_ledger::app::run(std::env::args()) {
        Ok(()) => {}
        // --help and --version land here too
        Err(AppError::Args(e)) => e.exit(),
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
