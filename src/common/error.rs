/// Business-rule failures. These are reported to the user and the menu loop
/// carries on.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account number {0} already exists!")]
    DuplicateAccount(u64),
    #[error("Account {0} not found!")]
    AccountNotFound(u64),
    #[error("Receiver account {0} not found!")]
    ReceiverNotFound(u64),
    #[error("Login first!")]
    NotAuthenticated,
    #[error("Invalid Account or PIN!")]
    InvalidCredentials,
    #[error("Insufficient balance!")]
    InsufficientFunds,
    #[error("Incorrect PIN!")]
    WrongPin,
    #[error("Wrong admin password!")]
    WrongAdminPassphrase,
    #[error("Amount out of range!")]
    AmountOverflow,
}

/// Failure to read or write the data file.
#[derive(thiserror::Error, Debug)]
pub enum PersistError {
    #[error("data file i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("data file json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed record for account {acc_no}: {reason}")]
    Record { acc_no: u64, reason: String },
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid arguments: {0}")]
    Args(#[from] clap::Error),
    #[error("terminal i/o error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("persistence failure: {0}")]
    Persistence(#[from] PersistError),
    #[error("{0}")]
    Ledger(#[from] LedgerError),
    #[error("invalid input: {0}")]
    Input(String),
}
