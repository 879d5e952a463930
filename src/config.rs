use std::path::PathBuf;

use clap::Parser;

/// Runtime settings, from flags or the environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "bank_ledger", version, about = "Menu-driven bank account simulator")]
pub struct Config {
    /// JSON file holding every account between runs
    #[arg(long, env = "BANK_DATA_FILE", default_value = "bank_accounts.json")]
    pub data_file: PathBuf,

    /// Passphrase for the admin dashboard and account deletion
    #[arg(
        long,
        env = "BANK_ADMIN_PASSPHRASE",
        default_value = "admin123",
        hide_default_value = true,
        hide_env_values = true
    )]
    pub admin_passphrase: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
