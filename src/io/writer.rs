use std::io::Write;

use crate::{
    common::{error::PersistError, money::Money},
    domain::account::Account,
};

#[derive(serde::Serialize)]
/// Output shape of one account. Field names and order are the data file
/// format: `acc_no,name,pin,acc_type,balance,transactions`.
struct AccountRow<'a> {
    acc_no: u64,
    name: &'a str,
    pin: &'a str,
    acc_type: String,
    balance: Money,
    transactions: Vec<String>,
}

/// Writes every account, in store order, as one pretty-printed JSON array.
///
/// Transaction entries become their human-readable log lines.
///
/// # Errors
///
/// Returns a `PersistError` if serializing or writing fails.
pub fn write_accounts<W: Write>(mut writer: W, accounts: &[Account]) -> Result<(), PersistError> {
    let rows: Vec<AccountRow<'_>> = accounts
        .iter()
        .map(|acc| AccountRow {
            acc_no: acc.acc_no,
            name: &acc.name,
            pin: &acc.pin,
            acc_type: acc.acc_type.to_string(),
            balance: acc.balance,
            transactions: acc.transactions.iter().map(ToString::to_string).collect(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
