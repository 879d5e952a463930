use std::io::Read;

use crate::{
    common::{error::PersistError, money::Money},
    domain::{
        account::{Account, AccountType},
        transaction::TransactionEntry,
    },
};

#[derive(serde::Deserialize)]
/// One element of the data file's top-level array.
struct AccountRow {
    acc_no: u64,
    name: String,
    pin: String,
    acc_type: String,
    balance: Money,
    #[serde(default)]
    transactions: Vec<String>,
}

/// Reads the whole data file: a JSON array of account objects.
///
/// Log lines are parsed back into structured entries and `acc_type` must be
/// `Savings` or `Current` (any case). Any malformed element fails the whole
/// read; there is no partial recovery.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_accounts;
///
/// let data = r#"[{"acc_no": 1001, "name": "Alice", "pin": "1234",
///   "acc_type": "Savings", "balance": 500.0,
///   "transactions": ["2024-05-01 10:00:00 - Account Created: ₹500.0 | Balance: ₹500.0"]}]"#;
/// let accounts = read_accounts(data.as_bytes()).unwrap();
///
/// assert_eq!(accounts[0].acc_no, 1001);
/// assert_eq!(accounts[0].transactions.len(), 1);
/// ```
pub fn read_accounts<R: Read>(rdr: R) -> Result<Vec<Account>, PersistError> {
    let rows: Vec<AccountRow> = serde_json::from_reader(rdr)?;
    rows.into_iter().map(into_account).collect()
}

fn into_account(row: AccountRow) -> Result<Account, PersistError> {
    let acc_no = row.acc_no;
    let malformed = |reason: String| PersistError::Record { acc_no, reason };

    let acc_type: AccountType = row.acc_type.parse().map_err(malformed)?;
    let transactions = row
        .transactions
        .iter()
        .map(|line| line.parse::<TransactionEntry>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(malformed)?;

    let mut account = Account::new(acc_no, row.name, row.pin, acc_type, row.balance);
    account.transactions = transactions;
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::EntryKind;

    #[test]
    fn reads_accounts_with_history() {
        let data = r#"[
            {"acc_no": 1001, "name": "Alice", "pin": "1234", "acc_type": "Savings",
             "balance": 400.0, "transactions": [
                "2024-05-01 10:00:00 - Account Created: ₹500.0 | Balance: ₹500.0",
                "2024-05-01 10:05:00 - Transfer to Bob: ₹100.0 | Balance: ₹400.0"
             ]},
            {"acc_no": 2002, "name": "Bob", "pin": "4321", "acc_type": "current",
             "balance": 200, "transactions": []}
        ]"#;

        let accounts = read_accounts(data.as_bytes()).unwrap();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].balance, Money::from_minor(40000));
        assert_eq!(
            accounts[0].transactions[1].kind,
            EntryKind::TransferTo("Bob".into())
        );
        assert_eq!(accounts[1].acc_type, AccountType::Current);
        assert_eq!(accounts[1].balance, Money::from_minor(20000));
    }

    #[test]
    fn empty_array_is_empty_store() {
        assert!(read_accounts("[]".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn missing_transactions_field_defaults_to_empty() {
        let data = r#"[{"acc_no": 1, "name": "A", "pin": "1", "acc_type": "Savings", "balance": 0}]"#;
        let accounts = read_accounts(data.as_bytes()).unwrap();
        assert!(accounts[0].transactions.is_empty());
    }

    #[test]
    fn reports_unknown_account_type() {
        let data = r#"[{"acc_no": 7, "name": "A", "pin": "1", "acc_type": "Fixed", "balance": 0}]"#;

        let err = read_accounts(data.as_bytes()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "malformed record for account 7: unknown account type: fixed"
        );
    }

    #[test]
    fn reports_bad_log_line() {
        let data = r#"[{"acc_no": 8, "name": "A", "pin": "1", "acc_type": "Savings",
            "balance": 0, "transactions": ["garbage"]}]"#;

        let err = read_accounts(data.as_bytes()).unwrap_err();

        assert!(matches!(err, PersistError::Record { acc_no: 8, .. }));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            read_accounts("{not json".as_bytes()),
            Err(PersistError::Json(_))
        ));
        assert!(matches!(
            read_accounts(r#"[{"acc_no": "x"}]"#.as_bytes()),
            Err(PersistError::Json(_))
        ));
    }
}
