use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::transaction::{EntryKind, TransactionEntry},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Savings,
    Current,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Savings => f.write_str("Savings"),
            AccountType::Current => f.write_str("Current"),
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    /// Accepts any casing, e.g. `savings` or `CURRENT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "savings" => Ok(AccountType::Savings),
            "current" => Ok(AccountType::Current),
            other => Err(format!("unknown account type: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub acc_no: u64,
    pub name: String,
    pub pin: String,
    pub acc_type: AccountType,
    pub balance: Money,
    /// Append-only history, oldest first.
    pub transactions: Vec<TransactionEntry>,
}

impl Account {
    pub fn new(
        acc_no: u64,
        name: impl Into<String>,
        pin: impl Into<String>,
        acc_type: AccountType,
        balance: Money,
    ) -> Self {
        Self {
            acc_no,
            name: name.into(),
            pin: pin.into(),
            acc_type,
            balance,
            transactions: Vec::new(),
        }
    }

    /// Appends a log entry snapshotting the balance as it is now.
    pub fn record(&mut self, at: NaiveDateTime, kind: EntryKind, amount: Money) {
        self.transactions
            .push(TransactionEntry::new(at, kind, amount, self.balance));
    }

    /// Adds `amount` and logs it. On overflow nothing changes.
    pub fn credit(
        &mut self,
        at: NaiveDateTime,
        kind: EntryKind,
        amount: Money,
    ) -> Result<(), LedgerError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        self.record(at, kind, amount);
        Ok(())
    }

    pub fn debit(
        &mut self,
        at: NaiveDateTime,
        kind: EntryKind,
        amount: Money,
    ) -> Result<(), LedgerError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        self.record(at, kind, amount);
        Ok(())
    }

    pub fn can_cover(&self, amount: Money) -> bool {
        amount <= self.balance
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account: {} | {} | {} | Balance: ₹{}",
            self.acc_no, self.name, self.acc_type, self.balance
        )
    }
}
