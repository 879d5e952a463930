use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;

use crate::common::money::Money;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What a log entry records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    AccountCreated,
    Deposit,
    Withdraw,
    /// Outgoing transfer, carrying the receiver's name.
    TransferTo(String),
    /// Incoming transfer, carrying the sender's name.
    ReceivedFrom(String),
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::AccountCreated => f.write_str("Account Created"),
            EntryKind::Deposit => f.write_str("Deposit"),
            EntryKind::Withdraw => f.write_str("Withdraw"),
            EntryKind::TransferTo(name) => write!(f, "Transfer to {name}"),
            EntryKind::ReceivedFrom(name) => write!(f, "Received from {name}"),
        }
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Account Created" => Ok(EntryKind::AccountCreated),
            "Deposit" => Ok(EntryKind::Deposit),
            "Withdraw" => Ok(EntryKind::Withdraw),
            other => {
                if let Some(name) = other.strip_prefix("Transfer to ") {
                    Ok(EntryKind::TransferTo(name.to_string()))
                } else if let Some(name) = other.strip_prefix("Received from ") {
                    Ok(EntryKind::ReceivedFrom(name.to_string()))
                } else {
                    Err(format!("unknown entry kind: {other}"))
                }
            }
        }
    }
}

/// One immutable line of an account's history.
///
/// On disk an entry is a single pre-formatted string:
/// `2024-05-01 10:15:00 - Deposit: ₹200.00 | Balance: ₹700.00`.
/// `Display` produces that line and `FromStr` reads it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEntry {
    pub timestamp: NaiveDateTime,
    pub kind: EntryKind,
    pub amount: Money,
    pub balance: Money,
}

impl TransactionEntry {
    pub fn new(timestamp: NaiveDateTime, kind: EntryKind, amount: Money, balance: Money) -> Self {
        Self {
            timestamp,
            kind,
            amount,
            balance,
        }
    }
}

impl fmt::Display for TransactionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: ₹{} | Balance: ₹{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.kind,
            self.amount,
            self.balance
        )
    }
}

impl FromStr for TransactionEntry {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Holder names are free text, so split from the right where the
        // fixed parts of the line live.
        let (time, rest) = line
            .split_once(" - ")
            .ok_or_else(|| format!("missing timestamp separator in `{line}`"))?;
        let (head, balance) = rest
            .rsplit_once(" | Balance: ₹")
            .ok_or_else(|| format!("missing balance in `{line}`"))?;
        let (kind, amount) = head
            .rsplit_once(": ₹")
            .ok_or_else(|| format!("missing amount in `{line}`"))?;

        let timestamp = NaiveDateTime::parse_from_str(time, TIMESTAMP_FORMAT)
            .map_err(|e| format!("bad timestamp `{time}`: {e}"))?;
        let amount = Money::from_str(amount).map_err(|e| format!("bad amount `{amount}`: {e}"))?;
        let balance =
            Money::from_str(balance).map_err(|e| format!("bad balance `{balance}`: {e}"))?;

        Ok(Self {
            timestamp,
            kind: kind.parse()?,
            amount,
            balance,
        })
    }
}
