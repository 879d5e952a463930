use std::fmt;

use crate::{
    common::money::Money,
    domain::{account::Account, transaction::TransactionEntry},
};

/// What a successfully processed command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    AccountCreated { acc_no: u64, name: String },
    LoggedIn { acc_no: u64, name: String },
    /// `name` is `None` when the account was deleted while logged in.
    LoggedOut { acc_no: u64, name: Option<String> },
    NobodyLoggedIn,
    Deposited { amount: Money, balance: Money },
    Withdrawn { amount: Money, balance: Money },
    Transferred { amount: Money, receiver: String },
    Balance(Money),
    History { name: String, entries: Vec<TransactionEntry> },
    PinChanged,
    Dashboard { total: Money, accounts: Vec<Account> },
    AccountDeleted { acc_no: u64, name: String },
    Exit,
}

impl Outcome {
    /// Whether the ledger changed and has to be written out.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Outcome::AccountCreated { .. }
                | Outcome::Deposited { .. }
                | Outcome::Withdrawn { .. }
                | Outcome::Transferred { .. }
                | Outcome::PinChanged
                | Outcome::AccountDeleted { .. }
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::AccountCreated { name, .. } => {
                write!(f, "Account created successfully for {name}!")
            }
            Outcome::LoggedIn { name, .. } => write!(f, "Welcome {name}!"),
            Outcome::LoggedOut {
                name: Some(name), ..
            } => write!(f, "Logged out from {name}'s account."),
            Outcome::LoggedOut { acc_no, name: None } => {
                write!(f, "Logged out from account {acc_no}.")
            }
            Outcome::NobodyLoggedIn => f.write_str("No user logged in."),
            Outcome::Deposited { amount, .. } => write!(f, "Deposited ₹{amount} successfully!"),
            Outcome::Withdrawn { amount, .. } => write!(f, "Withdrawn ₹{amount} successfully!"),
            Outcome::Transferred { amount, receiver } => {
                write!(f, "₹{amount} transferred to {receiver}!")
            }
            Outcome::Balance(balance) => write!(f, "Current Balance: ₹{balance}"),
            Outcome::History { name, entries } => {
                writeln!(f, "Transaction History for {name}")?;
                write!(f, "-----------------------------------------")?;
                for entry in entries {
                    write!(f, "\n{entry}")?;
                }
                Ok(())
            }
            Outcome::PinChanged => f.write_str("PIN updated successfully!"),
            Outcome::Dashboard { total, accounts } => {
                writeln!(f, "====== Admin Dashboard ======")?;
                writeln!(f, "Total Accounts: {}", accounts.len())?;
                writeln!(f, "Total Bank Money: ₹{total}")?;
                writeln!(f)?;
                writeln!(f, "-- All Accounts --")?;
                for account in accounts {
                    writeln!(f, "{account}")?;
                }
                write!(f, "================================")
            }
            Outcome::AccountDeleted { name, .. } => write!(f, "Account {name} deleted!"),
            Outcome::Exit => f.write_str("Thank you for using the Banking System!"),
        }
    }
}
