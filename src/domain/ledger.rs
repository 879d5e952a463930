use chrono::NaiveDateTime;

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{
        account::{Account, AccountType},
        transaction::EntryKind,
    },
};

/// Identity of one stored account for the lifetime of a run.
///
/// Keys are handed out in memory and never written to the data file. An
/// account number that is deleted and created again gets a new key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountKey {
    acc_no: u64,
    serial: u64,
}

impl AccountKey {
    pub fn acc_no(&self) -> u64 {
        self.acc_no
    }
}

/// The account store: every account in creation order.
///
/// Lookups are linear scans. Account numbers are unique when accounts come
/// through [`Ledger::create`], but a hand-edited data file can carry
/// duplicates; every lookup then resolves to the last matching entry.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    accounts: Vec<Account>,
    // serials[i] belongs to accounts[i]
    serials: Vec<u64>,
    next_serial: u64,
}

// Keys are run-local, so two ledgers match when their accounts do.
impl PartialEq for Ledger {
    fn eq(&self, other: &Self) -> bool {
        self.accounts == other.accounts
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        let next_serial = accounts.len() as u64;
        Self {
            accounts,
            serials: (0..next_serial).collect(),
            next_serial,
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn create(
        &mut self,
        acc_no: u64,
        name: impl Into<String>,
        pin: impl Into<String>,
        acc_type: AccountType,
        initial_balance: Money,
        at: NaiveDateTime,
    ) -> Result<&Account, LedgerError> {
        if self.position(acc_no).is_some() {
            return Err(LedgerError::DuplicateAccount(acc_no));
        }

        let mut account = Account::new(acc_no, name, pin, acc_type, initial_balance);
        account.record(at, EntryKind::AccountCreated, initial_balance);
        self.accounts.push(account);
        self.serials.push(self.next_serial);
        self.next_serial += 1;

        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// Index of the last account carrying `acc_no`.
    pub fn position(&self, acc_no: u64) -> Option<usize> {
        self.accounts.iter().rposition(|a| a.acc_no == acc_no)
    }

    pub fn find(&self, acc_no: u64) -> Option<&Account> {
        self.position(acc_no).map(|i| &self.accounts[i])
    }

    pub fn find_mut(&mut self, acc_no: u64) -> Option<&mut Account> {
        self.position(acc_no).map(move |i| &mut self.accounts[i])
    }

    pub fn get(&self, index: usize) -> Option<&Account> {
        self.accounts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Account> {
        self.accounts.get_mut(index)
    }

    pub fn key_at(&self, index: usize) -> Option<AccountKey> {
        let account = self.accounts.get(index)?;
        Some(AccountKey {
            acc_no: account.acc_no,
            serial: self.serials[index],
        })
    }

    /// Index of the account `key` was issued for, if it is still stored.
    pub fn locate(&self, key: AccountKey) -> Option<usize> {
        self.serials
            .iter()
            .position(|&serial| serial == key.serial)
            .filter(|&i| self.accounts[i].acc_no == key.acc_no)
    }

    pub fn delete(&mut self, acc_no: u64) -> Result<Account, LedgerError> {
        let index = self
            .position(acc_no)
            .ok_or(LedgerError::AccountNotFound(acc_no))?;
        self.serials.remove(index);
        Ok(self.accounts.remove(index))
    }

    /// Sum of every balance; `AmountOverflow` when it leaves the range.
    pub fn total_balance(&self) -> Result<Money, LedgerError> {
        Money::checked_sum(self.accounts.iter().map(|a| a.balance))
            .ok_or(LedgerError::AmountOverflow)
    }
}
