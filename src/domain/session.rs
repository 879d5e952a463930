use crate::{
    common::error::LedgerError,
    domain::{
        account::Account,
        ledger::{AccountKey, Ledger},
    },
};

/// The one logged-in account of a run, if any.
///
/// Holds the ledger key of the account rather than a reference into the
/// ledger. Once an admin deletes that account the session goes stale, and it
/// stays stale even if the same number is created again.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    current: Option<AccountKey>,
}

impl Session {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn current(&self) -> Option<u64> {
        self.current.map(|key| key.acc_no())
    }

    /// Account number of the active session, or `NotAuthenticated`.
    pub fn require(&self) -> Result<u64, LedgerError> {
        self.current().ok_or(LedgerError::NotAuthenticated)
    }

    /// Ledger index of the logged-in account. A session whose account has
    /// been deleted yields `AccountNotFound`.
    pub fn position(&self, ledger: &Ledger) -> Result<usize, LedgerError> {
        let key = self.current.ok_or(LedgerError::NotAuthenticated)?;
        ledger
            .locate(key)
            .ok_or(LedgerError::AccountNotFound(key.acc_no()))
    }

    pub fn account<'a>(&self, ledger: &'a Ledger) -> Result<&'a Account, LedgerError> {
        let index = self.position(ledger)?;
        ledger
            .get(index)
            .ok_or(LedgerError::AccountNotFound(self.require()?))
    }

    pub fn account_mut<'a>(&self, ledger: &'a mut Ledger) -> Result<&'a mut Account, LedgerError> {
        let index = self.position(ledger)?;
        let acc_no = self.require()?;
        ledger
            .get_mut(index)
            .ok_or(LedgerError::AccountNotFound(acc_no))
    }

    pub fn start(&mut self, key: AccountKey) {
        self.current = Some(key);
    }

    /// Clears the session and returns whoever was logged in.
    pub fn end(&mut self) -> Option<AccountKey> {
        self.current.take()
    }
}
