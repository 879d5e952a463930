use chrono::NaiveDateTime;

use crate::{
    common::{error::LedgerError, money::Money, outcome::Outcome},
    domain::{ledger::Ledger, session::Session, transaction::EntryKind},
};

/// Credits the logged-in account. Zero and negative amounts go through
/// unchanged; a balance that would leave the money range is refused.
pub fn handle(
    ledger: &mut Ledger,
    session: &Session,
    amount: Money,
    at: NaiveDateTime,
) -> Result<Outcome, LedgerError> {
    let acc = session.account_mut(ledger)?;
    acc.credit(at, EntryKind::Deposit, amount)?;
    tracing::info!(acc_no = acc.acc_no, %amount, balance = %acc.balance, "deposit");

    Ok(Outcome::Deposited {
        amount,
        balance: acc.balance,
    })
}
