use chrono::NaiveDateTime;

use crate::{
    common::{error::LedgerError, money::Money, outcome::Outcome},
    domain::{ledger::Ledger, session::Session, transaction::EntryKind},
};

/// Moves `amount` from the logged-in account to `to`.
///
/// The receiver is resolved before funds are checked. Both new balances are
/// worked out before either account is touched, so a transfer that would
/// leave the money range changes nothing. Both accounts are updated in
/// memory and logged; the caller flushes once afterwards.
pub fn handle(
    ledger: &mut Ledger,
    session: &Session,
    to: u64,
    amount: Money,
    at: NaiveDateTime,
) -> Result<Outcome, LedgerError> {
    let sender_idx = session.position(ledger)?;
    let sender = session.account(ledger)?;
    let sender_name = sender.name.clone();
    let sender_no = sender.acc_no;
    let sender_balance = sender.balance;
    let sender_covers = sender.can_cover(amount);

    let receiver_idx = ledger
        .position(to)
        .ok_or(LedgerError::ReceiverNotFound(to))?;
    if !sender_covers {
        return Err(LedgerError::InsufficientFunds);
    }

    let receiver = ledger
        .get(receiver_idx)
        .ok_or(LedgerError::ReceiverNotFound(to))?;
    let receiver_name = receiver.name.clone();
    let sender_after = sender_balance
        .checked_sub(amount)
        .ok_or(LedgerError::AmountOverflow)?;
    // a self-transfer credits the already debited balance
    let receiver_base = if receiver_idx == sender_idx {
        sender_after
    } else {
        receiver.balance
    };
    receiver_base
        .checked_add(amount)
        .ok_or(LedgerError::AmountOverflow)?;

    if let Some(sender) = ledger.get_mut(sender_idx) {
        sender.debit(at, EntryKind::TransferTo(receiver_name.clone()), amount)?;
    }
    if let Some(receiver) = ledger.get_mut(receiver_idx) {
        receiver.credit(at, EntryKind::ReceivedFrom(sender_name), amount)?;
    }
    tracing::info!(from = sender_no, to, %amount, "transfer");

    Ok(Outcome::Transferred {
        amount,
        receiver: receiver_name,
    })
}
