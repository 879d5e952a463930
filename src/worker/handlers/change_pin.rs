use crate::{
    common::{error::LedgerError, outcome::Outcome},
    domain::{
        credentials::{CredentialVerifier, PlainText},
        ledger::Ledger,
        session::Session,
    },
};

/// Checks `old_pin` against the logged-in account without changing anything.
pub fn verify_old(ledger: &Ledger, session: &Session, old_pin: &str) -> Result<(), LedgerError> {
    let acc = session.account(ledger)?;
    if PlainText(&acc.pin).verify(old_pin) {
        Ok(())
    } else {
        Err(LedgerError::WrongPin)
    }
}

/// Replaces the PIN. No format check beyond what the prompt suggests.
pub fn handle(
    ledger: &mut Ledger,
    session: &Session,
    old_pin: &str,
    new_pin: String,
) -> Result<Outcome, LedgerError> {
    verify_old(ledger, session, old_pin)?;

    let acc = session.account_mut(ledger)?;
    acc.pin = new_pin;
    tracing::info!(acc_no = acc.acc_no, "pin changed");

    Ok(Outcome::PinChanged)
}
