use crate::{
    common::{error::LedgerError, outcome::Outcome},
    domain::{
        credentials::{CredentialVerifier, PlainText},
        ledger::Ledger,
        session::Session,
    },
};

pub fn handle(
    ledger: &Ledger,
    session: &mut Session,
    acc_no: u64,
    pin: &str,
) -> Result<Outcome, LedgerError> {
    // Same message whichever field was wrong; the session is left as it was.
    let found = ledger
        .accounts()
        .iter()
        .rposition(|a| a.acc_no == acc_no && PlainText(&a.pin).verify(pin))
        .and_then(|i| Some((ledger.get(i)?, ledger.key_at(i)?)));
    let Some((account, key)) = found else {
        tracing::warn!(acc_no, "login rejected");
        return Err(LedgerError::InvalidCredentials);
    };

    session.start(key);
    tracing::info!(acc_no, "logged in");

    Ok(Outcome::LoggedIn {
        acc_no,
        name: account.name.clone(),
    })
}

/// Ends the session. The holder is named only if their own account still
/// exists, not a later one reusing the number.
pub fn logout(ledger: &Ledger, session: &mut Session) -> Outcome {
    match session.end() {
        Some(key) => {
            let acc_no = key.acc_no();
            tracing::info!(acc_no, "logged out");
            Outcome::LoggedOut {
                acc_no,
                name: ledger
                    .locate(key)
                    .and_then(|i| ledger.get(i))
                    .map(|a| a.name.clone()),
            }
        }
        None => Outcome::NobodyLoggedIn,
    }
}
