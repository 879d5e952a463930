use crate::{
    common::{error::LedgerError, outcome::Outcome},
    domain::{ledger::Ledger, session::Session},
};

pub fn handle(ledger: &Ledger, session: &Session) -> Result<Outcome, LedgerError> {
    let acc = session.account(ledger)?;
    Ok(Outcome::Balance(acc.balance))
}

pub fn history(ledger: &Ledger, session: &Session) -> Result<Outcome, LedgerError> {
    let acc = session.account(ledger)?;
    Ok(Outcome::History {
        name: acc.name.clone(),
        entries: acc.transactions.clone(),
    })
}
