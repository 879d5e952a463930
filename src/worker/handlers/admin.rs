use crate::{
    common::{error::LedgerError, outcome::Outcome},
    domain::{credentials::CredentialVerifier, ledger::Ledger},
};

pub fn authorize(verifier: &impl CredentialVerifier, passphrase: &str) -> Result<(), LedgerError> {
    if verifier.verify(passphrase) {
        Ok(())
    } else {
        tracing::warn!("admin passphrase rejected");
        Err(LedgerError::WrongAdminPassphrase)
    }
}

pub fn dashboard(
    ledger: &Ledger,
    verifier: &impl CredentialVerifier,
    passphrase: &str,
) -> Result<Outcome, LedgerError> {
    authorize(verifier, passphrase)?;

    Ok(Outcome::Dashboard {
        total: ledger.total_balance()?,
        accounts: ledger.accounts().to_vec(),
    })
}

/// Removes the account for good. Deleting the logged-in account is allowed
/// and leaves that session pointing at nothing.
pub fn delete(
    ledger: &mut Ledger,
    verifier: &impl CredentialVerifier,
    passphrase: &str,
    acc_no: u64,
) -> Result<Outcome, LedgerError> {
    authorize(verifier, passphrase)?;

    let removed = ledger.delete(acc_no)?;
    tracing::info!(acc_no, "account deleted");

    Ok(Outcome::AccountDeleted {
        acc_no,
        name: removed.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::credentials::AdminPassphrase,
        common::money::Money,
        worker::handlers::testing::{money, seeded},
    };

    fn admin() -> AdminPassphrase {
        AdminPassphrase::new("admin123")
    }

    #[test]
    fn dashboard_reports_count_and_total() {
        let ledger = seeded();

        match dashboard(&ledger, &admin(), "admin123").unwrap() {
            Outcome::Dashboard { total, accounts } => {
                assert_eq!(total, money(600));
                assert_eq!(accounts.len(), 2);
                assert_eq!(accounts[0].acc_no, 1001);
                assert_eq!(accounts[1].acc_no, 2002);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn wrong_passphrase_blocks_both_operations() {
        let mut ledger = seeded();

        assert_eq!(
            dashboard(&ledger, &admin(), "letmein"),
            Err(LedgerError::WrongAdminPassphrase)
        );
        assert_eq!(
            delete(&mut ledger, &admin(), "letmein", 1001),
            Err(LedgerError::WrongAdminPassphrase)
        );
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn delete_removes_account() {
        let mut ledger = seeded();

        let outcome = delete(&mut ledger, &admin(), "admin123", 2002).unwrap();

        assert_eq!(
            outcome,
            Outcome::AccountDeleted {
                acc_no: 2002,
                name: "Bob".into()
            }
        );
        assert!(ledger.find(2002).is_none());
        assert_eq!(
            delete(&mut ledger, &admin(), "admin123", 2002),
            Err(LedgerError::AccountNotFound(2002))
        );
    }

    #[test]
    fn dashboard_reports_total_out_of_range() {
        let mut ledger = seeded();
        ledger.find_mut(1001).unwrap().balance = Money::from_minor(i64::MAX);

        assert_eq!(
            dashboard(&ledger, &admin(), "admin123"),
            Err(LedgerError::AmountOverflow)
        );
    }
}
