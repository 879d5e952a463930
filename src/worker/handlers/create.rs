use chrono::NaiveDateTime;

use crate::{
    common::{error::LedgerError, money::Money, outcome::Outcome},
    domain::{account::AccountType, ledger::Ledger},
};

pub fn handle(
    ledger: &mut Ledger,
    acc_no: u64,
    name: String,
    pin: String,
    acc_type: AccountType,
    initial_balance: Money,
    at: NaiveDateTime,
) -> Result<Outcome, LedgerError> {
    let account = ledger.create(acc_no, name, pin, acc_type, initial_balance, at)?;
    tracing::info!(acc_no, %acc_type, balance = %initial_balance, "account created");

    Ok(Outcome::AccountCreated {
        acc_no,
        name: account.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::handlers::testing::{at, money, seeded};

    #[test]
    fn creates_findable_account() {
        let mut ledger = seeded();

        let outcome = handle(
            &mut ledger,
            3003,
            "Carol".into(),
            "5555".into(),
            AccountType::Current,
            money(50),
            at(),
        )
        .unwrap();

        assert_eq!(
            outcome,
            Outcome::AccountCreated {
                acc_no: 3003,
                name: "Carol".into()
            }
        );
        let acc = ledger.find(3003).expect("account exists");
        assert_eq!(acc.balance, money(50));
        assert_eq!(acc.acc_type, AccountType::Current);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn duplicate_number_is_rejected() {
        let mut ledger = seeded();
        let before = ledger.clone();

        let err = handle(
            &mut ledger,
            1001,
            "Eve".into(),
            "0000".into(),
            AccountType::Savings,
            money(1),
            at(),
        )
        .unwrap_err();

        assert_eq!(err, LedgerError::DuplicateAccount(1001));
        assert_eq!(ledger, before);
    }
}
