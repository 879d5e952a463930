use chrono::NaiveDateTime;

use crate::{
    common::{error::LedgerError, money::Money, outcome::Outcome},
    domain::{ledger::Ledger, session::Session, transaction::EntryKind},
};

pub fn handle(
    ledger: &mut Ledger,
    session: &Session,
    amount: Money,
    at: NaiveDateTime,
) -> Result<Outcome, LedgerError> {
    let acc = session.account_mut(ledger)?;
    if !acc.can_cover(amount) {
        return Err(LedgerError::InsufficientFunds);
    }

    acc.debit(at, EntryKind::Withdraw, amount)?;
    tracing::info!(acc_no = acc.acc_no, %amount, balance = %acc.balance, "withdrawal");

    Ok(Outcome::Withdrawn {
        amount,
        balance: acc.balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worker::handlers::testing::{at, logged_in, money, seeded};

    #[test]
    fn withdrawal_decreases_balance_when_sufficient_funds() {
        let mut ledger = seeded();
        let session = logged_in(&ledger, 1001);

        handle(&mut ledger, &session, money(120), at()).unwrap();

        let acc = ledger.find(1001).unwrap();
        assert_eq!(acc.balance, money(380));
        let last = acc.transactions.last().unwrap();
        assert_eq!(last.kind, EntryKind::Withdraw);
        assert_eq!(last.amount, money(120));
        assert_eq!(last.balance, money(380));
    }

    #[test]
    fn withdrawal_of_entire_balance_is_allowed() {
        let mut ledger = seeded();
        let session = logged_in(&ledger, 2002);

        handle(&mut ledger, &session, money(100), at()).unwrap();

        assert_eq!(ledger.find(2002).unwrap().balance, Money::zero());
    }

    #[test]
    fn overdraw_is_rejected_and_nothing_changes() {
        let mut ledger = seeded();
        let session = logged_in(&ledger, 1001);
        let before = ledger.clone();

        let err = handle(&mut ledger, &session, Money::from_minor(50001), at()).unwrap_err();

        assert_eq!(err, LedgerError::InsufficientFunds);
        assert_eq!(ledger, before, "no balance change and no log entry");
    }

    #[test]
    fn login_check_comes_before_funds_check() {
        let mut ledger = seeded();

        let err = handle(&mut ledger, &Session::new(), money(1_000_000), at()).unwrap_err();

        assert_eq!(err, LedgerError::NotAuthenticated);
    }

    #[test]
    fn balance_follows_sequence_of_deposits_and_withdrawals() {
        let mut ledger = seeded();
        let session = logged_in(&ledger, 1001);

        let deposits = [money(10), money(25), Money::from_minor(333)];
        let withdrawals = [money(100), Money::from_minor(1250)];
        for d in deposits {
            crate::worker::handlers::deposit::handle(&mut ledger, &session, d, at()).unwrap();
        }
        for w in withdrawals {
            handle(&mut ledger, &session, w, at()).unwrap();
        }

        // 500 + 10 + 25 + 3.33 - 100 - 12.50
        assert_eq!(ledger.find(1001).unwrap().balance, Money::from_minor(42583));
        assert_eq!(ledger.find(1001).unwrap().transactions.len(), 6);
    }

    #[test]
    fn negative_withdrawal_past_money_range_is_refused() {
        let mut ledger = seeded();
        let session = logged_in(&ledger, 2002);
        ledger.find_mut(2002).unwrap().balance = Money::from_minor(i64::MAX);
        let before = ledger.clone();

        let err = handle(&mut ledger, &session, Money::from_minor(-1), at()).unwrap_err();

        assert_eq!(err, LedgerError::AmountOverflow);
        assert_eq!(ledger, before);
    }
}
