//! Shared fixtures for handler tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    common::money::Money,
    domain::{account::AccountType, ledger::Ledger, session::Session},
};

pub fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

pub fn money(v: i64) -> Money {
    Money::from_minor(v * 100)
}

/// Alice (1001, PIN 1234, 500) and Bob (2002, PIN 4321, 100).
pub fn seeded() -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .create(1001, "Alice", "1234", AccountType::Savings, money(500), at())
        .unwrap();
    ledger
        .create(2002, "Bob", "4321", AccountType::Current, money(100), at())
        .unwrap();
    ledger
}

/// A session on the account `acc_no` currently names in `ledger`.
pub fn logged_in(ledger: &Ledger, acc_no: u64) -> Session {
    let mut session = Session::new();
    let key = ledger
        .position(acc_no)
        .and_then(|i| ledger.key_at(i))
        .expect("fixture account exists");
    session.start(key);
    session
}
