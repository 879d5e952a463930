//! bank_ledger: a menu-driven bank account simulator that keeps its
//! accounts in a JSON file between runs.

pub mod app;
pub mod config;
pub mod logging;

pub mod common {
    pub mod command;
    pub mod error;
    pub mod money;
    pub mod outcome;
}

pub mod domain {
    pub mod account;
    pub mod credentials;
    pub mod ledger;
    pub mod session;
    pub mod transaction;
}

pub mod io {
    pub mod console;
    pub mod reader;
    pub mod store;
    pub mod writer;
}

pub mod worker {
    pub mod processor;

    pub mod handlers {
        pub mod admin;
        pub mod balance;
        pub mod change_pin;
        pub mod create;
        pub mod deposit;
        pub mod login;
        pub mod transfer;
        pub mod withdrawal;

        #[cfg(test)]
        pub(crate) mod testing;
    }
}
