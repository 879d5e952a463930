use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::{
    common::{
        command::Command,
        error::{LedgerError, PersistError},
        outcome::Outcome,
    },
    domain::{credentials::AdminPassphrase, ledger::Ledger, session::Session},
    io::store::Persistence,
    worker::handlers::{admin, balance, change_pin, create, deposit, login, transfer, withdrawal},
};

/// Result of a command that passed every business check.
#[derive(Debug)]
pub struct Processed {
    pub outcome: Outcome,
    /// Set when the ledger changed but could not be written out. The
    /// in-memory change is kept either way.
    pub save_error: Option<PersistError>,
}

/// Dispatches commands to their handlers and flushes the ledger after each
/// one that changed it.
#[derive(Debug)]
pub struct Processor<P> {
    store: P,
    admin: AdminPassphrase,
    clock: fn() -> NaiveDateTime,
}

impl<P: Persistence> Processor<P> {
    pub fn new(store: P, admin: AdminPassphrase) -> Self {
        Self {
            store,
            admin,
            clock: local_now,
        }
    }

    /// Replaces the source of log entry timestamps.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn admin(&self) -> &AdminPassphrase {
        &self.admin
    }

    pub fn process(
        &mut self,
        ledger: &mut Ledger,
        session: &mut Session,
        command: Command,
    ) -> Result<Processed, LedgerError> {
        let at = (self.clock)();

        let outcome = match command {
            Command::CreateAccount {
                acc_no,
                name,
                pin,
                acc_type,
                initial_balance,
            } => create::handle(ledger, acc_no, name, pin, acc_type, initial_balance, at)?,
            Command::Login { acc_no, pin } => login::handle(ledger, session, acc_no, &pin)?,
            Command::Deposit { amount } => deposit::handle(ledger, session, amount, at)?,
            Command::Withdraw { amount } => withdrawal::handle(ledger, session, amount, at)?,
            Command::Transfer { to, amount } => transfer::handle(ledger, session, to, amount, at)?,
            Command::CheckBalance => balance::handle(ledger, session)?,
            Command::History => balance::history(ledger, session)?,
            Command::ChangePin { old_pin, new_pin } => {
                change_pin::handle(ledger, session, &old_pin, new_pin)?
            }
            Command::AdminDashboard { passphrase } => {
                admin::dashboard(ledger, &self.admin, &passphrase)?
            }
            Command::AdminDelete { passphrase, acc_no } => {
                admin::delete(ledger, &self.admin, &passphrase, acc_no)?
            }
            Command::Logout => login::logout(ledger, session),
            Command::Exit => Outcome::Exit,
        };

        let save_error = if outcome.mutates() {
            self.store.save(ledger).err()
        } else {
            None
        };
        if let Some(e) = &save_error {
            tracing::warn!(error = %e, "ledger changed in memory but was not saved");
        }

        Ok(Processed {
            outcome,
            save_error,
        })
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::account::AccountType,
        io::store::MemoryStore,
        worker::handlers::testing::{at, money},
    };

    fn processor(store: MemoryStore) -> Processor<MemoryStore> {
        Processor::new(store, AdminPassphrase::new("admin123")).with_clock(at)
    }

    fn create(acc_no: u64, name: &str, pin: &str, balance: i64) -> Command {
        Command::CreateAccount {
            acc_no,
            name: name.into(),
            pin: pin.into(),
            acc_type: AccountType::Savings,
            initial_balance: money(balance),
        }
    }

    #[test]
    fn mutating_commands_flush_and_reads_do_not() {
        let mut p = processor(MemoryStore::new());
        let mut ledger = Ledger::new();
        let mut session = Session::new();

        p.process(&mut ledger, &mut session, create(1001, "Alice", "1234", 500))
            .unwrap();
        assert_eq!(p.store().saves(), 1);

        p.process(
            &mut ledger,
            &mut session,
            Command::Login {
                acc_no: 1001,
                pin: "1234".into(),
            },
        )
        .unwrap();
        p.process(&mut ledger, &mut session, Command::CheckBalance)
            .unwrap();
        p.process(&mut ledger, &mut session, Command::History)
            .unwrap();
        assert_eq!(p.store().saves(), 1);

        p.process(
            &mut ledger,
            &mut session,
            Command::Deposit { amount: money(200) },
        )
        .unwrap();
        assert_eq!(p.store().saves(), 2);
        assert_eq!(p.store().load().unwrap(), ledger);
    }

    #[test]
    fn rejected_commands_do_not_flush() {
        let mut p = processor(MemoryStore::new());
        let mut ledger = Ledger::new();
        let mut session = Session::new();

        let err = p
            .process(&mut ledger, &mut session, Command::Withdraw { amount: money(1) })
            .unwrap_err();

        assert_eq!(err, LedgerError::NotAuthenticated);
        assert_eq!(p.store().saves(), 0);
    }

    #[test]
    fn failed_save_keeps_in_memory_change() {
        let mut p = processor(MemoryStore::failing());
        let mut ledger = Ledger::new();
        let mut session = Session::new();

        let processed = p
            .process(&mut ledger, &mut session, create(7, "Gus", "0007", 10))
            .unwrap();

        assert!(processed.save_error.is_some());
        assert!(processed.outcome.mutates());
        assert!(ledger.find(7).is_some());
    }

    #[test]
    fn entries_use_processor_clock() {
        let mut p = processor(MemoryStore::new());
        let mut ledger = Ledger::new();
        let mut session = Session::new();

        p.process(&mut ledger, &mut session, create(1, "A", "1111", 1))
            .unwrap();

        assert_eq!(ledger.find(1).unwrap().transactions[0].timestamp, at());
    }

    #[test]
    fn admin_delete_goes_through_configured_passphrase() {
        let mut p = Processor::new(MemoryStore::new(), AdminPassphrase::new("s3cret")).with_clock(at);
        let mut ledger = Ledger::new();
        let mut session = Session::new();
        p.process(&mut ledger, &mut session, create(1, "A", "1111", 1))
            .unwrap();

        let denied = p.process(
            &mut ledger,
            &mut session,
            Command::AdminDelete {
                passphrase: "admin123".into(),
                acc_no: 1,
            },
        );
        assert_eq!(denied.unwrap_err(), LedgerError::WrongAdminPassphrase);

        let processed = p
            .process(
                &mut ledger,
                &mut session,
                Command::AdminDelete {
                    passphrase: "s3cret".into(),
                    acc_no: 1,
                },
            )
            .unwrap();
        assert!(matches!(processed.outcome, Outcome::AccountDeleted { acc_no: 1, .. }));
        assert!(p.store().load().unwrap().is_empty());
    }
}
