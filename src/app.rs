use std::io::{self, BufRead, Write};

use clap::Parser;

use crate::{
    common::{
        command::{Command, MenuChoice},
        error::{AppError, LedgerError},
        money::Money,
        outcome::Outcome,
    },
    config::Config,
    domain::{
        account::AccountType, credentials::AdminPassphrase, ledger::Ledger, session::Session,
    },
    io::{
        console::Console,
        store::{JsonFileStore, Persistence},
    },
    logging,
    worker::{
        handlers::{admin, change_pin},
        processor::{Processed, Processor},
    },
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    let config = Config::try_parse_from(args)?;
    logging::init_tracing(&config.log_level);

    // A missing file is a first run; a malformed one stops us here.
    let store = JsonFileStore::new(&config.data_file);
    let mut ledger = store.load()?;
    let mut processor = Processor::new(store, AdminPassphrase::new(config.admin_passphrase));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), &mut ledger, &mut processor)
}

/// The interactive menu loop. Returns on `Exit` or when input runs out.
pub fn run_session<R, W, P>(
    input: R,
    output: W,
    ledger: &mut Ledger,
    processor: &mut Processor<P>,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    let mut console = Console::new(input, output);
    let mut session = Session::new();

    loop {
        print_menu(&mut console)?;
        let Some(choice) = console.prompt("Enter your choice (1-12): ")? else {
            console.say(Outcome::Exit)?;
            return Ok(());
        };
        let Ok(choice) = choice.parse::<MenuChoice>() else {
            console.say("Invalid choice!")?;
            continue;
        };
        tracing::debug!(?choice, "menu choice");

        if choice.needs_session() {
            if let Err(e) = session.require() {
                console.say(e)?;
                continue;
            }
        }

        let command = match read_command(choice, &mut console, ledger, &session, processor.admin()) {
            Ok(Some(command)) => command,
            Ok(None) => {
                console.say(Outcome::Exit)?;
                return Ok(());
            }
            Err(AppError::Terminal(e)) => return Err(e.into()),
            Err(e) => {
                console.say(e)?;
                continue;
            }
        };

        match processor.process(ledger, &mut session, command) {
            Ok(Processed {
                outcome,
                save_error,
            }) => {
                console.say(&outcome)?;
                if let Some(e) = save_error {
                    console.say(format_args!("Warning: changes could not be saved: {e}"))?;
                }
                if matches!(outcome, Outcome::Exit) {
                    return Ok(());
                }
            }
            Err(e) => console.say(e)?,
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.line("========== BANKING SYSTEM ==========")?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        console.line(&format!("{}. {}", i + 1, choice.label()))?;
    }
    Ok(())
}

// Yields the answer, or ends `read_command` with `Ok(None)` at end of input.
macro_rules! ask {
    ($console:expr, $label:expr) => {
        match $console.prompt($label)? {
            Some(line) => line,
            None => return Ok(None),
        }
    };
}

/// Prompts for the inputs of `choice`, in menu order.
///
/// Checks that can fail early (duplicate number, old PIN, admin passphrase)
/// run before the remaining prompts; the handlers repeat them.
fn read_command<R: BufRead, W: Write>(
    choice: MenuChoice,
    console: &mut Console<R, W>,
    ledger: &Ledger,
    session: &Session,
    admin_passphrase: &AdminPassphrase,
) -> Result<Option<Command>, AppError> {
    let command = match choice {
        MenuChoice::CreateAccount => {
            console.line("\n--- Create New Account ---")?;
            let acc_no = parse_acc_no(&ask!(console, "Enter Account Number: "))?;
            if ledger.find(acc_no).is_some() {
                return Err(LedgerError::DuplicateAccount(acc_no).into());
            }
            let name = ask!(console, "Enter Name: ");
            let pin = ask!(console, "Set 4-digit PIN: ");
            let acc_type = parse_acc_type(&ask!(console, "Enter Account Type (Savings/Current): "))?;
            let initial_balance = parse_amount(&ask!(console, "Initial Deposit: ₹"))?;
            Command::CreateAccount {
                acc_no,
                name,
                pin,
                acc_type,
                initial_balance,
            }
        }
        MenuChoice::Login => {
            console.line("\n--- Login ---")?;
            let acc_no = parse_acc_no(&ask!(console, "Enter Account Number: "))?;
            let pin = ask!(console, "Enter PIN: ");
            Command::Login { acc_no, pin }
        }
        MenuChoice::Deposit => Command::Deposit {
            amount: parse_amount(&ask!(console, "Enter amount to deposit: ₹"))?,
        },
        MenuChoice::Withdraw => Command::Withdraw {
            amount: parse_amount(&ask!(console, "Enter amount to withdraw: ₹"))?,
        },
        MenuChoice::Transfer => {
            let to = parse_acc_no(&ask!(console, "Enter Receiver Account Number: "))?;
            let amount = parse_amount(&ask!(console, "Enter amount to transfer: ₹"))?;
            Command::Transfer { to, amount }
        }
        MenuChoice::CheckBalance => Command::CheckBalance,
        MenuChoice::History => Command::History,
        MenuChoice::ChangePin => {
            let old_pin = ask!(console, "Enter Old PIN: ");
            change_pin::verify_old(ledger, session, &old_pin)?;
            let new_pin = ask!(console, "Enter New 4-digit PIN: ");
            Command::ChangePin { old_pin, new_pin }
        }
        MenuChoice::AdminDashboard => Command::AdminDashboard {
            passphrase: ask!(console, "Enter Admin Password: "),
        },
        MenuChoice::AdminDelete => {
            let passphrase = ask!(console, "Enter Admin Password: ");
            admin::authorize(admin_passphrase, &passphrase)?;
            let acc_no = parse_acc_no(&ask!(console, "Enter Account Number to delete: "))?;
            Command::AdminDelete { passphrase, acc_no }
        }
        MenuChoice::Logout => Command::Logout,
        MenuChoice::Exit => Command::Exit,
    };
    Ok(Some(command))
}

fn parse_acc_no(input: &str) -> Result<u64, AppError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| AppError::Input(format!("`{input}` is not a valid account number")))
}

fn parse_amount(input: &str) -> Result<Money, AppError> {
    let input = input.trim().trim_start_matches('₹');
    input
        .parse()
        .map_err(|_| AppError::Input(format!("`{input}` is not a valid amount")))
}

fn parse_acc_type(input: &str) -> Result<AccountType, AppError> {
    input.parse().map_err(AppError::Input)
}
