use std::str::FromStr;

use crate::{common::money::Money, domain::account::AccountType};

/// A request sent from the menu loop to the processor, with every input
/// already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    CreateAccount {
        acc_no: u64,
        name: String,
        pin: String,
        acc_type: AccountType,
        initial_balance: Money,
    },
    Login { acc_no: u64, pin: String },
    Deposit { amount: Money },
    Withdraw { amount: Money },
    Transfer { to: u64, amount: Money },
    CheckBalance,
    History,
    ChangePin { old_pin: String, new_pin: String },
    AdminDashboard { passphrase: String },
    AdminDelete { passphrase: String, acc_no: u64 },
    Logout,
    Exit,
}

/// Numbered entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Login,
    Deposit,
    Withdraw,
    Transfer,
    CheckBalance,
    History,
    ChangePin,
    AdminDashboard,
    AdminDelete,
    Logout,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::CreateAccount,
        MenuChoice::Login,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Transfer,
        MenuChoice::CheckBalance,
        MenuChoice::History,
        MenuChoice::ChangePin,
        MenuChoice::AdminDashboard,
        MenuChoice::AdminDelete,
        MenuChoice::Logout,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::CreateAccount => "Create Account",
            MenuChoice::Login => "Login",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::Transfer => "Transfer Money",
            MenuChoice::CheckBalance => "Check Balance",
            MenuChoice::History => "Transaction History",
            MenuChoice::ChangePin => "Change PIN",
            MenuChoice::AdminDashboard => "Admin Dashboard",
            MenuChoice::AdminDelete => "Delete Account (Admin)",
            MenuChoice::Logout => "Logout",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Whether the choice is refused outright when nobody is logged in.
    pub fn needs_session(self) -> bool {
        matches!(
            self,
            MenuChoice::Deposit
                | MenuChoice::Withdraw
                | MenuChoice::Transfer
                | MenuChoice::CheckBalance
                | MenuChoice::History
                | MenuChoice::ChangePin
        )
    }
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("not a menu number: {}", s.trim()))?;
        n.checked_sub(1)
            .and_then(|i| MenuChoice::ALL.get(i).copied())
            .ok_or_else(|| format!("no menu entry {n}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_numbers() {
        assert_eq!("1".parse(), Ok(MenuChoice::CreateAccount));
        assert_eq!(" 5 ".parse(), Ok(MenuChoice::Transfer));
        assert_eq!("12".parse(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("13".parse::<MenuChoice>().is_err());
        assert!("exit".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn session_gate_covers_account_operations_only() {
        let gated: Vec<_> = MenuChoice::ALL
            .iter()
            .filter(|c| c.needs_session())
            .collect();
        assert_eq!(gated.len(), 6);
        assert!(!MenuChoice::Login.needs_session());
        assert!(!MenuChoice::AdminDelete.needs_session());
    }
}
