// 🏦 Menu Session - the console front end over one AccountRegistry
//
// Loop: show menu → read choice → run one operation → print result line.
// Rejected operations print a message and return to the menu. The loop ends
// on Exit or when input closes.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use crate::config::Config;
use crate::console::{parse_account_number, parse_amount, parse_choice, Console};
use crate::entities::{AccountNumber, AccountRegistry};
use crate::error::{InputError, LedgerError};

pub const FAREWELL: &str = "Thank you for using the system!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Deposit,
    Withdraw,
    Display,
    Search,
    History,
    Close,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Create,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Display,
        MenuChoice::Search,
        MenuChoice::History,
        MenuChoice::Close,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> i64 {
        match self {
            MenuChoice::Create => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::Withdraw => 3,
            MenuChoice::Display => 4,
            MenuChoice::Search => 5,
            MenuChoice::History => 6,
            MenuChoice::Close => 7,
            MenuChoice::Exit => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Create => "Create Account",
            MenuChoice::Deposit => "Deposit Money",
            MenuChoice::Withdraw => "Withdraw Money",
            MenuChoice::Display => "Display Account",
            MenuChoice::Search => "Search Account",
            MenuChoice::History => "Transaction History",
            MenuChoice::Close => "Close Account",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = LedgerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(LedgerError::InvalidMenuChoice(value))
    }
}

pub struct Session<R, W> {
    registry: AccountRegistry,
    console: Console<R, W>,
    config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Session {
            registry: AccountRegistry::new(),
            console: Console::new(input, output),
            config,
        }
    }

    pub fn registry(&self) -> &AccountRegistry {
        &self.registry
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu until Exit is chosen or input runs out
    pub fn run(&mut self) -> Result<(), InputError> {
        match self.menu_loop() {
            Err(InputError::Closed) => {
                tracing::info!(accounts = self.registry.len(), "input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<(), InputError> {
        loop {
            self.show_menu()?;
            let number = self.console.prompt_with("Enter your choice: ", parse_choice)?;

            let flow = match MenuChoice::try_from(number) {
                Ok(choice) => self.dispatch(choice)?,
                Err(err) => {
                    tracing::debug!(%err, "menu");
                    self.report(&err)?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), InputError> {
        self.console.say("")?;
        self.console.say(&format!("====== {} ======", self.config.title))?;
        for choice in MenuChoice::ALL {
            self.console.say(&format!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    /// Run one menu operation; Break means the session is over
    fn dispatch(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, InputError> {
        match choice {
            MenuChoice::Create => self.create_account()?,
            MenuChoice::Deposit => self.deposit_money()?,
            MenuChoice::Withdraw => self.withdraw_money()?,
            MenuChoice::Display => self.show_account("Enter Account Number: ", false)?,
            MenuChoice::Search => self.show_account("Enter Account Number to search: ", true)?,
            MenuChoice::History => self.show_history()?,
            MenuChoice::Close => self.close_account()?,
            MenuChoice::Exit => {
                self.console.say(FAREWELL)?;
                tracing::info!(accounts = self.registry.len(), "session ended");
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    // ========================================================================
    // OPERATIONS
    // ========================================================================

    fn ask_account_number(&mut self, prompt: &str) -> Result<AccountNumber, InputError> {
        self.console.prompt_with(prompt, parse_account_number)
    }

    fn report(&mut self, err: &LedgerError) -> Result<(), InputError> {
        self.console.say(err.console_message())
    }

    fn create_account(&mut self) -> Result<(), InputError> {
        let number = self.ask_account_number("Enter Account Number: ")?;
        if self.registry.contains(number) {
            return self.report(&LedgerError::DuplicateAccount(number));
        }

        let name = self.console.prompt_line("Enter Name: ")?;
        let initial_balance = self.console.prompt_with("Enter Initial Balance: ", parse_amount)?;

        match self.registry.create(number, name, initial_balance) {
            Ok(_) => self.console.say("Account created successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn deposit_money(&mut self) -> Result<(), InputError> {
        let number = self.ask_account_number("Enter Account Number: ")?;
        if !self.registry.contains(number) {
            return self.report(&LedgerError::AccountNotFound(number));
        }

        let amount = self.console.prompt_with("Enter amount to deposit: ", parse_amount)?;
        match self.registry.deposit(number, amount) {
            Ok(_) => self.console.say("Amount deposited successfully."),
            Err(err) => self.report(&err),
        }
    }

    fn withdraw_money(&mut self) -> Result<(), InputError> {
        let number = self.ask_account_number("Enter Account Number: ")?;
        if !self.registry.contains(number) {
            return self.report(&LedgerError::AccountNotFound(number));
        }

        let amount = self.console.prompt_with("Enter amount to withdraw: ", parse_amount)?;
        match self.registry.withdraw(number, amount) {
            Ok(_) => self.console.say("Amount withdrawn successfully."),
            Err(err) => self.report(&err),
        }
    }

    /// Display (4) and Search (5) share this; search announces the hit first
    fn show_account(&mut self, prompt: &str, announce: bool) -> Result<(), InputError> {
        let number = self.ask_account_number(prompt)?;
        let rendered = match self.registry.find_by_number(number) {
            Some(account) => account.display(),
            None => return self.report(&LedgerError::AccountNotFound(number)),
        };

        if announce {
            self.console.say("Account found!")?;
        }
        self.console.write(&rendered)
    }

    fn show_history(&mut self) -> Result<(), InputError> {
        let number = self.ask_account_number("Enter Account Number: ")?;
        let rendered = match self.registry.find_by_number(number) {
            Some(account) => account.show_history(),
            None => return self.report(&LedgerError::AccountNotFound(number)),
        };
        self.console.write(&rendered)
    }

    fn close_account(&mut self) -> Result<(), InputError> {
        let number = self.ask_account_number("Enter Account Number to close: ")?;
        match self.registry.delete(number) {
            Ok(_) => self.console.say("Account closed successfully."),
            Err(err) => self.report(&err),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
