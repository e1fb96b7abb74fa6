// 💳 Account Entity - one ledger account and the registry that owns them all
//
// "Account number is IDENTITY (never changes), balance is a VALUE (changes)"
//
// - Account number and holder name are fixed at creation
// - Balance moves only through deposit / withdraw (and undo of those)
// - History is append-only: one entry per balance event, oldest first
// - Closing an account is removal from the registry, not a state on the record

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{LedgerError, Result};

/// Account identity as typed at the console
pub type AccountNumber = i32;

// ============================================================================
// HISTORY ENTRY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Opening balance recorded at creation
    Opened,
    Deposit,
    Withdrawal,
    DepositReversed,
    WithdrawalReversed,
}

/// Immutable note describing one balance event
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    kind: EntryKind,
    amount: f64,
    balance_after: f64,
    recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(kind: EntryKind, amount: f64, balance_after: f64) -> Self {
        HistoryEntry {
            kind,
            amount,
            balance_after,
            recorded_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Account balance right after this event
    pub fn balance_after(&self) -> f64 {
        self.balance_after
    }

    /// When the entry was appended (not shown in the history listing)
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = format_note_amount(self.amount);
        match self.kind {
            EntryKind::Opened => write!(f, "Account created with balance Rs. {}", amount),
            EntryKind::Deposit => write!(f, "Deposited Rs. {}", amount),
            EntryKind::Withdrawal => write!(f, "Withdrawn Rs. {}", amount),
            EntryKind::DepositReversed => write!(f, "Undid deposit of Rs. {}", amount),
            EntryKind::WithdrawalReversed => write!(f, "Undid withdrawal of Rs. {}", amount),
        }
    }
}

/// History notes always carry six decimals ("500.000000")
pub fn format_note_amount(amount: f64) -> String {
    format!("{:.6}", amount)
}

/// Balance as a stream prints it by default: six significant digits,
/// trailing zeros dropped, exponent form outside 1e-4..1e6 ("1.23457e+06")
pub fn format_display_amount(amount: f64) -> String {
    const PRECISION: i32 = 6;

    if amount == 0.0 || !amount.is_finite() {
        return format!("{}", amount);
    }

    // exponent after rounding to PRECISION significant digits
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, amount);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_fraction_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_fraction_zeros(&format!("{:.*}", decimals, amount)).to_string()
    }
}

fn strip_fraction_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

// ============================================================================
// ACCOUNT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    name: String,
    balance: f64,
    history: Vec<HistoryEntry>,
}

impl Account {
    /// Open an account. The initial balance is taken as given, negative included.
    pub fn new(account_number: AccountNumber, name: impl Into<String>, initial_balance: f64) -> Self {
        Account {
            account_number,
            name: name.into(),
            balance: initial_balance,
            history: vec![HistoryEntry::new(EntryKind::Opened, initial_balance, initial_balance)],
        }
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Add a strictly positive amount; returns the new balance
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount { kind: EntryKind::Deposit, amount });
        }

        self.balance += amount;
        self.record(EntryKind::Deposit, amount);
        Ok(self.balance)
    }

    /// Take a strictly positive amount no larger than the balance; returns the new balance
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(LedgerError::InvalidAmount { kind: EntryKind::Withdrawal, amount });
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.record(EntryKind::Withdrawal, amount);
        Ok(self.balance)
    }

    /// Put the balance back to what it was before `pending` and log the reversal
    fn reverse(&mut self, pending: &PendingUndo) -> f64 {
        self.balance = pending.balance_before;
        self.record(pending.reversal, pending.amount);
        self.balance
    }

    fn record(&mut self, kind: EntryKind, amount: f64) {
        self.history.push(HistoryEntry::new(kind, amount, self.balance));
    }

    /// Number, name and balance, one per line
    pub fn display(&self) -> String {
        format!(
            "Account Number: {}\nName: {}\nBalance: Rs. {}\n",
            self.account_number,
            self.name,
            format_display_amount(self.balance)
        )
    }

    /// Full history listing, oldest first
    pub fn show_history(&self) -> String {
        let mut out = String::from("\n--- Transaction History ---\n");
        for entry in &self.history {
            out.push_str(&entry.to_string());
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// UNDO
// ============================================================================

/// A deposit or withdrawal that can still be undone
#[derive(Debug, Clone)]
struct PendingUndo {
    account_number: AccountNumber,
    reversal: EntryKind,
    amount: f64,
    balance_before: f64,
}

/// What `undo_last` reversed
#[derive(Debug, Clone, PartialEq)]
pub struct UndoOutcome {
    pub account_number: AccountNumber,
    pub reversal: EntryKind,
    pub amount: f64,
    pub balance: f64,
}

/// Registry-wide totals
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryStats {
    pub total_accounts: usize,
    pub total_balance: f64,
    pub undo_depth: usize,

    /// Newest history entry across all open accounts
    pub last_activity: Option<DateTime<Utc>>,
}

// ============================================================================
// ACCOUNT REGISTRY
// ============================================================================

/// All open accounts keyed by account number
///
/// Owned by the session for the length of one run. Nothing is persisted.
/// Deposits and withdrawals also go on one shared undo stack, newest last.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: BTreeMap<AccountNumber, Account>,
    undo_stack: Vec<PendingUndo>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        AccountRegistry {
            accounts: BTreeMap::new(),
            undo_stack: Vec::new(),
        }
    }

    pub fn find_by_number(&self, account_number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&account_number)
    }

    pub fn find_by_number_mut(&mut self, account_number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&account_number)
    }

    pub fn contains(&self, account_number: AccountNumber) -> bool {
        self.accounts.contains_key(&account_number)
    }

    /// Open a new account; the number must not be in use
    pub fn create(
        &mut self,
        account_number: AccountNumber,
        name: impl Into<String>,
        initial_balance: f64,
    ) -> Result<&Account> {
        if self.contains(account_number) {
            tracing::warn!(account = account_number, "duplicate account rejected");
            return Err(LedgerError::DuplicateAccount(account_number));
        }

        let account = Account::new(account_number, name, initial_balance);
        tracing::info!(account = account_number, balance = initial_balance, "account created");
        Ok(self.accounts.entry(account_number).or_insert(account))
    }

    pub fn deposit(&mut self, account_number: AccountNumber, amount: f64) -> Result<f64> {
        let account = self
            .find_by_number_mut(account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))?;

        let balance_before = account.balance();
        let balance = account.deposit(amount).map_err(|err| {
            tracing::warn!(account = account_number, amount, %err, "deposit rejected");
            err
        })?;

        self.push_undo(account_number, EntryKind::DepositReversed, amount, balance_before);
        tracing::info!(account = account_number, amount, balance, "deposit");
        Ok(balance)
    }

    pub fn withdraw(&mut self, account_number: AccountNumber, amount: f64) -> Result<f64> {
        let account = self
            .find_by_number_mut(account_number)
            .ok_or(LedgerError::AccountNotFound(account_number))?;

        let balance_before = account.balance();
        let balance = account.withdraw(amount).map_err(|err| {
            tracing::warn!(account = account_number, amount, %err, "withdrawal rejected");
            err
        })?;

        self.push_undo(account_number, EntryKind::WithdrawalReversed, amount, balance_before);
        tracing::info!(account = account_number, amount, balance, "withdrawal");
        Ok(balance)
    }

    fn push_undo(
        &mut self,
        account_number: AccountNumber,
        reversal: EntryKind,
        amount: f64,
        balance_before: f64,
    ) {
        self.undo_stack.push(PendingUndo {
            account_number,
            reversal,
            amount,
            balance_before,
        });
    }

    /// Reverse the most recent deposit or withdrawal on any open account
    ///
    /// The balance returns to its value before that event and the reversal
    /// is appended to the account's history.
    pub fn undo_last(&mut self) -> Result<UndoOutcome> {
        let pending = self.undo_stack.pop().ok_or(LedgerError::NothingToUndo)?;
        let account = self
            .accounts
            .get_mut(&pending.account_number)
            .ok_or(LedgerError::AccountNotFound(pending.account_number))?;

        let balance = account.reverse(&pending);
        tracing::info!(
            account = pending.account_number,
            amount = pending.amount,
            balance,
            reversal = ?pending.reversal,
            "undo"
        );

        Ok(UndoOutcome {
            account_number: pending.account_number,
            reversal: pending.reversal,
            amount: pending.amount,
            balance,
        })
    }

    /// Close an account. Removal is unconditional; its history and any
    /// pending undo entries are dropped.
    pub fn delete(&mut self, account_number: AccountNumber) -> Result<Account> {
        match self.accounts.remove(&account_number) {
            Some(account) => {
                self.undo_stack.retain(|u| u.account_number != account_number);
                tracing::info!(
                    account = account_number,
                    balance = account.balance(),
                    entries = account.history().len(),
                    "account closed"
                );
                Ok(account)
            }
            None => Err(LedgerError::AccountNotFound(account_number)),
        }
    }

    /// All accounts ordered by account number
    pub fn accounts_sorted(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }

    /// Accounts whose name contains `keyword`, ignoring case, by account number
    pub fn search_by_name(&self, keyword: &str) -> Vec<&Account> {
        let keyword = keyword.to_lowercase();
        self.accounts
            .values()
            .filter(|acc| acc.name().to_lowercase().contains(&keyword))
            .collect()
    }

    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            total_accounts: self.accounts.len(),
            total_balance: self.accounts.values().map(|acc| acc.balance()).sum(),
            undo_depth: self.undo_stack.len(),
            last_activity: self
                .accounts
                .values()
                .flat_map(|acc| acc.history().iter().map(HistoryEntry::recorded_at))
                .max(),
        }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(account: &Account) -> Vec<String> {
        account.history().iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_account_creation() {
        let account = Account::new(100, "Asha", 500.0);

        assert_eq!(account.account_number(), 100);
        assert_eq!(account.name(), "Asha");
        assert_eq!(account.balance(), 500.0);
        assert_eq!(notes(&account), vec!["Account created with balance Rs. 500.000000"]);
        assert_eq!(account.history()[0].kind(), EntryKind::Opened);
        assert_eq!(account.history()[0].balance_after(), 500.0);
    }

    #[test]
    fn test_negative_initial_balance_accepted() {
        let account = Account::new(7, "Overdrawn", -25.5);
        assert_eq!(account.balance(), -25.5);
        assert_eq!(notes(&account), vec!["Account created with balance Rs. -25.500000"]);
    }

    #[test]
    fn test_deposit() {
        let mut account = Account::new(1, "Test", 10.0);

        assert_eq!(account.deposit(2.5), Ok(12.5));
        assert_eq!(account.balance(), 12.5);
        assert_eq!(account.history().len(), 2);
        assert_eq!(account.history()[1].to_string(), "Deposited Rs. 2.500000");
        assert_eq!(account.history()[1].amount(), 2.5);
        assert_eq!(account.history()[1].balance_after(), 12.5);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = Account::new(1, "Test", 10.0);

        for amount in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                account.deposit(amount),
                Err(LedgerError::InvalidAmount { kind: EntryKind::Deposit, .. })
            ));
        }
        assert_eq!(account.balance(), 10.0);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_withdraw() {
        let mut account = Account::new(1, "Test", 100.0);

        assert_eq!(account.withdraw(40.0), Ok(60.0));
        assert_eq!(account.withdraw(60.0), Ok(0.0));
        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.history().len(), 3);
        assert_eq!(account.history()[2].to_string(), "Withdrawn Rs. 60.000000");
        assert_eq!(account.history()[2].kind(), EntryKind::Withdrawal);
        assert_eq!(account.history()[1].balance_after(), 60.0);
        assert_eq!(account.history()[2].balance_after(), 0.0);
    }

    #[test]
    fn test_withdraw_rejections_leave_state_unchanged() {
        let mut account = Account::new(1, "Test", 100.0);

        assert_eq!(
            account.withdraw(100.01),
            Err(LedgerError::InsufficientFunds { requested: 100.01, available: 100.0 })
        );
        assert_eq!(
            account.withdraw(0.0),
            Err(LedgerError::InvalidAmount { kind: EntryKind::Withdrawal, amount: 0.0 })
        );
        assert_eq!(
            account.withdraw(-5.0),
            Err(LedgerError::InvalidAmount { kind: EntryKind::Withdrawal, amount: -5.0 })
        );

        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_withdraw_from_negative_opening_balance() {
        let mut account = Account::new(1, "Test", -10.0);
        assert!(matches!(account.withdraw(1.0), Err(LedgerError::InsufficientFunds { .. })));
        assert_eq!(account.balance(), -10.0);
    }

    #[test]
    fn test_display() {
        let account = Account::new(42, "Ravi Kumar", 700.5);
        assert_eq!(
            account.display(),
            "Account Number: 42\nName: Ravi Kumar\nBalance: Rs. 700.5\n"
        );
    }

    #[test]
    fn test_display_rounds_to_six_significant_digits() {
        let mut account = Account::new(1, "P", 0.1);
        account.deposit(0.2).unwrap();
        assert_eq!(account.display(), "Account Number: 1\nName: P\nBalance: Rs. 0.3\n");

        let account = Account::new(2, "Q", 1234567.0);
        assert!(account.display().ends_with("Balance: Rs. 1.23457e+06\n"));
    }

    #[test]
    fn test_format_display_amount() {
        assert_eq!(format_display_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_display_amount(700.5), "700.5");
        assert_eq!(format_display_amount(1234567.0), "1.23457e+06");
        assert_eq!(format_display_amount(500.0), "500");
        assert_eq!(format_display_amount(0.0), "0");
        assert_eq!(format_display_amount(-20.0), "-20");
        assert_eq!(format_display_amount(999999.0), "999999");
        assert_eq!(format_display_amount(999999.5), "1e+06");
        assert_eq!(format_display_amount(123.456789), "123.457");
        assert_eq!(format_display_amount(0.0001), "0.0001");
        assert_eq!(format_display_amount(0.00001234), "1.234e-05");
    }

    #[test]
    fn test_show_history_oldest_first() {
        let mut account = Account::new(1, "Test", 50.0);
        account.deposit(25.0).unwrap();
        account.withdraw(10.0).unwrap();

        assert_eq!(
            account.show_history(),
            "\n--- Transaction History ---\n\
             Account created with balance Rs. 50.000000\n\
             Deposited Rs. 25.000000\n\
             Withdrawn Rs. 10.000000\n"
        );

        let times: Vec<_> = account.history().iter().map(|e| e.recorded_at()).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_registry_create_and_find() {
        let mut registry = AccountRegistry::new();
        assert!(registry.is_empty());

        registry.create(100, "Asha", 500.0).unwrap();

        let found = registry.find_by_number(100).unwrap();
        assert_eq!(found.account_number(), 100);
        assert_eq!(found.name(), "Asha");
        assert_eq!(found.balance(), 500.0);
        assert_eq!(found.history().len(), 1);

        assert!(registry.find_by_number(101).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_duplicate_create() {
        let mut registry = AccountRegistry::new();
        registry.create(5, "First", 10.0).unwrap();

        let err = registry.create(5, "Second", 99.0).unwrap_err();
        assert_eq!(err, LedgerError::DuplicateAccount(5));

        let account = registry.find_by_number(5).unwrap();
        assert_eq!(account.name(), "First");
        assert_eq!(account.balance(), 10.0);
        assert_eq!(account.history().len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_missing_account() {
        let mut registry = AccountRegistry::new();

        assert_eq!(registry.deposit(9, 1.0), Err(LedgerError::AccountNotFound(9)));
        assert_eq!(registry.withdraw(9, 1.0), Err(LedgerError::AccountNotFound(9)));
        assert_eq!(registry.delete(9).unwrap_err(), LedgerError::AccountNotFound(9));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_delete_is_unconditional() {
        let mut registry = AccountRegistry::new();
        registry.create(1, "Keep", 1.0).unwrap();
        registry.create(2, "Close", 250.0).unwrap();

        let closed = registry.delete(2).unwrap();
        assert_eq!(closed.balance(), 250.0);
        assert!(registry.find_by_number(2).is_none());
        assert!(registry.contains(1));

        // number can be reused once closed
        registry.create(2, "Again", 0.0).unwrap();
        assert_eq!(registry.find_by_number(2).unwrap().history().len(), 1);
    }

    #[test]
    fn test_undo_last_reverses_newest_event() {
        let mut registry = AccountRegistry::new();
        registry.create(1, "A", 100.0).unwrap();
        registry.create(2, "B", 50.0).unwrap();

        registry.deposit(1, 25.0).unwrap();
        registry.withdraw(2, 20.0).unwrap();
        assert_eq!(registry.stats().undo_depth, 2);

        let outcome = registry.undo_last().unwrap();
        assert_eq!(
            outcome,
            UndoOutcome {
                account_number: 2,
                reversal: EntryKind::WithdrawalReversed,
                amount: 20.0,
                balance: 50.0,
            }
        );

        let outcome = registry.undo_last().unwrap();
        assert_eq!(outcome.account_number, 1);
        assert_eq!(outcome.balance, 100.0);

        assert_eq!(registry.undo_last(), Err(LedgerError::NothingToUndo));
    }

    #[test]
    fn test_undo_appends_reversal_to_history() {
        let mut registry = AccountRegistry::new();
        registry.create(1, "A", 0.1).unwrap();
        registry.deposit(1, 0.2).unwrap();
        registry.undo_last().unwrap();

        let account = registry.find_by_number(1).unwrap();
        assert_eq!(account.balance(), 0.1);
        assert_eq!(
            notes(account),
            vec![
                "Account created with balance Rs. 0.100000",
                "Deposited Rs. 0.200000",
                "Undid deposit of Rs. 0.200000",
            ]
        );
        assert_eq!(account.history()[2].balance_after(), 0.1);
    }

    #[test]
    fn test_rejected_operations_are_not_undoable() {
        let mut registry = AccountRegistry::new();
        registry.create(1, "A", 10.0).unwrap();
        assert!(registry.deposit(1, -1.0).is_err());
        assert!(registry.withdraw(1, 11.0).is_err());

        assert_eq!(registry.stats().undo_depth, 0);
        assert_eq!(registry.undo_last(), Err(LedgerError::NothingToUndo));
    }

    #[test]
    fn test_delete_drops_pending_undo_for_account() {
        let mut registry = AccountRegistry::new();
        registry.create(1, "A", 10.0).unwrap();
        registry.create(2, "B", 10.0).unwrap();
        registry.deposit(1, 5.0).unwrap();
        registry.deposit(2, 5.0).unwrap();
        registry.deposit(1, 5.0).unwrap();

        registry.delete(1).unwrap();
        assert_eq!(registry.stats().undo_depth, 1);

        let outcome = registry.undo_last().unwrap();
        assert_eq!(outcome.account_number, 2);
        assert_eq!(registry.find_by_number(2).unwrap().balance(), 10.0);
    }

    #[test]
    fn test_accounts_sorted_by_number() {
        let mut registry = AccountRegistry::new();
        for number in [30, -4, 7, 12] {
            registry.create(number, format!("Holder {}", number), 1.0).unwrap();
        }

        let numbers: Vec<_> = registry
            .accounts_sorted()
            .iter()
            .map(|acc| acc.account_number())
            .collect();
        assert_eq!(numbers, vec![-4, 7, 12, 30]);
    }

    #[test]
    fn test_search_by_name_ignores_case() {
        let mut registry = AccountRegistry::new();
        registry.create(3, "Carol Williams", 1.0).unwrap();
        registry.create(1, "Alice Johnson", 1.0).unwrap();
        registry.create(2, "Bob Smith", 1.0).unwrap();

        let names: Vec<_> = registry.search_by_name("LI").iter().map(|acc| acc.name()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Carol Williams"]);

        assert!(registry.search_by_name("zed").is_empty());
        assert_eq!(registry.search_by_name("").len(), 3);
    }

    #[test]
    fn test_stats() {
        let mut registry = AccountRegistry::new();
        let empty = registry.stats();
        assert_eq!(empty.total_accounts, 0);
        assert_eq!(empty.total_balance, 0.0);
        assert!(empty.last_activity.is_none());

        registry.create(1, "A", 100.0).unwrap();
        registry.create(2, "B", 50.0).unwrap();
        registry.withdraw(2, 20.0).unwrap();

        let stats = registry.stats();
        assert_eq!(stats.total_accounts, 2);
        assert_eq!(stats.total_balance, 130.0);
        assert_eq!(stats.undo_depth, 1);

        let newest = registry.find_by_number(2).unwrap().history()[1].recorded_at();
        assert_eq!(stats.last_activity, Some(newest));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut registry = AccountRegistry::new();

        registry.create(100, "Asha", 500.0).unwrap();
        assert_eq!(
            notes(registry.find_by_number(100).unwrap()),
            vec!["Account created with balance Rs. 500.000000"]
        );

        assert_eq!(registry.deposit(100, 200.0), Ok(700.0));
        assert!(registry.withdraw(100, 1000.0).is_err());
        assert_eq!(registry.find_by_number(100).unwrap().balance(), 700.0);

        assert_eq!(registry.withdraw(100, 700.0), Ok(0.0));
        assert!(registry.delete(100).is_ok());
        assert!(registry.find_by_number(100).is_none());
    }
}
