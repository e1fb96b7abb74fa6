// Error types for the ledger
//
// LedgerError covers every rejected account operation. InputError covers the
// console side: unreadable numbers and a closed input stream.

use thiserror::Error;

use crate::entities::{AccountNumber, EntryKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("account {0} already exists")]
    DuplicateAccount(AccountNumber),

    #[error("account {0} not found")]
    AccountNotFound(AccountNumber),

    /// Deposits and withdrawals must be strictly positive
    #[error("invalid {kind:?} amount {amount}")]
    InvalidAmount { kind: EntryKind, amount: f64 },

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("invalid menu choice {0}")]
    InvalidMenuChoice(i64),

    #[error("nothing to undo")]
    NothingToUndo,
}

impl LedgerError {
    /// Console line printed when an operation is rejected
    ///
    /// Withdrawals share one line for both amount failures.
    pub fn console_message(&self) -> &'static str {
        match self {
            LedgerError::DuplicateAccount(_) => "Account already exists!",
            LedgerError::AccountNotFound(_) => "Account not found.",
            LedgerError::InvalidAmount { kind: EntryKind::Withdrawal, .. }
            | LedgerError::InsufficientFunds { .. } => "Invalid or insufficient amount.",
            LedgerError::InvalidAmount { .. } => "Invalid amount.",
            LedgerError::InvalidMenuChoice(_) => "Invalid choice. Try again.",
            LedgerError::NothingToUndo => "Nothing to undo.",
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not read {field} from {input:?}")]
    Parse { field: &'static str, input: String },

    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = LedgerError> = std::result::Result<T, E>;
