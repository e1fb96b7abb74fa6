// Entity Models
//
// One entity: the account. Its number is a stable identity, its balance is a
// value that moves, and its history is the append-only record of those moves.
// The registry normalizes lookups by account number.

pub mod account;

pub use account::{
    format_display_amount, format_note_amount, Account, AccountNumber, AccountRegistry, EntryKind,
    HistoryEntry, RegistryStats, UndoOutcome,
};
