// Bank Ledger - Core Library
// Exposes the account entities, the menu session and its console plumbing
// for the CLI binary and tests.

pub mod config;
pub mod console;
pub mod entities;
pub mod error;
pub mod session;

// Re-export commonly used types
pub use config::{Cli, Config};
pub use console::Console;
pub use entities::{
    Account, AccountNumber, AccountRegistry, EntryKind, HistoryEntry, RegistryStats, UndoOutcome,
};
pub use error::{InputError, LedgerError};
pub use session::{MenuChoice, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
