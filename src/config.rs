// Runtime configuration: command-line flags mapped into the session config

use clap::Parser;

pub const DEFAULT_TITLE: &str = "Bank Management System";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// In-memory bank account ledger driven by a numbered console menu
#[derive(Debug, Parser)]
#[command(name = "bank-ledger", version, about)]
pub struct Cli {
    /// Tracing filter directive for diagnostics written to stderr
    #[arg(long, env = "BANK_LEDGER_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,

    /// Title shown in the menu header
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: DEFAULT_TITLE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            title: cli.title,
            log_filter: cli.log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["bank-ledger"]).unwrap();
        let config = Config::from(cli);
        assert_eq!(config.title, "Bank Management System");
        assert_eq!(config, Config { log_filter: config.log_filter.clone(), ..Config::default() });
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "bank-ledger",
            "--title",
            "Branch 12",
            "--log-level",
            "bank_ledger=debug",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.title, "Branch 12");
        assert_eq!(config.log_filter, "bank_ledger=debug");
    }

    #[test]
    fn test_cli_verifies() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
