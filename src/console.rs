// Console I/O - line-based prompts over any BufRead / Write pair
//
// Every prompt consumes one full input line. Numeric prompts repeat until the
// line parses; end of input surfaces as InputError::Closed.

use std::io::{BufRead, Write};

use crate::entities::AccountNumber;
use crate::error::InputError;

pub const INVALID_NUMBER: &str = "Invalid number, please try again.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Write text as-is (prompts end without a newline)
    pub fn write(&mut self, text: &str) -> Result<(), InputError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write one line of output
    pub fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Show a prompt and return the next input line without its line ending
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.write(prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Prompt until `parse` accepts the line
    pub fn prompt_with<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T, InputError>,
    ) -> Result<T, InputError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err @ InputError::Parse { .. }) => {
                    tracing::debug!(%err, "re-prompting");
                    self.say(INVALID_NUMBER)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

// ============================================================================
// FIELD PARSERS
// ============================================================================

pub fn parse_account_number(line: &str) -> Result<AccountNumber, InputError> {
    line.trim().parse().map_err(|_| InputError::Parse {
        field: "account number",
        input: line.to_string(),
    })
}

/// Amounts must be finite numbers; sign is checked by the account
pub fn parse_amount(line: &str) -> Result<f64, InputError> {
    match line.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(InputError::Parse {
            field: "amount",
            input: line.to_string(),
        }),
    }
}

pub fn parse_choice(line: &str) -> Result<i64, InputError> {
    line.trim().parse().map_err(|_| InputError::Parse {
        field: "menu choice",
        input: line.to_string(),
    })
}
