//! Terminal front end: dialoguer prompts and coloured status lines

use std::io::{BufRead, Write};

use colored::Colorize;
use dialoguer::Input;
use gitflow_core::{LineSource, PromptError, Reporter, Severity};

/// Reads operator answers from the terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        // dialoguer appends its own ": "
        let answer: String = Input::new()
            .with_prompt(prompt.trim_end_matches(':'))
            .allow_empty(true)
            .interact_text()
            .map_err(|err| PromptError::Io(std::io::Error::other(err)))?;
        Ok(answer)
    }
}

/// Reads answers line by line from a non-terminal source such as a pipe.
///
/// Prompts are still echoed to `out`. End of input fails the read with
/// [`PromptError::Exhausted`].
pub struct PipedInput<R, W> {
    reader: R,
    out: W,
}

impl<R: BufRead, W: Write> PipedInput<R, W> {
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }
}

impl<R: BufRead, W: Write> LineSource for PipedInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        writeln!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::Exhausted);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// Writes status lines to stdout, errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    fn format(severity: Severity, message: &str) -> String {
        let label = format!("[{}]", severity.label());
        match severity {
            Severity::Success => format!("{} {}", label.green().bold(), message),
            Severity::Warning => format!("{} {}", label.yellow().bold(), message),
            Severity::Error => format!("{} {}", label.red().bold(), message.red()),
            Severity::Notice => format!("{} {}", label.blue().bold(), message),
            Severity::Info => message.cyan().bold().to_string(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, severity: Severity, message: &str) {
        tracing::debug!(%severity, text = message, "Report");

        let line = Self::format(severity, message);
        match severity {
            Severity::Error => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }
}
