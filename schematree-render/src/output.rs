//! Output targets for rendered lines.

use std::io::{self, Write};

/// Target receiving rendered lines, in order.
pub trait Output {
    /// Emit one line (without trailing newline).
    fn line(&mut self, text: &str) -> io::Result<()>;
}

/// Writes each line to stdout as soon as it is rendered.
pub struct TerminalOutput {
    stdout: io::Stdout,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout.lock(), "{}", text)
    }
}

/// Collects lines in memory.
impl Output for Vec<String> {
    fn line(&mut self, text: &str) -> io::Result<()> {
        self.push(text.to_string());
        Ok(())
    }
}
