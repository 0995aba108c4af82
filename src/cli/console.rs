use std::io::{BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};

use crate::config::Config;
use crate::error::ContactResult;

/// How a line of output should be read. Only affects color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => Color::Cyan,
            Severity::Success => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }
}

/// Line-oriented terminal over any input/output pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    config: Config,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self { input, output, config }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt and read a line. Returns None on EOF.
    pub fn read_line(&mut self, prompt: &str) -> ContactResult<Option<String>> {
        self.write_styled(Severity::Info, prompt)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(
            buf.trim_end_matches('\n').trim_end_matches('\r').to_string(),
        ))
    }

    /// Print a line tagged with `severity`.
    pub fn say(&mut self, severity: Severity, text: &str) -> ContactResult<()> {
        self.write_styled(severity, text)?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Print an informational line.
    pub fn line(&mut self, text: &str) -> ContactResult<()> {
        self.say(Severity::Info, text)
    }

    /// Wait for Enter, then clear the screen, as configured.
    /// Returns false if input ended while waiting.
    pub fn pause_and_clear(&mut self) -> ContactResult<bool> {
        if self.config.pause && self.read_line("\nPress Enter to continue...")?.is_none() {
            return Ok(false);
        }
        if self.config.clear_screen {
            crossterm::queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(true)
    }

    fn write_styled(&mut self, severity: Severity, text: &str) -> ContactResult<()> {
        if self.config.color {
            write!(self.output, "{}", text.with(severity.color()))?;
        } else {
            write!(self.output, "{}", text)?;
        }
        Ok(())
    }
}
