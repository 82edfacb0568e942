//! Line-oriented rendering for the non-interactive `exec` and `run` modes.

use std::io::Write;

use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize, style};

use crate::model::{Message, TextMode, TextPart};
use crate::remote::Execution;
use crate::transcript::{ECHO_PREFIX, column_widths, pad};

const RIGHT_MARGIN: usize = 8;

pub struct ConsoleRenderer<W: Write> {
    out: W,
    width: usize,
    color: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    /// `width` is the terminal width; table rules stop short of it.
    pub fn new(out: W, width: usize, color: bool) -> Self {
        Self { out, width, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text).context("write console")
    }

    pub fn present(&mut self, command: &str, execution: &Execution) -> Result<()> {
        self.echo(command)?;
        for message in &execution.messages {
            match message {
                Message::Line { parts } => self.print_line(parts)?,
                Message::Table { headers, rows } => self.print_table(headers, rows)?,
                Message::Unknown => {}
            }
        }
        self.out.flush().context("flush console")
    }

    pub fn echo(&mut self, command: &str) -> Result<()> {
        let text = format!("{}{}", ECHO_PREFIX, command);
        let written = if self.color {
            writeln!(self.out, "{}", text.bold())
        } else {
            writeln!(self.out, "{}", text)
        };
        written.context("write echo")
    }

    pub fn print_line(&mut self, parts: &[TextPart]) -> Result<()> {
        for part in parts {
            if part.mode == TextMode::Unknown {
                continue;
            }
            let written = match mode_color(part.mode).filter(|_| self.color) {
                Some(color) => write!(self.out, "{}", style(&part.text).with(color)),
                None => write!(self.out, "{}", part.text),
            };
            written.context("write line part")?;
        }
        writeln!(self.out).context("write line end")
    }

    pub fn print_table(&mut self, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
        let widths = column_widths(headers, rows);
        self.rule()?;
        for (i, header) in headers.iter().enumerate() {
            let cell = pad(header, widths[i]);
            let written = if self.color {
                write!(self.out, "{}", cell.with(Color::Yellow).bold())
            } else {
                write!(self.out, "{}", cell)
            };
            written.context("write table header")?;
        }
        writeln!(self.out).context("write table header")?;
        self.rule()?;
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                write!(self.out, "{}", pad(cell, widths[i])).context("write table row")?;
            }
            writeln!(self.out).context("write table row")?;
        }
        self.rule()
    }

    fn rule(&mut self) -> Result<()> {
        let line = "-".repeat(self.width.saturating_sub(RIGHT_MARGIN));
        let written = if self.color {
            writeln!(self.out, "{}", line.with(Color::Blue))
        } else {
            writeln!(self.out, "{}", line)
        };
        written.context("write table rule")
    }
}

fn mode_color(mode: TextMode) -> Option<Color> {
    match mode {
        TextMode::Debug => Some(Color::Blue),
        TextMode::Ok => Some(Color::Green),
        TextMode::Warn => Some(Color::Yellow),
        TextMode::Error => Some(Color::Red),
        TextMode::Plain | TextMode::Unknown => None,
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
