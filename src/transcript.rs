//! Append-only log of echoed commands and rendered server output.

use std::cell::Cell;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::{Message, TextMode, TextPart};
use crate::remote::Execution;

pub const ECHO_PREFIX: &str = "jcr-shell: > ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Echo(String),
    Line(Vec<TextPart>),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

#[derive(Debug)]
pub struct Transcript {
    entries: Vec<Entry>,
    follow: bool,
    offset: usize,
    // Bottom offset seen by the last draw; lets manual scrolling start from there.
    last_bottom: Cell<usize>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            follow: true,
            offset: 0,
            last_bottom: Cell::new(0),
        }
    }
}

impl Transcript {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn echo(&mut self, command: &str) {
        self.entries.push(Entry::Echo(command.to_string()));
    }

    pub fn print_line(&mut self, parts: Vec<TextPart>) {
        self.entries.push(Entry::Line(parts));
    }

    /// Plain one-part line, used for client notices such as the banner.
    pub fn print_plain(&mut self, text: impl Into<String>) {
        self.print_line(vec![TextPart::new(TextMode::Plain, text)]);
    }

    pub fn append_table(&mut self, headers: Vec<String>, rows: Vec<Vec<String>>) {
        self.entries.push(Entry::Table { headers, rows });
    }

    /// Echo line first, then every message in order.
    pub fn present(&mut self, command: &str, execution: &Execution) {
        self.echo(command);
        for message in &execution.messages {
            match message {
                Message::Line { parts } => self.print_line(parts.clone()),
                Message::Table { headers, rows } => {
                    self.append_table(headers.clone(), rows.clone())
                }
                Message::Unknown => {}
            }
        }
    }

    pub fn lines(&self) -> Vec<Line<'_>> {
        let mut out = Vec::new();
        for entry in &self.entries {
            match entry {
                Entry::Echo(command) => out.push(render_echo(command)),
                Entry::Line(parts) => out.push(render_line(parts)),
                Entry::Table { headers, rows } => out.extend(render_table(headers, rows)),
            }
        }
        out
    }

    /// Keep the newest line visible from the next draw on.
    pub fn follow_tail(&mut self) {
        self.follow = true;
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    pub fn scroll_up(&mut self, n: usize) {
        let from = if self.follow {
            self.last_bottom.get()
        } else {
            self.offset
        };
        self.follow = false;
        self.offset = from.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        if self.follow {
            return;
        }
        self.offset += n;
        if self.offset >= self.last_bottom.get() {
            self.follow = true;
        }
    }

    /// First visible line for a viewport of `viewport` rows.
    pub fn scroll_offset(&self, content: usize, viewport: usize) -> usize {
        let bottom = bottom_offset(content, viewport);
        self.last_bottom.set(bottom);
        if self.follow {
            bottom
        } else {
            self.offset.min(bottom)
        }
    }
}

/// Offset that shows the last line; zero when everything fits.
pub fn bottom_offset(content: usize, viewport: usize) -> usize {
    content.saturating_sub(viewport)
}

pub fn mode_style(mode: TextMode) -> Option<Style> {
    let color = match mode {
        TextMode::Debug => Color::Blue,
        TextMode::Ok => Color::Green,
        TextMode::Warn => Color::Yellow,
        TextMode::Error => Color::Red,
        TextMode::Plain | TextMode::Unknown => return None,
    };
    Some(Style::default().fg(color))
}

pub fn render_echo(command: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}{}", ECHO_PREFIX, command),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Parts in order, no separators; unknown modes are dropped.
pub fn render_line(parts: &[TextPart]) -> Line<'_> {
    let spans: Vec<Span<'_>> = parts
        .iter()
        .filter(|p| p.mode != TextMode::Unknown)
        .map(|p| match mode_style(p.mode) {
            Some(style) => Span::styled(p.text.as_str(), style),
            None => Span::raw(p.text.as_str()),
        })
        .collect();
    Line::from(spans)
}

/// Header row, then one row per data row; cells are inserted as given.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let widths = column_widths(headers, rows);
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut out = Vec::with_capacity(rows.len() + 1);
    out.push(Line::from(
        headers
            .iter()
            .enumerate()
            .map(|(i, h)| Span::styled(pad(h, widths[i]), header_style))
            .collect::<Vec<_>>(),
    ));
    for row in rows {
        out.push(Line::from(
            row.iter()
                .enumerate()
                .map(|(i, cell)| Span::raw(pad(cell, widths[i])))
                .collect::<Vec<_>>(),
        ));
    }
    out
}

/// Longest cell per column plus two columns of spacing.
pub fn column_widths(headers: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).chain([headers.len()]).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    widths.iter().map(|w| w + 2).collect()
}

pub(crate) fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}

#[cfg(test)]
#[path = "tests/transcript_tests.rs"]
mod tests;
