use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Session;
use crate::remote::{CompletionOutcome, Execution, RemoteClient};
use crate::transcript::Transcript;

use super::input::Input;

mod controller;
mod event_loop;
mod lifecycle;
mod render;
mod requests;
mod runtime;

pub(super) use self::requests::{Dispatcher, Reply, Request};
pub(super) use self::runtime::run;

/// Which round-trip, if any, currently owns the input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum InputState {
    Ready,
    Busy(Pending),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Pending {
    Completion,
    Execution,
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) server: String,
    pub(in crate::tui_shell) session: Session,

    pub(in crate::tui_shell) input: Input,
    pub(in crate::tui_shell) state: InputState,

    // Candidates from the last ambiguous completion.
    pub(in crate::tui_shell) suggestions: Vec<String>,

    pub(in crate::tui_shell) transcript: Transcript,

    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn new(server: impl Into<String>, session: Session) -> Self {
        Self {
            server: server.into(),
            session,
            input: Input::default(),
            state: InputState::Ready,
            suggestions: Vec::new(),
            transcript: Transcript::default(),
            quit: false,
        }
    }

    pub(in crate::tui_shell) fn is_ready(&self) -> bool {
        self.state == InputState::Ready
    }
}
