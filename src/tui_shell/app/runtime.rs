use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::{App, Dispatcher, event_loop};

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("interactive shell requires a terminal (TTY); use `jcrsh exec` or `jcrsh run`");
    }

    let rt = tokio::runtime::Runtime::new().context("start async runtime")?;
    let (dispatcher, mut replies) = Dispatcher::new(opts.client.clone(), rt.handle().clone());

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::load(opts);
    let res = event_loop::run_loop(&mut terminal, &mut app, &dispatcher, &mut replies);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    // A hung request must not keep the process alive after the user quit.
    rt.shutdown_background();
    res
}
