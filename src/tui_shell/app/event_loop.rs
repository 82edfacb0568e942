use tokio::sync::mpsc::UnboundedReceiver;

use super::*;

const PAGE: usize = 10;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    replies: &mut UnboundedReceiver<Reply>,
) -> Result<()> {
    loop {
        while let Ok(reply) = replies.try_recv() {
            app.handle_reply(reply);
        }

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                // Releases (and Tab releases in particular) are ignored.
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    if let Some(request) = handle_key(app, k) {
                        dispatcher.dispatch(request);
                    }
                }
                _ => {}
            }
        }
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) -> Option<Request> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.quit = true;
        return None;
    }
    if !app.is_ready() {
        return None;
    }

    match key.code {
        KeyCode::Tab => return app.request_completion(),
        KeyCode::Enter => return app.request_execution(),

        KeyCode::Esc => {
            if app.input.buf.is_empty() {
                app.suggestions.clear();
            } else {
                app.input.clear();
            }
        }
        KeyCode::Char('d') if ctrl => {
            if app.input.buf.is_empty() {
                app.quit = true;
            } else {
                app.input.delete();
            }
        }
        KeyCode::Char('u') if ctrl => app.input.clear(),
        KeyCode::Char('p') if ctrl => app.input.history_up(),
        KeyCode::Char('n') if ctrl => app.input.history_down(),
        KeyCode::Char(c) if !ctrl => app.input.insert_char(c),

        KeyCode::Up => app.input.history_up(),
        KeyCode::Down => app.input.history_down(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_home(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::PageUp => app.transcript.scroll_up(PAGE),
        KeyCode::PageDown => app.transcript.scroll_down(PAGE),
        _ => {}
    }
    None
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/event_loop_tests.rs"]
mod tests;
