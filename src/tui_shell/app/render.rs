use ratatui::layout::{Position, Rect};

use super::*;

const MAX_SUGGESTION_ROWS: u16 = 8;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let suggestions_height = if app.suggestions.is_empty() {
        0
    } else {
        (app.suggestions.len() as u16).min(MAX_SUGGESTION_ROWS) + 1
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(suggestions_height),
            Constraint::Length(2),
        ])
        .split(area);

    // Header
    let prompt = app.session.prompt();
    let header = Paragraph::new(Line::from(vec![
        Span::styled("jcrsh", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::styled(app.session.current_path(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(app.server.as_str(), Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Transcript
    {
        let lines = app.transcript.lines();
        let viewport = chunks[1].height.saturating_sub(1) as usize; // top border
        let offset = app.transcript.scroll_offset(lines.len(), viewport);
        let visible: Vec<Line<'_>> = lines.into_iter().skip(offset).take(viewport).collect();
        let title = if app.transcript.is_following() {
            "Transcript".to_string()
        } else {
            format!("Transcript (line {})", offset + 1)
        };
        frame.render_widget(
            Paragraph::new(visible).block(Block::default().borders(Borders::TOP).title(title)),
            chunks[1],
        );
    }

    // Candidates
    if !app.suggestions.is_empty() {
        let total = app.suggestions.len();
        let shown = (MAX_SUGGESTION_ROWS as usize).min(total);
        let mut s_lines: Vec<Line<'_>> = app
            .suggestions
            .iter()
            .take(shown)
            .map(|s| Line::from(Span::styled(s.as_str(), Style::default().fg(Color::Yellow))))
            .collect();
        if total > shown {
            if let Some(last) = s_lines.last_mut() {
                *last = Line::from(Span::styled(
                    format!("... {} more", total - shown + 1),
                    Style::default().fg(Color::Gray),
                ));
            }
        }
        frame.render_widget(
            Paragraph::new(s_lines).block(
                Block::default()
                    .borders(Borders::TOP)
                    .title(format!("Candidates {}", total)),
            ),
            chunks[2],
        );
    }

    // Input
    let buf = app.input.buf.as_str();
    let mut input_spans = vec![
        Span::styled(prompt.as_str(), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
    ];
    if app.is_ready() {
        input_spans.push(Span::raw(buf));
    } else {
        input_spans.push(Span::styled(
            buf,
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ));
        input_spans.push(Span::styled(" …", Style::default().fg(Color::Gray)));
    }
    let input = Paragraph::new(Line::from(input_spans)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(input, chunks[3]);

    if let Some(position) = cursor_position(app, &prompt, chunks[3]) {
        frame.set_cursor_position(position);
    }
}

/// Cursor cell on the input line; none while Busy.
///
/// Columns are display widths, clamped to the pane.
pub(super) fn cursor_position(app: &App, prompt: &str, area: Rect) -> Option<Position> {
    if !app.is_ready() || area.width == 0 || area.height < 2 {
        return None;
    }
    let typed: String = app.input.buf.chars().take(app.input.cursor).collect();
    let column = Span::raw(prompt).width() + 1 + Span::raw(typed).width();
    let x = (column.min(u16::MAX as usize) as u16).min(area.width - 1);
    Some(Position::new(area.x + x, area.y + 1))
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/render_tests.rs"]
mod tests;
