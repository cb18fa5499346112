// src/ui/widgets/input.rs

use crate::app::{App, Tab};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the input box. Passwords are masked; multi-line email text shows its last line.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let (title, shown) = match app.tab {
        Tab::Password => ("Password", "*".repeat(app.input.chars().count())),
        Tab::Url => ("URL", app.input.clone()),
        _ => {
            let lines = app.input.lines().count().max(1);
            let last = app.input.rsplit('\n').next().unwrap_or_default().to_string();
            (if lines > 1 { "Email content (multi-line)" } else { "Email content" }, last)
        }
    };

    let width = area.width.saturating_sub(2) as usize;
    let visible: String = {
        let count = shown.chars().count();
        shown.chars().skip(count.saturating_sub(width.saturating_sub(1))).collect()
    };

    let input_block = Block::default().borders(Borders::ALL).title(title);
    let input_paragraph = Paragraph::new(visible.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    if !app.show_disclaimer {
        frame.set_cursor_position((area.x + visible.chars().count() as u16 + 1, area.y + 1));
    }
}
