// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the application.
pub struct AppLayout {
    pub tabs: Rect,
    pub input: Rect,
    pub content: Rect,
    pub summary: Rect,
    pub footer: Rect,
}

/// Splits the frame into tab bar, optional input box, content, summary and footer.
///
/// The content and summary share the middle band side by side. Without an input box its
/// row is given to the content and `input` is an empty area.
pub fn create_layout(frame_size: Rect, show_input: bool) -> AppLayout {
    let input_height = if show_input { 3 } else { 0 };
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(input_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_chunks[2]);

    AppLayout {
        tabs: main_chunks[0],
        input: if show_input { main_chunks[1] } else { Rect::default() },
        content: content_chunks[0],
        summary: content_chunks[1],
        footer: main_chunks[3],
    }
}
