// src/ui/widgets/footer.rs

use crate::app::{App, LearningView, Tab};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::new().bold().fg(Color::Yellow))
}

/// Renders the footer widget, which displays available actions.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = if app.show_disclaimer {
        Line::from(vec![
            key("Enter"),
            Span::raw(" to continue, "),
            key("Esc"),
            Span::raw(" to quit."),
        ])
    } else {
        match (app.tab, &app.learning) {
            (Tab::Password | Tab::Url | Tab::Email, _) => Line::from(vec![
                key("Enter"),
                Span::raw(" to check, "),
                key("Tab"),
                Span::raw(" to switch, "),
                key("Esc"),
                Span::raw(" to clear/quit."),
            ]),
            (Tab::Learning, LearningView::Browse) => Line::from(vec![
                key("Enter"),
                Span::raw(" open, "),
                key("Tab"),
                Span::raw(" switch, "),
                key("[Q]"),
                Span::raw("uit"),
            ]),
            (Tab::Learning, LearningView::Reading(_)) => Line::from(vec![
                key("[T]"),
                Span::raw("ake quiz, "),
                key("Esc"),
                Span::raw(" back"),
            ]),
            (Tab::Learning, LearningView::Quiz(_)) => Line::from(vec![
                key("1-4"),
                Span::raw(" answer, "),
                key("Esc"),
                Span::raw(" leave quiz"),
            ]),
            (Tab::Learning, LearningView::Finished { .. }) => {
                Line::from(vec![key("Enter"), Span::raw(" back to modules")])
            }
            (Tab::Report, _) => Line::from(vec![
                key("[E]"),
                Span::raw("xport, "),
                key("Tab"),
                Span::raw(" switch, "),
                key("[Q]"),
                Span::raw("uit"),
            ]),
        }
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
