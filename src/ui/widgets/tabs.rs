// src/ui/widgets/tabs.rs

use crate::app::{App, Tab};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};
use strum::IntoEnumIterator;

pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = Tab::iter().map(|t| t.to_string()).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title("Cyber Aware"))
        .select(app.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}
