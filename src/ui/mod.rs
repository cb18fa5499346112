// src/ui/mod.rs

use crate::app::{App, Tab};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area(), app.tab.takes_input());

    widgets::tabs::render_tabs(frame, app, layout.tabs);
    if app.tab.takes_input() {
        widgets::input::render_input(frame, app, layout.input);
    }

    match app.tab {
        Tab::Password | Tab::Url | Tab::Email => {
            widgets::assessment_view::render_assessment_view(frame, app, layout.content)
        }
        Tab::Learning => widgets::learning_view::render_learning_view(frame, app, layout.content),
        Tab::Report => widgets::report_view::render_report_view(frame, app, layout.content),
    }

    widgets::summary::render_summary(frame, app, layout.summary);
    widgets::footer::render_footer(frame, app, layout.footer);

    if app.show_disclaimer {
        widgets::disclaimer_popup::render_disclaimer_popup(frame, frame.area());
    }
}
