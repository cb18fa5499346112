// src/ui/widgets/report_view.rs

use crate::app::{App, ExportStatus};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the five most recent checks of each type together with the export status.
pub fn render_report_view(frame: &mut Frame, app: &App, area: Rect) {
    let report = &app.report;
    let mut lines = Vec::new();

    lines.push(section("RECENT PASSWORD CHECKS"));
    if report.password_checks.is_empty() {
        lines.push(none_yet());
    }
    for check in &report.password_checks {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", check.created_at.format("%H:%M:%S"))),
            Span::styled(
                format!("{:<8}", check.assessment.strength.to_string()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" score {}/100", check.assessment.score)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section("RECENT URL CHECKS"));
    if report.url_checks.is_empty() {
        lines.push(none_yet());
    }
    for check in &report.url_checks {
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", check.created_at.format("%H:%M:%S"))),
            Span::styled(
                format!("{:<10}", check.assessment.safety.to_string()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" risk {:>3} ", check.assessment.risk_level)),
            Span::styled(check.url.clone(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(section("RECENT EMAIL CHECKS"));
    if report.email_checks.is_empty() {
        lines.push(none_yet());
    }
    for check in &report.email_checks {
        let preview: String = check
            .email_content
            .chars()
            .take(40)
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        lines.push(Line::from(vec![
            Span::raw(format!("  {} ", check.created_at.format("%H:%M:%S"))),
            Span::styled(
                format!("{:<7}", check.assessment.risk_level.to_string()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(format!(" risk {:>3} ", check.assessment.risk_score)),
            Span::styled(preview, Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(match &app.export_status {
        ExportStatus::Idle => Line::from("Press E to export this report as JSON.".dark_gray()),
        ExportStatus::InProgress => Line::from("Exporting...".cyan()),
        ExportStatus::Success(path) => Line::from(format!("Exported to {path}").green()),
        ExportStatus::Error(e) => Line::from(format!("Export failed: {e}").red()),
    });

    let p = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset as u16, 0))
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Security Report · {} checks (Scroll with ↑ ↓)",
            report.total_checks
        )));
    frame.render_widget(p, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(title.bold())
}

fn none_yet() -> Line<'static> {
    Line::from("  No checks yet.".dark_gray())
}
