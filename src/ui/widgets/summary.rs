// src/ui/widgets/summary.rs

use crate::app::App;
use crate::core::report::ScoreRating;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Renders the always-visible summary: overall security score, rating and activity.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Security Score");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Score
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(4), // Advice
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Activity
        ])
        .split(area);

    let report = &app.report;
    let score = report.overall_security_score;
    let rating = ScoreRating::from_score(score);
    let color = match rating {
        ScoreRating::Excellent => Color::Green,
        ScoreRating::GoodStart => Color::Yellow,
        ScoreRating::NeedsImprovement => Color::Red,
    };

    let score_text = Text::from(vec![
        Line::from("Overall Score".bold()),
        Line::from(format!("{score}/100")).style(Style::default().fg(color)),
    ]);
    frame.render_widget(Paragraph::new(score_text).alignment(Alignment::Center), summary_chunks[0]);

    let gauge = Gauge::default()
        .percent(score as u16)
        .label("")
        .gauge_style(Style::default().fg(color));
    frame.render_widget(gauge, summary_chunks[1]);

    frame.render_widget(
        Paragraph::new(rating.advice()).wrap(Wrap { trim: true }),
        summary_chunks[3],
    );

    let progress = &report.learning_progress;
    let activity = Text::from(vec![
        Line::from("ACTIVITY".bold()),
        Line::from(vec![
            Span::raw("Checks run: "),
            Span::styled(report.total_checks.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::raw("Modules: "),
            Span::styled(
                format!("{}/{}", progress.completed_modules, progress.total_modules),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::raw("Avg quiz: "),
            Span::styled(
                format!("{}%", progress.average_quiz_score),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ]);
    frame.render_widget(Paragraph::new(activity), summary_chunks[5]);
}
