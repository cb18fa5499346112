// src/ui/widgets/assessment_view.rs

use crate::app::{App, CheckOutcome, Tab};
use crate::core::models::{EmailRiskLevel, PasswordStrength, UrlSafety};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Renders the result of the most recent check on the current tab.
pub fn render_assessment_view(frame: &mut Frame, app: &App, area: Rect) {
    let main_block = Block::default().borders(Borders::ALL).title("Assessment");

    let Some(outcome) = &app.outcome else {
        let hint = match (&app.input_error, app.tab) {
            (Some(error), _) => Line::from(error.as_str().red()),
            (None, Tab::Password) => {
                Line::from("Type a password and press Enter. It is never stored.")
            }
            (None, Tab::Url) => {
                Line::from("Type or paste a URL and press Enter. Nothing is fetched.")
            }
            (None, _) => Line::from("Paste the email text and press Enter."),
        };
        let p = Paragraph::new(hint).alignment(Alignment::Center).wrap(Wrap { trim: true });
        frame.render_widget(p.block(main_block), area);
        return;
    };

    let inner_area = main_block.inner(area);
    frame.render_widget(main_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Verdict
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Messages
        ])
        .split(inner_area);

    let (verdict, score, color, heading, messages) = describe(outcome);

    let verdict_line = Line::from(vec![
        Span::raw("Result: "),
        Span::styled(verdict.to_uppercase(), Style::default().fg(color).bold()),
        Span::raw(format!("   Score: {score}/100")),
    ]);
    frame.render_widget(Paragraph::new(verdict_line), chunks[0]);

    // The URL risk level is not capped at 100, the gauge is.
    let gauge = Gauge::default()
        .percent(score.min(100) as u16)
        .label("")
        .gauge_style(Style::default().fg(color));
    frame.render_widget(gauge, chunks[1]);

    let items: Vec<ListItem> = messages
        .iter()
        .map(|m| {
            ListItem::new(Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::raw(m.as_str()),
            ]))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::TOP).title(heading));
    frame.render_widget(list, chunks[3]);
}

/// Verdict text, score, colour, list heading and messages of an outcome.
fn describe(outcome: &CheckOutcome) -> (String, u32, Color, &'static str, &[String]) {
    match outcome {
        CheckOutcome::Password(check) => {
            let a = &check.assessment;
            let color = match a.strength {
                PasswordStrength::Strong => Color::Green,
                PasswordStrength::Medium => Color::Yellow,
                PasswordStrength::Weak => Color::Red,
            };
            (a.strength.to_string(), a.score.into(), color, "Suggestions", &a.suggestions)
        }
        CheckOutcome::Url(check) => {
            let a = &check.assessment;
            let color = match a.safety {
                UrlSafety::Safe => Color::Green,
                UrlSafety::Suspicious => Color::Yellow,
                UrlSafety::Dangerous => Color::Red,
            };
            (a.safety.to_string(), a.risk_level, color, "Findings", &a.threats)
        }
        CheckOutcome::Email(check) => {
            let a = &check.assessment;
            let color = match a.risk_level {
                EmailRiskLevel::Low => Color::Green,
                EmailRiskLevel::Medium => Color::Yellow,
                EmailRiskLevel::High => Color::Red,
            };
            let verdict = format!("{} risk", a.risk_level);
            (verdict, a.risk_score.into(), color, "Detected threats", &a.detected_threats)
        }
    }
}
