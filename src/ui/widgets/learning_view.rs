// src/ui/widgets/learning_view.rs

use crate::app::{App, LearningView};
use crate::core::quiz::QuizSession;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

pub fn render_learning_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if matches!(app.learning, LearningView::Browse) {
        render_module_list(frame, app, area);
        return;
    }

    match &app.learning {
        LearningView::Browse => {}
        LearningView::Reading(module) => {
            let text = Text::from(vec![
                Line::from(module.title.bold()),
                Line::from(
                    format!("{} · {} · {}", module.icon, module.category, module.description)
                        .dark_gray(),
                ),
                Line::from(""),
                Line::from(module.content),
                Line::from(""),
                Line::from(vec![
                    Span::raw("Press "),
                    Span::styled("T", Style::new().bold().fg(Color::Yellow)),
                    Span::raw(format!(" to take the quiz ({} questions).", module.quiz.len())),
                ]),
            ]);
            let p = Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .scroll((app.scroll_offset as u16, 0))
                .block(Block::default().borders(Borders::ALL).title("Lesson"));
            frame.render_widget(p, area);
        }
        LearningView::Quiz(session) => render_quiz(frame, session, area),
        LearningView::Finished { module, correct, total, score, results } => {
            let mut lines = vec![
                Line::from("Module Completed!".bold().green()),
                Line::from(""),
                Line::from(module.title),
                Line::from(format!(
                    "You scored {correct} out of {total} ({score}%). Keep learning!"
                )),
                Line::from(""),
            ];
            for (i, (question, right)) in module.quiz.iter().zip(results).enumerate() {
                let mark = if *right { "✓".green() } else { "✗".red() };
                lines.push(Line::from(vec![
                    mark,
                    Span::raw(format!(" {}. {}", i + 1, question.question)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from("Press Enter to return to the modules."));
            let text = Text::from(lines);
            let p = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Quiz Result"));
            frame.render_widget(p, area);
        }
    }
}

fn render_module_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Learning Modules (Navigate with ↑ ↓)");
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner_area);

    let modules = app.store.learning_modules();
    let completed = modules.iter().filter(|m| app.is_module_completed(m.id)).count();
    let percent = if modules.is_empty() { 0 } else { completed * 100 / modules.len() };
    let gauge = Gauge::default()
        .percent(percent as u16)
        .label(format!("{completed} of {} modules completed", modules.len()))
        .gauge_style(Style::default().fg(Color::Cyan));
    frame.render_widget(gauge, chunks[0]);

    let items: Vec<ListItem> = modules
        .iter()
        .map(|m| {
            let (mark, style) = if app.is_module_completed(m.id) {
                ("✓ ", Style::default().fg(Color::Green))
            } else {
                ("  ", Style::default())
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(format!("[{}] ", m.category), Style::default().fg(Color::DarkGray)),
                Span::raw(m.title),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    frame.render_stateful_widget(list, chunks[1], &mut app.module_list_state);
}

fn render_quiz(frame: &mut Frame, session: &QuizSession, area: Rect) {
    let (position, total) = session.position();
    let title = format!("{} · Question {position} of {total}", session.module().title);
    let block = Block::default().borders(Borders::ALL).title(title);

    let Some(question) = session.current_question() else {
        frame.render_widget(block, area);
        return;
    };

    let mut lines = vec![Line::from(question.question.bold()), Line::from("")];
    for (i, option) in question.options.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), Style::new().bold().fg(Color::Yellow)),
            Span::raw(*option),
        ]));
    }
    let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(p, area);
}
