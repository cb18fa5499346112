// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

use cyber_aware::app::{App, ExportStatus, LearningView, Tab};
use cyber_aware::config::AppConfig;
use cyber_aware::core::export::export_report;
use cyber_aware::{logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let config = AppConfig::from_env();
    logging::initialize_logging(&config)?;
    info!(data_dir = %config.data_dir.display(), "Starting cyber-aware.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, config.export_dir()).await;

    // --- Restore Terminal ---
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;

    info!("Exiting cyber-aware.");
    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, export_dir: PathBuf) -> Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx, &export_dir)?;
        }

        if let Ok(status) = rx.try_recv() {
            app.finish_export(status);
        }
    }
    Ok(())
}

/// Dispatches one terminal event to the handler for the current screen.
fn handle_events(app: &mut App, tx: &mpsc::Sender<ExportStatus>, export_dir: &Path) -> Result<()> {
    match event::read()? {
        Event::Paste(text) if app.tab.takes_input() && !app.show_disclaimer => app.paste(&text),
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.quit();
            } else if app.show_disclaimer {
                handle_disclaimer_input(app, key.code);
            } else if key.code == KeyCode::Tab {
                app.next_tab();
            } else if key.code == KeyCode::BackTab {
                app.previous_tab();
            } else {
                match app.tab {
                    Tab::Password | Tab::Url | Tab::Email => handle_check_input(app, key),
                    Tab::Learning => handle_learning_input(app, key.code),
                    Tab::Report => handle_report_input(app, key.code, tx, export_dir),
                }
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_disclaimer_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => app.dismiss_disclaimer(),
        KeyCode::Esc => app.quit(),
        _ => {}
    }
}

/// Text entry on the password, URL and email tabs.
fn handle_check_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // Alt+Enter inserts a line break into email text.
        KeyCode::Enter if app.tab == Tab::Email && key.modifiers.contains(KeyModifiers::ALT) => {
            app.push_char('\n')
        }
        KeyCode::Enter => app.submit_check(),
        KeyCode::Char(c) => app.push_char(c),
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Esc if !app.input.is_empty() => app.input.clear(),
        KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_learning_input(app: &mut App, key_code: KeyCode) {
    match (&app.learning, key_code) {
        (LearningView::Browse, KeyCode::Up) => app.select_previous_module(),
        (LearningView::Browse, KeyCode::Down) => app.select_next_module(),
        (LearningView::Browse, KeyCode::Enter) => app.open_selected_module(),
        (LearningView::Browse, KeyCode::Char('q') | KeyCode::Esc) => app.quit(),
        (LearningView::Reading(_), KeyCode::Char('t')) => app.start_quiz(),
        (LearningView::Reading(_), KeyCode::Up) => app.scroll_up(),
        (LearningView::Reading(_), KeyCode::Down) => app.scroll_down(),
        (LearningView::Quiz(_), KeyCode::Char(c @ '1'..='9')) => {
            app.answer_quiz(c as usize - '1' as usize)
        }
        (LearningView::Finished { .. }, KeyCode::Enter) | (_, KeyCode::Esc) => {
            app.learning_back();
        }
        _ => {}
    }
}

fn handle_report_input(
    app: &mut App,
    key_code: KeyCode,
    tx: &mpsc::Sender<ExportStatus>,
    export_dir: &Path,
) {
    match key_code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('e') => {
            let Some(report) = app.begin_export() else {
                return;
            };
            let tx_clone = tx.clone();
            let dir = export_dir.to_path_buf();
            tokio::spawn(async move {
                let status = tokio::task::spawn_blocking(move || export_report(&report, &dir))
                    .await
                    .map_err(|e| color_eyre::eyre::eyre!("Export task panicked: {e}"))
                    .and_then(|result| result);
                let status = match status {
                    Ok(path) => ExportStatus::Success(path.display().to_string()),
                    Err(e) => {
                        error!(error = %e, "Report export failed.");
                        ExportStatus::Error(e.to_string())
                    }
                };
                let _ = tx_clone.send(status).await;
            });
        }
        KeyCode::Char('r') => app.refresh_report(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}
