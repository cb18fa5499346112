// src/app.rs

use ratatui::widgets::ListState;
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{info, warn};

use crate::core::knowledge_base::LearningModule;
use crate::core::models::{Completion, EmailCheck, PasswordCheck, SecurityReport, UrlCheck};
use crate::core::quiz::QuizSession;
use crate::core::storage::MemoryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Tab {
    Password,
    #[strum(to_string = "URL")]
    Url,
    Email,
    Learning,
    Report,
}

impl Tab {
    /// Tabs that take free text and run an analyzer on Enter.
    pub fn takes_input(&self) -> bool {
        matches!(self, Tab::Password | Tab::Url | Tab::Email)
    }

    pub fn index(&self) -> usize {
        Tab::iter().position(|t| t == *self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Idle,
    InProgress,
    Success(String),
    Error(String),
}

/// The latest analyzed input, shown in the result panel.
#[derive(Debug, Clone)]
pub enum CheckOutcome {
    Password(PasswordCheck),
    Url(UrlCheck),
    Email(EmailCheck),
}

#[derive(Debug)]
pub enum LearningView {
    Browse,
    Reading(&'static LearningModule),
    Quiz(QuizSession),
    Finished {
        module: &'static LearningModule,
        correct: usize,
        total: usize,
        score: u8,
        /// Per-question outcome, in order.
        results: Vec<bool>,
    },
}

pub struct App {
    pub should_quit: bool,
    pub show_disclaimer: bool,
    pub tab: Tab,
    pub input: String,
    pub outcome: Option<CheckOutcome>,
    pub input_error: Option<String>,
    pub store: MemoryStore,
    pub report: SecurityReport,
    pub learning: LearningView,
    pub module_list_state: ListState,
    pub scroll_offset: usize,
    pub export_status: ExportStatus,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let store = MemoryStore::new();
        let report = store.security_report();
        Self {
            should_quit: false,
            show_disclaimer: true,
            tab: Tab::Password,
            input: String::new(),
            outcome: None,
            input_error: None,
            store,
            report,
            learning: LearningView::Browse,
            module_list_state: ListState::default().with_selected(Some(0)),
            scroll_offset: 0,
            export_status: ExportStatus::Idle,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn dismiss_disclaimer(&mut self) {
        self.show_disclaimer = false;
    }

    pub fn next_tab(&mut self) {
        let tabs: Vec<Tab> = Tab::iter().collect();
        self.switch_to(tabs[(self.tab.index() + 1) % tabs.len()]);
    }

    pub fn previous_tab(&mut self) {
        let tabs: Vec<Tab> = Tab::iter().collect();
        self.switch_to(tabs[(self.tab.index() + tabs.len() - 1) % tabs.len()]);
    }

    fn switch_to(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.input.clear();
        self.input_error = None;
        self.outcome = None;
        self.scroll_offset = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Pasted text keeps its line breaks only on the email tab.
    pub fn paste(&mut self, text: &str) {
        if self.tab == Tab::Email {
            self.input.push_str(&text.replace("\r\n", "\n"));
        } else {
            self.input.extend(text.chars().filter(|c| !c.is_control()));
        }
    }

    /// Runs the analyzer behind the current tab on the input and records the result.
    pub fn submit_check(&mut self) {
        let result = match self.tab {
            Tab::Password => self.store.record_password(&self.input).map(CheckOutcome::Password),
            Tab::Url => self.store.record_url(&self.input).map(CheckOutcome::Url),
            Tab::Email => self.store.record_email(&self.input).map(CheckOutcome::Email),
            Tab::Learning | Tab::Report => return,
        };
        match result {
            Ok(outcome) => {
                self.outcome = Some(outcome);
                self.input_error = None;
                // Never leave a password on screen.
                if self.tab == Tab::Password {
                    self.input.clear();
                }
                self.refresh_report();
            }
            Err(e) => {
                warn!(tab = %self.tab, error = %e, "Check rejected.");
                self.outcome = None;
                self.input_error = Some(e.to_string());
            }
        }
    }

    pub fn refresh_report(&mut self) {
        self.report = self.store.security_report();
    }

    pub fn is_module_completed(&self, module_id: &str) -> bool {
        self.store
            .progress()
            .iter()
            .any(|p| p.module_id == module_id && p.completed == Completion::Yes)
    }

    pub fn select_next_module(&mut self) {
        let count = self.store.learning_modules().len();
        if count == 0 {
            return;
        }
        let next = self.module_list_state.selected().map_or(0, |i| (i + 1) % count);
        self.module_list_state.select(Some(next));
    }

    pub fn select_previous_module(&mut self) {
        let count = self.store.learning_modules().len();
        if count == 0 {
            return;
        }
        let previous = self.module_list_state.selected().map_or(0, |i| (i + count - 1) % count);
        self.module_list_state.select(Some(previous));
    }

    pub fn open_selected_module(&mut self) {
        let selected = self
            .module_list_state
            .selected()
            .and_then(|i| self.store.learning_modules().get(i));
        if let Some(module) = selected {
            info!(module_id = module.id, "Learning module opened.");
            self.learning = LearningView::Reading(module);
            self.scroll_offset = 0;
        }
    }

    pub fn start_quiz(&mut self) {
        if let LearningView::Reading(module) = self.learning {
            self.learning = LearningView::Quiz(QuizSession::new(module));
        }
    }

    /// Answers the current quiz question. On the last answer the completion is stored.
    pub fn answer_quiz(&mut self, choice: usize) {
        let LearningView::Quiz(session) = &mut self.learning else {
            return;
        };
        if session.answer(choice).is_none() || !session.is_complete() {
            return;
        }

        let (module, correct, total) = (session.module(), session.correct(), session.total());
        let results = session.results();
        let completion = session.completion();
        let score = completion.quiz_score.unwrap_or(0);
        if let Err(e) = self.store.record_progress(completion) {
            warn!(error = %e, "Quiz result could not be stored.");
        }
        self.learning = LearningView::Finished { module, correct, total, score, results };
        self.refresh_report();
    }

    /// Steps back one level in the learning tab. Returns false when already at the list.
    pub fn learning_back(&mut self) -> bool {
        self.learning = match self.learning {
            LearningView::Browse => return false,
            LearningView::Reading(_) | LearningView::Finished { .. } => LearningView::Browse,
            LearningView::Quiz(ref session) => LearningView::Reading(session.module()),
        };
        true
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Marks an export as running and hands back the report to write.
    pub fn begin_export(&mut self) -> Option<SecurityReport> {
        if self.export_status == ExportStatus::InProgress {
            return None;
        }
        self.refresh_report();
        self.export_status = ExportStatus::InProgress;
        Some(self.report.clone())
    }

    pub fn finish_export(&mut self, status: ExportStatus) {
        self.export_status = status;
    }
}
