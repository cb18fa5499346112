// src/core/quiz.rs

use crate::core::knowledge_base::{LearningModule, QuizQuestion};
use crate::core::models::{Completion, ModuleCompletion};

/// Walks one module's quiz question by question.
#[derive(Debug)]
pub struct QuizSession {
    module: &'static LearningModule,
    current: usize,
    correct: usize,
    /// Chosen option index per answered question, in order.
    answers: Vec<usize>,
}

impl QuizSession {
    pub fn new(module: &'static LearningModule) -> Self {
        Self { module, current: 0, correct: 0, answers: Vec::new() }
    }

    pub fn module(&self) -> &'static LearningModule {
        self.module
    }

    /// The question waiting for an answer, or `None` once the quiz is over.
    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.module.quiz.get(self.current)
    }

    /// 1-based position of the current question, for display.
    pub fn position(&self) -> (usize, usize) {
        ((self.current + 1).min(self.total()), self.total())
    }

    pub fn total(&self) -> usize {
        self.module.quiz.len()
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.total()
    }

    /// Records an answer for the current question and moves on, returning whether it was right.
    /// `None` means nothing was recorded: the quiz is over or `choice` is not an option.
    pub fn answer(&mut self, choice: usize) -> Option<bool> {
        let question = self.current_question()?;
        if choice >= question.options.len() {
            return None;
        }
        let is_correct = question.correct_answer == choice;
        if is_correct {
            self.correct += 1;
        }
        self.answers.push(choice);
        self.current += 1;
        Some(is_correct)
    }

    /// Whether each recorded answer was right, in question order.
    pub fn results(&self) -> Vec<bool> {
        self.answers
            .iter()
            .zip(self.module.quiz)
            .map(|(&choice, question)| choice == question.correct_answer)
            .collect()
    }

    /// Percentage of correct answers, rounded. A module without questions scores 0.
    pub fn score_percent(&self) -> u8 {
        if self.total() == 0 {
            return 0;
        }
        (self.correct as f64 / self.total() as f64 * 100.0).round() as u8
    }

    /// The completion record to store once the quiz has been taken.
    pub fn completion(&self) -> ModuleCompletion {
        ModuleCompletion {
            module_id: self.module.id.to_string(),
            completed: Completion::Yes,
            quiz_score: Some(self.score_percent()),
        }
    }
}
