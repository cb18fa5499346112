// src/core/mod.rs

/// Data structures shared across the application: assessments, stored records and the report.
pub mod models;

/// The three heuristic analyzers (password, URL, email).
pub mod analyzer;

/// Aggregation of check histories and learning progress into the security report.
pub mod report;

/// Static catalogue of learning modules and their quizzes.
pub mod knowledge_base;

/// Quiz sessions over a learning module.
pub mod quiz;

/// In-memory store that assigns ids and timestamps to results.
pub mod storage;

/// JSON export of the security report.
pub mod export;
