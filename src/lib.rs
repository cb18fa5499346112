//! Cyber-awareness toolkit: heuristic password, URL and email checks, learning-module
//! quizzes and an aggregated security score, driven from a terminal UI.
//!
//! The analyzers in [`core::analyzer`] and [`core::report::compute_security_report`] are
//! pure functions; everything else stores their output or displays it.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
