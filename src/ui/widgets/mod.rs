// src/ui/widgets/mod.rs

pub mod assessment_view; // Result of the latest password, URL or email check.
pub mod disclaimer_popup;
pub mod footer;
pub mod input;
pub mod learning_view;
pub mod report_view;
pub mod summary;
pub mod tabs;
