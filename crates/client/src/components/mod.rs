//! UI components, grouped by page section.

pub mod gallery;
pub mod guild;
pub mod profile;
pub mod ui;
