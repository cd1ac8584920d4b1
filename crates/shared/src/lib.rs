//! Shared types and logic for the Guild XTRA page.
//!
//! The client renders these; nothing in here depends on the UI layer.

pub mod catalog;
pub mod editor;
pub mod error;
pub mod gallery;
pub mod models;

pub use editor::{EditorTab, FieldEdit, ProfileDraft};
pub use error::*;
pub use gallery::{filter_items, CategoryFilter};
pub use models::*;
