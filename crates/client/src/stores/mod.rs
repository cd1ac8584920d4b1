//! Global stores for application state.

pub mod profile;

pub use profile::{save_profile, CURRENT_PROFILE};
