//! View components for the application.

pub mod home;
pub mod not_found;

pub use home::Home;
pub use not_found::PageNotFound;
