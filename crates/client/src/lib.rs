//! Guild XTRA Client - Dioxus web application
//!
//! The community page for the Guild XTRA Minecraft guild: hero, build
//! gallery, guild listings and the profile editor.

pub mod logging;

pub mod components;
pub mod routes;
pub mod stores;
pub mod views;

pub use routes::Route;
