//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{Home, PageNotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
