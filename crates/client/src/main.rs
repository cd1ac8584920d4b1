//! Guild XTRA Client - Main entry point
//!
//! Supports both web (WASM) and desktop platforms.

#![allow(non_snake_case)]

use dioxus::prelude::*;
use guildxtra_client::{logging, routes::Route};

// Assets
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

// Neon palette for the Tailwind CDN build, so utilities like `bg-neon-green/10` resolve.
const TAILWIND_CONFIG: &str = r#"tailwind.config = {
  theme: {
    extend: {
      colors: {
        'neon-green': '#00FF88',
        'neon-pink': '#FF2E97',
        'neon-blue': '#00D9FF',
        'dark-bg': '#0A0A0F',
        'dark-card': '#14141F',
        'dark-surface': '#1C1C2B',
        border: '#2A2A3D',
        primary: { DEFAULT: '#00FF88', foreground: '#0A0A0F' },
        secondary: '#00D9FF',
        accent: '#FF2E97',
        foreground: '#F5F5FA',
        muted: { DEFAULT: '#2A2A3D', foreground: '#9A9AB0' },
      },
    },
  },
};"#;

fn main() {
    logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Script { "{TAILWIND_CONFIG}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Orbitron:wght@600;800&display=swap",
        }

        Router::<Route> {}
    }
}
