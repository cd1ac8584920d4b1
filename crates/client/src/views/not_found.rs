use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "flex flex-col items-center justify-center min-h-screen bg-dark-bg text-foreground gap-4",
            h1 { class: "text-4xl font-bold font-orbitron text-primary", "404" }
            p { class: "text-muted-foreground", "Страница /{path} не найдена" }
            Link { to: Route::Home {}, class: "text-neon-green hover:underline", "На главную" }
        }
    }
}
