//! Backgrounds tab.

use dioxus::prelude::*;
use guildxtra_shared::{catalog, ProfileDraft};

use super::appearance_picker::tile_class;

#[component]
pub fn BackgroundPicker(draft: Signal<ProfileDraft>) -> Element {
    let mut draft = draft;
    let selected = draft.read().draft().background.id.clone();

    rsx! {
        div {
            label { class: "block text-sm font-medium text-foreground mb-4", "Фон профиля" }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for bg in catalog::backgrounds() {
                    button {
                        key: "{bg.id}",
                        class: tile_class(selected == bg.id),
                        onclick: move |_| {
                            if let Err(e) = draft.write().select_background(&bg.id) {
                                crate::log_warn!("Background not applied: {}", e);
                            }
                        },
                        div {
                            class: "h-24 flex items-center justify-center",
                            style: format!("background: {};", bg.css()),
                            span { class: "text-white font-medium drop-shadow-lg", "{bg.name}" }
                        }
                    }
                }
            }
        }
    }
}
