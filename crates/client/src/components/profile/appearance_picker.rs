//! Appearance tab: avatar grid and color theme swatches.

use dioxus::prelude::*;
use guildxtra_shared::{catalog, ProfileDraft};

#[component]
pub fn AppearancePicker(draft: Signal<ProfileDraft>) -> Element {
    let mut draft = draft;
    let current = draft.read().draft().clone();

    rsx! {
        div { class: "space-y-6",
            div {
                label { class: "block text-sm font-medium text-foreground mb-4", "Аватар" }
                div { class: "grid grid-cols-4 gap-4",
                    for (index, avatar) in catalog::avatar_options().iter().enumerate() {
                        button {
                            key: "{avatar}",
                            class: tile_class(current.avatar == *avatar),
                            onclick: move |_| {
                                if let Err(e) = draft.write().select_avatar(avatar) {
                                    crate::log_warn!("Avatar not applied: {}", e);
                                }
                            },
                            img {
                                class: "w-full h-20 object-cover",
                                src: "{avatar}",
                                alt: format!("Avatar {}", index + 1),
                            }
                        }
                    }
                }
            }

            div {
                label { class: "block text-sm font-medium text-foreground mb-4", "Цветовая тема" }
                div { class: "grid grid-cols-2 gap-4",
                    for theme in catalog::themes() {
                        button {
                            key: "{theme.id}",
                            class: theme_class(current.theme.id == theme.id),
                            onclick: move |_| {
                                if let Err(e) = draft.write().select_theme(&theme.id) {
                                    crate::log_warn!("Theme not applied: {}", e);
                                }
                            },
                            div { class: "flex items-center gap-3 mb-2",
                                div {
                                    class: "w-6 h-6 rounded-full",
                                    style: "background-color: {theme.colors.primary};",
                                }
                                span { class: "text-sm font-medium text-foreground", "{theme.name}" }
                            }
                            div { class: "flex gap-1",
                                for color in theme.colors.swatches() {
                                    div {
                                        key: "{color}",
                                        class: "w-4 h-4 rounded-full",
                                        style: "background-color: {color};",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Selection frame shared by the avatar and background grids.
pub(super) fn tile_class(selected: bool) -> &'static str {
    if selected {
        "relative overflow-hidden rounded-xl border-2 transition-all border-primary shadow-lg scale-105"
    } else {
        "relative overflow-hidden rounded-xl border-2 transition-all border-border hover:border-primary/50"
    }
}

fn theme_class(selected: bool) -> &'static str {
    if selected {
        "p-4 rounded-xl border-2 transition-all border-primary bg-primary/10"
    } else {
        "p-4 rounded-xl border-2 transition-all border-border hover:border-primary/50"
    }
}
