//! Profile editor modal.
//!
//! ```text
//! +---------------------------------------------------------------+
//! |  Редактирование профиля                                   [X] |
//! |---------------------------------------------------------------|
//! |  [preview: background, avatar, username, title]               |
//! |---------------------------------------------------------------|
//! |  Общие | Внешний вид | Фоны                                   |
//! |  ...active tab form...                                        |
//! |---------------------------------------------------------------|
//! |                               Отмена   [Сохранить изменения]  |
//! +---------------------------------------------------------------+
//! ```
//!
//! The modal owns a [`ProfileDraft`] for as long as it is mounted. Saving
//! hands the draft to `on_save` and then closes; every other way out closes
//! without emitting anything.

use dioxus::prelude::*;
use guildxtra_shared::{EditorTab, ProfileDraft, UserProfile};

use super::{AppearancePicker, BackgroundPicker, ProfileEditForm};
use crate::components::ui::{Button, ButtonVariant};

#[derive(Props, Clone, PartialEq)]
pub struct ProfileModalProps {
    pub profile: UserProfile,
    pub on_save: EventHandler<UserProfile>,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn ProfileModal(props: ProfileModalProps) -> Element {
    let draft = use_signal(|| ProfileDraft::open(&props.profile));

    let on_close = props.on_close;
    let on_save = props.on_save;

    let cancel = move |_: MouseEvent| {
        if draft.peek().is_dirty() {
            crate::log_debug!("Profile edits discarded");
        }
        on_close.call(());
    };

    let confirm = move |_: MouseEvent| {
        let finished = draft.peek().clone();
        on_save.call(finished.confirm());
        on_close.call(());
    };

    let editor = draft.read();
    let preview = editor.draft();
    let active = editor.tab();
    let background = preview.background.css();

    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center p-4",
            // Backdrop
            div {
                class: "absolute inset-0 bg-black/80 backdrop-blur-sm",
                onclick: cancel,
            }

            div { class: "relative bg-dark-card border border-border rounded-3xl max-w-4xl w-full max-h-[90vh] overflow-hidden shadow-2xl",
                // Header
                div { class: "flex items-center justify-between p-6 border-b border-border",
                    h2 { class: "text-2xl font-bold text-foreground", "Редактирование профиля" }
                    button {
                        class: "p-2 hover:bg-dark-surface rounded-full transition-colors text-muted-foreground",
                        onclick: cancel,
                        "✕"
                    }
                }

                // Preview
                div { class: "p-6 border-b border-border",
                    div {
                        class: "relative overflow-hidden rounded-2xl p-6 mb-4",
                        style: "background: {background}; min-height: 200px;",
                        div { class: "flex items-center gap-4",
                            div { class: "relative",
                                img {
                                    class: "w-20 h-20 rounded-full border-4 border-white/20",
                                    src: "{preview.avatar}",
                                    alt: "Avatar",
                                }
                                div {
                                    class: "absolute -bottom-1 -right-1 w-6 h-6 rounded-full border-2 border-white",
                                    style: "background-color: {preview.theme.colors.primary};",
                                }
                            }
                            div {
                                h3 { class: "text-2xl font-bold text-white drop-shadow-lg", "{preview.username}" }
                                p { class: "text-white/80", "{preview.title}" }
                            }
                        }
                    }
                }

                // Tabs
                div { class: "flex border-b border-border",
                    for tab in EditorTab::ALL {
                        TabButton { tab, active: tab == active, draft }
                    }
                }

                // Content
                div { class: "p-6 max-h-96 overflow-y-auto",
                    match active {
                        EditorTab::General => rsx! { ProfileEditForm { draft } },
                        EditorTab::Appearance => rsx! { AppearancePicker { draft } },
                        EditorTab::Backgrounds => rsx! { BackgroundPicker { draft } },
                    }
                }

                // Footer
                div { class: "flex items-center justify-end gap-4 p-6 border-t border-border",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: cancel,
                        "Отмена"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: confirm,
                        "Сохранить изменения"
                    }
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: EditorTab, active: bool, draft: Signal<ProfileDraft>) -> Element {
    let mut draft = draft;
    let class = if active {
        "flex items-center gap-2 px-6 py-4 transition-colors text-primary border-b-2 border-primary bg-primary/5"
    } else {
        "flex items-center gap-2 px-6 py-4 transition-colors text-muted-foreground hover:text-foreground"
    };

    rsx! {
        button {
            class,
            onclick: move |_| draft.write().set_tab(tab),
            span { {tab.icon()} }
            {tab.label()}
        }
    }
}
