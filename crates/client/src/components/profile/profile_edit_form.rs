//! General tab of the profile editor: username, title, join date and status.

use dioxus::prelude::*;
use guildxtra_shared::{FieldEdit, PresenceStatus, ProfileDraft};

use crate::components::profile::PresenceIndicator;
use crate::components::ui::{Field, InputType, TextInput};

#[component]
pub fn ProfileEditForm(draft: Signal<ProfileDraft>) -> Element {
    let mut draft = draft;
    let profile = draft.read().draft().clone();

    rsx! {
        div { class: "space-y-6",
            Field { label: "Имя пользователя",
                TextInput {
                    value: profile.username.clone(),
                    oninput: move |e: FormEvent| apply_text(draft, "username", e.value()),
                }
            }

            Field { label: "Титул",
                TextInput {
                    value: profile.title.clone(),
                    placeholder: "Например: Мастер строитель",
                    oninput: move |e: FormEvent| apply_text(draft, "title", e.value()),
                }
            }

            Field { label: "В гильдии с",
                TextInput {
                    value: profile.join_date.format("%Y-%m-%d").to_string(),
                    input_type: InputType::Date,
                    oninput: move |e: FormEvent| apply_text(draft, "joinDate", e.value()),
                }
            }

            Field { label: "Статус",
                div { class: "flex flex-wrap gap-2",
                    for (key, status) in PresenceStatus::ALL.map(|s| (s.key(), s)) {
                        button {
                            key: "{key}",
                            class: {
                                let selected = status == profile.status;
                                format!(
                                    "flex items-center gap-2 px-4 py-2 rounded-xl text-sm border-2 transition-all {}",
                                    if selected { "border-primary bg-primary/10 text-foreground" } else { "border-border text-muted-foreground hover:border-primary/50" }
                                )
                            },
                            onclick: move |_| draft.write().update_field(FieldEdit::Status(status)),
                            PresenceIndicator { status }
                            {status.label()}
                        }
                    }
                }
            }
        }
    }
}

fn apply_text(mut draft: Signal<ProfileDraft>, key: &str, value: String) {
    if let Err(e) = draft.write().update_field_by_key(key, &value) {
        crate::log_warn!("Rejected edit: {}", e);
    }
}
