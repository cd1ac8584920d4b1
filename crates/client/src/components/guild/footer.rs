use dioxus::prelude::*;
use guildxtra_shared::GuildConfig;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};

#[component]
pub fn Footer(config: GuildConfig) -> Element {
    rsx! {
        footer { class: "bg-dark-surface border-t border-border py-8",
            div { class: "container mx-auto px-6 text-center",
                div { class: "flex justify-center space-x-6 mb-4",
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Icon, title: "Discord", "💬" }
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Icon, title: "Участники", "👥" }
                    Button { variant: ButtonVariant::Ghost, size: ButtonSize::Icon, title: "Сайт", "🌐" }
                }
                p { class: "text-muted-foreground",
                    "© {config.founded_year} Guild XTRA. {config.footer}"
                }
            }
        }
    }
}
