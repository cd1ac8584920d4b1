use dioxus::prelude::*;
use guildxtra_shared::{GuildConfig, GuildStat};

use crate::components::ui::{Button, ButtonSize, ButtonVariant, Card, CardContent};

#[component]
pub fn Hero(config: GuildConfig, stats: Vec<GuildStat>) -> Element {
    rsx! {
        div { class: "relative overflow-hidden bg-gradient-to-br from-dark-bg via-dark-card to-dark-surface",
            div { class: "absolute inset-0 opacity-20 hero-grid" }

            div { class: "relative z-10 container mx-auto px-6 py-20",
                div { class: "text-center mb-16",
                    h1 { class: "text-6xl md:text-8xl font-bold mb-4 font-orbitron bg-gradient-to-r from-neon-green via-neon-pink to-neon-blue bg-clip-text text-transparent",
                        "{config.name}"
                    }
                    p { class: "text-xl md:text-2xl text-muted-foreground mb-8 max-w-2xl mx-auto",
                        "{config.tagline}"
                    }
                    div { class: "flex flex-wrap justify-center gap-4 mb-12",
                        for stat in stats {
                            Card {
                                key: "{stat.label}",
                                class: "border-border hover:border-primary transition-colors",
                                CardContent { class: "p-6 text-center",
                                    div { class: "flex justify-center mb-2 text-2xl", "{stat.icon}" }
                                    div { class: "text-3xl font-bold text-primary mb-1", "{stat.value}" }
                                    div { class: "text-sm text-muted-foreground", "{stat.label}" }
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Solid,
                        size: ButtonSize::Large,
                        onclick: move |_| crate::log_info!("Join request clicked"),
                        span { "⚔" }
                        "Присоединиться к гильдии"
                    }
                }
            }
        }
    }
}
