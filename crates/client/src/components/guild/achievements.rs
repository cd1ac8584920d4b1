use dioxus::prelude::*;
use guildxtra_shared::Achievement;

use crate::components::ui::{Badge, Card, CardContent};

#[component]
pub fn AchievementsSection(achievements: Vec<Achievement>) -> Element {
    rsx! {
        div { class: "text-center mb-12",
            h2 { class: "text-4xl font-bold mb-4 font-orbitron text-primary", "Достижения гильдии" }
            p { class: "text-muted-foreground max-w-2xl mx-auto",
                "Наши главные победы и достижения в мире Minecraft"
            }
        }

        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-16",
            for achievement in achievements {
                Card {
                    key: "{achievement.title}",
                    class: format!("border-2 {} hover:scale-105 transition-all duration-300", achievement.rarity.border_class()),
                    CardContent { class: "p-6 text-center",
                        div { class: "mb-4 flex justify-center",
                            div { class: "p-3 rounded-full bg-primary/10 text-3xl", "{achievement.icon}" }
                        }
                        h3 { class: "text-lg font-semibold mb-2 text-foreground", "{achievement.title}" }
                        p { class: "text-sm text-muted-foreground mb-3", "{achievement.description}" }
                        Badge { tone: achievement.rarity.border_class(), outline: true,
                            {achievement.rarity.key()}
                        }
                    }
                }
            }
        }
    }
}
