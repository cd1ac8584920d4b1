use dioxus::prelude::*;
use guildxtra_shared::GuildMember;

use crate::components::profile::PresenceIndicator;
use crate::components::ui::{Badge, Card, CardContent};

#[component]
pub fn MembersSection(members: Vec<GuildMember>) -> Element {
    rsx! {
        div { class: "mb-16",
            h2 { class: "text-4xl font-bold mb-8 text-center font-orbitron text-primary", "Участники гильдии" }
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                for member in members {
                    MemberCard { key: "{member.name}", member: member.clone() }
                }
            }
        }
    }
}

#[component]
fn MemberCard(member: GuildMember) -> Element {
    rsx! {
        Card { class: "border-border hover:border-primary transition-all duration-300 hover:scale-105",
            CardContent {
                div { class: "flex items-center space-x-3 mb-4",
                    div { class: "w-12 h-12 rounded-full bg-gradient-to-br from-primary to-secondary flex items-center justify-center text-white",
                        "👤"
                    }
                    div {
                        h3 { class: "font-semibold text-foreground", "{member.name}" }
                        div { class: "flex items-center space-x-2",
                            PresenceIndicator { status: member.status }
                            span { class: "text-sm text-muted-foreground", {member.status.label()} }
                        }
                    }
                }
                Badge { tone: member.rank.badge_class(), class: "w-full justify-center font-medium",
                    {member.rank.title()}
                }
            }
        }
    }
}
