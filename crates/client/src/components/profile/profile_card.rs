//! Custom profile card - the profile rendered with its chosen background and theme.

use dioxus::prelude::*;
use guildxtra_shared::UserProfile;

use super::AnimatedAvatar;

const DEFAULT_SHADOW: &str = "0 8px 32px rgba(0, 0, 0, 0.3)";

#[derive(Props, Clone, PartialEq)]
pub struct CustomProfileProps {
    pub profile: UserProfile,
    /// Shows the edit button when the card belongs to the viewer
    #[props(default)]
    pub is_own: bool,
    #[props(optional)]
    pub on_edit: Option<EventHandler<()>>,
}

#[component]
pub fn CustomProfile(props: CustomProfileProps) -> Element {
    let mut hovered = use_signal(|| false);

    let profile = &props.profile;
    let colors = &profile.theme.colors;
    let background = profile.background.css();
    let shadow = match (hovered(), colors.glow_rgb()) {
        (true, Some(rgb)) => format!("0 20px 40px rgba({rgb}, 0.3)"),
        _ => DEFAULT_SHADOW.to_string(),
    };
    let xp_width = format!("{:.1}", profile.xp_progress());
    let joined = profile.join_date_label();
    let particles = particle_styles(&colors.accent);

    rsx! {
        div {
            class: "relative overflow-hidden rounded-3xl border border-border/50 backdrop-blur-sm transition-all duration-500 hover:border-primary/50 hover:scale-105",
            style: "background: {background}; box-shadow: {shadow};",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            // Floating particles
            div { class: "absolute inset-0 overflow-hidden pointer-events-none",
                for (i, style) in particles.into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "absolute w-2 h-2 rounded-full opacity-30 animate-float",
                        style,
                    }
                }
            }

            // Header
            div { class: "relative p-8 pb-4",
                div { class: "flex items-start justify-between mb-6",
                    div { class: "flex items-center gap-6",
                        AnimatedAvatar {
                            src: profile.avatar.clone(),
                            status: profile.status,
                            rank: profile.rank.clone(),
                            size: 100,
                        }
                        div {
                            h2 { class: "text-3xl font-bold text-white mb-2 drop-shadow-lg", "{profile.username}" }
                            p { class: "text-lg text-white/80 mb-2", "{profile.title}" }
                            div { class: "flex items-center gap-2 text-white/70",
                                span { "📅" }
                                span { "В гильдии с {joined}" }
                            }
                        }
                    }

                    if props.is_own {
                        button {
                            class: "p-3 bg-white/10 backdrop-blur-sm rounded-full hover:bg-white/20 transition-colors text-white",
                            title: "Редактировать профиль",
                            onclick: move |_| {
                                if let Some(on_edit) = &props.on_edit {
                                    on_edit.call(());
                                }
                            },
                            "⚙"
                        }
                    }
                }

                // Level & XP
                div { class: "bg-black/20 backdrop-blur-sm rounded-2xl p-4 mb-4",
                    div { class: "flex items-center justify-between mb-2",
                        span { class: "text-white font-semibold", "Уровень {profile.level}" }
                        span { class: "text-white/80 text-sm", "{profile.xp} / {profile.max_xp} XP" }
                    }
                    div { class: "relative h-3 bg-black/30 rounded-full overflow-hidden",
                        div {
                            class: "absolute inset-y-0 left-0 rounded-full transition-all duration-1000 ease-out",
                            style: "width: {xp_width}%; background: linear-gradient(90deg, {colors.primary}, {colors.secondary});",
                        }
                        div { class: "absolute inset-0 bg-gradient-to-r from-transparent via-white/20 to-transparent animate-pulse" }
                    }
                }
            }

            // Stats
            div { class: "px-8 pb-8",
                div { class: "grid grid-cols-3 gap-4",
                    StatTile { value: profile.achievement_count, label: "Достижения" }
                    StatTile { value: profile.build_count, label: "Постройки" }
                    StatTile { value: profile.level, label: "Уровень" }
                }
            }

            div {
                class: "absolute inset-0 rounded-3xl opacity-0 hover:opacity-100 transition-opacity duration-300 pointer-events-none",
                style: "background: linear-gradient(45deg, transparent, {colors.primary}40, transparent); filter: blur(1px);",
            }
        }
    }
}

fn particle_styles(accent: &str) -> Vec<String> {
    (0..6u32)
        .map(|i| {
            let left = 20 + i * 15;
            let top = 30 + (i % 2) * 40;
            let delay = f64::from(i) * 0.5;
            format!(
                "background: {accent}; left: {left}%; top: {top}%; animation-delay: {delay}s; animation-duration: {}s;",
                3.0 + delay
            )
        })
        .collect()
}

#[component]
fn StatTile(value: u32, label: &'static str) -> Element {
    rsx! {
        div { class: "bg-black/20 backdrop-blur-sm rounded-xl p-4 text-center hover:bg-black/30 transition-colors",
            div { class: "text-2xl font-bold text-white mb-1", "{value}" }
            div { class: "text-white/70 text-sm", "{label}" }
        }
    }
}
