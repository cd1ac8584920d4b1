//! The community page.

use dioxus::prelude::*;
use guildxtra_shared::{catalog, UserProfile};

use crate::components::gallery::BuildGallery;
use crate::components::guild::{AchievementsSection, Footer, Hero, MembersSection, RulesAndNews};
use crate::components::profile::{CustomProfile, ProfileModal};
use crate::stores::{save_profile, CURRENT_PROFILE};

#[component]
pub fn Home() -> Element {
    let config = catalog::guild_config().clone();

    rsx! {
        div { class: "min-h-screen bg-dark-bg text-foreground",
            Hero { config: config.clone(), stats: catalog::guild_stats().to_vec() }

            div { class: "container mx-auto px-6 py-16",
                AchievementsSection { achievements: catalog::achievements().to_vec() }
                ProfileSection {}
                MembersSection { members: catalog::members().to_vec() }
            }

            BuildGallery { items: catalog::builds() }

            div { class: "container mx-auto px-6 py-16",
                RulesAndNews { rules: catalog::rules().to_vec(), news: catalog::news().to_vec() }
            }

            Footer { config }
        }
    }
}

/// The viewer's own card plus the editor that opens from it.
#[component]
fn ProfileSection() -> Element {
    let mut editing = use_signal(|| false);
    let profile = CURRENT_PROFILE.read().clone();

    rsx! {
        div { class: "mb-16",
            h2 { class: "text-4xl font-bold mb-8 text-center font-orbitron text-primary", "Мой профиль" }
            div { class: "max-w-2xl mx-auto",
                CustomProfile {
                    profile: profile.clone(),
                    is_own: true,
                    on_edit: move |_| {
                        crate::log_debug!("Profile editor opened");
                        editing.set(true);
                    },
                }
            }
        }

        if editing() {
            ProfileModal {
                profile,
                on_save: move |updated: UserProfile| save_profile(updated),
                on_close: move |_| editing.set(false),
            }
        }
    }
}
