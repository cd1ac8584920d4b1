//! Avatar with a status-colored spinning ring and a rank badge.

use dioxus::prelude::*;
use guildxtra_shared::PresenceStatus;

use super::PresenceIndicator;

#[derive(Props, Clone, PartialEq)]
pub struct AnimatedAvatarProps {
    pub src: String,
    pub status: PresenceStatus,
    pub rank: String,
    /// Image diameter in pixels
    #[props(default = 80)]
    pub size: u32,
}

#[component]
pub fn AnimatedAvatar(props: AnimatedAvatarProps) -> Element {
    let color = props.status.color();
    let ring = format!("conic-gradient(from 0deg, {color}, transparent, {color})");
    let outer = props.size + 6;
    let size = props.size;

    rsx! {
        div { class: "relative",
            // Outer glow
            div {
                class: "absolute inset-0 rounded-full animate-pulse",
                style: "background: {ring}; padding: 3px; filter: blur(2px);",
            }

            div {
                class: "relative bg-dark-card rounded-full p-1",
                style: "width: {outer}px; height: {outer}px;",
                div {
                    class: "absolute inset-0 rounded-full avatar-ring-spin",
                    style: "background: {ring};",
                }
                div {
                    class: "relative bg-dark-surface rounded-full overflow-hidden",
                    style: "width: {size}px; height: {size}px;",
                    img {
                        class: "w-full h-full object-cover hover:scale-110 transition-transform duration-300",
                        src: "{props.src}",
                        alt: "Avatar",
                    }
                    PresenceIndicator {
                        status: props.status,
                        size: "w-4 h-4",
                        class: "absolute bottom-1 right-1 border-2 border-dark-card",
                    }
                }
            }

            // Rank badge
            div { class: "absolute -top-2 -right-2 bg-gradient-to-r from-yellow-400 to-orange-500 text-black text-xs font-bold px-2 py-1 rounded-full",
                "{props.rank}"
            }
        }
    }
}
