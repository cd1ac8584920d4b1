//! Presence indicator component - shows a colored dot for a member's status.

use dioxus::prelude::*;
use guildxtra_shared::PresenceStatus;

#[derive(Props, Clone, PartialEq)]
pub struct PresenceIndicatorProps {
    pub status: PresenceStatus,
    #[props(optional)]
    pub size: Option<&'static str>,
    #[props(optional)]
    pub class: Option<&'static str>,
}

#[component]
pub fn PresenceIndicator(props: PresenceIndicatorProps) -> Element {
    let size = props.size.unwrap_or("w-2 h-2");
    let extra = props.class.unwrap_or("");
    let color = props.status.color();
    let title = props.status.label();

    rsx! {
        span {
            class: "{size} {extra} rounded-full inline-block",
            style: "background-color: {color};",
            title: "{title}",
        }
    }
}
