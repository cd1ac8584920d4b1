use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    /// Color classes, usually from a rank or rarity mapping
    pub tone: &'static str,
    #[props(optional)]
    pub outline: Option<bool>,
    #[props(optional)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let border = if props.outline.unwrap_or(false) {
        "border border-current"
    } else {
        "border border-transparent"
    };
    let extra = props.class.unwrap_or_default();

    rsx! {
        span {
            class: "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {border} {props.tone} {extra}",
            {props.children}
        }
    }
}
