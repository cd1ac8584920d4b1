use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Neon gradient call to action
    #[default]
    Primary,
    /// Solid neon green, used on the hero
    Solid,
    Ghost,
    /// Round translucent button over imagery
    Glass,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Medium,
    Large,
    Icon,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(optional)]
    pub class: Option<String>,
    #[props(optional)]
    pub variant: Option<ButtonVariant>,
    #[props(optional)]
    pub size: Option<ButtonSize>,
    #[props(optional)]
    pub title: Option<String>,
    #[props(optional)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant = props.variant.unwrap_or_default();
    let size = props.size.unwrap_or_default();

    let base = "inline-flex items-center justify-center gap-2 font-semibold transition-all duration-300 focus:outline-none";

    let variant_class = match variant {
        ButtonVariant::Primary => "bg-gradient-to-r from-primary to-secondary text-white rounded-xl hover:shadow-lg hover:shadow-primary/25 transform hover:scale-105",
        ButtonVariant::Solid => "bg-neon-green text-dark-bg rounded-lg hover:bg-neon-green/90",
        ButtonVariant::Ghost => "bg-transparent text-muted-foreground hover:text-primary rounded-lg",
        ButtonVariant::Glass => "bg-white/20 backdrop-blur-sm text-white rounded-full hover:bg-white/30",
    };

    let size_class = match size {
        ButtonSize::Medium => "px-6 py-3",
        ButtonSize::Large => "px-8 py-4 text-lg",
        ButtonSize::Icon => "p-3",
    };

    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{base} {variant_class} {size_class} {extra}"),
        _ => format!("{base} {variant_class} {size_class}"),
    };

    rsx! {
        button {
            class,
            r#type: "button",
            title: props.title.unwrap_or_default(),
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
