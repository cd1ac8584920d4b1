//! A single gallery card.

use dioxus::prelude::*;
use guildxtra_shared::GalleryItem;

use crate::components::ui::{Button, ButtonSize, ButtonVariant};

const HOVER_SHADOW: &str = "0 20px 40px rgba(0, 255, 136, 0.3)";
const REST_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.3)";

#[derive(Props, Clone, PartialEq)]
pub struct BuildCardProps {
    pub item: GalleryItem,
    pub hovered: bool,
    /// Called with the card id on enter and `None` on leave
    pub on_hover: EventHandler<Option<u32>>,
}

#[component]
pub fn BuildCard(props: BuildCardProps) -> Element {
    let item = &props.item;
    let id = item.id;
    let gradient = item.category.gradient();
    let shadow = if props.hovered { HOVER_SHADOW } else { REST_SHADOW };
    let on_hover = props.on_hover;

    rsx! {
        div {
            class: "group relative overflow-hidden rounded-2xl bg-dark-card border border-border hover:border-primary/50 transition-all duration-500 transform hover:scale-105 hover:-translate-y-2",
            style: "box-shadow: {shadow};",
            onmouseenter: move |_| on_hover.call(Some(id)),
            onmouseleave: move |_| on_hover.call(None),

            div { class: "relative h-48 overflow-hidden",
                img {
                    class: "w-full h-full object-cover transition-transform duration-700 group-hover:scale-110",
                    src: "{item.image_ref}",
                    alt: "{item.title}",
                }
                div { class: "absolute inset-0 bg-gradient-to-t {gradient} opacity-0 group-hover:opacity-80 transition-opacity duration-300" }
                div { class: "absolute top-4 left-4 px-3 py-1 rounded-full text-xs font-medium bg-gradient-to-r {gradient} text-white",
                    {item.category.label()}
                }
                div { class: "absolute inset-0 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300",
                    div { class: "flex gap-4",
                        Button { variant: ButtonVariant::Glass, size: ButtonSize::Icon, title: "Смотреть", "👁" }
                        Button { variant: ButtonVariant::Glass, size: ButtonSize::Icon, title: "Нравится", "♥" }
                        Button { variant: ButtonVariant::Glass, size: ButtonSize::Icon, title: "Поделиться", "↗" }
                    }
                }
            }

            div { class: "p-6",
                h3 { class: "text-xl font-bold text-foreground mb-2 group-hover:text-primary transition-colors",
                    "{item.title}"
                }
                p { class: "text-sm text-muted-foreground mb-4 line-clamp-2", "{item.description}" }
                div { class: "flex items-center justify-between",
                    div { class: "flex items-center gap-2",
                        div { class: "w-8 h-8 bg-gradient-to-r from-primary to-secondary rounded-full flex items-center justify-center",
                            span { class: "text-xs font-bold text-white", {item.author_initial().to_string()} }
                        }
                        span { class: "text-sm font-medium text-foreground", "{item.author}" }
                    }
                    div { class: "flex items-center gap-1 text-muted-foreground",
                        span { class: "text-red-500", "♥" }
                        span { class: "text-sm font-medium", "{item.like_count}" }
                    }
                }
            }

            div { class: "absolute inset-0 rounded-2xl border-2 border-transparent group-hover:border-primary/50 transition-colors duration-300" }
        }
    }
}
