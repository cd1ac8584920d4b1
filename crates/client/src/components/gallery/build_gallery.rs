//! Gallery section: filter bar and the card grid.

use dioxus::prelude::*;
use guildxtra_shared::{filter_items, CategoryFilter, GalleryItem};

use super::BuildCard;
use crate::components::ui::{Button, ButtonSize};

#[derive(Props, Clone, PartialEq)]
pub struct BuildGalleryProps {
    pub items: &'static [GalleryItem],
}

#[component]
pub fn BuildGallery(props: BuildGalleryProps) -> Element {
    let mut selected = use_signal(CategoryFilter::default);
    let mut hovered = use_signal(|| None::<u32>);

    let current = selected.read().clone();
    let visible = filter_items(props.items, &current);

    rsx! {
        div { class: "py-20 bg-gradient-to-b from-dark-surface to-dark-bg",
            div { class: "container mx-auto px-6",
                div { class: "text-center mb-16",
                    h2 { class: "text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary via-accent to-secondary bg-clip-text text-transparent",
                        "Галерея Построек"
                    }
                    p { class: "text-xl text-muted-foreground max-w-2xl mx-auto",
                        "Впечатляющие творения участников гильдии XTRA"
                    }
                }

                // Category filter
                div { class: "flex flex-wrap justify-center gap-4 mb-12",
                    for option in CategoryFilter::options() {
                        button {
                            key: "{option}",
                            class: filter_class(option == current),
                            onclick: {
                                let option = option.clone();
                                move |_| {
                                    crate::log_debug!("Gallery filter: {}", option);
                                    selected.set(option.clone());
                                }
                            },
                            {option.label()}
                        }
                    }
                }

                // Grid
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-8",
                    for item in visible {
                        BuildCard {
                            key: "{item.id}",
                            item: item.clone(),
                            hovered: hovered() == Some(item.id),
                            on_hover: move |id| hovered.set(id),
                        }
                    }
                }

                div { class: "text-center mt-16",
                    Button { size: ButtonSize::Large, class: "rounded-full", "Загрузить ещё" }
                }
            }
        }
    }
}

fn filter_class(selected: bool) -> &'static str {
    if selected {
        "px-6 py-3 rounded-full font-medium transition-all duration-300 transform hover:scale-105 bg-primary text-primary-foreground shadow-lg shadow-primary/25"
    } else {
        "px-6 py-3 rounded-full font-medium transition-all duration-300 transform hover:scale-105 bg-dark-card text-muted-foreground hover:bg-dark-surface border border-border"
    }
}
