use dioxus::prelude::*;
use guildxtra_shared::NewsItem;

use crate::components::ui::{Card, CardContent};

/// Accent border/text pairs the news feed cycles through.
const NEWS_ACCENTS: [(&str, &str); 3] = [
    ("border-neon-green", "text-neon-green"),
    ("border-neon-pink", "text-neon-pink"),
    ("border-neon-blue", "text-neon-blue"),
];

#[component]
pub fn RulesAndNews(rules: Vec<String>, news: Vec<NewsItem>) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-8",
            Card {
                CardContent { class: "p-8",
                    div { class: "flex items-center mb-6 gap-3",
                        span { class: "text-2xl text-primary", "📜" }
                        h3 { class: "text-2xl font-bold text-foreground", "Правила гильдии" }
                    }
                    ul { class: "space-y-3 text-muted-foreground",
                        for rule in rules {
                            li { key: "{rule}", class: "flex items-start",
                                span { class: "text-neon-green mr-2 flex-shrink-0", "✓" }
                                "{rule}"
                            }
                        }
                    }
                }
            }

            Card {
                CardContent { class: "p-8",
                    div { class: "flex items-center mb-6 gap-3",
                        span { class: "text-2xl text-primary", "📰" }
                        h3 { class: "text-2xl font-bold text-foreground", "Последние новости" }
                    }
                    div { class: "space-y-4",
                        for (item, (border, text)) in news.into_iter().zip(NEWS_ACCENTS.iter().cycle()) {
                            div { key: "{item.title}", class: "border-l-4 {border} pl-4",
                                h4 { class: "font-semibold text-foreground", "{item.title}" }
                                p { class: "text-sm text-muted-foreground", "{item.body}" }
                                span { class: "text-xs {text}", "{item.posted}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
