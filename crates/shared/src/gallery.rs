//! Category filter for the build gallery.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::models::{BuildCategory, GalleryItem};

/// Which builds the gallery shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(BuildCategory),
    /// A selection that names no known category. Matches nothing.
    Unrecognized(String),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    /// Filter-bar entries: "all" first, then each category.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(BuildCategory::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
            Self::Unrecognized(_) => false,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Only(category) => category.key(),
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "Все",
            Self::Only(category) => category.label(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_KEY {
            return Ok(Self::All);
        }
        Ok(BuildCategory::from_key(s)
            .map(Self::Only)
            .unwrap_or_else(|| Self::Unrecognized(s.to_string())))
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Items visible under `filter`, in source order.
pub fn filter_items<'a>(items: &'a [GalleryItem], filter: &CategoryFilter) -> Vec<&'a GalleryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, category: BuildCategory) -> GalleryItem {
        GalleryItem {
            id,
            title: format!("Build {id}"),
            image_ref: String::new(),
            author: "Tester".to_string(),
            like_count: 0,
            category,
            description: String::new(),
        }
    }

    #[test]
    fn selecting_modern_keeps_only_modern() {
        let items = vec![item(1, BuildCategory::Castle), item(2, BuildCategory::Modern)];
        let visible = filter_items(&items, &"modern".into());
        assert_eq!(visible, vec![&items[1]]);
    }

    #[test]
    fn all_returns_every_item_in_order() {
        let items = vec![
            item(3, BuildCategory::Redstone),
            item(1, BuildCategory::Castle),
            item(2, BuildCategory::Redstone),
        ];
        let visible: Vec<u32> = filter_items(&items, &CategoryFilter::All)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(visible, vec![3, 1, 2]);
    }

    #[test]
    fn filter_is_stable() {
        let items = vec![
            item(5, BuildCategory::PixelArt),
            item(6, BuildCategory::Castle),
            item(7, BuildCategory::PixelArt),
        ];
        let visible: Vec<u32> = filter_items(&items, &CategoryFilter::Only(BuildCategory::PixelArt))
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(visible, vec![5, 7]);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let items = vec![item(1, BuildCategory::Castle)];
        let filter = CategoryFilter::from("nether");
        assert_eq!(filter, CategoryFilter::Unrecognized("nether".to_string()));
        assert!(filter_items(&items, &filter).is_empty());
    }

    #[test]
    fn options_start_with_all() {
        let options = CategoryFilter::options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[4].label(), "Пиксель-арт");
        assert_eq!(options[4].to_string(), "pixel-art");
    }
}
