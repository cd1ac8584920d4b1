//! Shared data models for the Guild XTRA page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// --- Gallery ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum BuildCategory {
    Castle,
    Modern,
    Redstone,
    PixelArt,
}

impl BuildCategory {
    /// Every category, in filter-bar order.
    pub const ALL: [BuildCategory; 4] = [
        BuildCategory::Castle,
        BuildCategory::Modern,
        BuildCategory::Redstone,
        BuildCategory::PixelArt,
    ];

    /// Wire name, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Self::Castle => "castle",
            Self::Modern => "modern",
            Self::Redstone => "redstone",
            Self::PixelArt => "pixel-art",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Castle => "Замки",
            Self::Modern => "Современное",
            Self::Redstone => "Редстоун",
            Self::PixelArt => "Пиксель-арт",
        }
    }

    /// Gradient stops used for the badge and the hover overlay.
    pub fn gradient(self) -> &'static str {
        match self {
            Self::Castle => "from-purple-500 to-pink-500",
            Self::Modern => "from-blue-500 to-cyan-500",
            Self::Redstone => "from-red-500 to-orange-500",
            Self::PixelArt => "from-green-500 to-emerald-500",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    #[serde(rename = "image")]
    pub image_ref: String,
    pub author: String,
    #[serde(rename = "likes")]
    pub like_count: u32,
    pub category: BuildCategory,
    pub description: String,
}

impl GalleryItem {
    /// First character of the author name, shown in the author bubble.
    pub fn author_initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}

// --- Presence / ranks ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PresenceStatus {
    Online,
    #[default]
    Offline,
    Away,
}

impl PresenceStatus {
    pub const ALL: [PresenceStatus; 3] = [
        PresenceStatus::Online,
        PresenceStatus::Away,
        PresenceStatus::Offline,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Away => "away",
        }
    }

    /// Hex color of the status dot and the avatar ring.
    pub fn color(self) -> &'static str {
        match self {
            Self::Online => "#00FF88",
            Self::Away => "#FFB800",
            Self::Offline => "#666",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Online => "В сети",
            Self::Away => "Отошёл",
            Self::Offline => "Не в сети",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GuildRank {
    Owner,
    Moderator,
    Builder,
    Member,
}

impl GuildRank {
    /// Parse the rank as it is written on the page. Unrecognized titles are
    /// plain members.
    pub fn from_title(title: &str) -> Self {
        match title {
            "Владелец" => Self::Owner,
            "Модератор" => Self::Moderator,
            "Билдер" => Self::Builder,
            _ => Self::Member,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Owner => "Владелец",
            Self::Moderator => "Модератор",
            Self::Builder => "Билдер",
            Self::Member => "Участник",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Owner => "bg-neon-green text-dark-bg",
            Self::Moderator => "bg-neon-pink text-white",
            Self::Builder => "bg-neon-blue text-white",
            Self::Member => "bg-muted text-muted-foreground",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Legendary,
    Epic,
    Rare,
    Common,
}

impl Rarity {
    pub fn key(self) -> &'static str {
        match self {
            Self::Legendary => "legendary",
            Self::Epic => "epic",
            Self::Rare => "rare",
            Self::Common => "common",
        }
    }

    pub fn border_class(self) -> &'static str {
        match self {
            Self::Legendary => "border-neon-green bg-neon-green/10",
            Self::Epic => "border-neon-pink bg-neon-pink/10",
            Self::Rare => "border-neon-blue bg-neon-blue/10",
            Self::Common => "border-muted bg-muted/10",
        }
    }
}

// --- Guild listings ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildMember {
    pub name: String,
    pub rank: GuildRank,
    pub status: PresenceStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildStat {
    pub label: String,
    pub value: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub body: String,
    pub posted: String,
}

/// Static page-level settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildConfig {
    pub name: String,
    pub tagline: String,
    pub footer: String,
    pub founded_year: i32,
}

// --- Profile cosmetics ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBackground {
    pub id: String,
    pub name: String,
    pub gradient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl ProfileBackground {
    /// CSS `background` value: the gradient with the pattern layered after it.
    pub fn css(&self) -> String {
        match &self.pattern {
            Some(pattern) => format!("{}, {}", self.gradient, pattern),
            None => self.gradient.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl ThemeColors {
    pub fn swatches(&self) -> [&str; 3] {
        [&self.primary, &self.secondary, &self.accent]
    }

    /// The primary color as an `r, g, b` triple for use inside `rgba()`.
    ///
    /// Accepts `#rrggbb` and `#rgb`. Returns `None` for anything else.
    pub fn glow_rgb(&self) -> Option<String> {
        let hex = self.primary.strip_prefix('#')?;
        let expanded: String = match hex.len() {
            6 => hex.to_string(),
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
        Some(format!("{}, {}, {}", channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTheme {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
}

// --- Profile ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub level: u32,
    pub rank: String,
    pub xp: u32,
    pub max_xp: u32,
    #[serde(rename = "achievements")]
    pub achievement_count: u32,
    #[serde(rename = "builds")]
    pub build_count: u32,
    pub background: ProfileBackground,
    pub theme: ProfileTheme,
    pub status: PresenceStatus,
    pub title: String,
    pub join_date: NaiveDate,
}

impl UserProfile {
    /// Progress towards the next level, as a percentage clamped to `0..=100`.
    pub fn xp_progress(&self) -> f64 {
        if self.max_xp == 0 {
            return 0.0;
        }
        (f64::from(self.xp) / f64::from(self.max_xp) * 100.0).clamp(0.0, 100.0)
    }

    pub fn join_date_label(&self) -> String {
        self.join_date.format("%d.%m.%Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(primary: &str) -> ThemeColors {
        ThemeColors {
            primary: primary.to_string(),
            secondary: "#000000".to_string(),
            accent: "#ffffff".to_string(),
        }
    }

    #[test]
    fn category_keys_match_serde_names() {
        for category in BuildCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
            assert_eq!(BuildCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(BuildCategory::from_key("PixelArt"), None);
    }

    #[test]
    fn rank_titles_fall_back_to_member() {
        assert_eq!(GuildRank::from_title("Владелец"), GuildRank::Owner);
        assert_eq!(GuildRank::from_title("Билдер"), GuildRank::Builder);
        assert_eq!(GuildRank::from_title("Гость"), GuildRank::Member);
        assert_eq!(GuildRank::Member.badge_class(), "bg-muted text-muted-foreground");
    }

    #[test]
    fn glow_rgb_parses_hex() {
        assert_eq!(theme("#00FF88").glow_rgb().as_deref(), Some("0, 255, 136"));
        assert_eq!(theme("#0f8").glow_rgb().as_deref(), Some("0, 255, 136"));
        assert_eq!(theme("00FF88").glow_rgb(), None);
        assert_eq!(theme("#00GG88").glow_rgb(), None);
        assert_eq!(theme("#ÿÿÿ").glow_rgb(), None);
    }

    #[test]
    fn background_css_layers_pattern() {
        let mut bg = ProfileBackground {
            id: "plain".to_string(),
            name: "Plain".to_string(),
            gradient: "linear-gradient(#000, #111)".to_string(),
            pattern: None,
        };
        assert_eq!(bg.css(), "linear-gradient(#000, #111)");
        bg.pattern = Some("radial-gradient(#fff, transparent)".to_string());
        assert_eq!(
            bg.css(),
            "linear-gradient(#000, #111), radial-gradient(#fff, transparent)"
        );
    }

    #[test]
    fn profile_uses_camel_case_wire_names() {
        let profile = crate::catalog::sample_profile();
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("maxXp").is_some());
        assert!(value.get("joinDate").is_some());
        assert!(value.get("achievements").is_some());
        assert_eq!(value["status"], "online");
    }

    #[test]
    fn xp_progress_is_clamped() {
        let mut profile = crate::catalog::sample_profile();
        profile.xp = 50;
        profile.max_xp = 200;
        assert_eq!(profile.xp_progress(), 25.0);
        profile.xp = 500;
        assert_eq!(profile.xp_progress(), 100.0);
        profile.max_xp = 0;
        assert_eq!(profile.xp_progress(), 0.0);
    }

    #[test]
    fn author_initial_handles_empty_author() {
        let mut item = crate::catalog::builds()[0].clone();
        item.author = String::new();
        assert_eq!(item.author_initial(), '?');
        item.author = "Кот".to_string();
        assert_eq!(item.author_initial(), 'К');
    }
}
