//! Static page content and cosmetic catalogs.
//!
//! Everything here is built once on first access and never mutated. The
//! profile editor resolves background, theme and avatar selections against
//! these tables.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::models::{
    Achievement, BuildCategory, GalleryItem, GuildConfig, GuildMember, GuildRank, GuildStat,
    NewsItem, PresenceStatus, ProfileBackground, ProfileTheme, Rarity, ThemeColors, UserProfile,
};

static GUILD: Lazy<GuildConfig> = Lazy::new(|| GuildConfig {
    name: "GUILD XTRA".to_string(),
    tagline: "Элитная Minecraft гильдия с богатой историей побед и невероятных построек"
        .to_string(),
    footer: "Создано с ❤️ для лучшего Minecraft сообщества".to_string(),
    founded_year: 2024,
});

static BACKGROUNDS: Lazy<Vec<ProfileBackground>> = Lazy::new(|| {
    vec![
        background(
            "neon-city",
            "Неоновый город",
            "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
            "radial-gradient(circle at 20% 80%, rgba(0, 255, 136, 0.3) 0%, transparent 50%)",
        ),
        background(
            "cyber-matrix",
            "Кибер матрица",
            "linear-gradient(135deg, #0c0c0c 0%, #1a1a2e 50%, #16213e 100%)",
            "repeating-linear-gradient(90deg, transparent, transparent 2px, rgba(0, 255, 136, 0.1) 2px, rgba(0, 255, 136, 0.1) 4px)",
        ),
        background(
            "space-nebula",
            "Космическая туманность",
            "linear-gradient(135deg, #2c1810 0%, #5d4e75 50%, #b4a7d6 100%)",
            "radial-gradient(ellipse at top, rgba(255, 255, 255, 0.1) 0%, transparent 60%)",
        ),
        background(
            "fire-storm",
            "Огненная буря",
            "linear-gradient(135deg, #ff6b35 0%, #f7931e 50%, #ff006e 100%)",
            "radial-gradient(circle at 70% 30%, rgba(255, 255, 255, 0.2) 0%, transparent 50%)",
        ),
    ]
});

static THEMES: Lazy<Vec<ProfileTheme>> = Lazy::new(|| {
    vec![
        theme("neon-green", "Неоновый зелёный", ["#00FF88", "#00CC6A", "#88FFB8"]),
        theme("cyber-blue", "Кибер синий", ["#00D9FF", "#0099CC", "#88E5FF"]),
        theme("royal-purple", "Королевский фиолетовый", ["#8B5CF6", "#7C3AED", "#C4B5FD"]),
        theme("fire-orange", "Огненный оранжевый", ["#FF6B35", "#F7931E", "#FFB366"]),
    ]
});

static AVATARS: Lazy<Vec<String>> = Lazy::new(|| {
    ["Steve", "Alex", "MHF_Creeper", "MHF_Enderman"]
        .iter()
        .map(|skin| format!("https://mc-heads.net/avatar/{skin}/100"))
        .collect()
});

static BUILDS: Lazy<Vec<GalleryItem>> = Lazy::new(|| {
    vec![
        build(
            1,
            "Киберзамок XTRA",
            "CyberBuilder",
            847,
            BuildCategory::Castle,
            "Эпический замок с неоновой подсветкой и футуристическими элементами",
        ),
        build(
            2,
            "Неоновый город",
            "NeonArchitect",
            1205,
            BuildCategory::Modern,
            "Современный мегаполис с киберпанк атмосферой",
        ),
        build(
            3,
            "Редстоун процессор",
            "RedstoneGuru",
            623,
            BuildCategory::Redstone,
            "Функциональный 8-битный процессор на редстоуне",
        ),
        build(
            4,
            "Пиксель-арт дракон",
            "PixelMaster",
            956,
            BuildCategory::PixelArt,
            "Огромный 3D пиксель-арт дракона",
        ),
    ]
});

static MEMBERS: Lazy<Vec<GuildMember>> = Lazy::new(|| {
    [
        ("Sazuke_", "Владелец", PresenceStatus::Online),
        ("_user1945", "Билдер", PresenceStatus::Online),
        ("Kevuab", "Билдер", PresenceStatus::Offline),
        ("assuming_", "Модератор", PresenceStatus::Online),
        ("qwxsik_", "Модератор", PresenceStatus::Offline),
    ]
    .into_iter()
    .map(|(name, rank, status)| GuildMember {
        name: name.to_string(),
        rank: GuildRank::from_title(rank),
        status,
    })
    .collect()
});

static ACHIEVEMENTS: Lazy<Vec<Achievement>> = Lazy::new(|| {
    [
        ("Epic Explorer", "Исследовано 10+ новых биомов", "🧭", Rarity::Legendary),
        ("Master Builder", "Построено 50+ уникальных зданий", "🏛", Rarity::Epic),
        ("Guild Leader", "Основание гильдии XTRA", "👑", Rarity::Legendary),
        ("Resource King", "Добыто 100K+ ресурсов", "⛏", Rarity::Rare),
    ]
    .into_iter()
    .map(|(title, description, icon, rarity)| Achievement {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        rarity,
    })
    .collect()
});

static STATS: Lazy<Vec<GuildStat>> = Lazy::new(|| {
    [
        ("Участников", "5", "👥"),
        ("Построек", "127", "🏗"),
        ("Достижений", "45", "🏆"),
        ("Дней активности", "234", "📅"),
    ]
    .into_iter()
    .map(|(label, value, icon)| GuildStat {
        label: label.to_string(),
        value: value.to_string(),
        icon: icon.to_string(),
    })
    .collect()
});

static RULES: Lazy<Vec<String>> = Lazy::new(|| {
    [
        "Уважение к другим участникам обязательно",
        "Запрещено разрушение чужих построек",
        "Активность в Discord и на сервере",
        "Помощь новичкам и поддержка команды",
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

static NEWS: Lazy<Vec<NewsItem>> = Lazy::new(|| {
    [
        (
            "Новый мега-проект!",
            "Начато строительство огромного замка в новом биоме.",
            "2 дня назад",
        ),
        (
            "Турнир по PvP",
            "Победитель получит уникальное снаряжение!",
            "5 дней назад",
        ),
        (
            "Обновление сервера",
            "Добавлены новые плагины и возможности.",
            "1 неделя назад",
        ),
    ]
    .into_iter()
    .map(|(title, body, posted)| NewsItem {
        title: title.to_string(),
        body: body.to_string(),
        posted: posted.to_string(),
    })
    .collect()
});

fn background(id: &str, name: &str, gradient: &str, pattern: &str) -> ProfileBackground {
    ProfileBackground {
        id: id.to_string(),
        name: name.to_string(),
        gradient: gradient.to_string(),
        pattern: Some(pattern.to_string()),
    }
}

fn theme(id: &str, name: &str, [primary, secondary, accent]: [&str; 3]) -> ProfileTheme {
    ProfileTheme {
        id: id.to_string(),
        name: name.to_string(),
        colors: ThemeColors {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        },
    }
}

fn build(
    id: u32,
    title: &str,
    author: &str,
    like_count: u32,
    category: BuildCategory,
    description: &str,
) -> GalleryItem {
    GalleryItem {
        id,
        title: title.to_string(),
        image_ref: "/api/placeholder/400/300".to_string(),
        author: author.to_string(),
        like_count,
        category,
        description: description.to_string(),
    }
}

pub fn guild_config() -> &'static GuildConfig {
    &GUILD
}

pub fn backgrounds() -> &'static [ProfileBackground] {
    &BACKGROUNDS
}

pub fn themes() -> &'static [ProfileTheme] {
    &THEMES
}

pub fn avatar_options() -> &'static [String] {
    &AVATARS
}

pub fn builds() -> &'static [GalleryItem] {
    &BUILDS
}

pub fn members() -> &'static [GuildMember] {
    &MEMBERS
}

pub fn achievements() -> &'static [Achievement] {
    &ACHIEVEMENTS
}

pub fn guild_stats() -> &'static [GuildStat] {
    &STATS
}

pub fn rules() -> &'static [String] {
    &RULES
}

pub fn news() -> &'static [NewsItem] {
    &NEWS
}

pub fn find_background(id: &str) -> Option<&'static ProfileBackground> {
    BACKGROUNDS.iter().find(|bg| bg.id == id)
}

pub fn find_theme(id: &str) -> Option<&'static ProfileTheme> {
    THEMES.iter().find(|theme| theme.id == id)
}

pub fn find_avatar(avatar_ref: &str) -> Option<&'static str> {
    AVATARS
        .iter()
        .find(|avatar| avatar.as_str() == avatar_ref)
        .map(String::as_str)
}

/// The profile shown on the page before any edit.
pub fn sample_profile() -> UserProfile {
    UserProfile {
        id: "sazuke".to_string(),
        username: "Sazuke_".to_string(),
        avatar: AVATARS[0].clone(),
        level: 42,
        rank: GuildRank::Owner.title().to_string(),
        xp: 7350,
        max_xp: 10000,
        achievement_count: 45,
        build_count: 127,
        background: BACKGROUNDS[0].clone(),
        theme: THEMES[0].clone(),
        status: PresenceStatus::Online,
        title: "Основатель гильдии".to_string(),
        join_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = backgrounds().iter().map(|bg| &bg.id).collect();
        assert_eq!(ids.len(), backgrounds().len());
        let ids: HashSet<_> = themes().iter().map(|t| &t.id).collect();
        assert_eq!(ids.len(), themes().len());
        let ids: HashSet<_> = avatar_options().iter().collect();
        assert_eq!(ids.len(), avatar_options().len());
        let ids: HashSet<_> = builds().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), builds().len());
    }

    #[test]
    fn lookups_resolve_catalog_entries() {
        assert_eq!(find_background("cyber-matrix"), Some(&backgrounds()[1]));
        assert_eq!(find_theme("fire-orange"), Some(&themes()[3]));
        assert_eq!(find_avatar(&avatar_options()[2]), Some(avatar_options()[2].as_str()));
        assert!(find_background("lava-lake").is_none());
        assert!(find_theme("").is_none());
        assert!(find_avatar("/api/placeholder/100/100").is_none());
    }

    #[test]
    fn sample_profile_uses_catalog_cosmetics() {
        let profile = sample_profile();
        assert_eq!(find_background(&profile.background.id), Some(&profile.background));
        assert_eq!(find_theme(&profile.theme.id), Some(&profile.theme));
        assert!(find_avatar(&profile.avatar).is_some());
        assert_eq!(profile.join_date_label(), "15.03.2024");
    }

    #[test]
    fn members_ranks_are_parsed() {
        let owners = members().iter().filter(|m| m.rank == GuildRank::Owner).count();
        assert_eq!(owners, 1);
        assert!(members().iter().all(|m| m.rank != GuildRank::Member));
    }
}
