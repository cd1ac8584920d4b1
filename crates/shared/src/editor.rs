//! Profile draft editor.
//!
//! A `ProfileDraft` owns a full copy of the profile being edited. Edits only
//! touch the copy; the caller gets it back from [`ProfileDraft::confirm`] or
//! drops it with [`ProfileDraft::cancel`].

use chrono::NaiveDate;

use crate::catalog;
use crate::error::{ProfileError, ProfileResult};
use crate::models::{PresenceStatus, UserProfile};

/// Editor tabs. Only decides which form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    General,
    Appearance,
    Backgrounds,
}

impl EditorTab {
    pub const ALL: [EditorTab; 3] = [EditorTab::General, EditorTab::Appearance, EditorTab::Backgrounds];

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "Общие",
            Self::Appearance => "Внешний вид",
            Self::Backgrounds => "Фоны",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::General => "👤",
            Self::Appearance => "🎨",
            Self::Backgrounds => "🖼",
        }
    }
}

/// A single-field replacement on the draft.
///
/// Cosmetics (avatar, background, theme) are not here: they only change
/// through the catalog-checked `select_*` methods on [`ProfileDraft`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Username(String),
    Title(String),
    Rank(String),
    Level(u32),
    Xp(u32),
    MaxXp(u32),
    AchievementCount(u32),
    BuildCount(u32),
    Status(PresenceStatus),
    JoinDate(NaiveDate),
}

impl FieldEdit {
    /// Parse a form value for the field named by its camelCase key.
    ///
    /// `id`, `avatar`, `background` and `theme` are not editable by key and
    /// yield `UnknownField`; the id is fixed and cosmetics go through the
    /// `select_*` methods.
    pub fn parse(key: &str, value: &str) -> ProfileResult<Self> {
        let edit = match key {
            "username" => Self::Username(value.to_string()),
            "title" => Self::Title(value.to_string()),
            "rank" => Self::Rank(value.to_string()),
            "level" => Self::Level(parse_count("level", value)?),
            "xp" => Self::Xp(parse_count("xp", value)?),
            "maxXp" => Self::MaxXp(parse_count("maxXp", value)?),
            "achievements" => Self::AchievementCount(parse_count("achievements", value)?),
            "builds" => Self::BuildCount(parse_count("builds", value)?),
            "status" => Self::Status(
                PresenceStatus::from_key(value).ok_or_else(|| invalid("status", value))?,
            ),
            "joinDate" => Self::JoinDate(
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|_| invalid("joinDate", value))?,
            ),
            other => return Err(ProfileError::UnknownField(other.to_string())),
        };
        Ok(edit)
    }

    fn apply(self, profile: &mut UserProfile) {
        match self {
            Self::Username(v) => profile.username = v,
            Self::Title(v) => profile.title = v,
            Self::Rank(v) => profile.rank = v,
            Self::Level(v) => profile.level = v,
            Self::Xp(v) => profile.xp = v,
            Self::MaxXp(v) => profile.max_xp = v,
            Self::AchievementCount(v) => profile.achievement_count = v,
            Self::BuildCount(v) => profile.build_count = v,
            Self::Status(v) => profile.status = v,
            Self::JoinDate(v) => profile.join_date = v,
        }
    }
}

fn invalid(field: &'static str, value: &str) -> ProfileError {
    ProfileError::InvalidValue {
        field,
        value: value.to_string(),
    }
}

fn parse_count(field: &'static str, value: &str) -> ProfileResult<u32> {
    value.trim().parse().map_err(|_| invalid(field, value))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    original: UserProfile,
    draft: UserProfile,
    tab: EditorTab,
}

impl ProfileDraft {
    /// Start editing a copy of `profile` on the General tab.
    pub fn open(profile: &UserProfile) -> Self {
        Self {
            original: profile.clone(),
            draft: profile.clone(),
            tab: EditorTab::default(),
        }
    }

    pub fn draft(&self) -> &UserProfile {
        &self.draft
    }

    pub fn original(&self) -> &UserProfile {
        &self.original
    }

    pub fn tab(&self) -> EditorTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: EditorTab) {
        self.tab = tab;
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn update_field(&mut self, edit: FieldEdit) {
        edit.apply(&mut self.draft);
    }

    /// Keyed form of [`update_field`](Self::update_field). The `avatar` key
    /// is accepted here and resolved against the catalog like
    /// [`select_avatar`](Self::select_avatar).
    pub fn update_field_by_key(&mut self, key: &str, value: &str) -> ProfileResult<()> {
        if key == "avatar" {
            return self.select_avatar(value);
        }
        let edit = FieldEdit::parse(key, value)?;
        self.update_field(edit);
        Ok(())
    }

    pub fn select_background(&mut self, id: &str) -> ProfileResult<()> {
        let background = catalog::find_background(id)
            .ok_or_else(|| ProfileError::UnknownBackground(id.to_string()))?;
        self.draft.background = background.clone();
        Ok(())
    }

    pub fn select_theme(&mut self, id: &str) -> ProfileResult<()> {
        let theme =
            catalog::find_theme(id).ok_or_else(|| ProfileError::UnknownTheme(id.to_string()))?;
        self.draft.theme = theme.clone();
        Ok(())
    }

    pub fn select_avatar(&mut self, avatar_ref: &str) -> ProfileResult<()> {
        let avatar = catalog::find_avatar(avatar_ref)
            .ok_or_else(|| ProfileError::UnknownAvatar(avatar_ref.to_string()))?;
        self.draft.avatar = avatar.to_string();
        Ok(())
    }

    /// Finish editing; the draft becomes the canonical profile.
    pub fn confirm(self) -> UserProfile {
        self.draft
    }

    /// Finish editing without keeping any change.
    pub fn cancel(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{avatar_options, backgrounds, sample_profile, themes};

    fn profile_named(name: &str) -> UserProfile {
        UserProfile {
            username: name.to_string(),
            ..sample_profile()
        }
    }

    #[test]
    fn cancel_keeps_stored_username() {
        let stored = profile_named("A");
        let mut draft = ProfileDraft::open(&stored);
        draft.update_field(FieldEdit::Username("B".to_string()));
        assert_eq!(draft.draft().username, "B");
        draft.cancel();
        assert_eq!(stored.username, "A");
    }

    #[test]
    fn confirm_emits_edited_username() {
        let mut stored = profile_named("A");
        let mut draft = ProfileDraft::open(&stored);
        draft.update_field(FieldEdit::Username("B".to_string()));
        stored = draft.confirm();
        assert_eq!(stored.username, "B");
    }

    #[test]
    fn edits_only_touch_the_named_field() {
        let stored = sample_profile();
        let mut draft = ProfileDraft::open(&stored);
        draft.update_field(FieldEdit::Title(String::new()));
        draft.update_field(FieldEdit::Level(7));

        let saved = draft.confirm();
        let expected = UserProfile {
            title: String::new(),
            level: 7,
            ..stored
        };
        assert_eq!(saved, expected);
    }

    #[test]
    fn tab_switch_does_not_change_draft() {
        let stored = sample_profile();
        let mut draft = ProfileDraft::open(&stored);
        assert_eq!(draft.tab(), EditorTab::General);
        draft.update_field(FieldEdit::Username("Steve".to_string()));
        draft.set_tab(EditorTab::Backgrounds);
        draft.update_field(FieldEdit::Title("Builder".to_string()));
        assert_eq!(draft.tab(), EditorTab::Backgrounds);
        assert_eq!(draft.draft().username, "Steve");
        assert_eq!(draft.draft().title, "Builder");
        assert_eq!(draft.original(), &stored);
    }

    #[test]
    fn keyed_updates_parse_values() {
        let mut draft = ProfileDraft::open(&sample_profile());
        draft.update_field_by_key("maxXp", "12000").unwrap();
        draft.update_field_by_key("status", "away").unwrap();
        draft.update_field_by_key("joinDate", "2023-01-02").unwrap();
        draft.update_field_by_key("username", "").unwrap();

        let profile = draft.draft();
        assert_eq!(profile.max_xp, 12000);
        assert_eq!(profile.status, PresenceStatus::Away);
        assert_eq!(profile.join_date, NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(profile.username, "");
    }

    #[test]
    fn keyed_updates_reject_bad_input() {
        let stored = sample_profile();
        let mut draft = ProfileDraft::open(&stored);

        assert_eq!(
            draft.update_field_by_key("guild", "XTRA"),
            Err(ProfileError::UnknownField("guild".to_string()))
        );
        assert_eq!(
            draft.update_field_by_key("level", "-3"),
            Err(ProfileError::InvalidValue {
                field: "level",
                value: "-3".to_string()
            })
        );
        assert!(draft.update_field_by_key("status", "busy").is_err());
        assert!(draft.update_field_by_key("joinDate", "15.03.2024").is_err());
        assert!(!draft.is_dirty());
    }

    #[test]
    fn keyed_avatar_goes_through_catalog() {
        let stored = sample_profile();
        let mut draft = ProfileDraft::open(&stored);

        assert_eq!(
            draft.update_field_by_key("avatar", "/api/placeholder/100/100"),
            Err(ProfileError::UnknownAvatar("/api/placeholder/100/100".to_string()))
        );
        assert_eq!(draft.draft(), &stored);

        draft.update_field_by_key("avatar", &avatar_options()[1]).unwrap();
        assert_eq!(draft.draft().avatar, avatar_options()[1]);
        assert_eq!(draft.confirm().avatar, avatar_options()[1]);
    }

    #[test]
    fn fixed_and_cosmetic_keys_are_not_keyed_fields() {
        let stored = sample_profile();
        let mut draft = ProfileDraft::open(&stored);
        for key in ["id", "background", "theme"] {
            assert_eq!(
                draft.update_field_by_key(key, "cyber-blue"),
                Err(ProfileError::UnknownField(key.to_string()))
            );
        }
        assert!(!draft.is_dirty());
    }

    #[test]
    fn selecting_catalog_entries_copies_them() {
        let mut draft = ProfileDraft::open(&sample_profile());

        draft.select_background("space-nebula").unwrap();
        draft.select_theme("royal-purple").unwrap();
        draft.select_avatar(&avatar_options()[3]).unwrap();

        assert_eq!(draft.draft().background, backgrounds()[2]);
        assert_eq!(draft.draft().theme, themes()[2]);
        assert_eq!(draft.draft().avatar, avatar_options()[3]);
    }

    #[test]
    fn reselecting_is_a_no_op() {
        let stored = sample_profile();
        let mut draft = ProfileDraft::open(&stored);
        draft.select_background(&stored.background.id).unwrap();
        draft.select_theme(&stored.theme.id).unwrap();
        draft.select_avatar(&stored.avatar).unwrap();
        assert!(!draft.is_dirty());

        draft.select_theme("cyber-blue").unwrap();
        let once = draft.clone();
        draft.select_theme("cyber-blue").unwrap();
        assert_eq!(draft, once);
    }

    #[test]
    fn unknown_catalog_ids_keep_prior_values() {
        let stored = sample_profile();
        let mut draft = ProfileDraft::open(&stored);

        assert_eq!(
            draft.select_background("void"),
            Err(ProfileError::UnknownBackground("void".to_string()))
        );
        assert_eq!(
            draft.select_theme("pink"),
            Err(ProfileError::UnknownTheme("pink".to_string()))
        );
        assert!(matches!(
            draft.select_avatar("/api/placeholder/100/100"),
            Err(ProfileError::UnknownAvatar(_))
        ));
        assert_eq!(draft.draft(), &stored);
    }
}
