//! Property-based tests for the gallery filter and the profile draft editor.

use chrono::NaiveDate;
use guildxtra_shared::catalog::{avatar_options, backgrounds, sample_profile, themes};
use guildxtra_shared::{
    filter_items, BuildCategory, CategoryFilter, FieldEdit, GalleryItem, PresenceStatus,
    ProfileDraft, UserProfile,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn category_strategy() -> impl Strategy<Value = BuildCategory> {
    prop::sample::select(BuildCategory::ALL.to_vec())
}

fn items_strategy() -> impl Strategy<Value = Vec<GalleryItem>> {
    prop::collection::vec(category_strategy(), 0..40).prop_map(|categories| {
        categories
            .into_iter()
            .enumerate()
            .map(|(i, category)| GalleryItem {
                id: i as u32,
                title: format!("Build {i}"),
                image_ref: String::new(),
                author: "Tester".to_string(),
                like_count: i as u32,
                category,
                description: String::new(),
            })
            .collect()
    })
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 _]{0,24}").expect("valid regex")
}

fn status_strategy() -> impl Strategy<Value = PresenceStatus> {
    prop::sample::select(PresenceStatus::ALL.to_vec())
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2040, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).expect("day 1-28 exists in every month"))
}

fn edit_strategy() -> impl Strategy<Value = FieldEdit> {
    prop_oneof![
        text_strategy().prop_map(FieldEdit::Username),
        text_strategy().prop_map(FieldEdit::Title),
        text_strategy().prop_map(FieldEdit::Rank),
        any::<u32>().prop_map(FieldEdit::Level),
        any::<u32>().prop_map(FieldEdit::Xp),
        any::<u32>().prop_map(FieldEdit::MaxXp),
        any::<u32>().prop_map(FieldEdit::AchievementCount),
        any::<u32>().prop_map(FieldEdit::BuildCount),
        status_strategy().prop_map(FieldEdit::Status),
        date_strategy().prop_map(FieldEdit::JoinDate),
    ]
}

/// Steps an editor session can take before confirming
#[derive(Debug, Clone)]
enum EditorOp {
    Edit(FieldEdit),
    Background(usize), // Index into the background catalog
    Theme(usize),      // Index into the theme catalog
    Avatar(usize),     // Index into the avatar options
}

fn editor_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<EditorOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => edit_strategy().prop_map(EditorOp::Edit),
            1 => (0..backgrounds().len()).prop_map(EditorOp::Background),
            1 => (0..themes().len()).prop_map(EditorOp::Theme),
            1 => (0..avatar_options().len()).prop_map(EditorOp::Avatar),
        ],
        0..max_ops,
    )
}

fn run_op(draft: &mut ProfileDraft, op: &EditorOp) {
    match op {
        EditorOp::Edit(edit) => draft.update_field(edit.clone()),
        EditorOp::Background(i) => draft.select_background(&backgrounds()[*i].id).unwrap(),
        EditorOp::Theme(i) => draft.select_theme(&themes()[*i].id).unwrap(),
        EditorOp::Avatar(i) => draft.select_avatar(&avatar_options()[*i]).unwrap(),
    }
}

/// Apply the steps field by field to a plain copy, as the expected result.
fn apply_by_hand(mut profile: UserProfile, ops: &[EditorOp]) -> UserProfile {
    for op in ops {
        let edit = match op {
            EditorOp::Edit(edit) => edit.clone(),
            EditorOp::Background(i) => {
                profile.background = backgrounds()[*i].clone();
                continue;
            }
            EditorOp::Theme(i) => {
                profile.theme = themes()[*i].clone();
                continue;
            }
            EditorOp::Avatar(i) => {
                profile.avatar = avatar_options()[*i].clone();
                continue;
            }
        };
        match edit {
            FieldEdit::Username(v) => profile.username = v,
            FieldEdit::Title(v) => profile.title = v,
            FieldEdit::Rank(v) => profile.rank = v,
            FieldEdit::Level(v) => profile.level = v,
            FieldEdit::Xp(v) => profile.xp = v,
            FieldEdit::MaxXp(v) => profile.max_xp = v,
            FieldEdit::AchievementCount(v) => profile.achievement_count = v,
            FieldEdit::BuildCount(v) => profile.build_count = v,
            FieldEdit::Status(v) => profile.status = v,
            FieldEdit::JoinDate(v) => profile.join_date = v,
        }
    }
    profile
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Filtering by a category keeps exactly the matching items in source order
    #[test]
    fn category_filter_is_an_ordered_subsequence(
        items in items_strategy(),
        category in category_strategy(),
    ) {
        let visible = filter_items(&items, &CategoryFilter::Only(category));
        let expected: Vec<&GalleryItem> = items.iter().filter(|i| i.category == category).collect();
        prop_assert_eq!(visible, expected);
    }

    /// "all" is the identity
    #[test]
    fn all_filter_is_identity(items in items_strategy()) {
        let visible: Vec<GalleryItem> = filter_items(&items, &CategoryFilter::All)
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(visible, items);
    }

    /// Opening then cancelling never touches the source profile
    #[test]
    fn cancel_leaves_profile_unchanged(ops in editor_ops_strategy(12)) {
        let stored = sample_profile();
        let before = stored.clone();

        let mut draft = ProfileDraft::open(&stored);
        for op in &ops {
            run_op(&mut draft, op);
        }
        draft.cancel();

        prop_assert_eq!(stored, before);
    }

    /// Confirming emits the source with exactly the applied edits and selections
    #[test]
    fn confirm_applies_exactly_the_edits(ops in editor_ops_strategy(12)) {
        let stored = sample_profile();
        let mut draft = ProfileDraft::open(&stored);
        for op in &ops {
            run_op(&mut draft, op);
        }

        prop_assert_eq!(draft.confirm(), apply_by_hand(stored, &ops));
    }

    /// Catalog selections copy the entry and are idempotent
    #[test]
    fn catalog_selection_is_idempotent(
        bg in 0..backgrounds().len(),
        theme in 0..themes().len(),
    ) {
        let mut draft = ProfileDraft::open(&sample_profile());
        draft.select_background(&backgrounds()[bg].id).unwrap();
        draft.select_theme(&themes()[theme].id).unwrap();
        prop_assert_eq!(&draft.draft().background, &backgrounds()[bg]);
        prop_assert_eq!(&draft.draft().theme, &themes()[theme]);

        let once = draft.clone();
        draft.select_background(&backgrounds()[bg].id).unwrap();
        draft.select_theme(&themes()[theme].id).unwrap();
        prop_assert_eq!(draft, once);
    }
}
