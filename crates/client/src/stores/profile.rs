//! Canonical profile store.
//!
//! The page owns exactly one profile. The editor works on its own copy and
//! hands the result to [`save_profile`].

use dioxus::prelude::*;
use guildxtra_shared::{catalog, UserProfile};

/// The viewer's profile as currently shown on the page
pub static CURRENT_PROFILE: GlobalSignal<UserProfile> = Signal::global(catalog::sample_profile);

/// Replace the canonical profile with a confirmed draft.
pub fn save_profile(profile: UserProfile) {
    match serde_json::to_string(&profile) {
        Ok(json) => crate::log_debug!("Saved profile: {}", json),
        Err(e) => crate::log_warn!("Saved profile {} (not serializable: {})", profile.id, e),
    }
    crate::log_info!("Profile {} updated", profile.username);
    *CURRENT_PROFILE.write() = profile;
}
