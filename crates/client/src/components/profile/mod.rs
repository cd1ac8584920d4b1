//! Profile-related components.

mod animated_avatar;
mod appearance_picker;
mod background_picker;
mod presence_indicator;
mod profile_card;
mod profile_edit_form;
mod profile_modal;

pub use animated_avatar::AnimatedAvatar;
pub use appearance_picker::AppearancePicker;
pub use background_picker::BackgroundPicker;
pub use presence_indicator::PresenceIndicator;
pub use profile_card::CustomProfile;
pub use profile_edit_form::ProfileEditForm;
pub use profile_modal::ProfileModal;
