//! Build gallery with category filter.

mod build_card;
mod build_gallery;

pub use build_card::BuildCard;
pub use build_gallery::BuildGallery;
