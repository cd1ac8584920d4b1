//! Guild page sections.

mod achievements;
mod footer;
mod hero;
mod members;
mod rules_news;

pub use achievements::AchievementsSection;
pub use footer::Footer;
pub use hero::Hero;
pub use members::MembersSection;
pub use rules_news::RulesAndNews;
