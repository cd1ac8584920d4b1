//! UI primitives (Button, Card, Badge, Input)

pub mod badge;
pub mod button;
pub mod card;
pub mod input;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
