//! Flashcard review: a two-state card that reveals a definition, then
//! advances to the next word.

pub mod controller;
pub mod models;
pub mod view;

pub use controller::ReviewController;
pub use models::*;
pub use view::{CardFace, CardView};
