pub mod card;
pub mod deck;

pub use card::{Card, CardId, CardStyle, styles_of};
pub use deck::{DeckError, DeckSpec, generate_deck, random_deck};
