use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Visual style of a card, which drives the shape of the row it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardStyle {
    Basic,
    Complex,
}

impl CardStyle {
    pub fn label(self) -> &'static str {
        match self {
            CardStyle::Basic => "Basic",
            CardStyle::Complex => "Complex",
        }
    }
}

impl fmt::Display for CardStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stable identity of a card across reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single card on the board.
///
/// The id is minted once in [`Card::new`] and travels with the card through
/// every reorder, so two cards with the same value and style stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: i64,
    style: CardStyle,
    id: CardId,
}

impl Card {
    pub fn new(value: i64, style: CardStyle) -> Self {
        Self {
            value,
            style,
            id: CardId::new(),
        }
    }

    pub fn basic(value: i64) -> Self {
        Self::new(value, CardStyle::Basic)
    }

    pub fn complex(value: i64) -> Self {
        Self::new(value, CardStyle::Complex)
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn style(&self) -> CardStyle {
        self.style
    }

    pub fn id(&self) -> CardId {
        self.id
    }
}

/// Project a card sequence onto the styles the grouping rules look at.
pub fn styles_of(cards: &[Card]) -> Vec<CardStyle> {
    cards.iter().map(Card::style).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_value_cards_are_distinct() {
        let a = Card::basic(7);
        let b = Card::basic(7);

        assert_eq!(a.value(), b.value());
        assert_eq!(a.style(), b.style());
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_keeps_identity() {
        let card = Card::complex(101);
        let copy = card.clone();

        assert_eq!(card.id(), copy.id());
        assert_eq!(card, copy);
    }

    #[test]
    fn test_styles_of_preserves_order() {
        let cards = vec![Card::basic(0), Card::complex(100), Card::basic(1)];
        assert_eq!(
            styles_of(&cards),
            vec![CardStyle::Basic, CardStyle::Complex, CardStyle::Basic]
        );
    }

    #[test]
    fn test_style_display() {
        assert_eq!(CardStyle::Basic.to_string(), "Basic");
        assert_eq!(CardStyle::Complex.to_string(), "Complex");
    }
}
