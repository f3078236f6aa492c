use crate::models::card::{Card, CardStyle};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Empty {style} card count range {start}..{end}")]
    EmptyRange {
        style: CardStyle,
        start: usize,
        end: usize,
    },
}

/// How many cards of each style to deal, and what values they carry.
///
/// Basic cards are valued `0..n`, complex cards `complex_value_base..complex_value_base + m`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSpec {
    pub basic_count: Range<usize>,
    pub complex_count: Range<usize>,
    pub complex_value_base: i64,
}

impl Default for DeckSpec {
    fn default() -> Self {
        Self {
            basic_count: 10..20,
            complex_count: 10..20,
            complex_value_base: 100,
        }
    }
}

impl DeckSpec {
    pub fn validate(&self) -> Result<(), DeckError> {
        for (style, range) in [
            (CardStyle::Basic, &self.basic_count),
            (CardStyle::Complex, &self.complex_count),
        ] {
            if range.is_empty() {
                return Err(DeckError::EmptyRange {
                    style,
                    start: range.start,
                    end: range.end,
                });
            }
        }
        Ok(())
    }
}

/// Deal a shuffled mix of basic and complex cards using the given rng.
pub fn generate_deck<R: Rng + ?Sized>(spec: &DeckSpec, rng: &mut R) -> Result<Vec<Card>, DeckError> {
    spec.validate()?;

    let basic = rng.random_range(spec.basic_count.clone());
    let complex = rng.random_range(spec.complex_count.clone());

    let mut cards: Vec<Card> = (0..basic as i64)
        .map(Card::basic)
        .chain((0..complex as i64).map(|n| Card::complex(spec.complex_value_base + n)))
        .collect();
    cards.shuffle(rng);

    log::debug!("Dealt {basic} basic and {complex} complex cards");
    Ok(cards)
}

/// Deal a deck from the thread-local rng.
pub fn random_deck(spec: &DeckSpec) -> Result<Vec<Card>, DeckError> {
    generate_deck(spec, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn count(cards: &[Card], style: CardStyle) -> usize {
        cards.iter().filter(|c| c.style() == style).count()
    }

    #[test]
    fn test_counts_within_ranges() {
        let spec = DeckSpec::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let cards = generate_deck(&spec, &mut rng).unwrap();
            assert!(spec.basic_count.contains(&count(&cards, CardStyle::Basic)));
            assert!(spec.complex_count.contains(&count(&cards, CardStyle::Complex)));
        }
    }

    #[test]
    fn test_values_follow_style() {
        let spec = DeckSpec {
            basic_count: 3..4,
            complex_count: 2..3,
            complex_value_base: 100,
        };
        let cards = generate_deck(&spec, &mut StdRng::seed_from_u64(1)).unwrap();

        let mut basic: Vec<i64> = cards
            .iter()
            .filter(|c| c.style() == CardStyle::Basic)
            .map(Card::value)
            .collect();
        let mut complex: Vec<i64> = cards
            .iter()
            .filter(|c| c.style() == CardStyle::Complex)
            .map(Card::value)
            .collect();
        basic.sort();
        complex.sort();

        assert_eq!(basic, vec![0, 1, 2]);
        assert_eq!(complex, vec![100, 101]);
    }

    #[test]
    fn test_ids_are_unique() {
        let cards = generate_deck(&DeckSpec::default(), &mut StdRng::seed_from_u64(3)).unwrap();
        let ids: HashSet<_> = cards.iter().map(Card::id).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_seeded_layout_is_deterministic() {
        let spec = DeckSpec::default();
        let a = generate_deck(&spec, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_deck(&spec, &mut StdRng::seed_from_u64(42)).unwrap();

        let project = |cards: &[Card]| -> Vec<(i64, CardStyle)> {
            cards.iter().map(|c| (c.value(), c.style())).collect()
        };
        assert_eq!(project(&a), project(&b));
    }

    #[test]
    fn test_empty_range_rejected() {
        let spec = DeckSpec {
            basic_count: 5..5,
            ..DeckSpec::default()
        };
        let err = generate_deck(&spec, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(
            err,
            DeckError::EmptyRange {
                style: CardStyle::Basic,
                start: 5,
                end: 5
            }
        );
    }
}
