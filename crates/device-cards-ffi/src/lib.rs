//! UniFFI bindings for device-cards mobile apps
//!
//! Lets the Swift (or Kotlin) collection view ask the Rust engine for row
//! groups on every layout pass and keep the committed/proposed card orders
//! while a drag is in flight.

use device_cards_engine::{
    BoardError, Card, CardBoard, CardId, CardStyle, DeckError, DeckSpec, Group, GroupShape,
    partition, random_deck,
};
use std::sync::Mutex;
use uuid::Uuid;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid card id: {reason}")]
    InvalidCardId { reason: String },
    #[error("Board error: {reason}")]
    Board { reason: String },
    #[error("Deck error: {reason}")]
    Deck { reason: String },
}

impl From<BoardError> for FfiError {
    fn from(e: BoardError) -> Self {
        FfiError::Board {
            reason: e.to_string(),
        }
    }
}

impl From<DeckError> for FfiError {
    fn from(e: DeckError) -> Self {
        FfiError::Deck {
            reason: e.to_string(),
        }
    }
}

// ============ DTOs ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum CardStyleDto {
    Basic,
    Complex,
}

impl From<CardStyleDto> for CardStyle {
    fn from(style: CardStyleDto) -> Self {
        match style {
            CardStyleDto::Basic => CardStyle::Basic,
            CardStyleDto::Complex => CardStyle::Complex,
        }
    }
}

impl From<CardStyle> for CardStyleDto {
    fn from(style: CardStyle) -> Self {
        match style {
            CardStyle::Basic => CardStyleDto::Basic,
            CardStyle::Complex => CardStyleDto::Complex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum GroupShapeDto {
    PairedCompact,
    OrphanBasic,
    Emphasized,
}

/// One row of the grid.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct GroupDto {
    pub shape: GroupShapeDto,
    /// Index of the first card in the row
    pub start: u32,
    /// Number of cards in the row (1 or 2)
    pub count: u32,
}

impl GroupDto {
    fn from_engine(group: Group) -> Self {
        let shape = match group.shape {
            GroupShape::PairedCompact => GroupShapeDto::PairedCompact,
            GroupShape::OrphanBasic => GroupShapeDto::OrphanBasic,
            GroupShape::Emphasized => GroupShapeDto::Emphasized,
        };
        Self {
            shape,
            start: group.range.start as u32,
            count: group.len() as u32,
        }
    }
}

/// A card as seen by the mobile app.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct CardDto {
    /// Stable identifier (UUID string) that survives reordering
    pub id: String,
    pub value: i64,
    pub style: CardStyleDto,
}

impl CardDto {
    fn from_engine(card: &Card) -> Self {
        Self {
            id: card.id().to_string(),
            value: card.value(),
            style: card.style().into(),
        }
    }
}

/// Value and style for a card to be created on the Rust side.
#[derive(Debug, Clone, uniffi::Record)]
pub struct NewCardDto {
    pub value: i64,
    pub style: CardStyleDto,
}

fn cards_to_dto(cards: &[Card]) -> Vec<CardDto> {
    cards.iter().map(CardDto::from_engine).collect()
}

fn parse_card_id(id: &str) -> Result<CardId, FfiError> {
    Uuid::parse_str(id)
        .map(CardId)
        .map_err(|e| FfiError::InvalidCardId {
            reason: e.to_string(),
        })
}

// ============ Board Handle ============

/// A handle to the card board.
///
/// Wraps the engine's `CardBoard`; the app calls `layout` from its layout
/// provider and forwards drag callbacks to the drag methods.
#[derive(uniffi::Object)]
pub struct BoardHandle {
    inner: Mutex<CardBoard>,
}

impl BoardHandle {
    fn board(&self) -> std::sync::MutexGuard<'_, CardBoard> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[uniffi::export]
impl BoardHandle {
    /// Deal a shuffled deck with the default card counts.
    #[uniffi::constructor]
    pub fn random() -> Result<Self, FfiError> {
        let cards = random_deck(&DeckSpec::default())?;
        Ok(Self {
            inner: Mutex::new(CardBoard::new(cards)),
        })
    }

    /// Create a board from cards in the given order. Each card gets a fresh id.
    #[uniffi::constructor]
    pub fn from_cards(cards: Vec<NewCardDto>) -> Self {
        let cards = cards
            .into_iter()
            .map(|c| Card::new(c.value, c.style.into()))
            .collect();
        Self {
            inner: Mutex::new(CardBoard::new(cards)),
        }
    }

    /// Cards in the order they should currently be shown.
    pub fn cards(&self) -> Vec<CardDto> {
        cards_to_dto(self.board().working())
    }

    pub fn committed_cards(&self) -> Vec<CardDto> {
        cards_to_dto(self.board().committed())
    }

    /// Rows for the current order, including any drag preview.
    pub fn layout(&self) -> Vec<GroupDto> {
        self.board()
            .layout()
            .into_iter()
            .map(GroupDto::from_engine)
            .collect()
    }

    pub fn is_dragging(&self) -> bool {
        self.board().is_dragging()
    }

    /// Returns the committed index of the lifted card.
    pub fn begin_drag(&self, card_id: String) -> Result<u32, FfiError> {
        let id = parse_card_id(&card_id)?;
        Ok(self.board().begin_drag(id)? as u32)
    }

    pub fn propose_move(&self, to: u32) -> Result<(), FfiError> {
        Ok(self.board().propose_move(to as usize)?)
    }

    pub fn commit_drag(&self) -> Result<Vec<CardDto>, FfiError> {
        let mut board = self.board();
        Ok(cards_to_dto(board.commit_drag()?))
    }

    pub fn cancel_drag(&self) {
        self.board().cancel_drag();
    }
}

// ============ Standalone Functions ============

/// Group a style sequence into rows without holding a board.
#[uniffi::export]
pub fn partition_styles(styles: Vec<CardStyleDto>) -> Vec<GroupDto> {
    let styles: Vec<CardStyle> = styles.into_iter().map(CardStyle::from).collect();
    partition(&styles)
        .into_iter()
        .map(GroupDto::from_engine)
        .collect()
}
