//! Committed and proposed card orders for drag reordering.
//!
//! The board keeps two named snapshots instead of mutating one list in place:
//! the committed order the user last confirmed, and, while a drag is active,
//! the proposed order that previews where the dragged card would land. The
//! proposal is always rebuilt from the committed order, so ending a drag never
//! needs to roll anything back.

mod error;

pub use error::BoardError;

use crate::layout::{Group, LayoutMetrics, RowFrame, compute_frames, partition};
use crate::models::{Card, CardId, CardStyle, styles_of};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Drag {
    card: CardId,
    from: usize,
}

#[derive(Debug, Clone, Default)]
pub struct CardBoard {
    committed: Vec<Card>,
    proposed: Option<Vec<Card>>,
    drag: Option<Drag>,
}

impl CardBoard {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            committed: cards,
            proposed: None,
            drag: None,
        }
    }

    pub fn committed(&self) -> &[Card] {
        &self.committed
    }

    pub fn proposed(&self) -> Option<&[Card]> {
        self.proposed.as_deref()
    }

    /// The order the grid should currently be laid out in.
    pub fn working(&self) -> &[Card] {
        self.proposed.as_deref().unwrap_or(&self.committed)
    }

    pub fn working_styles(&self) -> Vec<CardStyle> {
        styles_of(self.working())
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn dragged_card(&self) -> Option<CardId> {
        self.drag.as_ref().map(|d| d.card)
    }

    /// Index of a card in the working order.
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.working().iter().position(|c| c.id() == id)
    }

    /// Rows for the working order. Empty when there are no cards.
    pub fn layout(&self) -> Vec<Group> {
        partition(&self.working_styles())
    }

    pub fn layout_frames(&self, metrics: &LayoutMetrics, container_width: f64) -> Vec<RowFrame> {
        compute_frames(&self.layout(), metrics, container_width)
    }

    /// Lift a card. Any proposal left over from an earlier drag is discarded.
    ///
    /// Returns the card's index in the committed order.
    pub fn begin_drag(&mut self, id: CardId) -> Result<usize, BoardError> {
        let from = self
            .committed
            .iter()
            .position(|c| c.id() == id)
            .ok_or(BoardError::UnknownCard(id))?;

        self.proposed = None;
        self.drag = Some(Drag { card: id, from });
        log::debug!("Drag started for card {id} at index {from}");
        Ok(from)
    }

    /// Preview the dragged card at `to`, leaving the committed order alone.
    pub fn propose_move(&mut self, to: usize) -> Result<(), BoardError> {
        let drag = self.drag.as_ref().ok_or(BoardError::NoActiveDrag)?;
        let len = self.committed.len();
        if to >= len {
            return Err(BoardError::IndexOutOfRange { index: to, len });
        }

        if to == drag.from {
            self.proposed = None;
            return Ok(());
        }

        let mut proposed = self.committed.clone();
        let card = proposed.remove(drag.from);
        proposed.insert(to, card);
        log::trace!("Proposed move {} -> {to}", drag.from);
        self.proposed = Some(proposed);
        Ok(())
    }

    /// Drop the dragged card, adopting the proposed order if there is one.
    pub fn commit_drag(&mut self) -> Result<&[Card], BoardError> {
        let drag = self.drag.take().ok_or(BoardError::NoActiveDrag)?;
        if let Some(proposed) = self.proposed.take() {
            self.committed = proposed;
        }
        log::debug!(
            "Drag committed for card {} at index {:?}",
            drag.card,
            self.committed.iter().position(|c| c.id() == drag.card)
        );
        Ok(&self.committed)
    }

    /// Abandon the drag. The committed order is untouched.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            log::debug!("Drag cancelled for card {}", drag.card);
        }
        self.proposed = None;
    }

    /// Replace every card at once, e.g. after dealing a new deck.
    pub fn replace(&mut self, cards: Vec<Card>) -> Result<(), BoardError> {
        if self.drag.is_some() {
            return Err(BoardError::DragInProgress);
        }
        self.committed = cards;
        Ok(())
    }
}
