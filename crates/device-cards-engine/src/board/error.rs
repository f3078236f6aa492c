use crate::models::CardId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Card not on the board: {0}")]
    UnknownCard(CardId),
    #[error("Index {index} out of range for {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("No drag in progress")]
    NoActiveDrag,
    #[error("A drag is already in progress")]
    DragInProgress,
}
