pub mod board;
pub mod layout;
pub mod models;

// Re-export key types for easier usage
pub use board::{BoardError, CardBoard};
pub use layout::{
    CellFrame, Group, GroupDecision, GroupShape, GroupingPolicy, LayoutMetrics, RowFrame, partition,
    partition_with,
};
pub use models::{Card, CardId, CardStyle, DeckError, DeckSpec, generate_deck, random_deck};
