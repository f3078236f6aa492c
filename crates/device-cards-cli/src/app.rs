use anyhow::Result;
use device_cards_engine::{Card, CardBoard, DeckSpec, Group, LayoutMetrics, random_deck};

/// Terminal cells are roughly twice as tall as they are wide, and a row as tall
/// as half the screen width would only fit one row on screen.
const TERMINAL_HEIGHT_SCALE: f64 = 0.2;

pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Grab,
    Drop,
    Cancel,
    Reshuffle,
}

pub struct App {
    pub board: CardBoard,
    deck: DeckSpec,
    layout: LayoutMetrics,
    /// Index of the highlighted card in the working order.
    pub cursor: usize,
    pub status: String,
}

impl App {
    pub fn new(cards: Vec<Card>, deck: DeckSpec, layout: LayoutMetrics) -> Self {
        Self {
            board: CardBoard::new(cards),
            deck,
            layout,
            cursor: 0,
            status: String::new(),
        }
    }

    /// Layout metrics in terminal cells.
    pub fn terminal_metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            inter_item_spacing: 1.0,
            content_inset_top: 0.0,
            content_inset_leading: 1.0,
            content_inset_bottom: 0.0,
            content_inset_trailing: 1.0,
            paired_height_fraction: self.layout.paired_height_fraction * TERMINAL_HEIGHT_SCALE,
            orphan_height_fraction: self.layout.orphan_height_fraction * TERMINAL_HEIGHT_SCALE,
            emphasized_height_fraction: self.layout.emphasized_height_fraction
                * TERMINAL_HEIGHT_SCALE,
        }
    }

    pub fn handle(&mut self, action: Action) {
        let result = match action {
            Action::Left => self.step(-1),
            Action::Right => self.step(1),
            Action::Up => self.jump_row(-1),
            Action::Down => self.jump_row(1),
            Action::Grab if self.board.is_dragging() => self.drop_card(),
            Action::Grab => self.grab(),
            Action::Drop => self.drop_card(),
            Action::Cancel => {
                self.cancel();
                Ok(())
            }
            Action::Reshuffle => self.reshuffle(),
        };

        if let Err(e) = result {
            log::warn!("{e}");
            self.status = e.to_string();
        }
    }

    fn move_to(&mut self, target: usize) -> Result<()> {
        if self.board.is_dragging() {
            self.board.propose_move(target)?;
        }
        self.cursor = target;
        Ok(())
    }

    fn step(&mut self, delta: isize) -> Result<()> {
        let len = self.board.len();
        if len == 0 {
            return Ok(());
        }
        let target = self.cursor.saturating_add_signed(delta).min(len - 1);
        self.move_to(target)
    }

    /// Move to the first card of the row above or below.
    fn jump_row(&mut self, delta: isize) -> Result<()> {
        let groups = self.board.layout();
        let Some(row) = row_of(&groups, self.cursor) else {
            return Ok(());
        };
        let target_row = row.saturating_add_signed(delta).min(groups.len() - 1);
        self.move_to(groups[target_row].range.start)
    }

    fn grab(&mut self) -> Result<()> {
        let Some(card) = self.board.working().get(self.cursor) else {
            return Ok(());
        };
        let id = card.id();
        self.cursor = self.board.begin_drag(id)?;
        self.status = format!("Dragging card {}", card_label(self.board.committed(), self.cursor));
        Ok(())
    }

    fn drop_card(&mut self) -> Result<()> {
        let dragged = self.board.dragged_card();
        self.board.commit_drag()?;
        if let Some(position) = dragged.and_then(|id| self.board.position_of(id)) {
            self.cursor = position;
        }
        self.status = "Dropped".to_string();
        Ok(())
    }

    fn cancel(&mut self) {
        let dragged = self.board.dragged_card();
        self.board.cancel_drag();
        if let Some(position) = dragged.and_then(|id| self.board.position_of(id)) {
            self.cursor = position;
            self.status = "Cancelled".to_string();
        }
    }

    fn reshuffle(&mut self) -> Result<()> {
        let cards = random_deck(&self.deck)?;
        self.board.replace(cards)?;
        self.cursor = 0;
        self.status = format!("Dealt {} cards", self.board.len());
        Ok(())
    }
}

/// Index of the row holding the card at `index`.
pub fn row_of(groups: &[Group], index: usize) -> Option<usize> {
    groups.iter().position(|g| g.contains(index))
}

fn card_label(cards: &[Card], index: usize) -> String {
    cards
        .get(index)
        .map(|c| c.value().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> (App, Vec<Card>) {
        let cards = vec![
            Card::complex(100),
            Card::basic(0),
            Card::basic(1),
            Card::complex(101),
            Card::basic(2),
        ];
        (
            App::new(cards.clone(), DeckSpec::default(), LayoutMetrics::default()),
            cards,
        )
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let (mut app, _) = app();
        app.handle(Action::Left);
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            app.handle(Action::Right);
        }
        assert_eq!(app.cursor, 4);
    }

    #[test]
    fn test_rows_jump_to_row_start() {
        let (mut app, _) = app();
        // Rows: [0] [1, 2] [3] [4]
        app.handle(Action::Down);
        assert_eq!(app.cursor, 1);
        app.handle(Action::Down);
        assert_eq!(app.cursor, 3);
        app.handle(Action::Up);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_drag_and_drop_reorders() {
        let (mut app, cards) = app();
        app.handle(Action::Right);
        app.handle(Action::Grab);
        assert!(app.board.is_dragging());

        app.handle(Action::Right);
        app.handle(Action::Right);
        assert_eq!(app.board.committed()[1].id(), cards[1].id());
        assert_eq!(app.board.working()[3].id(), cards[1].id());

        app.handle(Action::Drop);
        assert!(!app.board.is_dragging());
        assert_eq!(app.board.committed()[3].id(), cards[1].id());
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_cancel_returns_cursor_to_card() {
        let (mut app, cards) = app();
        app.handle(Action::Grab);
        app.handle(Action::Right);
        app.handle(Action::Right);
        app.handle(Action::Cancel);

        assert_eq!(app.cursor, 0);
        assert_eq!(app.board.committed()[0].id(), cards[0].id());
        assert_eq!(app.status, "Cancelled");
    }

    #[test]
    fn test_reshuffle_refused_while_dragging() {
        let (mut app, _) = app();
        app.handle(Action::Grab);
        app.handle(Action::Reshuffle);

        assert_eq!(app.board.len(), 5);
        assert_eq!(app.status, "A drag is already in progress");
    }

    #[test]
    fn test_empty_board_ignores_navigation() {
        let mut app = App::new(Vec::new(), DeckSpec::default(), LayoutMetrics::default());
        app.handle(Action::Right);
        app.handle(Action::Down);
        app.handle(Action::Grab);
        assert_eq!(app.cursor, 0);
        assert!(!app.board.is_dragging());
    }
}
