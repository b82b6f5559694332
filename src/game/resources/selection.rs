//! The human's current selection

use chess_engine::Square;

/// Selected square and where its piece may go
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected: Option<Square>,
    pub targets: Vec<Square>,
}

impl Selection {
    pub fn select(&mut self, square: Square, targets: Vec<Square>) {
        self.selected = Some(square);
        self.targets = targets;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.targets.clear();
    }

    pub fn is_target(&self, square: Square) -> bool {
        self.targets.contains(&square)
    }
}
