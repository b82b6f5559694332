//! Knight movement. Knights jump, so nothing between the squares matters.

use super::distance;
use crate::types::Square;

pub(super) fn is_valid_knight_move(from: Square, to: Square) -> bool {
    matches!(distance(from, to), (2, 1) | (1, 2))
}
