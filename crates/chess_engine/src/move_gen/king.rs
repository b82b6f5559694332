//! King movement

use super::distance;
use crate::types::Square;

/// One step in any direction. The null move passes this test; `is_legal`
/// rejects it through the own-color guard.
pub(super) fn is_valid_king_move(from: Square, to: Square) -> bool {
    let (dr, dc) = distance(from, to);
    dr <= 1 && dc <= 1
}
