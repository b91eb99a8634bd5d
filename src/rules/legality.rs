//! Placement legality.

use crate::core::{BoardState, Cell, PlayerId};

/// Whether `player` may cover `cells` on `board`.
///
/// - every cell is on the board and empty;
/// - during the opening (`round < 2`) some cell covers the player's
///   starting corner;
/// - afterwards no cell shares an edge with the player's own cells and at
///   least one cell touches them diagonally.
///
/// The opponent's cells only matter for overlap.
#[must_use]
pub fn is_legal(board: &BoardState, cells: &[Cell], player: PlayerId, round: u32) -> bool {
    if !cells.iter().all(|&cell| board.is_empty(cell)) {
        return false;
    }

    if round < 2 {
        let start = board.start_corner(player);
        return cells.contains(&start);
    }

    let owned = |cell: Cell| board.owner(cell) == Some(player);

    let touches_edge = cells
        .iter()
        .any(|cell| cell.orthogonal_neighbors().any(owned));
    if touches_edge {
        return false;
    }

    cells
        .iter()
        .any(|cell| cell.diagonal_neighbors().any(owned))
}
