//! Board state: grid ownership, scores, inventories and corner bookkeeping.
//!
//! ## Invariants
//!
//! - `score[p]` equals the number of grid cells owned by `p`.
//! - Inventories only shrink; each shape is placed at most once per player.
//! - Every cell in a player's corner set is on the board and empty.
//!
//! Corner sets and inventories use `im` ordered sets: cloning a state is
//! cheap, and iteration order (and therefore move enumeration order) is
//! deterministic.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::coord::{Cell, CELL_COUNT};
use super::player::{PlayerId, PlayerMap};
use crate::pieces::{ShapeId, ShapeInstance};

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Row-major cell ownership.
    grid: Vec<Option<PlayerId>>,

    /// Cells owned per player.
    scores: PlayerMap<u32>,

    /// Shapes each player has not placed yet.
    inventories: PlayerMap<OrdSet<ShapeId>>,

    /// Empty cells each player may anchor a placement on.
    corners: PlayerMap<OrdSet<Cell>>,

    /// Cells each player's opening placement must cover.
    start_corners: PlayerMap<Cell>,

    /// Placements made so far (both players).
    round: u32,

    /// Player to move.
    current_player: PlayerId,
}

impl BoardState {
    /// Empty board, full inventories, corner sets seeded with the starting corners.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let full: OrdSet<ShapeId> = ShapeId::ALL.into_iter().collect();
        Self {
            grid: vec![None; CELL_COUNT],
            scores: PlayerMap::with_value(0),
            inventories: PlayerMap::with_value(full),
            corners: PlayerMap::new(|p| OrdSet::unit(config.start_corner(p))),
            start_corners: config.start_corners.clone(),
            round: 0,
            current_player: PlayerId::FIRST,
        }
    }

    // === Accessors ===

    /// Owner of a cell. `None` for empty or off-board cells.
    #[inline]
    #[must_use]
    pub fn owner(&self, cell: Cell) -> Option<PlayerId> {
        cell.index().and_then(|i| self.grid[i])
    }

    /// Whether a cell is on the board and unoccupied.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        cell.index().is_some_and(|i| self.grid[i].is_none())
    }

    /// Row-major ownership grid.
    #[must_use]
    pub fn grid(&self) -> &[Option<PlayerId>] {
        &self.grid
    }

    /// Row-major grid as labels: `+1` first player, `-1` second, `0` empty.
    #[must_use]
    pub fn labels(&self) -> Vec<i8> {
        self.grid
            .iter()
            .map(|cell| cell.map_or(0, PlayerId::label))
            .collect()
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    /// Shapes the player still holds, in catalog order.
    #[must_use]
    pub fn inventory(&self, player: PlayerId) -> &OrdSet<ShapeId> {
        &self.inventories[player]
    }

    /// Available anchor cells for the player, ascending.
    #[must_use]
    pub fn corners(&self, player: PlayerId) -> &OrdSet<Cell> {
        &self.corners[player]
    }

    #[must_use]
    pub fn start_corner(&self, player: PlayerId) -> Cell {
        self.start_corners[player]
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Round the placement rule sees for `player`.
    ///
    /// `0` until the player's opening placement, so the start-corner rule
    /// applies; at least `2` afterwards, so a pass cannot send a player
    /// who already opened back to the start-corner rule.
    #[must_use]
    pub fn legality_round(&self, player: PlayerId) -> u32 {
        if self.scores[player] == 0 {
            0
        } else {
            self.round.max(2)
        }
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Occupied cells on the whole board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid.iter().filter(|c| c.is_some()).count()
    }

    // === Mutation ===

    /// Commit a placement for the current player and pass the turn.
    ///
    /// Legality is not checked here; callers place only instances that
    /// passed [`crate::rules::is_legal`]. Every derived value is computed
    /// before anything is written, so the update is all-or-nothing.
    pub fn place(&mut self, placement: &ShapeInstance) {
        let player = self.current_player;
        let opponent = player.opponent();

        let indices: Vec<usize> = placement.cells().iter().filter_map(|c| c.index()).collect();
        debug_assert_eq!(indices.len(), placement.size(), "placement leaves the board");
        debug_assert!(indices.iter().all(|&i| self.grid[i].is_none()), "placement overlaps");

        let mut grid = self.grid.clone();
        for &i in &indices {
            grid[i] = Some(player);
        }
        let is_free = |cell: &Cell| cell.index().is_some_and(|i| grid[i].is_none());

        let own_corners: OrdSet<Cell> = self.corners[player]
            .iter()
            .chain(placement.corners())
            .copied()
            .filter(|c| is_free(c))
            .collect();
        let their_corners: OrdSet<Cell> = self.corners[opponent]
            .iter()
            .copied()
            .filter(|c| is_free(c))
            .collect();

        let mut inventory = self.inventories[player].clone();
        inventory.remove(&placement.shape());

        self.grid = grid;
        self.scores[player] += indices.len() as u32;
        self.corners[player] = own_corners;
        self.corners[opponent] = their_corners;
        self.inventories[player] = inventory;
        self.round += 1;
        self.current_player = opponent;
    }

    /// Hand the move to the opponent without placing anything.
    pub fn pass(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Mirror, Rotation};

    fn new_state() -> BoardState {
        BoardState::new(&GameConfig::new())
    }

    #[test]
    fn test_new_state() {
        let state = new_state();
        assert_eq!(state.round(), 0);
        assert_eq!(state.current_player(), PlayerId::FIRST);
        assert_eq!(state.occupied_count(), 0);
        for player in PlayerId::all() {
            assert_eq!(state.score(player), 0);
            assert_eq!(state.inventory(player).len(), ShapeId::COUNT);
            assert_eq!(state.corners(player).len(), 1);
        }
        assert!(state.corners(PlayerId::FIRST).contains(&Cell::new(4, 4)));
        assert!(state.corners(PlayerId::SECOND).contains(&Cell::new(9, 9)));
    }

    #[test]
    fn test_place_updates_everything() {
        let mut state = new_state();
        let v3 = ShapeInstance::instantiate(ShapeId::V3, Cell::new(4, 4));
        state.place(&v3);

        assert_eq!(state.round(), 1);
        assert_eq!(state.current_player(), PlayerId::SECOND);
        assert_eq!(state.score(PlayerId::FIRST), 3);
        assert_eq!(state.occupied_count(), 3);
        assert_eq!(state.owner(Cell::new(4, 5)), Some(PlayerId::FIRST));
        assert!(!state.inventory(PlayerId::FIRST).contains(&ShapeId::V3));
        assert_eq!(state.inventory(PlayerId::SECOND).len(), ShapeId::COUNT);

        // The starting corner is now covered and pruned; the V3 corners are added.
        let corners = state.corners(PlayerId::FIRST);
        assert!(!corners.contains(&Cell::new(4, 4)));
        assert_eq!(corners.len(), 5);
        assert!(corners.contains(&Cell::new(3, 3)));
        assert!(corners.contains(&Cell::new(5, 6)));
    }

    #[test]
    fn test_place_prunes_opponent_corners() {
        let config = GameConfig::new().with_start_corner(PlayerId::SECOND, Cell::new(4, 5));
        let mut state = BoardState::new(&config);
        let i2 = ShapeInstance::instantiate(ShapeId::I2, Cell::new(4, 4));
        state.place(&i2);

        assert!(state.corners(PlayerId::SECOND).is_empty());
    }

    #[test]
    fn test_off_board_corners_are_dropped() {
        let config = GameConfig::new().with_start_corner(PlayerId::FIRST, Cell::new(0, 0));
        let mut state = BoardState::new(&config);
        state.place(&ShapeInstance::instantiate(ShapeId::I1, Cell::new(0, 0)));

        let corners: Vec<_> = state.corners(PlayerId::FIRST).iter().copied().collect();
        assert_eq!(corners, vec![Cell::new(1, 1)]);
    }

    #[test]
    fn test_labels() {
        let mut state = new_state();
        state.place(&ShapeInstance::new(ShapeId::I2, Cell::new(4, 4), Mirror::Identity, Rotation::R0));
        state.place(&ShapeInstance::instantiate(ShapeId::I1, Cell::new(9, 9)));

        let labels = state.labels();
        assert_eq!(labels[4 * 14 + 4], 1);
        assert_eq!(labels[4 * 14 + 5], 1);
        assert_eq!(labels[9 * 14 + 9], -1);
        assert_eq!(labels.iter().filter(|&&l| l != 0).count(), 3);
    }

    #[test]
    fn test_pass() {
        let mut state = new_state();
        state.pass();
        assert_eq!(state.current_player(), PlayerId::SECOND);
        assert_eq!(state.round(), 0);
    }

    #[test]
    fn test_legality_round_follows_openings() {
        let mut state = new_state();
        assert_eq!(state.legality_round(PlayerId::FIRST), 0);

        state.place(&ShapeInstance::instantiate(ShapeId::I1, Cell::new(4, 4)));
        assert_eq!(state.legality_round(PlayerId::FIRST), 2);
        assert_eq!(state.legality_round(PlayerId::SECOND), 0);

        state.pass();
        state.pass();
        assert_eq!(state.legality_round(PlayerId::SECOND), 0);
        state.place(&ShapeInstance::instantiate(ShapeId::I1, Cell::new(9, 9)));
        assert_eq!(state.legality_round(PlayerId::SECOND), 2);
        assert_eq!(state.legality_round(PlayerId::FIRST), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = new_state();
        let snapshot = state.clone();
        state.place(&ShapeInstance::instantiate(ShapeId::I1, Cell::new(4, 4)));

        assert_eq!(snapshot.occupied_count(), 0);
        assert_eq!(snapshot.inventory(PlayerId::FIRST).len(), ShapeId::COUNT);
        assert_ne!(snapshot, state);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = new_state();
        state.place(&ShapeInstance::instantiate(ShapeId::O4, Cell::new(4, 4)));

        let json = serde_json::to_string(&state).unwrap();
        let restored: BoardState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
