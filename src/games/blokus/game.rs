//! Blokus Duo game controller.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use super::moves;
use crate::codec::{self, DenyList, DenyListError, Placement};
use crate::core::{
    ActionId, ActionMask, BoardState, Cell, GameConfig, PlayerId, ACTION_SPACE,
};
use crate::pieces::{Mirror, Rotation, ShapeId, ShapeInstance, TransformError, UnknownShape};
use crate::rules::{is_legal, GameResult, RulesEngine};

/// Rejected manual placement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    #[error("{player} has already placed {shape}")]
    ShapeUnavailable { player: PlayerId, shape: ShapeId },
    #[error("{shape} has no orientation rotated {degrees} degrees with mirror {mirror:?}")]
    OrientationNotPermitted {
        shape: ShapeId,
        degrees: u16,
        mirror: Mirror,
    },
    #[error("reference point {0} is off the board")]
    OffBoard(Cell),
    #[error("{shape} at {reference} is not a legal placement for {player}")]
    Illegal {
        player: PlayerId,
        shape: ShapeId,
        reference: Cell,
    },
    #[error(transparent)]
    UnknownShape(#[from] UnknownShape),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// One game of Blokus Duo: configuration plus board state.
///
/// Cloning gives a fully independent game (the deny-list is shared
/// read-only).
#[derive(Clone, Debug)]
pub struct BlokusGame {
    config: GameConfig,
    state: BoardState,
}

/// Builder for creating a BlokusGame.
pub struct BlokusGameBuilder {
    config: GameConfig,
}

impl Default for BlokusGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::new(),
        }
    }
}

impl BlokusGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override a player's starting corner. Panics if off the board.
    pub fn start_corner(mut self, player: PlayerId, corner: Cell) -> Self {
        self.config = self.config.with_start_corner(player, corner);
        self
    }

    pub fn deny_list(mut self, deny_list: DenyList) -> Self {
        self.config = self.config.with_deny_list(deny_list);
        self
    }

    /// Load the deny-list from a plain-text file.
    pub fn deny_list_path(self, path: impl AsRef<Path>) -> Result<Self, DenyListError> {
        let deny_list = DenyList::from_path(path)?;
        Ok(self.deny_list(deny_list))
    }

    pub fn build(self) -> BlokusGame {
        BlokusGame::with_config(self.config)
    }
}

impl Default for BlokusGame {
    fn default() -> Self {
        Self::with_config(GameConfig::new())
    }
}

impl BlokusGame {
    /// Standard game, empty deny-list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        let state = BoardState::new(&config);
        Self { config, state }
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[must_use]
    pub fn deny_list(&self) -> &Arc<DenyList> {
        &self.config.deny_list
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player()
    }

    /// Placements made so far by both players.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round()
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.state.score(player)
    }

    /// Shapes the player has not placed, in catalog order.
    #[must_use]
    pub fn remaining_shapes(&self, player: PlayerId) -> Vec<ShapeId> {
        self.state.inventory(player).iter().copied().collect()
    }

    /// Row-major grid labels (`+1`, `-1`, `0`).
    #[must_use]
    pub fn board(&self) -> Vec<i8> {
        self.state.labels()
    }

    // === Controller operations ===

    /// Availability mask of `player`'s moves.
    #[must_use]
    pub fn get_valid_moves(&self, player: PlayerId) -> ActionMask {
        self.valid_moves(&self.state, player)
    }

    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<ActionId> {
        RulesEngine::legal_actions(self, &self.state, player)
    }

    #[must_use]
    pub fn has_valid_move(&self, player: PlayerId) -> bool {
        RulesEngine::has_valid_move(self, &self.state, player)
    }

    /// Place the action for the current player.
    ///
    /// `action` must come from [`Self::get_valid_moves`] for the current
    /// player; legality is not re-checked.
    pub fn play_action(&mut self, action: ActionId) {
        place_action(&mut self.state, action);
    }

    /// Hand the move to the opponent without placing anything.
    ///
    /// The round counter does not advance. A player who has not opened yet
    /// still must cover their start corner; one who has keeps the
    /// adjacency rule.
    pub fn pass_turn(&mut self) {
        self.state.pass();
    }

    /// Final result, or `None` while either player can still move.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_terminal(&self.state)
    }

    /// Outcome relative to `player`: `Some(1)` win, `Some(-1)` loss,
    /// `Some(0)` draw, `None` while the game continues.
    #[must_use]
    pub fn check_game_over(&self, player: PlayerId) -> Option<i8> {
        self.result().map(|result| result.value_for(player))
    }

    /// Decode an action id into its concrete placement.
    #[must_use]
    pub fn translate_action(&self, action: ActionId) -> Placement {
        codec::translate(action)
    }

    /// Validate a hand-entered placement for the current player and return
    /// its action id.
    ///
    /// The id is the one for the requested orientation. When another
    /// orientation covers the same cells, the availability mask may list
    /// that one instead; both decode to the same cells.
    pub fn encode_placement(
        &self,
        shape: ShapeId,
        reference: Cell,
        rotation: Rotation,
        mirror: Mirror,
    ) -> Result<ActionId, PlacementError> {
        let player = self.current_player();
        if !reference.in_bounds() {
            return Err(PlacementError::OffBoard(reference));
        }
        if !shape.def().permits(rotation, mirror) {
            return Err(PlacementError::OrientationNotPermitted {
                shape,
                degrees: rotation.degrees(),
                mirror,
            });
        }
        if !self.state.inventory(player).contains(&shape) {
            return Err(PlacementError::ShapeUnavailable { player, shape });
        }

        let instance = ShapeInstance::new(shape, reference, mirror, rotation);
        let action = codec::encode_instance(&instance);
        let round = self.state.legality_round(player);
        let legal = is_legal(&self.state, instance.cells(), player, round);
        if !legal || self.config.deny_list.contains(action) {
            return Err(PlacementError::Illegal {
                player,
                shape,
                reference,
            });
        }
        Ok(action)
    }

    /// [`Self::encode_placement`] from raw entry: shape name, clockwise
    /// degrees and a mirror flag.
    pub fn parse_placement(
        &self,
        shape: &str,
        reference: Cell,
        degrees: u16,
        mirrored: bool,
    ) -> Result<ActionId, PlacementError> {
        let shape: ShapeId = shape.parse()?;
        let rotation = Rotation::try_from(degrees)?;
        let mirror = Mirror::try_from(u8::from(mirrored))?;
        self.encode_placement(shape, reference, rotation, mirror)
    }
}

fn place_action(state: &mut BoardState, action: ActionId) {
    debug_assert!(action.index() < ACTION_SPACE, "{} is outside the action space", action);
    let instance = codec::decode(action).instance();
    state.place(&instance);
}

impl RulesEngine for BlokusGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn valid_moves(&self, state: &BoardState, player: PlayerId) -> ActionMask {
        moves::valid_moves(state, player, &self.config.deny_list)
    }

    fn apply_action(&self, state: &mut BoardState, action: ActionId) {
        place_action(state, action);
    }

    fn is_terminal(&self, state: &BoardState) -> Option<GameResult> {
        let stuck = PlayerId::all()
            .all(|player| !moves::any_valid_move(state, player, &self.config.deny_list));
        if !stuck {
            return None;
        }

        let first = state.score(PlayerId::FIRST);
        let second = state.score(PlayerId::SECOND);
        Some(match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    fn has_valid_move(&self, state: &BoardState, player: PlayerId) -> bool {
        moves::any_valid_move(state, player, &self.config.deny_list)
    }
}
