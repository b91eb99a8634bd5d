//! Move enumeration.
//!
//! Candidates are tried corner by corner (ascending), shape by shape
//! (catalog order), mirror then rotation. Only the shape's reference cell
//! is anchored on the corner. A legal candidate whose cell set was already
//! produced earlier in the scan is skipped, so geometrically identical
//! orientations yield a single id. The deny-list is applied last and does
//! not affect deduplication.

use std::ops::ControlFlow;

use rustc_hash::FxHashSet;

use crate::codec::{encode_instance, DenyList};
use crate::core::{ActionId, ActionMask, BoardState, PlayerId};
use crate::pieces::{CellSet, ShapeInstance};
use crate::rules::is_legal;

/// Visit every available id for `player` in enumeration order.
///
/// Stops early when `visit` breaks.
pub(crate) fn scan<B>(
    state: &BoardState,
    player: PlayerId,
    deny_list: &DenyList,
    mut visit: impl FnMut(ActionId) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let round = state.legality_round(player);
    let mut seen: FxHashSet<CellSet> = FxHashSet::default();

    for &corner in state.corners(player).iter() {
        for &shape in state.inventory(player).iter() {
            let def = shape.def();
            let anchored = ShapeInstance::instantiate(shape, corner);
            for &mirror in def.mirrors {
                let flipped = anchored.mirrored(mirror);
                for &rotation in def.rotations {
                    let candidate = flipped.rotated(rotation);
                    if !is_legal(state, candidate.cells(), player, round) {
                        continue;
                    }
                    if !seen.insert(candidate.footprint()) {
                        continue;
                    }
                    let action = encode_instance(&candidate);
                    if deny_list.contains(action) {
                        continue;
                    }
                    visit(action)?;
                }
            }
        }
    }

    ControlFlow::Continue(())
}

/// Full availability mask.
pub(crate) fn valid_moves(state: &BoardState, player: PlayerId, deny_list: &DenyList) -> ActionMask {
    let mut mask = ActionMask::empty();
    let _ = scan::<()>(state, player, deny_list, |action| {
        mask.set(action);
        ControlFlow::Continue(())
    });
    mask
}

/// Whether any id is available, stopping at the first one.
pub(crate) fn any_valid_move(state: &BoardState, player: PlayerId, deny_list: &DenyList) -> bool {
    scan(state, player, deny_list, |_| ControlFlow::Break(())).is_break()
}
