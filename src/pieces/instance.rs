//! Concrete placements of catalog shapes.
//!
//! A `ShapeInstance` is built in the fixed order instantiate → mirror →
//! rotate, the same order the action encoding enumerates orientations in.
//! Every step returns a new value; neither the previous instance nor the
//! catalog entry is touched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalog::{ShapeDef, ShapeId};
use super::transform::{Mirror, Rotation};
use crate::core::Cell;

/// Cells covered by one placement (at most 5).
pub type CellSet = SmallVec<[Cell; 5]>;

/// Corner candidates of one placement (at most 8).
pub type CornerSet = SmallVec<[Cell; 8]>;

/// One shape placed at a reference point in one orientation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeInstance {
    shape: ShapeId,
    reference: Cell,
    mirror: Mirror,
    rotation: Rotation,
    cells: CellSet,
    corners: CornerSet,
}

impl ShapeInstance {
    /// Translate the shape so its reference cell lands on `reference`.
    #[must_use]
    pub fn instantiate(shape: ShapeId, reference: Cell) -> Self {
        let def = shape.def();
        Self {
            shape,
            reference,
            mirror: Mirror::Identity,
            rotation: Rotation::R0,
            cells: def.cells.iter().map(|&offset| reference + offset).collect(),
            corners: def.corners.iter().map(|&offset| reference + offset).collect(),
        }
    }

    /// Instantiate, mirror, then rotate in one go.
    ///
    /// Panics if the shape does not permit `mirror` or `rotation`.
    #[must_use]
    pub fn new(shape: ShapeId, reference: Cell, mirror: Mirror, rotation: Rotation) -> Self {
        Self::instantiate(shape, reference)
            .mirrored(mirror)
            .rotated(rotation)
    }

    /// Reflect about the reference point's column.
    ///
    /// Panics if the shape does not permit `mirror`, or if this instance has
    /// already been mirrored or rotated.
    #[must_use]
    pub fn mirrored(&self, mirror: Mirror) -> Self {
        assert!(
            self.def().mirrors.contains(&mirror),
            "shape {} does not permit mirror {:?}",
            self.shape,
            mirror
        );
        assert!(
            self.mirror == Mirror::Identity && self.rotation == Rotation::R0,
            "mirror must be applied before any other transform"
        );
        self.map_offsets(|offset| mirror.apply(offset), mirror, self.rotation)
    }

    /// Rotate clockwise about the reference point.
    ///
    /// Panics if the shape does not permit `rotation`, or if this instance
    /// has already been rotated.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        assert!(
            self.def().rotations.contains(&rotation),
            "shape {} does not permit rotation {} degrees",
            self.shape,
            rotation.degrees()
        );
        assert!(self.rotation == Rotation::R0, "instance is already rotated");
        self.map_offsets(|offset| rotation.apply(offset), self.mirror, rotation)
    }

    fn map_offsets(&self, f: impl Fn(Cell) -> Cell, mirror: Mirror, rotation: Rotation) -> Self {
        let reference = self.reference;
        let image = |&cell: &Cell| reference + f(cell - reference);
        Self {
            shape: self.shape,
            reference,
            mirror,
            rotation,
            cells: self.cells.iter().map(image).collect(),
            corners: self.corners.iter().map(image).collect(),
        }
    }

    #[must_use]
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    #[must_use]
    pub fn def(&self) -> &'static ShapeDef {
        self.shape.def()
    }

    #[must_use]
    pub fn reference(&self) -> Cell {
        self.reference
    }

    #[must_use]
    pub fn mirror(&self) -> Mirror {
        self.mirror
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Covered cells, in catalog order (reference cell first).
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Corner candidates, possibly off the board.
    #[must_use]
    pub fn corners(&self) -> &[Cell] {
        &self.corners
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Covered cells in ascending order; equal for geometrically identical placements.
    #[must_use]
    pub fn footprint(&self) -> CellSet {
        let mut cells = self.cells.clone();
        cells.sort_unstable();
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::catalog::CATALOG;

    #[test]
    fn test_instantiate_translates() {
        let inst = ShapeInstance::instantiate(ShapeId::V3, Cell::new(4, 4));
        assert_eq!(inst.cells(), &[Cell::new(4, 4), Cell::new(4, 5), Cell::new(5, 4)]);
        assert_eq!(inst.corners()[0], Cell::new(3, 3));
        assert_eq!(inst.reference(), Cell::new(4, 4));
    }

    #[test]
    fn test_rotation_keeps_reference_fixed() {
        for def in &CATALOG {
            for (mirror, rotation) in def.orientations() {
                let inst = ShapeInstance::new(def.id, Cell::new(6, 7), mirror, rotation);
                assert_eq!(inst.cells()[0], Cell::new(6, 7));
                assert_eq!(inst.size(), def.size());
            }
        }
    }

    #[test]
    fn test_rotate_i2_quarter_turn() {
        let flat = ShapeInstance::instantiate(ShapeId::I2, Cell::new(5, 5));
        let turned = flat.rotated(Rotation::R90);
        assert_eq!(turned.cells(), &[Cell::new(5, 5), Cell::new(6, 5)]);
        // The source instance is untouched.
        assert_eq!(flat.cells(), &[Cell::new(5, 5), Cell::new(5, 6)]);
        assert_eq!(flat.rotation(), Rotation::R0);
    }

    #[test]
    fn test_mirror_then_rotate() {
        let inst = ShapeInstance::new(ShapeId::L4, Cell::new(5, 5), Mirror::Horizontal, Rotation::R180);
        // Mirror: (1,0) -> (-1,0); then 180: (-1,0) -> (1,0). Row cells (0,k) -> (0,-k).
        assert_eq!(
            inst.footprint().as_slice(),
            &[Cell::new(5, 3), Cell::new(5, 4), Cell::new(5, 5), Cell::new(6, 5)]
        );
    }

    #[test]
    fn test_full_repertoire_shapes_are_chiral_under_rotation() {
        // Shapes with all four rotations never repeat a footprint.
        for def in CATALOG.iter().filter(|d| d.rotations.len() == 4) {
            let mut seen: Vec<CellSet> = def
                .orientations()
                .map(|(m, r)| ShapeInstance::new(def.id, Cell::new(7, 7), m, r).footprint())
                .collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), 8, "{}", def.id);
        }
    }

    #[test]
    fn test_mirror_can_coincide_with_identity() {
        // T4 is symmetric across its stem, so its mirror is a no-op.
        let plain = ShapeInstance::new(ShapeId::T4, Cell::new(7, 7), Mirror::Identity, Rotation::R0);
        let flipped = ShapeInstance::new(ShapeId::T4, Cell::new(7, 7), Mirror::Horizontal, Rotation::R0);
        assert_eq!(plain.footprint(), flipped.footprint());
        assert_ne!(plain, flipped);
    }

    #[test]
    #[should_panic(expected = "does not permit rotation")]
    fn test_unpermitted_rotation_panics() {
        let _ = ShapeInstance::instantiate(ShapeId::T4, Cell::new(5, 5)).rotated(Rotation::R180);
    }

    #[test]
    #[should_panic(expected = "does not permit mirror")]
    fn test_unpermitted_mirror_panics() {
        let _ = ShapeInstance::instantiate(ShapeId::I3, Cell::new(5, 5)).mirrored(Mirror::Horizontal);
    }

    #[test]
    #[should_panic(expected = "before any other transform")]
    fn test_mirror_after_rotate_panics() {
        let _ = ShapeInstance::instantiate(ShapeId::N, Cell::new(5, 5))
            .rotated(Rotation::R90)
            .mirrored(Mirror::Horizontal);
    }
}
