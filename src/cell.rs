use crate::shape::{Connectors, Rotation, ShapeKind};

/// A catalog shape placed in a grid slot, frozen at a quarter-turn rotation.
///
/// The rotation is fixed at construction; a slot's tile is only ever replaced
/// wholesale (by re-filling or mirroring), never edited in place.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Tile {
    kind: ShapeKind,
    rotation: Rotation,
}

impl Tile {
    /// Place `kind` at `rotation` quarter-turns clockwise, taken modulo 4.
    pub fn new(kind: ShapeKind, rotation: Rotation) -> Self {
        Self { kind, rotation: rotation % 4 }
    }

    /// The catalog shape occupying the slot.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The stored rotation, in `0..4`. Applied to the shape's geometry at
    /// draw time.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The canonical connectors of [`kind`](Self::kind) carried through the
    /// stored rotation; this is the vector neighbors and the traversal see.
    pub fn connectors(&self) -> Connectors {
        self.kind.connectors().rotated(self.rotation)
    }
}
