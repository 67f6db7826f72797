use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use strum::{EnumCount, VariantArray};

use crate::location::Side;

/// A tile rotation in clockwise quarter-turns, meaningful modulo 4.
pub type Rotation = u8;

/// Open/closed connector flags for the four sides of a tile, in the tile's
/// unrotated canonical frame.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Connectors([bool; 4]);

impl Connectors {
    pub(crate) const fn new(open: [bool; 4]) -> Self {
        Self(open)
    }

    /// Whether the connector on `side` is open.
    pub fn is_open(&self, side: Side) -> bool {
        self.0[side as usize]
    }

    pub(crate) fn set(&mut self, side: Side, open: bool) {
        self.0[side as usize] = open;
    }

    /// Index-shift every connector by `rotation` quarter-turns clockwise, so
    /// that `result[(i + rotation) mod 4] == self[i]`.
    ///
    /// Rotating by 0 is the identity, and
    /// `v.rotated(a).rotated(b) == v.rotated((a + b) % 4)`.
    pub fn rotated(self, rotation: Rotation) -> Self {
        let mut shifted = [false; 4];
        for (side, open) in self.0.into_iter().enumerate() {
            shifted[(side + rotation as usize) % 4] = open;
        }
        Self(shifted)
    }

    /// The exact-match border equivalent to these connectors: every open flag
    /// becomes [`Requirement::Open`], every closed one [`Requirement::Closed`].
    pub fn requirements(&self) -> Border {
        self.0.map(Requirement::from_open)
    }
}

/// The constraint a cell's surroundings place on one of its sides before a
/// tile is chosen for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Requirement {
    /// The side must have no connector: a grid boundary, or a filled neighbor
    /// whose facing side is closed.
    Closed,
    /// The side must have an open connector: a filled neighbor whose facing
    /// side is open.
    Open,
    /// The neighboring slot is not yet filled; anything goes.
    Free,
}

/// Per-side requirements indexed by [`Side`] discriminant.
pub type Border = [Requirement; 4];

impl Requirement {
    pub(crate) fn from_open(open: bool) -> Self {
        match open {
            true => Self::Open,
            false => Self::Closed,
        }
    }

    /// Whether a connector state satisfies this requirement.
    pub fn admits(&self, open: bool) -> bool {
        match self {
            Self::Closed => !open,
            Self::Open => open,
            Self::Free => true,
        }
    }
}

/// The fixed catalog of tile shapes.
///
/// Every combination of open sides is reachable by rotating some entry, which
/// is what lets a fresh generation sweep always succeed: a cell constrained
/// only by its North and West neighbors has a fitting shape for all four
/// combinations of those two bits.
#[derive(Copy, Clone, Debug, EnumCount, Eq, Hash, PartialEq, VariantArray)]
pub enum ShapeKind {
    /// No connectors; fills slots nothing connects to.
    Empty,
    /// A single terminal connector; roots the reveal traversal.
    End,
    /// Two adjacent connectors.
    Curve,
    /// Two opposing connectors.
    Straight,
    /// Three connectors.
    Branch,
    /// All four connectors.
    Cross,
}

impl ShapeKind {
    /// Canonical connectors in the unrotated frame, `(N, E, S, W)`.
    pub fn connectors(&self) -> Connectors {
        Connectors::new(match self {
            Self::Empty => [false, false, false, false],
            Self::End => [true, false, false, false],
            Self::Curve => [true, true, false, false],
            Self::Straight => [true, false, true, false],
            Self::Branch => [true, true, true, false],
            Self::Cross => [true, true, true, true],
        })
    }

    /// Default relative likelihood during generation. Tuning only; no
    /// correctness impact.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Empty | Self::End => 0.25,
            _ => 0.4,
        }
    }

    /// A rotation under which this shape satisfies `border` on all four
    /// sides, chosen uniformly at random among every rotation that qualifies,
    /// or `None` when none does.
    ///
    /// The tie-break must stay genuinely random per call: downstream
    /// properties depend on the set of reachable placements, not one fixed
    /// representative.
    pub fn fitting_rotation<R: Rng>(&self, border: &Border, rng: &mut R) -> Option<Rotation> {
        let fitting = (0..4)
            .filter(|rotation| {
                let effective = self.connectors().rotated(*rotation);
                Side::VARIANTS.iter().all(|side| border[*side as usize].admits(effective.is_open(*side)))
            })
            .collect_vec();

        fitting.choose(rng).copied()
    }
}
