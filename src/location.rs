use strum::VariantArray;

/// A grid coordinate scalar.
pub type Coord = usize;
/// A positive grid dimension.
pub type Dimension = std::num::NonZero<Coord>;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// A location `(x, y)` on a grid. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

/// One of the four edges of a grid cell, in clockwise ordinal order.
///
/// The discriminants 0 through 3 index connector vectors and border
/// requirements; rotating a tile by one quarter-turn shifts every connector
/// one side clockwise.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// The side facing this one from the neighboring cell, `(self + 2) mod 4`.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Attempt the step from `location` across `self` and return the
    /// resultant [`Location`].
    ///
    /// Steps off the top or left wrap the coordinate around `usize`, which no
    /// in-bounds lookup can ever resolve; callers go through checked grid
    /// access rather than validating here.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::North => location.offset_by((0, -1)),
            Self::East => location.offset_by((1, 0)),
            Self::South => location.offset_by((0, 1)),
            Self::West => location.offset_by((-1, 0)),
        }
    }
}
