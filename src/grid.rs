use std::fmt::{Display, Formatter, Write};

use itertools::Itertools;
use ndarray::Array2;
use strum::VariantArray;

use crate::cell::Tile;
use crate::location::{Coord, Dimension, Location, Side};
use crate::shape::{Border, Requirement};

/// A rectangular board of tile slots.
///
/// Constructed all-empty, populated by a [`Generator`](crate::Generator),
/// optionally overwritten by mirroring, then read-only for traversal and
/// rendering. Bounds are validated once here, at the container boundary;
/// out-of-range queries resolve to "nothing there" rather than errors.
pub struct Grid {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Option<Tile>>,
}

impl Grid {
    /// An all-empty grid with the specified dimensions, in `(x, y)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_elem((dims.1.get(), dims.0.get()), None),
        }
    }

    /// Dimensions in `(x, y)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Number of columns.
    pub fn width(&self) -> Coord {
        self.dims.0.get()
    }

    /// Number of rows.
    pub fn height(&self) -> Coord {
        self.dims.1.get()
    }

    /// The tile at `location`, or `None` when the slot is unfilled or the
    /// location is off the grid.
    pub fn get(&self, location: Location) -> Option<&Tile> {
        self.cells.get(location.as_index()).and_then(|slot| slot.as_ref())
    }

    pub(crate) fn set(&mut self, location: Location, tile: Option<Tile>) {
        self.cells[location.as_index()] = tile;
    }

    /// Every location on the grid in row-major order (left to right, top to
    /// bottom); the order generation sweeps and the traversal's fallback
    /// scan follows.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let (width, height) = (self.width(), self.height());
        (0..height).cartesian_product(0..width).map(|(y, x)| Location(x, y))
    }

    /// The constraint each neighbor places on `location`, per side: off-grid
    /// is always [`Closed`](Requirement::Closed), an unfilled neighbor leaves
    /// the side [`Free`](Requirement::Free), and a filled neighbor imposes
    /// its own effective connector on the side facing back.
    pub fn border_requirement(&self, location: Location) -> Border {
        let mut border = [Requirement::Free; 4];

        for side in Side::VARIANTS {
            let neighbor = side.attempt_from(location);
            border[*side as usize] = match self.cells.get(neighbor.as_index()) {
                None => Requirement::Closed,
                Some(None) => Requirement::Free,
                Some(Some(tile)) => Requirement::from_open(tile.connectors().is_open(side.opposite())),
            };
        }

        border
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for slot in row {
                f.write_char(glyph(slot))?;
            }
            f.write_char('\n')?;
        }

        Ok(())
    }
}

/// One character per slot: box-drawing strokes matching the effective
/// connectors, `.` for a placed Empty, space for an unfilled slot.
fn glyph(slot: &Option<Tile>) -> char {
    let Some(tile) = slot else {
        return ' ';
    };

    let c = tile.connectors();
    match (c.is_open(Side::North), c.is_open(Side::East), c.is_open(Side::South), c.is_open(Side::West)) {
        (false, false, false, false) => '.',
        (true, false, false, false) => '╵',
        (false, true, false, false) => '╶',
        (false, false, true, false) => '╷',
        (false, false, false, true) => '╴',
        (true, true, false, false) => '└',
        (false, true, true, false) => '┌',
        (false, false, true, true) => '┐',
        (true, false, false, true) => '┘',
        (true, false, true, false) => '│',
        (false, true, false, true) => '─',
        (true, true, true, false) => '├',
        (false, true, true, true) => '┬',
        (true, false, true, true) => '┤',
        (true, true, false, true) => '┴',
        (true, true, true, true) => '┼',
    }
}
