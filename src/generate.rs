use itertools::Itertools;
use log::debug;
use rand::Rng;
use strum::{EnumCount, VariantArray};

use crate::cell::Tile;
use crate::grid::Grid;
use crate::location::{Dimension, Location, Side};
use crate::shape::{Connectors, ShapeKind};

/// Relative likelihood of each catalog shape during generation.
///
/// Weights order the candidate shapes per cell (jittered, so equal weights
/// tie-break randomly); they never exclude a shape, so they have no
/// correctness impact. Negative weights are not meaningful.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeWeights([f64; ShapeKind::COUNT]);

impl Default for ShapeWeights {
    fn default() -> Self {
        let mut weights = [0.0; ShapeKind::COUNT];
        for kind in ShapeKind::VARIANTS {
            weights[*kind as usize] = kind.weight();
        }

        Self(weights)
    }
}

impl ShapeWeights {
    /// The weight of one shape.
    pub fn get(&self, kind: ShapeKind) -> f64 {
        self.0[kind as usize]
    }

    /// Override the weight of one shape.
    pub fn set(&mut self, kind: ShapeKind, weight: f64) -> &mut Self {
        self.0[kind as usize] = weight;
        self
    }
}

/// Reasons a fill pass may not fully succeed.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerateFailure {
    /// Cells whose border requirement no catalog shape satisfied under any
    /// rotation; they were left unfilled and the pass continued.
    Unfillable {
        locations: Vec<Location>,
    },
}

/// Reasons a mirror call may not fully succeed.
#[derive(Clone, Debug, PartialEq)]
pub enum MirrorFailure {
    /// The dimension crossed by the axis is odd; the grid was not modified.
    OddDimension,
    /// Donor tiles whose own shape has no rotation reproducing the exact
    /// mirrored connector vector; their destinations were left as they were
    /// and the sweep continued.
    NoExactRotation {
        skipped: Vec<Location>,
    },
}

/// Axis across which [`Generator::mirror`] reflects the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MirrorAxis {
    /// Reflect the left half onto the right; swaps East and West connectors.
    Horizontal,
    /// Reflect the top half onto the bottom; swaps North and South connectors.
    Vertical,
}

impl MirrorAxis {
    /// The donor's connectors as the destination must carry them.
    fn swapped(&self, connectors: Connectors) -> Connectors {
        let (a, b) = match self {
            Self::Horizontal => (Side::East, Side::West),
            Self::Vertical => (Side::North, Side::South),
        };

        let mut swapped = connectors;
        swapped.set(a, connectors.is_open(b));
        swapped.set(b, connectors.is_open(a));
        swapped
    }

    fn reflect(&self, location: Location, dims: (Dimension, Dimension)) -> Location {
        match self {
            Self::Horizontal => Location(dims.0.get() - 1 - location.0, location.1),
            Self::Vertical => Location(location.0, dims.1.get() - 1 - location.1),
        }
    }

    fn source_half(&self, dims: (Dimension, Dimension)) -> impl Iterator<Item = Location> {
        let (xs, ys) = match self {
            Self::Horizontal => (0..dims.0.get() / 2, 0..dims.1.get()),
            Self::Vertical => (0..dims.0.get(), 0..dims.1.get() / 2),
        };

        ys.cartesian_product(xs).map(|(y, x)| Location(x, y))
    }

    fn parity_valid(&self, dims: (Dimension, Dimension)) -> bool {
        match self {
            Self::Horizontal => dims.0.get() % 2 == 0,
            Self::Vertical => dims.1.get() % 2 == 0,
        }
    }
}

/// Fills grids by randomized weighted constraint matching and reflects
/// already-filled grids across an axis.
///
/// Greedy and best-effort by design: one pass over the cells, no
/// backtracking, no solvability guarantee for catalogs other than the
/// built-in one. Failed cells are reported, never retried.
pub struct Generator<R: Rng> {
    weights: ShapeWeights,
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// A generator with the default catalog weights.
    pub fn new(rng: R) -> Self {
        Self::with_weights(rng, ShapeWeights::default())
    }

    /// A generator with a custom weight table.
    pub fn with_weights(rng: R, weights: ShapeWeights) -> Self {
        Self { weights, rng }
    }

    /// Fill the single slot at `location` with a shape fitting its current
    /// border requirement.
    ///
    /// Candidates are ranked by `weight + jitter` with a fresh uniform jitter
    /// per shape per call; the first shape with a fitting rotation is placed.
    /// Returns `false`, leaving the slot untouched, when nothing fits.
    pub fn fill(&mut self, grid: &mut Grid, location: Location) -> bool {
        let border = grid.border_requirement(location);

        let ranked = ShapeKind::VARIANTS.iter()
            .map(|kind| (self.weights.get(*kind) + self.rng.gen::<f64>(), *kind))
            .sorted_by(|a, b| b.0.total_cmp(&a.0))
            .collect_vec();

        for (_, kind) in ranked {
            if let Some(rotation) = kind.fitting_rotation(&border, &mut self.rng) {
                grid.set(location, Some(Tile::new(kind, rotation)));
                return true;
            }
        }

        false
    }

    /// Fill every slot in row-major order, each placed tile becoming a
    /// concrete constraint on the cells after it. With `only_empty`,
    /// already-occupied slots are skipped and left untouched.
    ///
    /// A cell nothing fits stays unfilled and the sweep continues; the error
    /// lists every such cell. On a fresh grid the built-in catalog always
    /// fits, so a full sweep from empty cannot fail.
    pub fn fill_all(&mut self, grid: &mut Grid, only_empty: bool) -> Result<(), GenerateFailure> {
        let mut unfillable = Vec::new();

        for location in grid.locations() {
            if only_empty && grid.get(location).is_some() {
                continue;
            }

            if !self.fill(grid, location) {
                unfillable.push(location);
            }
        }

        debug!(
            "fill pass over {}x{}: {} cell(s) unfillable",
            grid.width(),
            grid.height(),
            unfillable.len(),
        );

        match unfillable.is_empty() {
            true => Ok(()),
            false => Err(GenerateFailure::Unfillable { locations: unfillable }),
        }
    }

    /// Reflect the source half of `grid` onto the other half across `axis`,
    /// replacing every destination tile wholesale. The source half is never
    /// modified.
    ///
    /// The dimension the axis crosses must be even, or the call is a no-op.
    /// Each donor's effective connectors are side-swapped across the axis and
    /// its own shape searched for a rotation reproducing that vector exactly,
    /// with none of fill's leniency. A donor without one (a chirality-sensitive
    /// shape under some rotations) leaves its destination as it was; the
    /// sweep continues and the error reports every skipped donor.
    pub fn mirror(&mut self, grid: &mut Grid, axis: MirrorAxis) -> Result<(), MirrorFailure> {
        if !axis.parity_valid(grid.dims()) {
            return Err(MirrorFailure::OddDimension);
        }

        let mut skipped = Vec::new();

        for source in axis.source_half(grid.dims()) {
            let destination = axis.reflect(source, grid.dims());

            let tile = match grid.get(source) {
                // the reflection of an unfilled slot is an unfilled slot
                None => None,
                Some(donor) => {
                    let required = axis.swapped(donor.connectors()).requirements();
                    match donor.kind().fitting_rotation(&required, &mut self.rng) {
                        Some(rotation) => Some(Tile::new(donor.kind(), rotation)),
                        None => {
                            skipped.push(source);
                            continue;
                        }
                    }
                }
            };

            grid.set(destination, tile);
        }

        if !skipped.is_empty() {
            debug!("mirror {:?}: {} donor(s) had no exact rotation", axis, skipped.len());
            return Err(MirrorFailure::NoExactRotation { skipped });
        }

        Ok(())
    }
}
