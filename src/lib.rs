#![warn(missing_docs)]

//! # `mobius`
//!
//! A procedural generator for closed-loop connector-tile grids in the style of
//! the puzzle game Infinity Loop, paired with a traversal engine that orders
//! the finished network for a reveal animation.
//!
//! Generation assigns every cell a shape from a fixed six-entry catalog and a
//! quarter-turn rotation such that every edge between adjacent tiles is
//! mutually consistent: an open connector always faces another open connector
//! or the grid boundary. The fill is greedy and weighted-random, one cell at a
//! time in row-major order, not a backtracking solver. Because the catalog
//! covers every combination of open sides, a fresh sweep always succeeds; the
//! interesting failure modes live in re-filling and in the exact
//! [mirror](Generator::mirror) transform, and both are reported rather than
//! papered over.
//!
//! [`Forest::compute`] then walks the finished grid's implicit graph into a
//! spanning forest rooted preferentially at [`End`](ShapeKind::End) tiles,
//! covering every coordinate exactly once. A renderer consumes the forest to
//! schedule when each tile lights up; this crate exposes data only and never
//! touches a drawing surface.
//!
//! ```
//! use std::num::NonZero;
//!
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! use mobius::{Forest, Generator, Grid};
//!
//! let mut grid = Grid::with_dims((NonZero::new(6).unwrap(), NonZero::new(4).unwrap()));
//! let mut generator = Generator::new(StdRng::seed_from_u64(7));
//! generator.fill_all(&mut grid, false).unwrap();
//!
//! let forest = Forest::compute(&grid, &mut StdRng::seed_from_u64(7));
//! assert_eq!(forest.len(), 24);
//! ```

pub use cell::Tile;
pub use generate::{GenerateFailure, Generator, MirrorAxis, MirrorFailure, ShapeWeights};
pub use grid::Grid;
pub use location::{Coord, Dimension, Location, Side};
pub use shape::{Border, Connectors, Requirement, Rotation, ShapeKind};
pub use traverse::{Forest, PathNode};

pub(crate) mod cell;
pub(crate) mod generate;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod shape;
pub mod traverse;
