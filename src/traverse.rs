//! Extraction of the ordered spanning forest a renderer replays as the
//! reveal animation.

use itertools::Itertools;
use log::debug;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;
use strum::VariantArray;

use crate::cell::Tile;
use crate::grid::Grid;
use crate::location::{Location, Side};
use crate::shape::ShapeKind;

/// One revealed cell in a reveal tree: its coordinate and the neighbors first
/// reached through it, in side order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathNode {
    /// The grid coordinate this node reveals.
    pub location: Location,
    /// Subtrees rooted at the neighbors this node revealed, ordered
    /// North, East, South, West.
    pub children: Vec<PathNode>,
}

/// An ordered spanning forest of a grid's open-connector graph.
///
/// Every grid coordinate appears in exactly one node across the forest:
/// full coverage, no duplicates. A renderer walks each root on its own
/// timing, typically advancing one [`level`](Self::levels) per tick.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Forest {
    roots: Vec<PathNode>,
}

impl Forest {
    /// Extract the reveal forest of `grid`.
    ///
    /// Trees grow depth-first from [`End`](ShapeKind::End) tiles taken in
    /// shuffled order, so which End roots a connected component is randomized
    /// when it holds several. A row-major sweep then roots a tree at every
    /// coordinate no End reached: closed loops, and slots left unfilled
    /// (which become childless nodes). Roots are returned in creation order.
    pub fn compute<R: Rng>(grid: &Grid, rng: &mut R) -> Self {
        let mut visited = Array2::from_elem((grid.height(), grid.width()), false);

        let mut ends = grid.locations()
            .filter(|location| grid.get(*location).is_some_and(|tile| tile.kind() == ShapeKind::End))
            .collect_vec();
        ends.shuffle(rng);

        let mut roots = Vec::new();
        for end in ends {
            if !visited[end.as_index()] {
                roots.push(walk(grid, end, &mut visited));
            }
        }

        // closed loops have no End to grow from; sweep for leftovers
        for location in grid.locations() {
            if !visited[location.as_index()] {
                roots.push(walk(grid, location, &mut visited));
            }
        }

        debug!("reveal forest: {} root(s) over {} cell(s)", roots.len(), grid.width() * grid.height());

        Self { roots }
    }

    /// The root of every tree, in creation order: End-rooted trees first,
    /// then fallback roots in row-major discovery order.
    pub fn roots(&self) -> &[PathNode] {
        &self.roots
    }

    /// Total number of nodes, which equals the grid's cell count.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the forest has no trees, true only for a zero-cell grid
    /// (which [`Dimension`](crate::Dimension) rules out).
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Every node in the forest, preorder, tree by tree.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self.roots.iter().rev().collect(),
        }
    }

    /// Locations grouped by depth across all roots: `levels()[0]` is every
    /// root, `levels()[d]` every cell first reached after `d` steps. The
    /// grouping a renderer consumes when it reveals the network one level per
    /// fixed delay.
    pub fn levels(&self) -> Vec<Vec<Location>> {
        let mut levels = Vec::new();
        let mut frontier = self.roots.iter().collect_vec();

        while !frontier.is_empty() {
            levels.push(frontier.iter().map(|node| node.location).collect_vec());
            frontier = frontier.into_iter().flat_map(|node| node.children.iter()).collect_vec();
        }

        levels
    }
}

/// Preorder iterator over a [`Forest`]'s nodes.
pub struct Iter<'a> {
    stack: Vec<&'a PathNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PathNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Depth-first walk from `location`, attaching every unvisited neighbor
/// reachable through an open connector.
///
/// A well-formed grid never opens a connector toward the boundary or an
/// unfilled slot; if one does anyway the walk simply declines to step there,
/// since that is a generation invariant, not a traversal concern.
fn walk(grid: &Grid, location: Location, visited: &mut Array2<bool>) -> PathNode {
    visited[location.as_index()] = true;

    let mut node = PathNode {
        location,
        children: Vec::new(),
    };

    let open = grid.get(location).map(Tile::connectors).unwrap_or_default();
    for side in Side::VARIANTS {
        if !open.is_open(*side) {
            continue;
        }

        let neighbor = side.attempt_from(location);
        if grid.get(neighbor).is_none() || visited[neighbor.as_index()] {
            continue;
        }

        node.children.push(walk(grid, neighbor, visited));
    }

    node
}
