use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use petgraph::graphmap::DiGraphMap;
use petgraph::Incoming;
use rand::Rng;

use crate::builder::BoardBuilder;
use crate::cascade;
use crate::cell::Cell;
use crate::color::Color;
use crate::direction::{Direction, Rotation};
use crate::location::{Dimension, Location};

// an edge B -> A records that B currently watches A
pub(crate) type WatchGraph = DiGraphMap<Location, ()>;

/// A square board of colored, direction-facing cells plus the watcher relation
/// between them.
///
/// Every cell whose direction resolves to another cell watches that target and
/// must show the target's color once the board is quiescent. [`Board`]s should
/// be built using a [`BoardBuilder`](crate::builder::BoardBuilder), which wires
/// the relation and settles colors before handing the board over.
pub struct Board {
    pub(crate) side: Dimension,
    pub(crate) cells: Array2<Cell>,
    pub(crate) watch: WatchGraph,
}

impl Board {
    /// Build a fresh `side` by `side` board scrambled from `rng`, already
    /// wired and settled.
    ///
    /// Shorthand for the [`BoardBuilder`] chain with no pinned cells, which
    /// cannot fail.
    pub fn scrambled(side: Dimension, rng: &mut impl Rng) -> Self {
        BoardBuilder::with_side(side).scramble(rng).build().unwrap()
    }

    /// The side length of this board.
    pub fn side(&self) -> Dimension {
        self.side
    }

    /// Every location on this board, in row-major order.
    pub fn locations(&self) -> impl Iterator<Item = Location> {
        let side = self.side.get();
        (0..side).cartesian_product(0..side).map(|(y, x)| Location(x, y))
    }

    /// The color of the cell at `location`, if it is on the board.
    pub fn color_at(&self, location: Location) -> Option<Color> {
        self.cells.get(location.as_index()).map(|cell| cell.color)
    }

    /// The facing direction of the cell at `location`, if it is on the board.
    pub fn direction_at(&self, location: Location) -> Option<Direction> {
        self.cells.get(location.as_index()).map(|cell| cell.direction)
    }

    /// The cell that the cell at `location` currently watches, if its direction
    /// stays on the board.
    ///
    /// A cell with no target is a root: nothing dictates its color, so it keeps
    /// whatever color it has until [`fill`](Self::fill)ed.
    pub fn target(&self, location: Location) -> Option<Location> {
        self.cells
            .get(location.as_index())
            .and_then(|cell| cell.direction.target_from(location, self.side))
    }

    /// Whether `location` holds a root cell: one whose arrow points off the
    /// board, leaving it [`fill`](Self::fill)able.
    ///
    /// Off-board locations are not roots.
    pub fn is_root(&self, location: Location) -> bool {
        self.cells.get(location.as_index()).is_some() && self.target(location).is_none()
    }

    /// The cells currently watching `location`, i.e. those whose target it is.
    pub fn watchers(&self, location: Location) -> impl Iterator<Item = Location> + '_ {
        self.watch.neighbors_directed(location, Incoming)
    }

    /// Whether every cell on the board shows one color.
    pub fn is_solved(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().map(|cell| cell.color).all_equal()
    }

    /// Turn the cell at `location` one quarter `rotation`, re-wire its watcher
    /// edge, and cascade the color it now sees.
    ///
    /// If the new direction resolves to a target, the cell copies the target's
    /// color even when it already matches; a cell turned to face off the board
    /// keeps its color. Either way the cascade runs seeded at the cell, so
    /// anything watching it settles too.
    ///
    /// # Panics
    /// Panics if `location` is not on the board.
    pub fn rotate(&mut self, location: Location, rotation: Rotation) {
        self.detach(location);
        let cell = &mut self.cells[location.as_index()];
        cell.direction = cell.direction.rotated(rotation);
        self.attach(location);

        if let Some(target) = self.target(location) {
            self.cells[location.as_index()].color = self.cells[target.as_index()].color;
        }

        self.cascade_from(location);
    }

    /// Recolor the root cell at `location` to `color` and cascade.
    ///
    /// Does nothing if the cell has a target or already shows `color`.
    ///
    /// # Panics
    /// Panics if `location` is not on the board.
    pub fn fill(&mut self, location: Location, color: Color) {
        if self.target(location).is_some() || self.cells[location.as_index()].color == color {
            return;
        }

        self.cells[location.as_index()].color = color;
        self.cascade_from(location);
    }

    /// The facing directions as a glyph grid (`^ > v <`), one row per line,
    /// the same shape the [`Display`] impl renders colors in.
    pub fn arrows(&self) -> String {
        self.glyphs(|cell| cell.direction.glyph())
    }

    pub(crate) fn attach(&mut self, location: Location) {
        if let Some(target) = self.target(location) {
            self.watch.add_edge(location, target, ());
        }
    }

    pub(crate) fn detach(&mut self, location: Location) {
        if let Some(target) = self.target(location) {
            self.watch.remove_edge(location, target);
        }
    }

    pub(crate) fn cascade_from(&mut self, source: Location) {
        cascade::run(&mut self.cells, &self.watch, source);
    }

    fn glyphs(&self, glyph: impl Fn(&Cell) -> char) -> String {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for cell in row {
                out.push(glyph(cell));
            }
            out.push('\n');
        }

        out
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyphs(|cell| cell.color.glyph()))
    }
}
