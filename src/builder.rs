use std::num::NonZero;
use std::ops::IndexMut;

use log::debug;
use ndarray::{Array2, AssignElem};
use petgraph::graphmap::DiGraphMap;
use rand::Rng;
use strum::VariantArray;

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::direction::Direction;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug)]
pub enum BuilderInvalidReason {
    /// A cell was specified outside the bounds implied by the builder's side length.
    FeatureOutOfBounds,
}

/// A builder for [`Board`]s.
///
/// Cells start out red and facing up; scramble them, pin individual cells, or
/// both, then call [`build`](Self::build). Builders mutate themselves while
/// building but can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct BoardBuilder {
    side: Dimension,
    cells: Array2<Cell>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_side(NonZero::new(5).unwrap())
    }
}

impl BoardBuilder {
    /// Construct a new builder for a board `side` cells across.
    pub fn with_side(side: Dimension) -> Self {
        Self {
            side,
            cells: Array2::from_shape_simple_fn((side.get(), side.get()), Cell::default),
            invalid_reasons: Default::default(),
        }
    }

    /// Give every cell a uniformly random color and direction drawn from `rng`.
    ///
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn scramble(&mut self, rng: &mut impl Rng) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.cells.map_inplace(|cell| {
            cell.assign_elem(Cell {
                color: Color::VARIANTS[rng.random_range(0..Color::VARIANTS.len())],
                direction: Direction::VARIANTS[rng.random_range(0..Direction::VARIANTS.len())],
            })
        });

        self
    }

    /// Point every cell in `direction`, keeping colors as they are.
    ///
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn face_all(&mut self, direction: Direction) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.cells.map_inplace(|cell| cell.direction = direction);

        self
    }

    /// Pin the cell at `location` to the given color and direction.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set_cell(&mut self, location: Location, color: Color, direction: Direction) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.side.get() || location.1 >= self.side.get() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell { color, direction });

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`], wiring the watcher
    /// relation and settling colors.
    ///
    /// Wiring adds one node per cell and one watcher edge per cell with a
    /// target. Settling then walks the cells in row-major order; each cell with
    /// a target copies its target's color and cascades, while roots keep the
    /// color they were given.
    ///
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        let mut board = Board {
            side: self.side,
            cells: self.cells.clone(),
            // naively allocate one watcher edge per cell, which usually isn't too far off
            watch: DiGraphMap::with_capacity(self.cells.len(), self.cells.len()),
        };

        for location in board.locations() {
            board.watch.add_node(location);
        }
        for location in board.locations() {
            board.attach(location);
        }

        for location in board.locations() {
            if let Some(target) = board.target(location) {
                board.cells[location.as_index()].color = board.cells[target.as_index()].color;
                board.cascade_from(location);
            }
        }

        let roots = board.locations().filter(|location| board.target(*location).is_none()).count();
        debug!("built {0}x{0} board with {1} roots", self.side, roots);

        Ok(board)
    }
}
