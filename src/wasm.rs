//! JavaScript bindings: a [`Game`] object owning one board and the session
//! state a page needs around it.
//!
//! Positions, colors, and directions cross the boundary as plain numbers and
//! strings; colors travel as the CSS names [`palette`](Game::palette) lists.

use std::num::NonZero;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use strum::VariantArray;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::color::Color;
use crate::direction::Rotation;
use crate::location::Location;

/// One playing session: a board plus a move counter.
#[wasm_bindgen]
pub struct Game {
    board: Board,
    moves: u32,
}

#[wasm_bindgen]
impl Game {
    /// Build a fresh `side` by `side` board, scrambled deterministically from `seed`.
    #[wasm_bindgen(constructor)]
    pub fn new(side: usize, seed: u64) -> Result<Game, JsError> {
        Ok(Game { board: scrambled(side, seed)?, moves: 0 })
    }

    /// Replace the board with a fresh scramble from `seed` and zero the move counter.
    pub fn reset(&mut self, seed: u64) -> Result<(), JsError> {
        self.board = scrambled(self.board.side().get(), seed)?;
        self.moves = 0;
        Ok(())
    }

    /// The side length of the board.
    pub fn side(&self) -> usize {
        self.board.side().get()
    }

    /// Moves made since the board was last built.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Turn the cell at `(x, y)` one quarter turn and count the move.
    pub fn rotate(&mut self, x: usize, y: usize, clockwise: bool) -> Result<(), JsError> {
        let location = self.checked(x, y)?;
        let rotation = if clockwise { Rotation::Clockwise } else { Rotation::CounterClockwise };

        self.board.rotate(location, rotation);
        self.moves += 1;
        Ok(())
    }

    /// Recolor the root cell at `(x, y)`.
    ///
    /// Like [`Board::fill`], silently does nothing when the cell has a target
    /// or already shows `color`.
    pub fn fill(&mut self, x: usize, y: usize, color: &str) -> Result<(), JsError> {
        let location = self.checked(x, y)?;
        let color = Color::from_str(color)
            .map_err(|_| JsError::new(&format!("unknown color {:?}", color)))?;

        self.board.fill(location, color);
        Ok(())
    }

    /// The CSS color name shown at `(x, y)`.
    pub fn color_at(&self, x: usize, y: usize) -> Result<String, JsError> {
        let location = self.checked(x, y)?;
        Ok(self.board.color_at(location).map(|color| color.css_name().to_owned()).unwrap())
    }

    /// The facing of the cell at `(x, y)`, in quarter turns clockwise from up.
    pub fn direction_at(&self, x: usize, y: usize) -> Result<u32, JsError> {
        let location = self.checked(x, y)?;
        Ok(self.board.direction_at(location).map(|direction| direction.index() as u32).unwrap())
    }

    /// Whether the cell at `(x, y)` is a root, i.e. fillable.
    pub fn is_root(&self, x: usize, y: usize) -> Result<bool, JsError> {
        let location = self.checked(x, y)?;
        Ok(self.board.is_root(location))
    }

    /// Whether the whole board shows one color.
    pub fn solved(&self) -> bool {
        self.board.is_solved()
    }

    /// The selectable palette, as CSS color names in order.
    pub fn palette() -> js_sys::Array {
        Color::VARIANTS.iter().map(|color| JsValue::from_str(color.css_name())).collect()
    }
}

impl Game {
    fn checked(&self, x: usize, y: usize) -> Result<Location, JsError> {
        let location = Location(x, y);
        match self.board.color_at(location) {
            Some(_) => Ok(location),
            None => Err(JsError::new(&format!("({}, {}) is off the board", x, y))),
        }
    }
}

fn scrambled(side: usize, seed: u64) -> Result<Board, JsError> {
    let side = NonZero::new(side).ok_or_else(|| JsError::new("side must be nonzero"))?;

    Ok(Board::scrambled(side, &mut SmallRng::seed_from_u64(seed)))
}
