#![warn(missing_docs)]

//! # `chameleons`
//!
//! The engine behind a small color-matching puzzle.
//! Every cell on a square board shows one of seven colors and faces one of four directions.
//! A cell watches the neighbor its direction points at and must always show that neighbor's color, so rotating a cell or recoloring a root ripples through everything transitively watching it.
//! The player wins once the whole board settles on a single color.
//!
//! Begin by building a board with a [`BoardBuilder`], usually scrambled from an [`Rng`](rand::Rng).
//! Drive it with [`rotate`](Board::rotate) and [`fill`](Board::fill), render it through its [`Display`](std::fmt::Display) impl or the per-cell queries, and poll [`is_solved`](Board::is_solved).
//! With the default `wasm` feature the `wasm` module wraps all of this in a `Game` object callable from JavaScript.
//!
//! # Internals
//! The board keeps its cells in a flat 2-D array and the watcher relation in a directed graph keyed by [`Location`]: an edge from B to A records that B currently watches A, so the watchers of A are exactly its incoming neighbors.
//! Rotating a cell re-wires at most one edge, then recoloring walks the watcher graph breadth-first, level by level.
//!
//! Nothing forbids cycles in the watcher graph; two cells rotated to face each other watch each other.
//! The walk therefore never assumes a tree: a watcher is expanded further only while its color still differs from the color being pushed, so a cycle member settles the first round it is reached and stops the walk the next time the cycle comes around.
//! That bounds every cascade to one recoloring per cell without a separate visited set.

pub use board::Board;
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use color::Color;
pub use direction::{Direction, Rotation};
pub use location::{Dimension, Location};

pub(crate) mod board;
pub(crate) mod builder;
pub(crate) mod cascade;
pub(crate) mod cell;
pub(crate) mod color;
pub(crate) mod direction;
pub(crate) mod location;
#[cfg(feature = "wasm")]
pub mod wasm;
