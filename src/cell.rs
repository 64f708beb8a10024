use crate::color::Color;
use crate::direction::Direction;

/// One square of the board: the color it shows and the way it faces.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) color: Color,
    pub(crate) direction: Direction,
}
