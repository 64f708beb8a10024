use strum::VariantArray;

use crate::location::{Dimension, Location};

/// A quarter turn applied to a cell's facing direction.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Rotation {
    /// Up becomes Right, Right becomes Down, and so on.
    Clockwise,
    /// Up becomes Left, Left becomes Down, and so on.
    CounterClockwise,
}

/// The four directions a cell can face, in clockwise order.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Right => location.offset_by((1, 0)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
        }
    }

    /// Resolve the location this direction sees from `location` on a board `side` cells across.
    ///
    /// Returns `None` if the step leaves the board; a cell facing that way is a root.
    pub fn target_from(&self, location: Location, side: Dimension) -> Option<Location> {
        let ahead = self.attempt_from(location);
        // stepping off the top or left edge wraps to usize::MAX
        (ahead.0 < side.get() && ahead.1 < side.get()).then_some(ahead)
    }

    /// This direction turned by one quarter `rotation`, wrapping in both senses.
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let turned = match rotation {
            Rotation::Clockwise => self.index() + 1,
            Rotation::CounterClockwise => self.index() + Self::VARIANTS.len() - 1,
        };

        Self::VARIANTS[turned % Self::VARIANTS.len()]
    }

    // quarter turns clockwise from Up
    pub(crate) fn index(&self) -> usize {
        Self::VARIANTS.iter().position(|variant| variant == self).unwrap()
    }

    pub(crate) fn glyph(&self) -> char {
        match self {
            Self::Up => '^',
            Self::Right => '>',
            Self::Down => 'v',
            Self::Left => '<',
        }
    }
}
