use strum::VariantArray;

use crate::location::Location;

/// One move of the blank: the blank swaps places with the tile one cell away
/// in the named direction.
///
/// The declaration order (up, down, left, right) is the order in which
/// [`Board::neighbors`](crate::Board::neighbors) generates successors, via
/// [`VariantArray`].
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Slide {
    Up,
    Down,
    Left,
    Right,
}

impl Slide {
    /// Attempt the step from `location` in the direction specified by `self`
    /// and return the resultant [`Location`].
    ///
    /// A step off the board wraps and will fail the subsequent array lookup.
    pub(crate) fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    /// Invert the direction specified by `self`.
    pub fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
