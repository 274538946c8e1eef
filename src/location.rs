use ndarray::Ix;

/// A grid coordinate along one axis.
pub type Coord = usize;

/// A cell position on a board.
///
/// Stored in `(x, y)` order, i.e. `Location(column, row)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    /// Index into the row-major backing array.
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Offset this location by `rhs`, specified in `(x, y)` order.
    ///
    /// Underflow wraps, so a step off the board produces an index the cell
    /// array will reject on lookup.
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
