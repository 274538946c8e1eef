use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;
use strum::VariantArray;
use thiserror::Error;

use crate::location::{Coord, Location};
use crate::slide::Slide;

/// Reasons a [`Board`] cannot be built or read.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum BoardError {
    /// The rows handed to [`Board::from_rows`] do not form a square grid.
    #[error("rows do not form a square grid")]
    NotSquare,
    /// A cell value is outside `0..n * n`.
    #[error("tile value {0} is outside the range of an n-by-n board")]
    TileOutOfRange(u32),
    /// A cell value appears more than once.
    #[error("tile value {0} appears more than once")]
    DuplicateTile(u32),
    /// A read was attempted outside `[0, n)` on either axis.
    #[error("cell at row {0}, column {1} is outside the board")]
    OutOfRange(Coord, Coord),
}

/// One configuration of an n-by-n sliding-tile puzzle.
///
/// Cells hold the values `0..n * n`, each exactly once, with `0` as the blank.
/// Tile `v` belongs at row `(v - 1) / n`, column `(v - 1) % n`, and the blank
/// belongs at the last cell.
///
/// A board never mutates once built. Construction copies the tile values in
/// and computes [`hamming`](Self::hamming), [`manhattan`](Self::manhattan),
/// and the blank location eagerly in one scan, so the heuristic reads the
/// solver performs on every frontier operation are O(1).
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Array2<u32>,
    blank: Location,
    hamming: u32,
    manhattan: u32,
}

impl Board {
    /// Build a board from row-major `rows` of tile values.
    ///
    /// Rejects input whose row count and row lengths disagree, values outside
    /// `0..n * n`, and repeated values (which also catches a missing blank).
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, BoardError> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return Err(BoardError::NotSquare);
        }

        let flat = rows.into_iter().flatten().collect_vec();
        let mut seen = vec![false; flat.len()];
        for &value in &flat {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::TileOutOfRange(value))?;
            if *slot {
                return Err(BoardError::DuplicateTile(value));
            }
            *slot = true;
        }

        Ok(Self::assemble(Array2::from_shape_vec((n, n), flat).unwrap()))
    }

    /// The solved configuration of side `n`: `1, 2, ..` in row-major order
    /// with the blank in the last cell.
    pub fn goal(n: usize) -> Self {
        let cells = n * n;
        Self::assemble(Array2::from_shape_fn((n, n), |(row, col)| {
            ((row * n + col + 1) % cells) as u32
        }))
    }

    /// A random solvable configuration of side `n` (`n >= 1`).
    ///
    /// Reshuffles until the solvability parity works out; exactly half of all
    /// permutations qualify, so the retry loop is short.
    pub fn scrambled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut flat = (0..(n * n) as u32).collect_vec();
        loop {
            flat.shuffle(rng);
            let board = Self::assemble(Array2::from_shape_vec((n, n), flat.clone()).unwrap());
            if board.is_solvable() {
                return board;
            }
        }
    }

    // Single scan computing the cached heuristics and the blank location.
    fn assemble(tiles: Array2<u32>) -> Self {
        let n = tiles.nrows();
        let mut hamming = 0;
        let mut manhattan = 0;
        let mut blank = Location(0, 0);

        for ((row, col), &value) in tiles.indexed_iter() {
            if value == 0 {
                blank = Location::from((row, col));
                continue;
            }
            let goal_row = (value as usize - 1) / n;
            let goal_col = (value as usize - 1) % n;
            if (row, col) != (goal_row, goal_col) {
                hamming += 1;
                manhattan += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
            }
        }

        Self { tiles, blank, hamming, manhattan }
    }

    /// The side length: the number of cells per row (equivalently, per
    /// column), *not* the total cell count.
    pub fn side(&self) -> usize {
        self.tiles.nrows()
    }

    /// Bounds-checked read of the value at (`row`, `col`).
    pub fn tile_at(&self, row: Coord, col: Coord) -> Result<u32, BoardError> {
        self.tiles
            .get((row, col))
            .copied()
            .ok_or(BoardError::OutOfRange(row, col))
    }

    /// The number of non-blank tiles not on their goal cell. Cached at
    /// construction.
    pub fn hamming(&self) -> u32 {
        self.hamming
    }

    /// The sum over non-blank tiles of the taxicab distance from each tile to
    /// its goal cell. Cached at construction.
    ///
    /// One blank swap changes one tile's distance by exactly one, so this
    /// never overestimates the moves remaining; that admissibility is what
    /// makes the solver's answer optimal.
    pub fn manhattan(&self) -> u32 {
        self.manhattan
    }

    /// Whether this board is the solved configuration.
    pub fn is_goal(&self) -> bool {
        self.manhattan == 0
    }

    /// Whether the solved configuration is reachable from this board.
    ///
    /// An inversion is a pair of non-blank values out of sorted order in the
    /// row-major scan. On odd boards every blank swap preserves inversion
    /// parity; on even boards each vertical swap flips it along with the
    /// blank's row parity. The rule: odd `n` is solvable iff the inversion
    /// count is even, even `n` iff the inversion count plus the blank's row
    /// index is odd.
    pub fn is_solvable(&self) -> bool {
        let values = self.tiles.iter().filter(|&&value| value != 0).collect_vec();
        let inversions = values
            .iter()
            .tuple_combinations()
            .filter(|(earlier, later)| earlier > later)
            .count();

        match self.side() % 2 {
            1 => inversions % 2 == 0,
            _ => (inversions + self.blank.1) % 2 == 1,
        }
    }

    /// The board produced by swapping the blank with the tile one cell away
    /// in `direction`, or [`None`] when the blank sits on that edge of the
    /// board.
    ///
    /// `self` is untouched; the result is a fresh board with its own caches.
    pub fn slide(&self, direction: Slide) -> Option<Self> {
        let from = direction.attempt_from(self.blank);
        let moved = *self.tiles.get(from.as_index())?;

        let mut tiles = self.tiles.clone();
        tiles[self.blank.as_index()] = moved;
        tiles[from.as_index()] = 0;
        Some(Self::assemble(tiles))
    }

    /// All boards one blank swap away, lazily, in the fixed order up, down,
    /// left, right.
    ///
    /// A blank in a corner yields 2 successors, on a non-corner edge 3, in
    /// the interior 4.
    pub fn neighbors(&self) -> impl Iterator<Item = Self> + '_ {
        Slide::VARIANTS.iter().filter_map(|direction| self.slide(*direction))
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.side().hash(state);
        for value in self.tiles.iter() {
            value.hash(state);
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.side())?;
        for row in self.tiles.rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}
