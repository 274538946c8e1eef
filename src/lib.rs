#![warn(missing_docs)]

//! # `taquin`
//!
//! An optimal solver for the [15-puzzle](https://en.wikipedia.org/wiki/15_puzzle) and other N-by-N sliding-tile puzzles.
//! Begin by building a [`Board`] from row-major tile values with [`Board::from_rows`], or generate one with [`Board::goal`] or [`Board::scrambled`].
//! Hand it to [`Solver::new`] to obtain the shortest sequence of blank swaps reaching the solved configuration.
//!
//! # Internals
//! The search is A* over whole board states.
//! Each [`Board`] caches its Hamming and Manhattan distances at construction; the Manhattan distance serves as the heuristic.
//! It is admissible (one swap changes one tile's distance by at most one) and consistent, so the first time the goal is popped from the frontier its cost is the true minimum, and no closed state is ever reopened.
//!
//! Search nodes live in an arena addressed by index, with parent links for path reconstruction.
//! The frontier is a binary heap ordered by f = g + manhattan, ties broken toward the smaller g.
//! Relaxing a frontier node (only ever toward a strictly smaller g) pushes a fresh heap entry; entries whose recorded g no longer matches their node are recognized as stale and dropped on pop.
//!
//! Unsolvable starts are rejected up front by the inversion-parity test in [`Board::is_solvable`], so the search itself only ever runs on boards that can reach the goal.

pub use board::{Board, BoardError};
pub use location::{Coord, Location};
pub use slide::Slide;
pub use solver::{SolveError, Solver};

pub(crate) mod board;
mod tests;
pub(crate) mod location;
pub(crate) mod slide;
pub(crate) mod solver;
