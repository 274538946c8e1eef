use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use log::{debug, trace};
use thiserror::Error;

use crate::board::Board;

/// Reasons a [`Solver`] may fail.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum SolveError {
    /// The starting board cannot reach the solved configuration. Detected up
    /// front by the parity check; no search is attempted.
    #[error("board is unsolvable")]
    Unsolvable,
    /// The cancellation flag was observed set before the search finished.
    #[error("search was interrupted")]
    Interrupted,
    /// The frontier ran dry on a board that passed the solvability check.
    /// This should probably never happen.
    #[error("search frontier exhausted on a solvable board")]
    SearchExhausted,
}

// Arena-resident search node. `g` and `parent` may be rewritten while the
// node is on the frontier; once `closed` is set they are final.
struct SearchNode {
    board: Board,
    g: u32,
    parent: Option<usize>,
    closed: bool,
}

// Frontier entry with priority f = g + manhattan. The arena node is the
// source of truth; an entry whose `g` no longer matches its node has been
// superseded by a relaxation and is dropped on pop.
#[derive(Copy, Clone, Eq, PartialEq)]
struct FrontierEntry {
    f: u32,
    g: u32,
    node: usize,
}

impl Ord for FrontierEntry {
    // BinaryHeap is a max-heap, so compare reversed: the smallest f pops
    // first, ties going to the smaller g (the shallower node). The tie-break
    // decides which of several equal-length solutions is found.
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An optimal solution to a sliding-tile puzzle, found with A* over board
/// states under the Manhattan-distance heuristic.
///
/// Constructing a [`Solver`] runs the whole search; the accessors read the
/// finished answer. The heuristic is admissible and consistent, so the first
/// time the goal leaves the frontier its cost is the true minimum and no
/// closed node ever needs reopening.
pub struct Solver {
    sequence: Vec<Board>,
}

impl Solver {
    /// Solve `initial`, returning the finished [`Solver`] or a [`SolveError`]
    /// explaining why no solution exists.
    ///
    /// A board that is already solved yields a zero-move solution without
    /// searching.
    pub fn new(initial: Board) -> Result<Self, SolveError> {
        Self::search(initial, None)
    }

    /// Like [`Solver::new`], but polls `cancel` once per expansion and bails
    /// out with [`SolveError::Interrupted`] once it reads `true`.
    ///
    /// There is no pattern-database pruning, so large boards can blow up;
    /// this is the knob for bounding runtime from another thread.
    pub fn with_cancellation(initial: Board, cancel: &AtomicBool) -> Result<Self, SolveError> {
        Self::search(initial, Some(cancel))
    }

    /// The number of blank swaps in the optimal solution.
    pub fn moves(&self) -> usize {
        self.sequence.len() - 1
    }

    /// The boards along the optimal solution, from the starting configuration
    /// to the goal. Consecutive entries differ by exactly one blank swap.
    pub fn solution(&self) -> &[Board] {
        &self.sequence
    }

    /// Consume the solver and take ownership of the solution sequence.
    pub fn into_solution(self) -> Vec<Board> {
        self.sequence
    }

    fn search(initial: Board, cancel: Option<&AtomicBool>) -> Result<Self, SolveError> {
        if !initial.is_solvable() {
            return Err(SolveError::Unsolvable);
        }
        if initial.is_goal() {
            return Ok(Self { sequence: vec![initial] });
        }

        let mut arena: Vec<SearchNode> = Vec::new();
        let mut index: HashMap<Board, usize> = HashMap::new();
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();

        frontier.push(FrontierEntry { f: initial.manhattan(), g: 0, node: 0 });
        index.insert(initial.clone(), 0);
        arena.push(SearchNode { board: initial, g: 0, parent: None, closed: false });

        let mut expanded = 0usize;

        while let Some(entry) = frontier.pop() {
            if let Some(flag) = cancel {
                if flag.load(AtomicOrdering::Relaxed) {
                    return Err(SolveError::Interrupted);
                }
            }

            let current = entry.node;
            if arena[current].closed || entry.g != arena[current].g {
                // stale entry, superseded since it was pushed
                continue;
            }

            if arena[current].board.is_goal() {
                debug!(
                    "goal popped at depth {} after {} expansions, {} states discovered",
                    arena[current].g,
                    expanded,
                    arena.len()
                );
                return Ok(Self { sequence: Self::reconstruct(&arena, current) });
            }

            arena[current].closed = true;
            expanded += 1;
            let tentative = arena[current].g + 1;

            let board = arena[current].board.clone();
            for neighbor in board.neighbors() {
                match index.get(&neighbor).copied() {
                    // its optimal cost is already final
                    Some(known) if arena[known].closed => {}
                    Some(known) => {
                        // Relax only toward a strictly smaller cost; an equal
                        // or larger tentative g leaves the node untouched.
                        if tentative < arena[known].g {
                            trace!(
                                "relaxing node {known}: g {} -> {tentative}",
                                arena[known].g
                            );
                            arena[known].g = tentative;
                            arena[known].parent = Some(current);
                            frontier.push(FrontierEntry {
                                f: tentative + arena[known].board.manhattan(),
                                g: tentative,
                                node: known,
                            });
                        }
                    }
                    None => {
                        let f = tentative + neighbor.manhattan();
                        let discovered = arena.len();
                        index.insert(neighbor.clone(), discovered);
                        arena.push(SearchNode {
                            board: neighbor,
                            g: tentative,
                            parent: Some(current),
                            closed: false,
                        });
                        frontier.push(FrontierEntry { f, g: tentative, node: discovered });
                    }
                }
            }
        }

        // A solvable board always reaches the goal under an admissible
        // heuristic; getting here means the relaxation logic is broken.
        Err(SolveError::SearchExhausted)
    }

    // Walk parent links from the goal back to the root, then flip the chain
    // into start-to-goal order.
    fn reconstruct(arena: &[SearchNode], goal: usize) -> Vec<Board> {
        let mut sequence = Vec::new();
        let mut walk = Some(goal);
        while let Some(id) = walk {
            sequence.push(arena[id].board.clone());
            walk = arena[id].parent;
        }
        sequence.reverse();
        sequence
    }
}
