//! Dual A* solver for the sliding-tile puzzle.
//!
//! The initial board and its twin are searched in lockstep. Exactly one of
//! the two can reach the goal, so whichever search dequeues a goal first
//! decides solvability without any parity computation.
//!
//! Key details:
//! - Search nodes live in a per-search arena; predecessor links are indices
//! - The frontier is a binary min-heap on `moves + manhattan`, ties FIFO
//! - A child equal to its grandparent is never enqueued

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::board::{Board, Neighbors};

/// Index of a node in its search arena.
type NodeId = usize;

/// Frontier entry: (priority, insertion sequence, node).
///
/// Wrapped in `Reverse` so the max-heap pops the smallest priority, and
/// among equal priorities the earliest insertion.
type FrontierEntry = Reverse<(usize, u64, NodeId)>;

/// Expansions between progress messages.
const PROGRESS_INTERVAL: usize = 100_000;

/// A board reached by the search, with its depth and predecessor.
struct SearchNode {
    board: Board,
    /// Slides from the search root.
    moves: usize,
    /// `None` only for the root.
    prev: Option<NodeId>,
}

impl SearchNode {
    #[inline]
    fn priority(&self) -> usize {
        self.moves + self.board.manhattan() as usize
    }
}

/// Outcome of advancing one search by a single dequeue.
enum Step {
    /// The dequeued node holds the goal board.
    Goal(NodeId),
    /// The dequeued node was expanded into the frontier.
    Expanded,
    /// The frontier was already empty.
    Exhausted,
}

/// One A* search tree and its frontier.
struct Search {
    /// Every node ever enqueued; the tree is dropped wholesale with the search.
    nodes: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
    /// Tie-breaker handed out to each enqueued node.
    sequence: u64,
    expanded: usize,
}

impl Search {
    fn new(root: Board) -> Self {
        let mut search = Self {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            sequence: 0,
            expanded: 0,
        };
        search.enqueue(SearchNode {
            board: root,
            moves: 0,
            prev: None,
        });
        search
    }

    fn enqueue(&mut self, node: SearchNode) {
        let id = self.nodes.len();
        self.frontier
            .push(Reverse((node.priority(), self.sequence, id)));
        self.sequence += 1;
        self.nodes.push(node);
    }

    /// Dequeues the best node and either reports it as the goal or expands it.
    fn step(&mut self) -> Step {
        let Some(Reverse((_, _, id))) = self.frontier.pop() else {
            return Step::Exhausted;
        };

        let node = &self.nodes[id];
        if node.board.is_goal() {
            return Step::Goal(id);
        }

        // sliding straight back to the parent never shortens a path
        let parent = node.prev.map(|prev| &self.nodes[prev].board);
        let children: Neighbors = node
            .board
            .neighbors()
            .into_iter()
            .filter(|child| Some(child) != parent)
            .collect();
        let moves = node.moves + 1;

        for board in children {
            self.enqueue(SearchNode {
                board,
                moves,
                prev: Some(id),
            });
        }
        self.expanded += 1;

        Step::Expanded
    }

    /// Boards from the root to `goal`, inclusive.
    fn path_to(&self, goal: NodeId) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[goal].moves + 1);
        let mut current = Some(goal);
        while let Some(id) = current {
            let node = &self.nodes[id];
            path.push(node.board.clone());
            current = node.prev;
        }
        path.reverse();
        path
    }
}

/// Work done by both searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes dequeued and expanded by the search on the initial board.
    pub expanded: usize,
    /// Nodes enqueued by the search on the initial board, root included.
    pub generated: usize,
    /// Nodes dequeued and expanded by the search on the twin.
    pub twin_expanded: usize,
    /// Nodes enqueued by the search on the twin, root included.
    pub twin_generated: usize,
}

/// Result of solving a board.
///
/// All the work happens in [`Solver::new`]; afterwards the solver only
/// reports what it found.
#[derive(Debug, Clone)]
pub struct Solver {
    /// Shortest path from the initial board to the goal, if one exists.
    solution: Option<Vec<Board>>,
    stats: SearchStats,
}

impl Solver {
    /// Runs the dual search on `initial` to completion.
    ///
    /// Both searches advance by one expansion per round, so an unsolvable
    /// board is detected in about the time its twin takes to solve.
    pub fn new(initial: Board) -> Self {
        debug!(
            "Solving {0}x{0} board (manhattan {1}, hamming {2})",
            initial.dimension(),
            initial.manhattan(),
            initial.hamming()
        );

        let twin = initial.twin();
        let mut search = Search::new(initial);
        let mut twin_search = Search::new(twin);

        let goal = loop {
            match search.step() {
                Step::Goal(id) => break Some(id),
                Step::Exhausted => break None,
                Step::Expanded => {}
            }
            if let Step::Goal(_) = twin_search.step() {
                break None;
            }

            if search.expanded % PROGRESS_INTERVAL == 0 {
                trace!(
                    "{} expansions, {} nodes in frontier",
                    search.expanded,
                    search.frontier.len()
                );
            }
        };

        let stats = SearchStats {
            expanded: search.expanded,
            generated: search.nodes.len(),
            twin_expanded: twin_search.expanded,
            twin_generated: twin_search.nodes.len(),
        };
        let solution = goal.map(|id| search.path_to(id));

        match &solution {
            Some(path) => debug!("Solved in {} moves ({:?})", path.len() - 1, stats),
            None => debug!("Twin reached the goal first, board is unsolvable ({:?})", stats),
        }

        Self { solution, stats }
    }

    /// Whether the initial board can reach the goal.
    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Length of a shortest solution, or `None` when unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.solution.as_ref().map(|path| path.len() - 1)
    }

    /// Boards from the initial board to the goal, inclusive.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// Consumes the solver, returning the solution path.
    pub fn into_solution(self) -> Option<Vec<Board>> {
        self.solution
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
