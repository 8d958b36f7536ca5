use crate::grid::Board;
use crate::moves::Direction;
use std::fmt;

/// Handle of a node inside a [`crate::algorithms::SearchSpace`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        NodeId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// Algorithm-specific cost bookkeeping carried by a search node.
pub trait NodeCost: Copy + fmt::Debug {
    /// Cost of the root node given its heuristic value.
    fn root(heuristic: u32) -> Self;

    /// Cost of a child one move further from the root.
    fn successor(&self, heuristic: u32) -> Self;

    /// Frontier key; smaller is expanded first.
    fn priority(&self) -> u32;

    /// Number of moves from the root.
    fn path_cost(&self) -> u32;
}

/// Greedy best-first costs. Only the heuristic orders the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GbfsCost {
    pub steps: u32,
    pub heuristic: u32,
}

impl NodeCost for GbfsCost {
    fn root(heuristic: u32) -> Self {
        GbfsCost {
            steps: 0,
            heuristic,
        }
    }

    fn successor(&self, heuristic: u32) -> Self {
        GbfsCost {
            steps: self.steps + 1,
            heuristic,
        }
    }

    fn priority(&self) -> u32 {
        self.heuristic
    }

    fn path_cost(&self) -> u32 {
        self.steps
    }
}

/// A* costs, `f = g + h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AStarCost {
    pub g: u32,
    pub h: u32,
    pub f: u32,
}

impl AStarCost {
    pub fn new(g: u32, h: u32) -> Self {
        AStarCost { g, h, f: g + h }
    }
}

impl NodeCost for AStarCost {
    fn root(heuristic: u32) -> Self {
        AStarCost::new(0, heuristic)
    }

    fn successor(&self, heuristic: u32) -> Self {
        AStarCost::new(self.g + 1, heuristic)
    }

    fn priority(&self) -> u32 {
        self.f
    }

    fn path_cost(&self) -> u32 {
        self.g
    }
}

/// A node in the search tree: a board snapshot, the move that produced it
/// and a handle to its parent.
///
/// Nodes compare equal when their boards match cell for cell; ancestry and
/// costs are ignored. Frontier order comes from [`SearchNode::priority`].
#[derive(Debug, Clone)]
pub struct SearchNode<C: NodeCost> {
    board: Board,
    parent: Option<NodeId>,
    operator: Option<Direction>,
    cost: C,
}

impl<C: NodeCost> SearchNode<C> {
    pub fn root(board: Board, heuristic: u32) -> Self {
        SearchNode {
            board,
            parent: None,
            operator: None,
            cost: C::root(heuristic),
        }
    }

    pub fn child(board: Board, parent: NodeId, operator: Direction, cost: C) -> Self {
        SearchNode {
            board,
            parent: Some(parent),
            operator: Some(operator),
            cost,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn operator(&self) -> Option<Direction> {
        self.operator
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    pub fn priority(&self) -> u32 {
        self.cost.priority()
    }
}

impl<C: NodeCost> PartialEq for SearchNode<C> {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl<C: NodeCost> Eq for SearchNode<C> {}
