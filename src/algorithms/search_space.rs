use crate::algorithms::common::PathStep;
use crate::algorithms::node::{NodeCost, NodeId, SearchNode};
use crate::grid::Board;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier key. `BinaryHeap` is a max-heap, so `Ord` is reversed.
///
/// Ties on priority fall back to insertion order, which pops exactly what a
/// stable ascending sort of the open list followed by taking the first
/// element would.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    priority: u32,
    order: u64,
    node: NodeId,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Owns every node generated during one search together with the open and
/// closed bookkeeping.
///
/// Nodes live in an arena and refer to their parent by [`NodeId`], so the
/// ancestry of any node stays available after the search finishes.
/// Membership tests are by board contents.
#[derive(Debug)]
pub struct SearchSpace<C: NodeCost> {
    nodes: Vec<SearchNode<C>>,
    frontier: BinaryHeap<FrontierEntry>,
    /// Priorities of the open entries for each board, oldest first. Entries
    /// for one board are only ever added with a smaller priority than those
    /// already open, so the last one is always the next to be popped.
    open: FxHashMap<Board, Vec<u32>>,
    closed: FxHashSet<Board>,
    next_order: u64,
}

impl<C: NodeCost> SearchSpace<C> {
    /// Creates the space with `root` as the only open node.
    pub fn new(root: SearchNode<C>) -> Self {
        let mut space = SearchSpace {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            open: FxHashMap::default(),
            closed: FxHashSet::default(),
            next_order: 0,
        };
        space.open(root);
        space
    }

    pub fn root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Stores `node` in the arena and appends it to the open list.
    pub fn open(&mut self, node: SearchNode<C>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        let priority = node.priority();
        self.open
            .entry(node.board().clone())
            .or_default()
            .push(priority);
        self.frontier.push(FrontierEntry {
            priority,
            order: self.next_order,
            node: id,
        });
        self.next_order += 1;
        self.nodes.push(node);
        id
    }

    /// Removes and returns the open node with the smallest priority, the
    /// earliest inserted one on ties.
    pub fn pop(&mut self) -> Option<NodeId> {
        let entry = self.frontier.pop()?;
        let board = self.nodes[entry.node.index()].board();

        let mut now_empty = false;
        if let Some(priorities) = self.open.get_mut(board) {
            let popped = priorities.pop();
            debug_assert_eq!(popped, Some(entry.priority));
            now_empty = priorities.is_empty();
        }
        if now_empty {
            self.open.remove(board);
        }
        Some(entry.node)
    }

    pub fn close(&mut self, id: NodeId) {
        let board = self.nodes[id.index()].board().clone();
        self.closed.insert(board);
    }

    pub fn is_open(&self, board: &Board) -> bool {
        self.open.contains_key(board)
    }

    /// Smallest priority among open entries holding `board`.
    pub fn best_open_priority(&self, board: &Board) -> Option<u32> {
        self.open.get(board).and_then(|priorities| priorities.last().copied())
    }

    pub fn is_closed(&self, board: &Board) -> bool {
        self.closed.contains(board)
    }

    pub fn node(&self, id: NodeId) -> &SearchNode<C> {
        &self.nodes[id.index()]
    }

    /// Number of nodes ever generated, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn open_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Walks parent links from `goal` back to the root and returns the moves
    /// in start-to-goal order.
    pub fn extract_path(&self, goal: NodeId) -> Vec<PathStep> {
        let mut steps = vec![];
        let mut current = self.node(goal);
        while let (Some(parent), Some(direction)) = (current.parent(), current.operator()) {
            steps.push(PathStep {
                direction,
                position: current.board().agent(),
            });
            current = self.node(parent);
        }
        steps.reverse();
        steps
    }
}
