use crate::algorithms::{NodeCost, NodeId, SearchNode};
use crate::grid::{Board, Position};
use crate::heuristic::Manhattan;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// Generation order. Frontier ties fall back to this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// The neighbouring position, or `None` when it would leave the board
    /// through row or column zero.
    pub fn step(self, pos: Position) -> Option<Position> {
        match self {
            Direction::Up => pos.row.checked_sub(1).map(|row| Position::new(row, pos.col)),
            Direction::Left => pos.col.checked_sub(1).map(|col| Position::new(pos.row, col)),
            Direction::Right => Some(Position::new(pos.row, pos.col + 1)),
            Direction::Down => Some(Position::new(pos.row + 1, pos.col)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Moves the agent one cell in `direction`.
///
/// Returns a fresh board with the agent and destination swapped, or `None`
/// when the destination is off the board or not free.
pub fn expand(board: &Board, direction: Direction) -> Option<Board> {
    let to = direction.step(board.agent())?;
    if !board.is_free(to) {
        return None;
    }
    Some(board.with_agent_at(to))
}

/// Builds a child node for every legal move from `parent`, in
/// [`Direction::ALL`] order.
pub fn expand_all<C: NodeCost>(
    parent_id: NodeId,
    parent: &SearchNode<C>,
    heuristic: &Manhattan,
) -> Vec<SearchNode<C>> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| {
            expand(parent.board(), direction).map(|board| {
                let cost = parent.cost().successor(heuristic.evaluate(&board));
                SearchNode::child(board, parent_id, direction, cost)
            })
        })
        .collect()
}
