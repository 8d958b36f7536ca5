use crate::grid::{Board, Position};

/// Manhattan distance from the agent to a fixed goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Manhattan {
    goal: Position,
}

impl Manhattan {
    pub fn new(goal: Position) -> Self {
        Manhattan { goal }
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn evaluate(&self, board: &Board) -> u32 {
        board.agent().distance(&self.goal)
    }

    pub fn is_goal(&self, board: &Board) -> bool {
        board.agent() == self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_goal() {
        let board = Board::parse("....\n.A..\n....").unwrap();
        assert_eq!(Manhattan::new(Position::new(2, 3)).evaluate(&board), 3);
        assert_eq!(Manhattan::new(Position::new(0, 0)).evaluate(&board), 2);
        assert_eq!(Manhattan::new(Position::new(1, 1)).evaluate(&board), 0);
    }

    #[test]
    fn goal_check_uses_agent_position() {
        let board = Board::parse("..\n.A").unwrap();
        assert!(Manhattan::new(Position::new(1, 1)).is_goal(&board));
        assert!(!Manhattan::new(Position::new(0, 1)).is_goal(&board));
    }
}
