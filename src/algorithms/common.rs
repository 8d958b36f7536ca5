use crate::algorithms::node::{NodeCost, NodeId, SearchNode};
use crate::algorithms::search_space::SearchSpace;
use crate::grid::{Board, Position};
use crate::moves::Direction;
use crate::statistics::SearchStatistics;

/// An informed search over agent moves on a static board.
pub trait SearchEngine {
    type Cost: NodeCost;

    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Searches from `start` until the goal is reached or the frontier is
    /// exhausted.
    fn search(&mut self, start: &Board) -> (SearchOutcome<Self::Cost>, SearchStatistics);
}

/// One move of a solution: the direction taken and where the agent ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep {
    pub direction: Direction,
    pub position: Position,
}

#[derive(Debug)]
pub enum SearchOutcome<C: NodeCost> {
    /// The agent started on the goal; nothing was expanded.
    AlreadyAtGoal,
    /// The frontier emptied before the goal was reached.
    NoSolution,
    Solved(Solution<C>),
}

impl<C: NodeCost> SearchOutcome<C> {
    pub fn solution(&self) -> Option<&Solution<C>> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

/// The goal node of a successful search along with the arena holding its
/// ancestors.
#[derive(Debug)]
pub struct Solution<C: NodeCost> {
    space: SearchSpace<C>,
    goal: NodeId,
    explored: usize,
}

impl<C: NodeCost> Solution<C> {
    pub(crate) fn new(space: SearchSpace<C>, goal: NodeId, explored: usize) -> Self {
        Solution {
            space,
            goal,
            explored,
        }
    }

    pub fn goal_node(&self) -> &SearchNode<C> {
        self.space.node(self.goal)
    }

    /// Frontier pops performed, plus one.
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Moves from the start to the goal.
    pub fn path_cost(&self) -> u32 {
        self.goal_node().cost().path_cost()
    }

    pub fn path(&self) -> Vec<PathStep> {
        self.space.extract_path(self.goal)
    }

    pub fn moves(&self) -> Vec<Direction> {
        self.path().into_iter().map(|step| step.direction).collect()
    }

    pub fn search_space(&self) -> &SearchSpace<C> {
        &self.space
    }
}
