//! Greedy best-first search.

use crate::algorithms::common::{SearchEngine, SearchOutcome, Solution};
use crate::algorithms::node::{GbfsCost, SearchNode};
use crate::algorithms::search_space::SearchSpace;
use crate::grid::{Board, Position};
use crate::heuristic::Manhattan;
use crate::moves::expand_all;
use crate::statistics::SearchStatistics;
use tracing::{debug, trace};

/// Expands the open node closest to the goal by Manhattan distance.
///
/// A board is admitted to the open list only the first time it is seen;
/// later, possibly cheaper, routes to it are dropped. Paths found are
/// therefore not necessarily shortest.
#[derive(Debug, Clone)]
pub struct Gbfs {
    heuristic: Manhattan,
}

impl Gbfs {
    pub fn new(goal: Position) -> Self {
        Gbfs {
            heuristic: Manhattan::new(goal),
        }
    }
}

impl SearchEngine for Gbfs {
    type Cost = GbfsCost;

    fn name(&self) -> &'static str {
        "gbfs"
    }

    fn search(&mut self, start: &Board) -> (SearchOutcome<GbfsCost>, SearchStatistics) {
        let mut statistics = SearchStatistics::new(self.name());

        if self.heuristic.is_goal(start) {
            statistics.finalise_search();
            return (SearchOutcome::AlreadyAtGoal, statistics);
        }

        let root = SearchNode::<GbfsCost>::root(start.clone(), self.heuristic.evaluate(start));
        statistics.register_heuristic_value(root.cost().heuristic);
        let mut space = SearchSpace::new(root);

        let mut explored = 1;
        while let Some(current_id) = space.pop() {
            space.close(current_id);
            explored += 1;
            statistics.increment_expanded_nodes();

            let current = space.node(current_id);
            if self.heuristic.is_goal(current.board()) {
                debug!(explored, steps = current.cost().steps, "goal reached");
                statistics.finalise_search();
                return (
                    SearchOutcome::Solved(Solution::new(space, current_id, explored)),
                    statistics,
                );
            }

            let successors = expand_all(current_id, current, &self.heuristic);
            statistics.increment_generated_nodes(successors.len());
            debug!(
                node = current_id.index(),
                heuristic = current.cost().heuristic,
                successors = successors.len(),
                "expanding"
            );

            for successor in successors {
                if space.is_open(successor.board()) || space.is_closed(successor.board()) {
                    trace!(agent = %successor.board().agent(), "already seen");
                    statistics.increment_pruned_nodes();
                    continue;
                }
                statistics.register_heuristic_value(successor.cost().heuristic);
                statistics.increment_opened_nodes();
                space.open(successor);
            }
        }

        statistics.finalise_search();
        (SearchOutcome::NoSolution, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Direction;

    #[test]
    fn open_grid_follows_tie_break_order() {
        let board = Board::parse("A..\n...\n...").unwrap();
        let (outcome, stats) = Gbfs::new(Position::new(2, 2)).search(&board);

        let solution = outcome.solution().unwrap();
        assert_eq!(solution.path_cost(), 4);
        assert_eq!(solution.explored(), 6);
        assert_eq!(
            solution.moves(),
            vec![Direction::Right, Direction::Right, Direction::Down, Direction::Down]
        );
        assert_eq!(stats.expanded_nodes(), 5);
    }

    #[test]
    fn start_on_goal_expands_nothing() {
        let board = Board::parse("..\n.A").unwrap();
        let (outcome, stats) = Gbfs::new(Position::new(1, 1)).search(&board);
        assert!(matches!(outcome, SearchOutcome::AlreadyAtGoal));
        assert_eq!(stats.expanded_nodes(), 0);
    }

    #[test]
    fn walled_in_agent_has_no_solution() {
        let board = Board::parse("...\n.*.\n*A*\n.*.").unwrap();
        let (outcome, stats) = Gbfs::new(Position::new(0, 0)).search(&board);
        assert!(matches!(outcome, SearchOutcome::NoSolution));
        assert_eq!(stats.expanded_nodes(), 1);
        assert_eq!(stats.best_heuristic_value(), Some(3));
    }

    #[test]
    fn never_admits_a_seen_board_twice() {
        let board = Board::parse("A..\n...\n...").unwrap();
        let (outcome, _) = Gbfs::new(Position::new(2, 2)).search(&board);
        let space = outcome.solution().unwrap().search_space();

        let mut boards: Vec<String> = (0..space.len())
            .map(|index| space.node(crate::algorithms::NodeId::new(index)).board().to_string())
            .collect();
        let total = boards.len();
        boards.sort();
        boards.dedup();
        assert_eq!(boards.len(), total);
    }
}
