use crate::algorithms::common::{SearchEngine, SearchOutcome, Solution};
use crate::algorithms::node::{AStarCost, SearchNode};
use crate::algorithms::search_space::SearchSpace;
use crate::grid::{Board, Position};
use crate::heuristic::Manhattan;
use crate::moves::expand_all;
use crate::statistics::SearchStatistics;
use tracing::{debug, trace};

/// A* over agent moves with unit step cost and the Manhattan heuristic.
///
/// Closed boards are never reopened. An open board only gets another entry
/// when the new route has a strictly smaller `f`; the older entry stays in
/// the open list and is expanded again if it is ever popped.
#[derive(Debug, Clone)]
pub struct AStar {
    heuristic: Manhattan,
}

impl AStar {
    pub fn new(goal: Position) -> Self {
        AStar {
            heuristic: Manhattan::new(goal),
        }
    }
}

/// Admits `successor` unless an open entry with the same board already has
/// an `f` no larger than its own.
fn open_check(space: &SearchSpace<AStarCost>, successor: &SearchNode<AStarCost>) -> bool {
    match space.best_open_priority(successor.board()) {
        Some(best_f) => successor.cost().f < best_f,
        None => true,
    }
}

impl SearchEngine for AStar {
    type Cost = AStarCost;

    fn name(&self) -> &'static str {
        "a_star"
    }

    fn search(&mut self, start: &Board) -> (SearchOutcome<AStarCost>, SearchStatistics) {
        let mut statistics = SearchStatistics::new(self.name());

        if self.heuristic.is_goal(start) {
            statistics.finalise_search();
            return (SearchOutcome::AlreadyAtGoal, statistics);
        }

        let root = SearchNode::<AStarCost>::root(start.clone(), self.heuristic.evaluate(start));
        statistics.register_heuristic_value(root.cost().h);
        let mut space = SearchSpace::new(root);

        let mut explored = 1;
        while let Some(current_id) = space.pop() {
            space.close(current_id);
            explored += 1;
            statistics.increment_expanded_nodes();

            let current = space.node(current_id);
            if self.heuristic.is_goal(current.board()) {
                debug!(explored, g = current.cost().g, "goal reached");
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
                g = current.cost().g,
                f = current.cost().f,
                successors = successors.len(),
                "expanding"
            );

            for successor in successors {
                if space.is_closed(successor.board()) {
                    trace!(agent = %successor.board().agent(), "already closed");
                    statistics.increment_pruned_nodes();
                    continue;
                }
                if !open_check(&space, &successor) {
                    trace!(
                        agent = %successor.board().agent(),
                        f = successor.cost().f,
                        "open entry is at least as good"
                    );
                    statistics.increment_pruned_nodes();
                    continue;
                }
                statistics.register_heuristic_value(successor.cost().h);
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
    fn open_grid_finds_shortest_path() {
        let board = Board::parse("A..\n...\n...").unwrap();
        let (outcome, stats) = AStar::new(Position::new(2, 2)).search(&board);

        let solution = outcome.solution().unwrap();
        assert_eq!(solution.path_cost(), 4);
        assert_eq!(solution.explored(), 10);
        assert_eq!(
            solution.moves(),
            vec![Direction::Right, Direction::Right, Direction::Down, Direction::Down]
        );
        assert_eq!(solution.goal_node().cost(), AStarCost { g: 4, h: 0, f: 4 });
        assert_eq!(stats.expanded_nodes(), 9);
    }

    #[test]
    fn start_on_goal_expands_nothing() {
        let board = Board::parse("A.").unwrap();
        let (outcome, stats) = AStar::new(Position::new(0, 0)).search(&board);
        assert!(matches!(outcome, SearchOutcome::AlreadyAtGoal));
        assert_eq!(stats.expanded_nodes(), 0);
    }

    #[test]
    fn walled_in_agent_has_no_solution() {
        let board = Board::parse("*.\nA*").unwrap();
        let (outcome, stats) = AStar::new(Position::new(0, 1)).search(&board);
        assert!(matches!(outcome, SearchOutcome::NoSolution));
        assert_eq!(stats.best_heuristic_value(), Some(2));
    }

    #[test]
    fn open_check_rejects_equal_or_worse_duplicates() {
        let start = Board::parse("A..").unwrap();
        let moved = Board::parse(".A.").unwrap();
        let mut space = SearchSpace::new(SearchNode::<AStarCost>::root(start, 2));
        let root = space.root_id();
        let child = |board: &Board, g| {
            SearchNode::child(board.clone(), root, Direction::Right, AStarCost::new(g, 1))
        };
        space.open(child(&moved, 3));

        assert!(!open_check(&space, &child(&moved, 4)));
        assert!(!open_check(&space, &child(&moved, 3)));
        assert!(open_check(&space, &child(&moved, 1)));

        let unseen = Board::parse("..A").unwrap();
        assert!(open_check(&space, &child(&unseen, 9)));
    }
}
