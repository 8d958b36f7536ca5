use crate::algorithms::{AStar, Gbfs, NodeCost, PathStep, SearchEngine, SearchOutcome};
use crate::config::Algorithm;
use crate::environment::Maze;
use crate::grid::Board;
use crate::statistics::SearchStatistics;
use pathfinding::prelude::astar;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    AlreadyAtGoal,
    NoSolution,
    Solved,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RunStatus::AlreadyAtGoal => "at goal",
            RunStatus::NoSolution => "no solution",
            RunStatus::Solved => "solved",
        };
        f.write_str(text)
    }
}

/// What one engine produced on one maze, detached from its search space.
#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    pub name: &'static str,
    pub status: RunStatus,
    /// Frontier pops plus one; zero unless solved
    pub explored: usize,
    pub path_cost: Option<u32>,
    pub path: Vec<PathStep>,
    pub final_board: Option<Board>,
    pub statistics: SearchStatistics,
    pub elapsed: Duration,
}

impl AlgorithmResult {
    pub fn from_outcome<C: NodeCost>(
        name: &'static str,
        outcome: &SearchOutcome<C>,
        statistics: SearchStatistics,
        elapsed: Duration,
    ) -> Self {
        let (status, explored, path_cost, path, final_board) = match outcome {
            SearchOutcome::AlreadyAtGoal => (RunStatus::AlreadyAtGoal, 0, None, vec![], None),
            SearchOutcome::NoSolution => (RunStatus::NoSolution, 0, None, vec![], None),
            SearchOutcome::Solved(solution) => (
                RunStatus::Solved,
                solution.explored(),
                Some(solution.path_cost()),
                solution.path(),
                Some(solution.goal_node().board().clone()),
            ),
        };

        AlgorithmResult {
            name,
            status,
            explored,
            path_cost,
            path,
            final_board,
            statistics,
            elapsed,
        }
    }

    /// Whether the path found is as short as `reference`.
    pub fn is_optimal(&self, reference: Option<usize>) -> bool {
        match (self.path_cost, reference) {
            (Some(cost), Some(best)) => cost as usize == best,
            _ => false,
        }
    }
}

pub fn run_engine<E: SearchEngine>(engine: &mut E, maze: &Maze) -> AlgorithmResult {
    let started = Instant::now();
    let (outcome, statistics) = engine.search(&maze.board);
    let elapsed = started.elapsed();
    AlgorithmResult::from_outcome(engine.name(), &outcome, statistics, elapsed)
}

/// Runs the selected engine, or every engine for [`Algorithm::All`], on the
/// same maze.
pub fn run_algorithm(algorithm: Algorithm, maze: &Maze) -> Vec<AlgorithmResult> {
    let mut results = Vec::new();
    if matches!(algorithm, Algorithm::Gbfs | Algorithm::All) {
        results.push(run_engine(&mut Gbfs::new(maze.goal), maze));
    }
    if matches!(algorithm, Algorithm::AStar | Algorithm::All) {
        results.push(run_engine(&mut AStar::new(maze.goal), maze));
    }
    for result in &results {
        info!(
            engine = result.name,
            status = %result.status,
            explored = result.explored,
            path_cost = result.path_cost,
        );
    }
    results
}

/// Shortest move count from the agent to the goal, computed independently of
/// the engines above.
pub fn reference_path_length(maze: &Maze) -> Option<usize> {
    let board = &maze.board;
    let goal = maze.goal;
    astar(
        &board.agent(),
        |p| board.neighbors(*p).into_iter().map(|n| (n, 1)),
        |p| p.distance(&goal),
        |p| *p == goal,
    )
    .map(|(_, cost)| cost as usize)
}

pub fn print_comparison_results(results: &[AlgorithmResult], reference: Option<usize>) {
    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    println!();
    println!(
        "{:<10} {:<12} {:<10} {:<10} {:<10} {:<10} {:<12}",
        "Algorithm", "Status", "Explored", "Cost", "Optimal", "Pruned", "Time"
    );
    println!("{}", "-".repeat(78));

    for result in results {
        let cost = result
            .path_cost
            .map_or_else(|| "-".to_string(), |cost| cost.to_string());
        let optimal = match reference {
            Some(best) => best.to_string(),
            None => "-".to_string(),
        };
        println!(
            "{:<10} {:<12} {:<10} {:<10} {:<10} {:<10} {:<12}",
            result.name,
            result.status.to_string(),
            result.explored,
            cost,
            optimal,
            result.statistics.pruned_nodes(),
            format!("{:.2?}", result.elapsed),
        );
    }
    println!();

    let solved: Vec<_> = results.iter().filter(|r| r.path_cost.is_some()).collect();
    if let Some(best) = solved.iter().min_by_key(|r| (r.path_cost, r.explored)) {
        println!("Shortest path: {} ({} moves)", best.name, best.path.len());
    }
    for result in &solved {
        if reference.is_some() && !result.is_optimal(reference) {
            println!("{} took a longer route than the shortest one", result.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn reference_length_of_classic_maze() {
        let maze = Maze::classic().unwrap();
        assert_eq!(reference_path_length(&maze), Some(51));
    }

    #[test]
    fn reference_length_without_route() {
        let maze = Maze::new(Board::parse("A*.").unwrap(), Position::new(0, 2)).unwrap();
        assert_eq!(reference_path_length(&maze), None);
    }

    #[test]
    fn all_runs_both_engines_in_order() {
        let maze = Maze::classic().unwrap();
        let results = run_algorithm(Algorithm::All, &maze);
        let names: Vec<_> = results.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["gbfs", "a_star"]);
        assert!(results.iter().all(|r| r.status == RunStatus::Solved));
        assert!(results.iter().all(|r| r.is_optimal(Some(51))));
        assert_eq!(results[0].explored, 90);
        assert_eq!(results[1].explored, 118);
    }

    #[test]
    fn single_engine_results() {
        let maze = Maze::new(Board::parse("A*.").unwrap(), Position::new(0, 2)).unwrap();
        let results = run_algorithm(Algorithm::AStar, &maze);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, RunStatus::NoSolution);
        assert_eq!(results[0].explored, 0);
        assert!(results[0].final_board.is_none());
        assert!(!results[0].is_optimal(None));

        let maze = Maze::new(Board::parse("A*.").unwrap(), Position::new(0, 0)).unwrap();
        let results = run_algorithm(Algorithm::Gbfs, &maze);
        assert_eq!(results[0].status, RunStatus::AlreadyAtGoal);
        assert!(results[0].path.is_empty());
    }
}
