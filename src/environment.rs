use crate::config::Config;
use crate::error::MazeError;
use crate::grid::{Board, Cell, Position};
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::{info, warn};

/// The built-in 20x20 maze. The agent starts at (14, 0).
pub const CLASSIC_MAZE: &str = "\
********************
********************
********************
**.........**.......
**.*******.**.***.**
**.*******....***...
**.*******.**.***.*.
**....****.**.....*.
***.******.******.*.
***.****...********.
***.*....*.*****....
**..*.**.*.....*.***
**.*..**.*****.*....
**.*...*.*****.*.***
A...**.*.*****.***..
**.***.*.*****.....*
**.....*.*****.**.**
********.********.**
********************
********************
";

pub const CLASSIC_GOAL: Position = Position { row: 12, col: 19 };

/// A start board together with the goal the agent has to reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub board: Board,
    pub goal: Position,
}

impl Maze {
    pub fn new(board: Board, goal: Position) -> Result<Self, MazeError> {
        if !board.contains(goal) {
            return Err(MazeError::GoalOutOfBounds {
                goal,
                rows: board.rows(),
                cols: board.cols(),
            });
        }
        if board.cell(goal) == Some(Cell::Wall) {
            warn!(%goal, "goal cell is a wall, no search can reach it");
        }
        Ok(Maze { board, goal })
    }

    pub fn classic() -> Result<Self, MazeError> {
        Maze::new(Board::parse(CLASSIC_MAZE)?, CLASSIC_GOAL)
    }

    pub fn from_file(path: &Path, goal: Position) -> Result<Self, MazeError> {
        let text = std::fs::read_to_string(path).map_err(|source| MazeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Maze::new(Board::parse(&text)?, goal)
    }

    /// Picks the maze described by the command line. `--goal` overrides the
    /// default goal in every mode.
    pub fn from_config(config: &Config) -> Result<Self, MazeError> {
        let maze = if config.random {
            MazeSetup::from_config(config).create_maze()?
        } else if let Some(path) = &config.maze {
            Maze::from_file(path, config.goal.unwrap_or(CLASSIC_GOAL))?
        } else {
            Maze::classic()?
        };

        match config.goal {
            Some(goal) if goal != maze.goal => Maze::new(maze.board, goal),
            _ => Ok(maze),
        }
    }
}

/// Parameters of a randomly generated square maze. Only [`MazeSetup::generate`]
/// builds one, so start, goal and walls always lie inside the grid.
#[derive(Debug, Clone)]
pub struct MazeSetup {
    grid_size: usize,
    start: Position,
    goal: Position,
    walls: FxHashSet<Position>,
}

impl MazeSetup {
    /// Places the start in the top-left quadrant, the goal in the
    /// bottom-right one and up to `num_walls` walls elsewhere. The same seed
    /// always yields the same setup.
    pub fn generate(grid_size: usize, num_walls: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
            None => rand::rngs::StdRng::from_entropy(),
        };
        let size = grid_size.max(2);

        let start = Position::new(rng.gen_range(0..size / 2), rng.gen_range(0..size / 2));
        let goal = Position::new(rng.gen_range(size / 2..size), rng.gen_range(size / 2..size));

        // start and goal always stay free
        let target = num_walls.min(size * size - 2);
        let max_attempts = num_walls.saturating_mul(3);
        let mut walls = FxHashSet::default();
        let mut attempts = 0;
        while walls.len() < target && attempts < max_attempts {
            let pos = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
            if pos != start && pos != goal {
                walls.insert(pos);
            }
            attempts += 1;
        }

        info!(
            grid_size = size,
            %start,
            %goal,
            walls = walls.len(),
            "generated maze"
        );

        MazeSetup {
            grid_size: size,
            start,
            goal,
            walls,
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn walls(&self) -> &FxHashSet<Position> {
        &self.walls
    }

    pub fn from_config(config: &Config) -> Self {
        Self::generate(config.grid_size, config.num_walls, config.seed)
    }

    pub fn create_maze(&self) -> Result<Maze, MazeError> {
        let mut cells = vec![vec![Cell::Empty; self.grid_size]; self.grid_size];
        for wall in &self.walls {
            cells[wall.row][wall.col] = Cell::Wall;
        }
        cells[self.start.row][self.start.col] = Cell::Agent;
        Maze::new(Board::new(cells)?, self.goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_maze_loads() {
        let maze = Maze::classic().unwrap();
        assert_eq!(maze.board.rows(), 20);
        assert_eq!(maze.board.cols(), 20);
        assert_eq!(maze.board.agent(), Position::new(14, 0));
        assert!(maze.board.is_free(maze.goal));
    }

    #[test]
    fn goal_outside_board_is_rejected() {
        let board = Board::parse("A.\n..").unwrap();
        assert!(matches!(
            Maze::new(board, Position::new(2, 0)),
            Err(MazeError::GoalOutOfBounds { rows: 2, cols: 2, .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Maze::from_file(Path::new("/nonexistent/maze.txt"), Position::new(0, 0))
            .unwrap_err();
        assert!(matches!(err, MazeError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/maze.txt"));
    }

    #[test]
    fn config_selects_maze_and_goal() {
        use clap::Parser;

        let maze = Maze::from_config(&Config::parse_from(["maze-search"])).unwrap();
        assert_eq!(maze, Maze::classic().unwrap());

        let config = Config::parse_from(["maze-search", "--goal", "3,2"]);
        assert_eq!(Maze::from_config(&config).unwrap().goal, Position::new(3, 2));

        let config = Config::parse_from(["maze-search", "--goal", "30,2"]);
        assert!(Maze::from_config(&config).is_err());

        let config = Config::parse_from([
            "maze-search",
            "--random",
            "--grid-size",
            "8",
            "--num-walls",
            "10",
            "--seed",
            "3",
        ]);
        let maze = Maze::from_config(&config).unwrap();
        assert_eq!(maze.board.rows(), 8);
        assert_eq!(maze, MazeSetup::generate(8, 10, Some(3)).create_maze().unwrap());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = MazeSetup::generate(12, 30, Some(42)).create_maze().unwrap();
        let b = MazeSetup::generate(12, 30, Some(42)).create_maze().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generated_maze_respects_quadrants_and_walls() {
        let setup = MazeSetup::generate(10, 25, Some(7));
        assert!(setup.start.row < 5 && setup.start.col < 5);
        assert!(setup.goal.row >= 5 && setup.goal.col >= 5);
        assert!(setup.walls.len() <= 25);
        assert!(!setup.walls.contains(&setup.start));
        assert!(!setup.walls.contains(&setup.goal));

        let maze = setup.create_maze().unwrap();
        assert_eq!(maze.board.agent(), setup.start);
        assert!(maze.board.is_free(setup.goal));
    }

    #[test]
    fn oversized_wall_count_fills_every_other_cell() {
        let setup = MazeSetup::generate(4, usize::MAX, Some(1));
        assert_eq!(setup.walls().len(), 14);
        assert!(!setup.walls().contains(&setup.start()));
        assert!(!setup.walls().contains(&setup.goal()));

        let maze = setup.create_maze().unwrap();
        assert!(maze.board.neighbors(setup.start()).is_empty());
    }
}
