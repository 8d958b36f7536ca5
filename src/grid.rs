use crate::error::MazeError;
use std::fmt;
use std::str::FromStr;

/// A cell coordinate, 0-indexed and row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Manhattan distance between two positions.
    pub fn distance(&self, other: &Position) -> u32 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = MazeError;

    /// Accepts `row,col`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MazeError::InvalidPosition(s.to_string());
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse().map_err(|_| invalid())?;
        let col = col.trim().parse().map_err(|_| invalid())?;
        Ok(Position { row, col })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Agent,
}

impl Cell {
    pub fn from_marker(marker: char) -> Option<Cell> {
        match marker {
            ' ' | '.' => Some(Cell::Empty),
            '*' | '#' => Some(Cell::Wall),
            'A' => Some(Cell::Agent),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Wall => '*',
            Cell::Agent => 'A',
        }
    }
}

/// Returns the first agent cell in row-major order.
pub fn locate_agent(cells: &[Vec<Cell>]) -> Result<Position, MazeError> {
    cells
        .iter()
        .enumerate()
        .find_map(|(row, line)| {
            line.iter()
                .position(|&cell| cell == Cell::Agent)
                .map(|col| Position { row, col })
        })
        .ok_or(MazeError::MissingAgent)
}

/// An immutable maze snapshot holding exactly one agent.
///
/// Equality and hashing are by cell contents, so two boards reached along
/// different paths compare equal. The cached agent position is derived from
/// the cells and never disagrees with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
    agent: Position,
}

impl Board {
    /// Builds a board, checking it is rectangular and has exactly one agent.
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self, MazeError> {
        let cols = cells.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            return Err(MazeError::EmptyMaze);
        }
        if let Some((row, line)) = cells.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(MazeError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        let agent = locate_agent(&cells)?;
        let count = cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Agent)
            .count();
        if count > 1 {
            return Err(MazeError::MultipleAgents { count });
        }

        Ok(Board { cells, agent })
    }

    /// Parses one row per line. Trailing blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let cells = lines
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, marker)| {
                        Cell::from_marker(marker)
                            .ok_or(MazeError::UnknownMarker { marker, row, col })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Board::new(cells)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    pub fn agent(&self) -> Position {
        self.agent
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row).and_then(|line| line.get(pos.col)).copied()
    }

    /// True iff `pos` is on the board and holds the free marker.
    pub fn is_free(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Empty)
    }

    /// Positions reachable in one step ignoring the agent marker itself.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::new();
        let (row, col) = (pos.row as i64, pos.col as i64);

        for (dr, dc) in [(-1, 0), (0, -1), (0, 1), (1, 0)] {
            let (nr, nc) = (row + dr, col + dc);
            if nr < 0 || nc < 0 {
                continue;
            }
            let next = Position::new(nr as usize, nc as usize);
            if matches!(self.cell(next), Some(Cell::Empty | Cell::Agent)) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    /// Deep copy with the agent swapped into `to`. The caller checks `to` is free.
    pub(crate) fn with_agent_at(&self, to: Position) -> Board {
        let mut cells = self.cells.clone();
        let from = self.agent;
        cells[from.row][from.col] = cells[to.row][to.col];
        cells[to.row][to.col] = Cell::Agent;
        Board { cells, agent: to }
    }
}

impl FromStr for Board {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let row: String = line.iter().map(|cell| cell.marker()).collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
