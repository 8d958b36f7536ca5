use anyhow::Context;
use clap::Parser;

use maze_search::comparison::{
    print_comparison_results, reference_path_length, run_algorithm, AlgorithmResult, RunStatus,
};
use maze_search::config::{Algorithm, Config};
use maze_search::environment::Maze;
use maze_search::grid::{Board, Position};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_ansi(config.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let maze = Maze::from_config(&config).context("failed to set up the maze")?;

    if !config.quiet {
        println!("Board size: {}x{}", maze.board.rows(), maze.board.cols());
        println!("Start: {}, Goal: {}", maze.board.agent(), maze.goal);
        println!();
        print_board(&maze.board, maze.goal);
    }

    let results = run_algorithm(config.algorithm, &maze);
    for result in &results {
        print_result(result, &maze, &config);
    }

    if config.algorithm == Algorithm::All {
        print_comparison_results(&results, reference_path_length(&maze));
    }

    Ok(())
}

fn title(name: &str) -> &str {
    match name {
        "gbfs" => "Greedy Best First Search",
        "a_star" => "A*",
        other => other,
    }
}

/// Print the board with row and column headers and the goal marked `G`.
fn print_board(board: &Board, goal: Position) {
    println!("Legend: A=Agent, G=Goal, *=Wall, .=Empty");

    print!("   ");
    for col in 0..board.cols() {
        print!("{:2}", col % 10);
    }
    println!();

    for row in 0..board.rows() {
        print!("{:2} ", row);
        for col in 0..board.cols() {
            let pos = Position::new(row, col);
            let marker = if pos == goal && board.is_free(pos) {
                'G'
            } else {
                board.cell(pos).map_or(' ', |cell| cell.marker())
            };
            print!("{} ", marker);
        }
        println!();
    }
    println!();
}

fn print_result(result: &AlgorithmResult, maze: &Maze, config: &Config) {
    println!("\n------------------ {} ---------------------\n", title(result.name));

    match result.status {
        RunStatus::AlreadyAtGoal => println!("Agent already at the goal position!"),
        RunStatus::NoSolution => println!("No solution found."),
        RunStatus::Solved => {
            if let (Some(board), false) = (&result.final_board, config.quiet) {
                println!("_________   {} End State    _________\n", title(result.name));
                print_board(board, maze.goal);
            }
            println!("Algorithm used: {}", title(result.name));
            println!("\tNumber of moves utilised: {}", result.explored);
            if let Some(cost) = result.path_cost {
                println!("\tPath cost: {}", cost);
            }

            if config.show_path {
                println!("\nSequence from start -> goal:");
                println!("\tAgent initially at index {}", maze.board.agent());
                for step in &result.path {
                    println!("\tAgent moves {} to index {}", step.direction, step.position);
                }
            }
        }
    }

    if !config.quiet {
        println!();
        print!("{}", result.statistics);
    }
}
