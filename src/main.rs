use anyhow::{bail, Context, Result};
use clap::Parser;
use doku::{grid::Grid, solver::{Outcome, SearchEngine}, trace::Trace};
use std::{fs, io::Read, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "doku", version, about = "9x9 Sudoku solver with MRV backtracking")]
struct Cli {
    /// 81-character puzzle, row-major, with 0 or . for blanks.
    /// If omitted, reads from --input or stdin.
    puzzle: Option<String>,

    /// Path to a puzzle file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Emit a step-by-step assignment/removal trace
    #[arg(long)]
    trace: bool,

    /// Print the initial layout before solving
    #[arg(long)]
    show_initial: bool,

    /// Colorize the trace output
    #[arg(long)]
    color: bool,
}

fn read_puzzle(cli: &Cli) -> Result<String> {
    let raw = if let Some(s) = &cli.puzzle {
        s.clone()
    } else if let Some(path) = &cli.input {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    };
    Ok(raw.chars().filter(|ch| !ch.is_whitespace()).collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let puzzle = read_puzzle(&cli)?;
    let mut grid = Grid::decode(&puzzle).context("parse puzzle")?;

    if cli.show_initial {
        println!("Initial grid:\n{}", grid.to_pretty_string());
    }

    let mut trace = Trace::new(cli.trace, cli.color);
    let mut engine = SearchEngine::new();
    match engine.solve(&mut grid, &mut trace)? {
        Outcome::Solved => {
            println!("Solved grid:\n{}", grid.to_pretty_string());
            println!("{}", grid.encode());
            Ok(())
        }
        Outcome::Exhausted => {
            println!("No solution under the given clues.\n{}", grid.to_pretty_string());
            println!("{}", grid.encode());
            bail!("puzzle is unsolvable")
        }
    }
}
