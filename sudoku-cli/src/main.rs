//! Command-line front-end: `solve` reads one or more grid files and prints
//! their solution(s); `generate` produces a fresh puzzle.

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use derive_more::{Display, Error, From};
use log::info;
use sudoku::{Grid, ParseError};

#[derive(Parser)]
#[command(name = "sudoku", version, about = "A generalized N x N sudoku solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Raise logging from `warn` to `debug`.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one or more grid files.
    Solve {
        /// Textual grid files.
        files: Vec<PathBuf>,

        /// Enumerate every solution instead of stopping at the first.
        #[arg(short, long)]
        all: bool,

        /// Write output to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a random grid.
    Generate {
        /// Grid side length N.
        #[arg(long)]
        size: usize,

        /// Narrow the generated grid to a unique-solution puzzle.
        #[arg(long)]
        unique: bool,

        /// RNG seed; a random one is drawn if omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Retry budget for carving a unique puzzle.
        #[arg(long, default_value_t = 100)]
        retry: usize,

        /// Write output to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the valid cell characters for a grid size.
    ListAlphabet {
        /// Grid side length N.
        size: usize,
    },
}

#[derive(Debug, Display, Error, From)]
enum CliError {
    #[display("{_0}")]
    Io(std::io::Error),
    #[display("{_0}")]
    Parse(ParseError),
    #[display("unsupported grid size {size} (must be one of 1, 4, 9, 16, 25, 36, 49, 64)")]
    #[from(ignore)]
    UnsupportedSize { size: usize },
    #[display("no solution")]
    #[from(ignore)]
    NoSolution,
}

fn main() {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::new();
    builder.filter_level(if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn });
    builder.init();

    let result = match cli.command {
        Command::Solve { files, all, output } => run_solve(&files, all, output.as_deref()),
        Command::Generate { size, unique, seed, retry, output } => {
            run_generate(size, unique, seed, retry, output.as_deref())
        }
        Command::ListAlphabet { size } => run_list_alphabet(size),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if col > 0 {
                out.push(' ');
            }
            write!(out, "{}", grid.get_cell(row, col).unwrap()).unwrap();
        }
        out.push('\n');
    }
    out
}

fn write_output(text: &str, output: Option<&std::path::Path>) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, text)?,
        None => std::io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}

fn run_solve(files: &[PathBuf], all: bool, output: Option<&std::path::Path>) -> Result<(), CliError> {
    let mut rendered = String::new();
    for path in files {
        let text = std::fs::read_to_string(path)?;
        let grid = sudoku::parse_grid(&text)?;
        info!("solving {path:?} ({}x{})", grid.size(), grid.size());

        if all {
            let mut count = 0;
            sudoku::solve_all(grid, |solved| {
                count += 1;
                rendered.push_str(&render_grid(solved));
                rendered.push('\n');
            });
            if count == 0 {
                return Err(CliError::NoSolution);
            }
        } else {
            let solved = sudoku::solve_first(grid).ok_or(CliError::NoSolution)?;
            rendered.push_str(&render_grid(&solved));
            rendered.push('\n');
        }
    }
    write_output(&rendered, output)
}

fn run_list_alphabet(size: usize) -> Result<(), CliError> {
    if !sudoku::is_valid_size(size) {
        return Err(CliError::UnsupportedSize { size });
    }
    let alphabet: String = sudoku::valid_chars(size).collect();
    println!("{alphabet}");
    Ok(())
}

fn run_generate(
    size: usize,
    unique: bool,
    seed: Option<u64>,
    retry: usize,
    output: Option<&std::path::Path>,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    info!("generating a {size}x{size} grid (seed {seed}, unique {unique})");
    let grid = sudoku::generate(size, seed, unique, retry).ok_or(CliError::UnsupportedSize { size })?;
    write_output(&render_grid(&grid), output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_a_solved_four_by_four() {
        let grid = sudoku::parse_grid("1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n").unwrap();
        let text = render_grid(&grid);
        assert_eq!(text, "1 2 3 4\n3 4 1 2\n2 1 4 3\n4 3 2 1\n");
    }

    #[test]
    fn cli_parses_solve_with_flags() {
        let cli = Cli::parse_from(["sudoku", "solve", "a.txt", "b.txt", "--all", "-o", "out.txt"]);
        match cli.command {
            Command::Solve { files, all, output } => {
                assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert!(all);
                assert_eq!(output, Some(PathBuf::from("out.txt")));
            }
            _ => panic!("expected Solve"),
        }
    }

    #[test]
    fn cli_parses_generate_with_defaults() {
        let cli = Cli::parse_from(["sudoku", "generate", "--size", "9"]);
        match cli.command {
            Command::Generate { size, unique, seed, retry, output } => {
                assert_eq!(size, 9);
                assert!(!unique);
                assert_eq!(seed, None);
                assert_eq!(retry, 100);
                assert_eq!(output, None);
            }
            _ => panic!("expected Generate"),
        }
    }

    #[test]
    fn list_alphabet_rejects_unsupported_size() {
        assert!(run_list_alphabet(5).is_err());
    }

    #[test]
    fn list_alphabet_accepts_supported_size() {
        assert!(run_list_alphabet(9).is_ok());
    }
}
