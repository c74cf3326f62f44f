//! Command line tool to show the scores of scrabble boards.
use anyhow::{Context, Result};
use clap::Parser;
use scrabble_scores::config::{DEFAULT_BOARD_FILE, DEFAULT_LETTERS_FILE};
use scrabble_scores::{calc_all_scores, Board, LetterValues, N};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Calculate the score of each player on a scrabble board
#[derive(Parser, Debug)]
#[command(name = "scrabble-scores")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board files: a json list of [x, y, letter, players]
    #[arg(default_value = DEFAULT_BOARD_FILE)]
    boards: Vec<PathBuf>,

    /// Letter value file: a json list of {value, letters}.
    /// Defaults to `letters.json` if present, else the english letter values.
    #[arg(short, long)]
    letters: Option<PathBuf>,

    /// Number of squares along each side of the board
    #[arg(short, long, default_value_t = N)]
    dimension: usize,

    /// Print the board before the scores
    #[arg(long)]
    show_board: bool,

    /// Print the scores as json
    #[arg(long)]
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let letters = cli.letters.clone().or_else(|| {
        let default = Path::new(DEFAULT_LETTERS_FILE);
        default.exists().then(|| default.to_path_buf())
    });
    let values = match letters {
        Some(path) => LetterValues::from_file(&path)
            .with_context(|| format!("loading letter values from {}", path.display()))?,
        None => LetterValues::default(),
    };

    let boards = cli
        .boards
        .iter()
        .map(|path| {
            Board::from_file_with_dimension(path, cli.dimension)
                .with_context(|| format!("loading board from {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    info!(boards = boards.len(), "scoring boards");

    let results = calc_all_scores(&boards, &values);
    for ((path, board), scores) in cli.boards.iter().zip(&boards).zip(results) {
        let scores = scores.with_context(|| format!("scoring board {}", path.display()))?;
        if cli.json {
            println!("{}", serde_json::to_string(&scores.report())?);
            continue;
        }
        if cli.boards.len() > 1 {
            println!("{}", path.display());
        }
        if cli.show_board {
            println!("{}", "-".repeat(board.dimension()));
            println!("{}", board);
        }
        println!("{}", scores);
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}
