//! Chess commentary CLI.
//!
//! Prints pawn structure and square control reports, move descriptions and
//! engine analysis summaries for a FEN position. Logs go to stderr and are
//! controlled by `RUST_LOG`.

use std::path::PathBuf;

use anyhow::Context;
use chess_analysis::{analyze_pawn_structure_with, analyze_square_control};
use chess_commentary::{
    comment_line, control_report, describe_move, engine_commentary, parse_board,
    pawn_structure_report, CommentaryConfig, EngineResponse,
};
use chess_oracle::Position;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chess-commentary")]
#[command(about = "Natural-language commentary for chess positions")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report doubled, isolated and passed pawns
    Pawns {
        /// Position in FEN (only the placement field is required)
        fen: String,
    },
    /// Report who controls a square
    Control {
        /// Position in FEN (only the placement field is required)
        fen: String,
        /// Square label, e.g. e4
        square: String,
    },
    /// Describe a single move
    Describe {
        /// Position in full FEN
        fen: String,
        /// Move in UCI notation, e.g. g1f3
        #[arg(value_name = "MOVE")]
        uci: String,
    },
    /// Comment on a sequence of moves
    Line {
        /// Position in full FEN
        fen: String,
        /// Moves in UCI notation
        #[arg(value_name = "MOVE", required = true)]
        moves: Vec<String>,
    },
    /// Summarize a saved response from the evaluation service
    Engine {
        /// Position in full FEN
        fen: String,
        /// Path to the JSON response
        response: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(CommentaryConfig::config_path);
    let config = CommentaryConfig::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    tracing::debug!("Using config: {:?}", config);

    match cli.command {
        Commands::Pawns { fen } => {
            let position = Position::from_fen(&fen).context("parsing FEN")?;
            let structure = analyze_pawn_structure_with(&position, config.passed_pawn_rule);
            print!("{}", pawn_structure_report(&structure));
        }
        Commands::Control { fen, square } => {
            let position = Position::from_fen(&fen).context("parsing FEN")?;
            let report = analyze_square_control(&position, &square)?;
            print!("{}", control_report(&report));
        }
        Commands::Describe { fen, uci } => {
            let board = parse_board(&fen)?;
            println!("{}", describe_move(&board, &uci)?);
        }
        Commands::Line { fen, moves } => {
            let board = parse_board(&fen)?;
            for line in comment_line(&board, moves.as_slice(), config.max_line_moves)? {
                println!("{}", line);
            }
        }
        Commands::Engine { fen, response } => {
            let board = parse_board(&fen)?;
            let json = std::fs::read_to_string(&response)
                .with_context(|| format!("reading {}", response.display()))?;
            let analysis = EngineResponse::from_json(&json)?.into_analysis()?;
            print!("{}", engine_commentary(&board, &analysis, &config)?);
        }
    }

    Ok(())
}
