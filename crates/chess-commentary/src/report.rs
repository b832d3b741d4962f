//! Text renderers for analysis results and engine output.

use chess_analysis::{
    Advantage, AdvantageThresholds, Attacker, ControlBalance, ControlReport, Evaluation,
    PawnFeatures, PawnStructure,
};
use chess_oracle::{square_label, Color, Square};
use cozy_chess::Board;
use tracing::debug;

use crate::config::CommentaryConfig;
use crate::describe::{describe_legal_move, find_move, side_title};
use crate::engine::EngineAnalysis;
use crate::error::CommentaryError;

fn square_list(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "none".to_string();
    }
    squares
        .iter()
        .map(|&s| square_label(s))
        .collect::<Vec<_>>()
        .join(", ")
}

fn attacker_list<'a>(pieces: impl Iterator<Item = &'a Attacker>) -> String {
    let names: Vec<String> = pieces.map(|a| a.to_string()).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

/// One-sentence summary of an evaluation.
///
/// ```
/// use chess_analysis::{AdvantageThresholds, Evaluation};
/// use chess_commentary::summarize_evaluation;
///
/// let text = summarize_evaluation(Evaluation::Centipawns(175), &AdvantageThresholds::default());
/// assert_eq!(text, "White has a clear advantage (+1.75).");
/// ```
pub fn summarize_evaluation(evaluation: Evaluation, thresholds: &AdvantageThresholds) -> String {
    match evaluation.advantage(thresholds) {
        Advantage::Equal => format!("The position is roughly equal ({}).", evaluation),
        Advantage::Slight(color) => {
            format!("{} has a slight edge ({}).", side_title(color), evaluation)
        }
        Advantage::Clear(color) => {
            format!("{} has a clear advantage ({}).", side_title(color), evaluation)
        }
        Advantage::Decisive(color) => {
            format!("{} is winning ({}).", side_title(color), evaluation)
        }
        Advantage::Mate { winner, moves: 0 } => {
            format!("{} has delivered checkmate.", side_title(winner))
        }
        Advantage::Mate { winner, moves: 1 } => {
            format!("{} mates in 1 move ({}).", side_title(winner), evaluation)
        }
        Advantage::Mate { winner, moves } => format!(
            "{} mates in {} moves ({}).",
            side_title(winner),
            moves,
            evaluation
        ),
    }
}

/// Describes the engine's best move and, if given, the expected reply.
///
/// The ponder move is interpreted in the position after the best move.
pub fn summarize_best_move(
    board: &Board,
    best_move: &str,
    ponder: Option<&str>,
) -> Result<String, CommentaryError> {
    let best = find_move(board, best_move)?;
    let mut text = format!("Best move: {}.", describe_legal_move(board, best));

    if let Some(ponder) = ponder {
        let mut after = board.clone();
        after.play(best);
        let reply = find_move(&after, ponder)?;
        text.push_str(&format!(
            " Expected reply: {}.",
            describe_legal_move(&after, reply)
        ));
    }

    Ok(text)
}

/// Numbered commentary for a sequence of UCI moves starting at `board`.
///
/// At most `max_moves` moves are described; a trailing line notes how many
/// were left out. The first illegal move aborts with an error.
pub fn comment_line<S: AsRef<str>>(
    board: &Board,
    moves: &[S],
    max_moves: usize,
) -> Result<Vec<String>, CommentaryError> {
    let mut board = board.clone();
    let mut lines = Vec::with_capacity(moves.len().min(max_moves) + 1);

    for uci in moves.iter().take(max_moves) {
        let uci = uci.as_ref();
        let mv = find_move(&board, uci)?;
        let number = board.fullmove_number();
        let prefix = match board.side_to_move() {
            Color::White => format!("{}.", number),
            Color::Black => format!("{}...", number),
        };
        lines.push(format!(
            "{} {}: {}",
            prefix,
            uci.trim(),
            describe_legal_move(&board, mv)
        ));
        board.play(mv);
    }

    if moves.len() > max_moves {
        let skipped = moves.len() - max_moves;
        debug!("Truncating line after {} moves, {} skipped", max_moves, skipped);
        lines.push(format!("... ({} more moves)", skipped));
    }

    Ok(lines)
}

/// Full commentary for an engine analysis: evaluation, best move and line.
pub fn engine_commentary(
    board: &Board,
    analysis: &EngineAnalysis,
    config: &CommentaryConfig,
) -> Result<String, CommentaryError> {
    let mut out = String::new();
    out.push_str(&summarize_evaluation(analysis.evaluation, &config.thresholds));
    out.push('\n');
    out.push_str(&summarize_best_move(
        board,
        &analysis.best_move,
        analysis.ponder.as_deref(),
    )?);
    out.push('\n');

    if !analysis.continuation.is_empty() {
        out.push_str("Main line:\n");
        for line in comment_line(board, analysis.continuation.as_slice(), config.max_line_moves)? {
            out.push_str("  ");
            out.push_str(&line);
            out.push('\n');
        }
    }

    Ok(out)
}

fn pawn_side_report(out: &mut String, color: Color, features: &PawnFeatures) {
    out.push_str(&format!(
        "{} pawns ({}): {}\n",
        side_title(color),
        features.positions.len(),
        square_list(&features.positions)
    ));
    out.push_str(&format!("  doubled: {}\n", square_list(&features.doubled)));
    out.push_str(&format!("  isolated: {}\n", square_list(&features.isolated)));
    out.push_str(&format!("  passed: {}\n", square_list(&features.passed)));
}

/// Multi-line report of both sides' pawn structure.
pub fn pawn_structure_report(structure: &PawnStructure) -> String {
    let mut out = String::new();
    pawn_side_report(&mut out, Color::White, &structure.white);
    pawn_side_report(&mut out, Color::Black, &structure.black);
    out
}

/// Multi-line report of who controls a square.
pub fn control_report(report: &ControlReport) -> String {
    let target = square_label(report.target);
    let mut out = match report.occupant {
        Some(piece) => format!("{}: {}\n", target, piece),
        None => format!("{}: empty\n", target),
    };

    for color in [Color::White, Color::Black] {
        out.push_str(&format!(
            "{} control: {} ({})\n",
            side_title(color),
            report.score(color),
            attacker_list(report.pieces_of(color).iter())
        ));
    }

    out.push_str(&format!("Attackers: {}\n", attacker_list(report.attackers())));
    if report.occupant.is_some() {
        out.push_str(&format!("Defenders: {}\n", attacker_list(report.defenders())));
    }

    match report.balance() {
        ControlBalance::Even => out.push_str(&format!("{} is evenly contested.\n", target)),
        winning => out.push_str(&format!("{} control of {}.\n", winning, target)),
    }

    out
}
