//! Integration tests for chess-commentary.
//!
//! These exercise the full path from configuration file and engine response
//! to rendered text.

use std::io::Write;

use chess_analysis::{analyze_pawn_structure_with, PassedPawnRule};
use chess_commentary::{
    engine_commentary, parse_board, pawn_structure_report, CommentaryConfig, CommentaryError,
    EngineResponse,
};
use chess_oracle::Position;

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[test]
fn test_engine_response_to_commentary() {
    let json = r#"{
        "success": true,
        "evaluation": -1.8,
        "mate": null,
        "bestmove": "bestmove e7e5 ponder g1f3",
        "continuation": "e7e5 g1f3 b8c6 f1b5"
    }"#;
    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";

    let board = parse_board(fen).unwrap();
    let analysis = EngineResponse::from_json(json)
        .unwrap()
        .into_analysis()
        .unwrap();
    let config = CommentaryConfig {
        max_line_moves: 3,
        ..CommentaryConfig::default()
    };

    let text = engine_commentary(&board, &analysis, &config).unwrap();

    assert_eq!(
        text,
        "Black has a clear advantage (-1.80).\n\
         Best move: Black pawn from e7 to e5. Expected reply: White knight from g1 to f3.\n\
         Main line:\n  \
         1... e7e5: Black pawn from e7 to e5\n  \
         2. g1f3: White knight from g1 to f3\n  \
         2... b8c6: Black knight from b8 to c6\n  \
         ... (1 more moves)\n"
    );
}

#[test]
fn test_engine_line_with_illegal_move_fails() {
    let json = r#"{"success": true, "evaluation": 0.1, "bestmove": "bestmove e2e4", "continuation": "e2e4 e2e4"}"#;

    let board = parse_board(STARTPOS).unwrap();
    let analysis = EngineResponse::from_json(json)
        .unwrap()
        .into_analysis()
        .unwrap();

    let result = engine_commentary(&board, &analysis, &CommentaryConfig::default());
    assert!(matches!(result, Err(CommentaryError::IllegalMove(_))));
}

#[test]
fn test_failed_engine_response_converts() {
    let err: CommentaryError = EngineResponse::from_json(r#"{"success": false, "data": "timeout"}"#)
        .unwrap()
        .into_analysis()
        .unwrap_err()
        .into();
    assert_eq!(err.to_string(), "Engine request failed: timeout");
}

#[test]
fn test_config_file_selects_passed_pawn_rule() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "passed_pawn_rule = \"directional\"").unwrap();
    let config = CommentaryConfig::load(file.path()).unwrap();

    // The black pawn on e3 is behind the white pawn on e5.
    let position = Position::from_fen("4k3/8/8/4P3/8/4p3/8/4K3 w - - 0 1").unwrap();

    let directional = analyze_pawn_structure_with(&position, config.passed_pawn_rule);
    let file_clear = analyze_pawn_structure_with(&position, PassedPawnRule::FileClear);

    assert!(pawn_structure_report(&directional).contains("  passed: e5\n"));
    assert!(!pawn_structure_report(&file_clear).contains("  passed: e5\n"));
}
