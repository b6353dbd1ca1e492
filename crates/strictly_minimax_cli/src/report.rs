//! Rendering command results as text or JSON.

use crate::config::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;
use strictly_minimax::{Analysis, Board, GameRecord, Outcome, Player, SearchStats, Utility};

/// Result of `best-move`.
#[derive(Debug, Serialize)]
pub struct BestMoveReport {
    /// Board that was analyzed, in notation.
    pub board: String,
    /// Player to move.
    pub player: Player,
    /// Chosen action and its value; absent on a terminal board.
    pub analysis: Option<Analysis>,
    /// Outcome of a terminal board.
    pub outcome: Option<Outcome>,
}

impl BestMoveReport {
    /// Builds a report for `board`.
    pub fn new(board: &Board, analysis: Option<Analysis>) -> Self {
        Self {
            board: board.to_string(),
            player: strictly_minimax::player(board),
            analysis,
            outcome: Outcome::of(board),
        }
    }
}

/// Renders a `best-move` report.
pub fn best_move(report: &BestMoveReport, format: OutputFormat, show_stats: bool) -> Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(report).context("Failed to serialize report");
    }

    let mut out = format!("{}\n\n", report.board);
    match (&report.analysis, &report.outcome) {
        (Some(analysis), _) => {
            out.push_str(&format!(
                "{} to move: play {} (value {})",
                analysis.player(),
                analysis.action(),
                describe_value(*analysis.value())
            ));
            if show_stats {
                out.push('\n');
                out.push_str(&describe_stats(analysis.stats()));
            }
        }
        (None, Some(outcome)) => out.push_str(&format!("Terminal board: {}", outcome)),
        (None, None) => out.push_str("No move available"),
    }
    Ok(out)
}

/// Renders a finished self-play game.
pub fn game(record: &GameRecord, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(record).context("Failed to serialize game record");
    }

    let mut out = format!("{}\n", record.start());
    let mut board = *record.start();
    for (ply, action) in record.actions().iter().enumerate() {
        let mover = strictly_minimax::player(&board);
        board = strictly_minimax::result(&board, *action)
            .with_context(|| format!("Recorded action {} could not be replayed", action))?;
        out.push_str(&format!("\n{}. {} plays {}\n{}\n", ply + 1, mover, action, board));
    }
    out.push_str(&format!("\nResult: {}", record.outcome()));
    Ok(out)
}

fn describe_value(value: Utility) -> &'static str {
    match value.signum() {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    }
}

fn describe_stats(stats: &SearchStats) -> String {
    format!("Searched {} nodes, {} cutoffs", stats.nodes(), stats.cutoffs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_minimax::{analyze, initial_state, self_play};

    #[test]
    fn test_text_best_move() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let report = BestMoveReport::new(&board, analyze(&board));
        let text = best_move(&report, OutputFormat::Text, false).unwrap();

        assert!(text.starts_with("XX.\nOO.\n...\n\n"));
        assert!(text.contains("X to move: play (0, 2) (value X wins)"));
        assert!(!text.contains("Searched"));
    }

    #[test]
    fn test_text_terminal_board() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let report = BestMoveReport::new(&board, analyze(&board));
        let text = best_move(&report, OutputFormat::Text, true).unwrap();
        assert!(text.ends_with("Terminal board: Player X wins"));
    }

    #[test]
    fn test_json_best_move() {
        let board = initial_state();
        let report = BestMoveReport::new(&board, analyze(&board));
        let json = best_move(&report, OutputFormat::Json, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["player"], "X");
        assert_eq!(value["analysis"]["value"], 0);
        assert!(value["outcome"].is_null());
    }

    #[test]
    fn test_text_game() {
        let record = self_play(&initial_state()).unwrap();
        let text = game(&record, OutputFormat::Text).unwrap();
        assert!(text.contains("1. X plays"));
        assert!(text.contains("9. X plays"));
        assert!(text.ends_with("Result: Draw"));
    }
}
