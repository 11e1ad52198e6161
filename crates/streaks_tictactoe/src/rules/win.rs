//! Win-line classification for tic-tac-toe.

use crate::config::StreakWindow;
use crate::{Position, WinningStreak};
use tracing::{instrument, trace};

/// Cells of the anti-diagonal, sorted.
const ANTI_DIAGONAL: [Position; 3] = [
    Position::TopRight,
    Position::Center,
    Position::BottomLeft,
];

/// Classifies three positions as a winning line.
///
/// Returns `None` unless `sequence` holds exactly three distinct positions
/// lying on one row, column or diagonal. Checks run horizontal, then
/// vertical, then diagonal.
#[instrument(level = "trace")]
pub fn evaluate(sequence: &[Position]) -> Option<WinningStreak> {
    let [a, b, c] = sequence else {
        return None;
    };
    if a == b || b == c || c == a {
        return None;
    }

    let cells = [a.coordinate(), b.coordinate(), c.coordinate()];

    if cells.iter().all(|cell| cell.row == cells[0].row) {
        return Some(WinningStreak::Horizontal);
    }
    if cells.iter().all(|cell| cell.column == cells[0].column) {
        return Some(WinningStreak::Vertical);
    }

    let mut sorted = [*a, *b, *c];
    sorted.sort();
    if cells.iter().all(|cell| cell.on_main_diagonal()) || sorted == ANTI_DIAGONAL {
        return Some(WinningStreak::Diagonal);
    }

    None
}

/// Looks for a streak in one player's partition.
///
/// With [`StreakWindow::FirstThree`] only the partition's first three moves
/// are classified, so a line completed by a later move is not seen.
/// [`StreakWindow::AnyTriple`] tries every 3-combination in submission order.
#[instrument(level = "trace")]
pub fn find_streak(partition: &[Position], window: StreakWindow) -> Option<WinningStreak> {
    match window {
        StreakWindow::FirstThree => evaluate(&partition[..partition.len().min(3)]),
        StreakWindow::AnyTriple => {
            for i in 0..partition.len() {
                for j in i + 1..partition.len() {
                    for k in j + 1..partition.len() {
                        let triple = [partition[i], partition[j], partition[k]];
                        if let Some(streak) = evaluate(&triple) {
                            trace!(?triple, %streak, "Streak found");
                            return Some(streak);
                        }
                    }
                }
            }
            None
        }
    }
}
