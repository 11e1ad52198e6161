//! Tests for win-line classification.

use streaks_tictactoe::{Position, WinningStreak, evaluate};

fn at(row: u8, column: u8) -> Position {
    Position::at(row, column).expect("coordinate in range")
}

#[test]
fn test_rows_are_horizontal() {
    for row in 1..=3 {
        let line = [at(row, 1), at(row, 2), at(row, 3)];
        assert_eq!(evaluate(&line), Some(WinningStreak::Horizontal));
    }
}

#[test]
fn test_columns_are_vertical() {
    for column in 1..=3 {
        let line = [at(1, column), at(2, column), at(3, column)];
        assert_eq!(evaluate(&line), Some(WinningStreak::Vertical));
    }
}

#[test]
fn test_both_diagonals() {
    assert_eq!(
        evaluate(&[at(1, 1), at(2, 2), at(3, 3)]),
        Some(WinningStreak::Diagonal)
    );
    assert_eq!(
        evaluate(&[at(1, 3), at(2, 2), at(3, 1)]),
        Some(WinningStreak::Diagonal)
    );
}

#[test]
fn test_wrong_length_has_no_streak() {
    let cases: [&[Position]; 4] = [
        &[],
        &[at(1, 3)],
        &[at(1, 1), at(3, 1)],
        &[at(1, 1), at(1, 2), at(1, 3), at(2, 1)],
    ];
    for sequence in cases {
        assert_eq!(evaluate(sequence), None, "{:?}", sequence);
    }
}

#[test]
fn test_repeated_cell_has_no_streak() {
    assert_eq!(evaluate(&[at(1, 1), at(1, 1), at(3, 1)]), None);
    assert_eq!(evaluate(&[at(1, 3), at(1, 3), at(1, 3)]), None);
    assert_eq!(evaluate(&[at(2, 2), at(1, 1), at(2, 2)]), None);
}

#[test]
fn test_scattered_cells_have_no_streak() {
    let cases = [
        [at(1, 1), at(1, 2), at(3, 1)],
        [at(2, 1), at(1, 1), at(2, 3)],
        [at(3, 1), at(3, 2), at(2, 1)],
    ];
    for sequence in cases {
        assert_eq!(evaluate(&sequence), None, "{:?}", sequence);
    }
}

#[test]
fn test_exhaustive_triples_match_canonical_lines() {
    let mut found = 0;
    for a in Position::ALL {
        for b in Position::ALL {
            for c in Position::ALL {
                let triple = [a, b, c];
                let canonical = [
                    WinningStreak::Horizontal,
                    WinningStreak::Vertical,
                    WinningStreak::Diagonal,
                ]
                .into_iter()
                .find(|streak| {
                    streak.lines().iter().any(|line| {
                        let mut sorted = triple;
                        sorted.sort();
                        let mut line = *line;
                        line.sort();
                        sorted == line
                    })
                });
                assert_eq!(evaluate(&triple), canonical, "{:?}", triple);
                if canonical.is_some() {
                    found += 1;
                }
            }
        }
    }
    // 8 lines, 6 orderings each.
    assert_eq!(found, 48);
}
