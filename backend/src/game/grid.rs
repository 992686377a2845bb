use std::collections::HashSet;

use crate::models::GridPosition;

/// 8-directional adjacency. A cell is never adjacent to itself.
pub fn is_adjacent_position(a: &GridPosition, b: &GridPosition) -> bool {
    let row_diff = (i64::from(a.row) - i64::from(b.row)).abs();
    let col_diff = (i64::from(a.col) - i64::from(b.col)).abs();

    row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
}

/// Check that positions form a legal path on a `rows` x `cols` grid:
/// non-empty, in bounds, each step adjacent, no cell reused.
pub fn is_valid_path(positions: &[GridPosition], rows: i32, cols: i32) -> bool {
    if positions.is_empty() {
        return false;
    }

    if !positions
        .iter()
        .all(|pos| (0..rows).contains(&pos.row) && (0..cols).contains(&pos.col))
    {
        return false;
    }

    if !positions
        .windows(2)
        .all(|pair| is_adjacent_position(&pair[0], &pair[1]))
    {
        return false;
    }

    let unique: HashSet<_> = positions.iter().collect();
    unique.len() == positions.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i32, col: i32) -> GridPosition {
        GridPosition { row, col }
    }

    #[test]
    fn test_adjacent_positions() {
        assert!(is_adjacent_position(&pos(1, 1), &pos(2, 2)));
        assert!(is_adjacent_position(&pos(0, 0), &pos(0, 1)));
        assert!(is_adjacent_position(&pos(3, 2), &pos(2, 2)));
        assert!(!is_adjacent_position(&pos(1, 1), &pos(1, 3)));
        assert!(!is_adjacent_position(&pos(0, 0), &pos(2, 2)));
    }

    #[test]
    fn test_position_is_not_adjacent_to_itself() {
        assert!(!is_adjacent_position(&pos(2, 4), &pos(2, 4)));
        assert!(!is_adjacent_position(&pos(0, 0), &pos(0, 0)));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        for r1 in -2..=2 {
            for c1 in -2..=2 {
                for r2 in -2..=2 {
                    for c2 in -2..=2 {
                        let (a, b) = (pos(r1, c1), pos(r2, c2));
                        assert_eq!(is_adjacent_position(&a, &b), is_adjacent_position(&b, &a));
                    }
                }
            }
        }
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        assert!(!is_adjacent_position(&pos(i32::MIN, 0), &pos(i32::MAX, 0)));
    }

    #[test]
    fn test_valid_path() {
        let path = [pos(0, 0), pos(1, 1), pos(1, 2), pos(0, 3)];
        assert!(is_valid_path(&path, 5, 5));
    }

    #[test]
    fn test_invalid_paths() {
        assert!(!is_valid_path(&[], 5, 5));
        // gap
        assert!(!is_valid_path(&[pos(0, 0), pos(0, 2)], 5, 5));
        // reuse
        assert!(!is_valid_path(&[pos(0, 0), pos(0, 1), pos(0, 0)], 5, 5));
        // out of bounds
        assert!(!is_valid_path(&[pos(4, 4), pos(4, 5)], 5, 5));
        assert!(!is_valid_path(&[pos(-1, 0)], 5, 5));
    }
}
