//! Slide and merge tiles for a single move.

use super::board::SIZE;
use super::{Board, Direction};

/// Result of applying one move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Sum of the values of every tile produced by a merge
    pub score_delta: u64,
    /// Whether any tile moved or merged
    pub changed: bool,
}

/// Slide every line of `board` toward the edge `direction` points at,
/// merging equal neighbours pairwise from that edge.
///
/// A tile produced by a merge does not merge again within the same move.
pub fn apply(board: &mut Board, direction: Direction) -> MoveOutcome {
    let before = *board;
    let mut score_delta = 0;

    for line in 0..SIZE {
        // next free slot, counted from the target edge
        let mut next_free = 0;
        // offset of the last tile placed that may still take a merge
        let mut last_placed: Option<usize> = None;

        for offset in 0..SIZE {
            let (row, col) = direction.coordinate(line, offset);
            let Some(tile) = board.get(row, col) else {
                continue;
            };

            // tiles whose sum would not fit in a tile stay apart
            let merge = last_placed
                .map(|slot| direction.coordinate(line, slot))
                .filter(|&(r, c)| board.get(r, c) == Some(tile))
                .zip(tile.doubled());

            if let Some(((r, c), merged)) = merge {
                board.set(r, c, Some(merged));
                board.set(row, col, None);
                score_delta += u64::from(merged.value());
                last_placed = None;
            } else {
                let (r, c) = direction.coordinate(line, next_free);
                board.set(row, col, None);
                board.set(r, c, Some(tile));
                last_placed = Some(next_free);
                next_free += 1;
            }
        }
    }

    MoveOutcome {
        score_delta,
        changed: *board != before,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(row: [u32; SIZE]) -> Board {
        Board::from_values([row, [0; SIZE], [0; SIZE], [0; SIZE]]).unwrap()
    }

    fn first_row(board: &Board) -> [u32; SIZE] {
        board.to_values()[0]
    }

    #[test]
    fn test_right_merges_across_gaps() {
        let mut board = row_board([0, 2, 0, 2]);
        let outcome = apply(&mut board, Direction::Right);
        assert_eq!(first_row(&board), [0, 0, 0, 4]);
        assert_eq!(outcome.score_delta, 4);
        assert!(outcome.changed);
    }

    #[test]
    fn test_left_merges_two_pairs() {
        let mut board = row_board([2, 2, 4, 4]);
        let outcome = apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [4, 8, 0, 0]);
        assert_eq!(outcome.score_delta, 12);
    }

    #[test]
    fn test_leading_pair_merges_first() {
        let mut board = row_board([2, 0, 2, 2]);
        let outcome = apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [4, 2, 0, 0]);
        assert_eq!(outcome.score_delta, 4);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let mut board = row_board([2, 2, 2, 2]);
        let outcome = apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [4, 4, 0, 0]);
        assert_eq!(outcome.score_delta, 8);

        let mut board = row_board([4, 2, 2, 0]);
        apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [4, 4, 0, 0]);
    }

    #[test]
    fn test_largest_tiles_do_not_merge() {
        let mut board = row_board([1 << 31, 0, 1 << 31, 0]);
        let outcome = apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [1 << 31, 1 << 31, 0, 0]);
        assert_eq!(outcome.score_delta, 0);
        assert!(board.to_values().iter().flatten().all(|v| *v == 0 || v.is_power_of_two()));
    }

    #[test]
    fn test_merge_into_largest_tile() {
        let mut board = row_board([1 << 30, 1 << 30, 0, 0]);
        let outcome = apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [1 << 31, 0, 0, 0]);
        assert_eq!(outcome.score_delta, 1 << 31);
    }

    #[test]
    fn test_odd_run_leaves_far_tile_unmerged() {
        let mut board = row_board([2, 2, 2, 0]);
        apply(&mut board, Direction::Right);
        assert_eq!(first_row(&board), [0, 0, 2, 4]);
    }

    #[test]
    fn test_compaction_without_merge() {
        let mut board = row_board([0, 2, 0, 4]);
        let outcome = apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [2, 4, 0, 0]);
        assert_eq!(outcome.score_delta, 0);
        assert!(outcome.changed);
    }

    #[test]
    fn test_vertical_moves() {
        let start = Board::from_values([
            [2, 0, 0, 4],
            [2, 0, 4, 0],
            [0, 8, 0, 4],
            [4, 8, 4, 2],
        ])
        .unwrap();

        let mut up = start;
        let outcome = apply(&mut up, Direction::Up);
        assert_eq!(
            up.to_values(),
            [[4, 16, 8, 8], [4, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(outcome.score_delta, 4 + 16 + 8 + 8);

        let mut down = start;
        let outcome = apply(&mut down, Direction::Down);
        assert_eq!(
            down.to_values(),
            [[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 8], [4, 16, 8, 2]]
        );
        assert_eq!(outcome.score_delta, 4 + 16 + 8 + 8);
    }

    #[test]
    fn test_blocked_move_is_noop() {
        let start = Board::from_values([
            [2, 4, 0, 0],
            [8, 0, 0, 0],
            [16, 2, 0, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        let mut board = start;
        let outcome = apply(&mut board, Direction::Left);
        assert_eq!(board, start);
        assert_eq!(outcome, MoveOutcome::default());
    }

    #[test]
    fn test_empty_board_is_noop_in_every_direction() {
        for dir in Direction::ALL {
            let mut board = Board::new();
            assert!(!apply(&mut board, dir).changed);
            assert_eq!(board, Board::new());
        }
    }

    #[test]
    fn test_second_move_is_noop_without_adjacent_pairs() {
        let mut board = Board::from_values([
            [0, 2, 4, 8],
            [2, 0, 2, 0],
            [16, 16, 0, 0],
            [0, 0, 0, 4],
        ])
        .unwrap();
        apply(&mut board, Direction::Right);
        let after_first = board;
        let second = apply(&mut board, Direction::Right);
        assert_eq!(board, after_first);
        assert_eq!(second.score_delta, 0);
    }

    #[test]
    fn test_second_move_changes_when_pairs_remain() {
        let mut board = row_board([4, 2, 2, 0]);
        apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [4, 4, 0, 0]);
        let second = apply(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [8, 0, 0, 0]);
        assert!(second.changed);
        assert_eq!(second.score_delta, 8);
    }

    #[test]
    fn test_tiles_are_contiguous_at_target_edge() {
        let start = Board::from_values([
            [0, 2, 0, 2],
            [4, 0, 8, 0],
            [0, 0, 0, 16],
            [2, 4, 2, 4],
        ])
        .unwrap();
        for dir in Direction::ALL {
            let mut board = start;
            apply(&mut board, dir);
            for line in 0..SIZE {
                let occupied: Vec<bool> = (0..SIZE)
                    .map(|offset| {
                        let (r, c) = dir.coordinate(line, offset);
                        board.get(r, c).is_some()
                    })
                    .collect();
                let count = occupied.iter().filter(|&&o| o).count();
                assert!(
                    occupied[..count].iter().all(|&o| o),
                    "gap in line {line} after {}",
                    dir.name()
                );
            }
        }
    }
}
