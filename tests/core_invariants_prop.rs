//! Property tests for the board and game state.
//!
//! Invariants covered:
//! - Rotation is periodic with period 4.
//! - A non-colliding lock writes exactly the shape's cells and nothing else.
//! - Clearing full rows removes them, drops the rest and keeps the height.
//! - Score never decreases; only four-row clears raise the level.
//! - Consecutive next-piece draws never repeat.

use proptest::prelude::*;

use tick_tetris::core::{
    rotated_shape, ActivePiece, Board, CellQuery, GameConfig, GameState, Shape,
};
use tick_tetris::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

fn piece_kind() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

/// Mostly empty rubble: about one cell in five is filled, and roughly one
/// row in four is completely full.
fn rubble() -> impl Strategy<Value = [[u8; W]; H]> {
    let cell = prop_oneof![4 => Just(0u8), 1 => 1u8..=7];
    let row = (prop::bool::weighted(0.25), prop::collection::vec(cell, W));
    prop::collection::vec(row, H).prop_map(|rows| {
        let mut grid = [[0u8; W]; H];
        for (y, (full, cells)) in rows.into_iter().enumerate() {
            for (x, v) in cells.into_iter().enumerate() {
                grid[y][x] = if full { v.max(1) } else { v };
            }
        }
        grid
    })
}

/// Empty the board cells under `shape` at `(x, y)`.
fn carve(grid: &mut [[u8; W]; H], shape: &Shape, x: i32, y: i32) {
    for (row, cells) in shape.iter().enumerate() {
        for (col, &v) in cells.iter().enumerate() {
            let (bx, by) = (x + col as i32, y + row as i32);
            if v != 0 && (0..W as i32).contains(&bx) && (0..H as i32).contains(&by) {
                grid[by as usize][bx as usize] = 0;
            }
        }
    }
}

/// Well depth (bottom rows full except one column) and the gap column.
fn well() -> impl Strategy<Value = (i32, i32)> {
    (0i32..=4, 0..W as i32)
}

/// Fill the bottom `depth` rows except column `gap` and hang a vertical I
/// above the gap, so plain gravity drops it in.
fn dig_well(gs: &mut GameState, depth: i32, gap: i32) {
    for y in H as i32 - depth..H as i32 {
        for x in (0..W as i32).filter(|&x| x != gap) {
            gs.board_mut().set(x, y, Some(PieceKind::Z));
        }
    }
    gs.set_active(ActivePiece {
        kind: PieceKind::I,
        rotation: 0,
        x: gap - 1,
        y: 0,
    });
}

fn action() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        Just(GameAction::Rotate),
        Just(GameAction::MoveLeft),
        Just(GameAction::MoveRight),
        Just(GameAction::SoftDrop),
    ]
}

fn rows_of(board: &Board) -> Vec<[u8; W]> {
    let mut grid = [[0u8; W]; H];
    board.write_u8_grid(&mut grid);
    grid.to_vec()
}

proptest! {
    #[test]
    fn rotation_is_mod_four_periodic(kind in piece_kind(), r in 0u32..10_000) {
        prop_assert_eq!(rotated_shape(kind, r), rotated_shape(kind, r + 4));
    }

    #[test]
    fn lock_writes_exactly_the_shape(
        mut grid in rubble(),
        kind in piece_kind(),
        rotation in 0u32..4,
        x in -1i32..9,
        y in -2i32..18,
    ) {
        let shape = rotated_shape(kind, rotation);
        carve(&mut grid, &shape, x, y);
        let mut board = Board::from_u8_rows(&grid);
        // Only the walls and the floor can block a carved placement.
        prop_assume!(!board.collides(&shape, x, y));

        let before = board.clone();
        board.lock_cells(&shape, x, y, kind);

        for by in 0..H as i32 {
            for bx in 0..W as i32 {
                let (col, row) = (bx - x, by - y);
                let covered = (0..4).contains(&col)
                    && (0..4).contains(&row)
                    && shape[row as usize][col as usize] != 0;
                if covered {
                    prop_assert_eq!(board.cell_at(bx, by), CellQuery::Occupied(kind));
                } else {
                    prop_assert_eq!(board.cell_at(bx, by), before.cell_at(bx, by));
                }
            }
        }
    }

    #[test]
    fn clearing_full_rows_compacts(grid in rubble()) {
        let mut board = Board::from_u8_rows(&grid);
        let before = rows_of(&board);
        let full = board.find_full_rows();
        board.clear_rows(&full);
        let after = rows_of(&board);

        prop_assert_eq!(after.len(), H);
        prop_assert!(board.find_full_rows().is_empty());

        let survivors: Vec<[u8; W]> = before
            .iter()
            .enumerate()
            .filter(|(y, _)| !full.contains(y))
            .map(|(_, row)| *row)
            .collect();
        prop_assert_eq!(&after[full.len()..], survivors.as_slice());
        for row in &after[..full.len()] {
            prop_assert_eq!(*row, [0u8; W]);
        }
    }

    #[test]
    fn score_is_monotonic_and_level_tracks_tetrises(
        seed in any::<u32>(),
        (depth, gap) in well(),
        settle in 0usize..24,
        actions in prop::collection::vec(action(), 1..400),
    ) {
        let mut gs = GameState::new(GameConfig { seed, base_interval: 1 });
        dig_well(&mut gs, depth, gap);
        let mut tetrises = 0;

        // `settle` plain ticks first; 17 or more land the I in the well.
        let steps = std::iter::repeat(None)
            .take(settle)
            .chain(actions.into_iter().map(Some));
        for step in steps {
            let (score, level, lines) = (gs.score(), gs.level(), gs.lines());
            if let Some(a) = step {
                gs.apply_action(a);
            }
            gs.tick();
            if gs.game_over() {
                break;
            }
            prop_assert!(gs.score() >= score);
            let cleared = gs.lines() - lines;
            let expected_level = if cleared == 4 { level + 1 } else { level };
            prop_assert_eq!(gs.level(), expected_level);
            if cleared == 4 {
                tetrises += 1;
            }
        }
        if depth == 4 && settle >= 17 {
            prop_assert!(tetrises >= 1);
        }
    }

    #[test]
    fn next_draws_never_repeat(seed in any::<u32>(), spawns in 1usize..300) {
        let mut gs = GameState::with_seed(seed);
        let mut prev = gs.next();
        for _ in 0..spawns {
            gs.spawn_next();
            prop_assert_ne!(gs.next(), prev);
            prev = gs.next();
        }
    }
}
