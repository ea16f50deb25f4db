//! Pieces module - tetromino catalog and rotation
//!
//! Every piece is a 4x4 matrix of cell values: 0 is empty, any other value is
//! the piece's own id, which is also its colour id. Rotation never touches the
//! catalog; it derives a new matrix. All four rotations of every piece are
//! computed at compile time.

use crate::types::{ColorToken, PieceKind, PIECE_BOX, PIECE_COUNT};

/// A piece matrix, row-major: `shape[row][col]`
pub type Shape = [[u8; PIECE_BOX]; PIECE_BOX];

/// Base (rotation 0) shapes, in id order.
const SHAPES: [Shape; PIECE_COUNT as usize] = [
    // I
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    // O
    [[0, 0, 0, 0], [0, 2, 2, 0], [0, 2, 2, 0], [0, 0, 0, 0]],
    // L
    [[3, 3, 0, 0], [0, 3, 0, 0], [0, 3, 0, 0], [0, 0, 0, 0]],
    // J
    [[0, 4, 4, 0], [0, 4, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0]],
    // T
    [[0, 5, 0, 0], [5, 5, 5, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    // Z
    [[0, 6, 0, 0], [6, 6, 0, 0], [6, 0, 0, 0], [0, 0, 0, 0]],
    // S
    [[7, 0, 0, 0], [7, 7, 0, 0], [0, 7, 0, 0], [0, 0, 0, 0]],
];

/// Rotation table: `ROTATIONS[kind.index()][rotation % 4]`
static ROTATIONS: [[Shape; 4]; PIECE_COUNT as usize] = build_rotations();

/// Rotate a matrix 90° clockwise: `new[i][j] = old[N - j][i]`.
pub const fn rotate_cw(shape: &Shape) -> Shape {
    const N: usize = PIECE_BOX - 1;
    let mut out = [[0u8; PIECE_BOX]; PIECE_BOX];
    let mut i = 0;
    while i < PIECE_BOX {
        let mut j = 0;
        while j < PIECE_BOX {
            out[i][j] = shape[N - j][i];
            j += 1;
        }
        i += 1;
    }
    out
}

const fn build_rotations() -> [[Shape; 4]; PIECE_COUNT as usize] {
    let mut table = [[[[0u8; PIECE_BOX]; PIECE_BOX]; 4]; PIECE_COUNT as usize];
    let mut k = 0;
    while k < PIECE_COUNT as usize {
        let mut shape = SHAPES[k];
        let mut r = 0;
        while r < 4 {
            table[k][r] = shape;
            shape = rotate_cw(&shape);
            r += 1;
        }
        k += 1;
    }
    table
}

/// Base shape of a piece
pub fn shape_of(kind: PieceKind) -> &'static Shape {
    &SHAPES[kind.index()]
}

/// Shape of a piece after `rotation` clockwise quarter turns.
///
/// Only `rotation % 4` matters, so callers may keep an ever-growing counter.
pub fn rotated_shape(kind: PieceKind, rotation: u32) -> Shape {
    ROTATIONS[kind.index()][(rotation % 4) as usize]
}

/// Colour token for a cell value.
///
/// # Panics
///
/// Panics on ids outside 0..=7; cell values only ever come from the catalog.
pub fn color_of(id: u8) -> ColorToken {
    match id {
        0 => ColorToken::Background,
        1 => ColorToken::Cyan,
        2 => ColorToken::Yellow,
        3 => ColorToken::Orange,
        4 => ColorToken::Magenta,
        5 => ColorToken::BlueViolet,
        6 => ColorToken::Lime,
        7 => ColorToken::Red,
        _ => panic!("invalid colour id {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_cells_carry_own_id() {
        for kind in PieceKind::ALL {
            let shape = shape_of(kind);
            let mut filled = 0;
            for row in shape.iter() {
                for &v in row.iter() {
                    assert!(v == 0 || v == kind.id(), "{kind:?} has foreign value {v}");
                    if v != 0 {
                        filled += 1;
                    }
                }
            }
            assert_eq!(filled, 4, "{kind:?} should have 4 cells");
        }
    }

    #[test]
    fn test_rotate_cw_t_piece() {
        // T pointing up, rotated once points right (about the 4x4 centre)
        let rotated = rotate_cw(shape_of(PieceKind::T));
        assert_eq!(
            rotated,
            [[0, 0, 5, 0], [0, 0, 5, 5], [0, 0, 5, 0], [0, 0, 0, 0]]
        );
    }

    #[test]
    fn test_rotation_zero_is_base_shape() {
        for kind in PieceKind::ALL {
            assert_eq!(&rotated_shape(kind, 0), shape_of(kind));
        }
    }

    #[test]
    fn test_rotation_wraps_at_u32_max() {
        // u32::MAX + 1 wraps to 0, which is also 0 mod 4
        let kind = PieceKind::L;
        assert_eq!(rotated_shape(kind, u32::MAX), rotated_shape(kind, 3));
    }

    #[test]
    fn test_color_of_background() {
        assert_eq!(color_of(0), ColorToken::Background);
        assert_eq!(color_of(PieceKind::I.id()), ColorToken::Cyan);
        assert_eq!(color_of(PieceKind::S.id()), ColorToken::Red);
    }

    #[test]
    #[should_panic(expected = "invalid colour id")]
    fn test_color_of_rejects_unknown_id() {
        color_of(8);
    }
}
