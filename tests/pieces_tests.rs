//! Piece catalog and rotation tests

use tick_tetris::core::{color_of, rotate_cw, rotated_shape, shape_of};
use tick_tetris::types::{ColorToken, PieceKind};

fn filled(shape: &[[u8; 4]; 4]) -> usize {
    shape.iter().flatten().filter(|v| **v != 0).count()
}

#[test]
fn test_every_piece_has_four_cells_of_its_own_id() {
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        assert_eq!(filled(shape), 4, "{kind:?}");
        for &v in shape.iter().flatten() {
            assert!(v == 0 || v == kind.id(), "{kind:?} holds {v}");
        }
    }
}

#[test]
fn test_catalog_ids_follow_kind_order() {
    let ids: Vec<u8> = PieceKind::ALL.iter().map(|k| k.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(PieceKind::from_id(0), None);
    assert_eq!(PieceKind::from_id(8), None);
}

#[test]
fn test_rotation_zero_is_catalog_shape() {
    for kind in PieceKind::ALL {
        assert_eq!(&rotated_shape(kind, 0), shape_of(kind));
    }
}

#[test]
fn test_rotation_is_clockwise() {
    let i = rotated_shape(PieceKind::I, 1);
    // Vertical bar in column 1 becomes a horizontal bar in row 1
    assert_eq!(i, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);

    let l = rotated_shape(PieceKind::L, 1);
    assert_eq!(l, [[0, 0, 0, 3], [0, 3, 3, 3], [0, 0, 0, 0], [0, 0, 0, 0]]);
}

#[test]
fn test_rotation_is_periodic() {
    for kind in PieceKind::ALL {
        for r in 0..8 {
            assert_eq!(rotated_shape(kind, r), rotated_shape(kind, r + 4), "{kind:?} r={r}");
        }
        assert_eq!(rotated_shape(kind, u32::MAX), rotated_shape(kind, 3));
    }
}

#[test]
fn test_rotate_cw_preserves_cells() {
    for kind in PieceKind::ALL {
        let once = rotate_cw(shape_of(kind));
        assert_eq!(filled(&once), 4);
        assert_eq!(&rotate_cw(&rotate_cw(&rotate_cw(&once))), shape_of(kind));
    }
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    for r in 0..4 {
        assert_eq!(&rotated_shape(PieceKind::O, r), shape_of(PieceKind::O));
    }
}

#[test]
fn test_colour_mapping() {
    assert_eq!(color_of(0), ColorToken::Background);
    assert_eq!(color_of(PieceKind::I.id()), ColorToken::Cyan);
    assert_eq!(color_of(PieceKind::O.id()), ColorToken::Yellow);
    assert_eq!(color_of(PieceKind::L.id()), ColorToken::Orange);
    assert_eq!(color_of(PieceKind::J.id()), ColorToken::Magenta);
    assert_eq!(color_of(PieceKind::T.id()), ColorToken::BlueViolet);
    assert_eq!(color_of(PieceKind::Z.id()), ColorToken::Lime);
    assert_eq!(color_of(PieceKind::S.id()), ColorToken::Red);
}

#[test]
#[should_panic(expected = "invalid colour id")]
fn test_colour_mapping_rejects_unknown_id() {
    color_of(8);
}
