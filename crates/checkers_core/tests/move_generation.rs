use checkers_core::{Board, Color, Destination, PieceKind, Square};

const OPENING: [[u8; 8]; 8] = [
    [0, 2, 0, 2, 0, 2, 0, 2],
    [2, 0, 2, 0, 2, 0, 2, 0],
    [0, 2, 0, 2, 0, 2, 0, 2],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 1, 0, 1, 0, 1, 0],
    [0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0],
];

// white man on (5, 2) can take (4, 3) and then fork left or right
const DOUBLE_JUMP: [[u8; 8]; 8] = [
    [0, 2, 0, 2, 0, 2, 0, 2],
    [2, 0, 0, 0, 2, 0, 0, 0],
    [0, 2, 0, 2, 0, 2, 0, 2],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 0, 0, 0, 0],
    [1, 0, 1, 0, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

// same, with a white king on (5, 2) that can turn back for a third piece
const KING_TRIPLE: [[u8; 8]; 8] = [
    [0, 2, 0, 2, 0, 2, 0, 2],
    [2, 0, 0, 0, 2, 0, 0, 0],
    [0, 2, 0, 2, 0, 2, 0, 2],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 2, 0, 0, 0, 0],
    [1, 0, 3, 0, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col)
}

fn dest(to: (usize, usize), captured: &[(usize, usize)]) -> Destination {
    Destination {
        to: to.into(),
        captured: captured.iter().map(|&c| c.into()).collect(),
    }
}

#[test]
fn opening_grid_matches_standard_board() {
    assert_eq!(Board::from_rows(&OPENING).unwrap(), Board::standard());
}

#[test]
fn single_piece_moves() {
    let opening = Board::from_rows(&OPENING).unwrap();
    assert_eq!(
        opening.moves_for_piece(sq(5, 2), PieceKind::WhiteMan),
        vec![dest((4, 3), &[]), dest((4, 1), &[])]
    );
    assert_eq!(
        opening.moves_for_piece(sq(2, 1), PieceKind::BlackMan),
        vec![dest((3, 2), &[]), dest((3, 0), &[])]
    );

    let double = Board::from_rows(&DOUBLE_JUMP).unwrap();
    assert_eq!(
        double.moves_for_piece(sq(5, 2), PieceKind::WhiteMan),
        vec![
            dest((1, 6), &[(4, 3), (2, 5)]),
            dest((1, 2), &[(4, 3), (2, 3)]),
        ]
    );

    let king = Board::from_rows(&KING_TRIPLE).unwrap();
    assert_eq!(
        king.moves_for_piece(sq(5, 2), PieceKind::WhiteKing),
        vec![dest((3, 0), &[(4, 3), (2, 3), (2, 1)])]
    );
}

#[test]
fn opening_offers_four_pieces_without_captures() {
    let set = Board::standard().all_moves_for_color(Color::White);
    assert_eq!(
        set.origins().collect::<Vec<_>>(),
        vec![sq(5, 0), sq(5, 2), sq(5, 4), sq(5, 6)]
    );
    assert_eq!(set.max_captures(), 0);
    assert_eq!(set.get(&sq(5, 0)).unwrap(), &[dest((4, 1), &[])]);
    assert_eq!(
        set.get(&sq(5, 6)).unwrap(),
        &[dest((4, 7), &[]), dest((4, 5), &[])]
    );
    for (_, dests) in set.iter() {
        assert!((1..=2).contains(&dests.len()));
        assert!(dests.iter().all(|d| d.captured.is_empty()));
    }
}

#[test]
fn longest_chain_is_mandatory() {
    let double = Board::from_rows(&DOUBLE_JUMP).unwrap();
    let set = double.all_moves_for_color(Color::White);
    assert_eq!(set.origins().collect::<Vec<_>>(), vec![sq(5, 2)]);
    assert_eq!(set.max_captures(), 2);
    // the single jump to (3, 4) is not offered
    assert!(set
        .get(&sq(5, 2))
        .unwrap()
        .iter()
        .all(|d| d.to != sq(3, 4)));

    let king = Board::from_rows(&KING_TRIPLE).unwrap();
    let set = king.all_moves_for_color(Color::White);
    assert_eq!(set.origins().collect::<Vec<_>>(), vec![sq(5, 2)]);
    assert_eq!(set.max_captures(), 3);
}

#[test]
fn black_reply_in_king_position() {
    let king = Board::from_rows(&KING_TRIPLE).unwrap();
    let set = king.all_moves_for_color(Color::Black);
    assert_eq!(set.origins().collect::<Vec<_>>(), vec![sq(4, 3)]);
    assert_eq!(
        set.get(&sq(4, 3)).unwrap(),
        &[dest((6, 5), &[(5, 4)]), dest((6, 1), &[(5, 2)])]
    );
}

#[test]
fn kings_are_scanned_after_men() {
    let mut board = Board::from_rows(&OPENING).unwrap();
    board.place(sq(4, 5), PieceKind::WhiteKing);
    let origins: Vec<Square> = board.all_moves_for_color(Color::White).origins().collect();
    assert_eq!(origins.last(), Some(&sq(4, 5)));
}
