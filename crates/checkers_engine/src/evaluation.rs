use checkers_core::{Board, Color, PieceKind};

// Material values, in points per piece
const MAN_VALUE: i32 = 10;
const KING_VALUE: i32 = 15;

/// Added for the winner once one side has no pieces left.
pub const WIN_SCORE: i32 = 10_000;

/// The side that has won by material: the opponent of a side with no pieces.
pub fn winner_of(board: &Board) -> Option<Color> {
    if board.count(Color::White) == 0 {
        Some(Color::Black)
    } else if board.count(Color::Black) == 0 {
        Some(Color::White)
    } else {
        None
    }
}

/// Evaluates a board by material only.
/// Positive scores favor White, negative scores favor Black.
pub fn material_score(board: &Board) -> i32 {
    let count = |kind: PieceKind| board.count_of(kind) as i32;

    let mut score = MAN_VALUE * (count(PieceKind::WhiteMan) - count(PieceKind::BlackMan));
    score += KING_VALUE * (count(PieceKind::WhiteKing) - count(PieceKind::BlackKing));

    score += match winner_of(board) {
        Some(Color::White) => WIN_SCORE,
        Some(Color::Black) => -WIN_SCORE,
        None => 0,
    };
    score
}

/// Material plus an advancement bonus for men.
///
/// Rows are grouped in pairs counted from White's far side: rows 0-1 are
/// worth `rows` points to a white man, rows 2-3 `rows - 2`, and so on down
/// to 2 on White's home pair. Black uses the same bands mirrored.
pub fn positional_score(board: &Board) -> i32 {
    let rows = board.rows();
    let band = |row: usize| (rows - 2 * (row / 2)) as i32;

    let advancement: i32 = board
        .squares()
        .map(|(sq, kind)| match kind {
            PieceKind::WhiteMan => band(sq.row),
            PieceKind::BlackMan => -band(rows - 1 - sq.row),
            _ => 0,
        })
        .sum();

    material_score(board) + advancement
}
