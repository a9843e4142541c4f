/// A diagonal step as (row delta, column delta).
pub type Direction = (isize, isize);

// White men move up the board (towards row 0), black men move down.
const WHITE_DIRECTIONS: [Direction; 2] = [(-1, 1), (-1, -1)];
const BLACK_DIRECTIONS: [Direction; 2] = [(1, 1), (1, -1)];
const KING_DIRECTIONS: [Direction; 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn man(self) -> PieceKind {
        match self {
            Color::White => PieceKind::WhiteMan,
            Color::Black => PieceKind::BlackMan,
        }
    }

    pub fn king(self) -> PieceKind {
        self.man().promoted()
    }
}

/// Contents of a square. The discriminants are the stable integer codes
/// used by collaborators; a king is always its man's code plus two.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    Empty = 0,
    WhiteMan = 1,
    BlackMan = 2,
    WhiteKing = 3,
    BlackKing = 4,
}

impl PieceKind {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(PieceKind::Empty),
            1 => Some(PieceKind::WhiteMan),
            2 => Some(PieceKind::BlackMan),
            3 => Some(PieceKind::WhiteKing),
            4 => Some(PieceKind::BlackKing),
            _ => None,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            PieceKind::Empty => None,
            PieceKind::WhiteMan | PieceKind::WhiteKing => Some(Color::White),
            PieceKind::BlackMan | PieceKind::BlackKing => Some(Color::Black),
        }
    }

    pub fn is_empty(self) -> bool {
        self == PieceKind::Empty
    }

    pub fn is_king(self) -> bool {
        matches!(self, PieceKind::WhiteKing | PieceKind::BlackKing)
    }

    /// The king variant of a man. Kings and empty squares are returned unchanged.
    pub fn promoted(self) -> Self {
        match self {
            PieceKind::WhiteMan => PieceKind::WhiteKing,
            PieceKind::BlackMan => PieceKind::BlackKing,
            other => other,
        }
    }

    /// Diagonal steps available to this piece.
    ///
    /// # Panics
    /// On an empty square: only pieces have directions.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            PieceKind::WhiteMan => &WHITE_DIRECTIONS,
            PieceKind::BlackMan => &BLACK_DIRECTIONS,
            PieceKind::WhiteKing | PieceKind::BlackKing => &KING_DIRECTIONS,
            PieceKind::Empty => panic!("an empty square has no move directions"),
        }
    }

    /// True iff `other` is a piece of the opposite color.
    ///
    /// # Panics
    /// If `self` is empty.
    pub fn is_opponent(self, other: PieceKind) -> bool {
        let Some(color) = self.color() else {
            panic!("is_opponent called on an empty square");
        };
        other.color() == Some(color.opponent())
    }
}
