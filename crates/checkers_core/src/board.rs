use std::fmt;

use thiserror::Error;

use crate::config::{BoardConfig, ConfigError};
use crate::moves::Move;
use crate::piece::{Color, Direction, PieceKind};
use crate::position::Square;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("row {row} has {len} squares, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("unknown piece code {code} at {square}")]
    UnknownCode { code: u8, square: Square },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    grid: Vec<PieceKind>,
    white_count: usize,
    black_count: usize,
    winner: Option<Color>,
    // Only used for highlighting by the caller.
    last_moved: Option<Square>,
    last_moved_from: Option<Square>,
}

impl Board {
    /// A board with the standard starting layout for `config`.
    pub fn new(config: BoardConfig) -> Self {
        let mut board = Self::empty(config);
        board.setup_initial_position();
        board
    }

    /// The standard 8x8 game.
    pub fn standard() -> Self {
        Self::new(BoardConfig::default())
    }

    pub fn empty(config: BoardConfig) -> Self {
        Self {
            config,
            grid: vec![PieceKind::Empty; config.rows() * config.cols()],
            white_count: 0,
            black_count: 0,
            winner: None,
            last_moved: None,
            last_moved_from: None,
        }
    }

    /// Builds a board from rows of piece codes (0 empty, 1/2 white/black men,
    /// 3/4 white/black kings). Counts are recomputed from the grid and a side
    /// with no pieces left is recorded as having lost.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut board = Self::empty(BoardConfig::new(rows.len(), cols)?);

        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    len: codes.len(),
                    expected: cols,
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                let square = Square::new(row, col);
                let kind = PieceKind::from_code(code)
                    .ok_or(BoardError::UnknownCode { code, square })?;
                board.place(square, kind);
            }
        }

        board.winner = match (board.white_count, board.black_count) {
            (0, b) if b > 0 => Some(Color::Black),
            (w, 0) if w > 0 => Some(Color::White),
            _ => None,
        };
        Ok(board)
    }

    fn setup_initial_position(&mut self) {
        let home_rows = self.config.home_rows();
        let rows = self.rows();

        for row in 0..rows {
            let kind = if row < home_rows {
                PieceKind::BlackMan
            } else if row >= rows - home_rows {
                PieceKind::WhiteMan
            } else {
                continue;
            };
            for col in 0..self.cols() {
                let square = Square::new(row, col);
                if square.is_dark() {
                    self.place(square, kind);
                }
            }
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    pub fn valid_square(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    /// The square `steps` along `dir` from `from`, if it is on the board.
    pub fn neighbour(&self, from: Square, dir: Direction, steps: isize) -> Option<Square> {
        from.offset(dir, steps)
            .filter(|sq| self.valid_square(sq.row as isize, sq.col as isize))
    }

    fn index(&self, square: Square) -> usize {
        assert!(
            square.row < self.rows() && square.col < self.cols(),
            "square {square} is off the board"
        );
        square.row * self.cols() + square.col
    }

    pub fn piece(&self, square: Square) -> PieceKind {
        self.grid[self.index(square)]
    }

    /// Every square, row-major, with its contents.
    pub fn squares(&self) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        let cols = self.cols();
        self.grid
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (Square::new(i / cols, i % cols), kind))
    }

    /// Squares holding exactly `kind`, row-major.
    pub fn squares_of(&self, kind: PieceKind) -> impl Iterator<Item = Square> + '_ {
        self.squares()
            .filter(move |&(_, k)| k == kind)
            .map(|(sq, _)| sq)
    }

    pub fn count_of(&self, kind: PieceKind) -> usize {
        self.grid.iter().filter(|&&k| k == kind).count()
    }

    /// Puts `kind` on `square`, replacing whatever was there. Setup helper:
    /// keeps the counts in step but never decides a winner.
    pub fn place(&mut self, square: Square, kind: PieceKind) {
        let idx = self.index(square);
        let previous = std::mem::replace(&mut self.grid[idx], kind);
        match previous.color() {
            Some(Color::White) => self.white_count -= 1,
            Some(Color::Black) => self.black_count -= 1,
            None => {}
        }
        match kind.color() {
            Some(Color::White) => self.white_count += 1,
            Some(Color::Black) => self.black_count += 1,
            None => {}
        }
    }

    /// Moves the piece on `from` to `to`, removes every captured square and
    /// promotes the piece if it reached its far row. Legality is the caller's
    /// responsibility.
    ///
    /// # Panics
    /// If `from` is empty or `to` is occupied.
    pub fn apply_move(&mut self, from: Square, to: Square, captured: &[Square]) {
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        let piece = self.grid[from_idx];
        assert!(!piece.is_empty(), "no piece to move on {from}");
        assert!(self.grid[to_idx].is_empty(), "destination {to} is occupied");

        self.grid[to_idx] = piece;
        self.grid[from_idx] = PieceKind::Empty;

        self.remove_captured(captured);

        self.last_moved = Some(to);
        self.last_moved_from = Some(from);

        let far_row = match piece {
            PieceKind::WhiteMan => Some(0),
            PieceKind::BlackMan => Some(self.rows() - 1),
            _ => None,
        };
        if far_row == Some(to.row) {
            self.grid[to_idx] = piece.promoted();
        }
    }

    pub fn apply(&mut self, mv: &Move) {
        self.apply_move(mv.from, mv.to, &mv.captured);
    }

    pub fn remove_captured(&mut self, squares: &[Square]) {
        for &square in squares {
            self.remove_piece(square);
        }
    }

    /// Clears `square` and returns what was on it. The first side to run out
    /// of pieces loses; later removals never change the winner.
    pub fn remove_piece(&mut self, square: Square) -> PieceKind {
        let idx = self.index(square);
        let removed = std::mem::take(&mut self.grid[idx]);
        match removed.color() {
            Some(Color::White) => {
                self.white_count -= 1;
                if self.white_count == 0 && self.winner.is_none() {
                    self.winner = Some(Color::Black);
                }
            }
            Some(Color::Black) => {
                self.black_count -= 1;
                if self.black_count == 0 && self.winner.is_none() {
                    self.winner = Some(Color::White);
                }
            }
            None => {}
        }
        removed
    }

    pub fn white_count(&self) -> usize {
        self.white_count
    }

    pub fn black_count(&self) -> usize {
        self.black_count
    }

    pub fn count(&self, color: Color) -> usize {
        match color {
            Color::White => self.white_count,
            Color::Black => self.black_count,
        }
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn last_moved(&self) -> Option<Square> {
        self.last_moved
    }

    pub fn last_moved_from(&self) -> Option<Square> {
        self.last_moved_from
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let c = match self.piece(Square::new(row, col)) {
                    PieceKind::Empty => '.',
                    PieceKind::WhiteMan => 'w',
                    PieceKind::BlackMan => 'b',
                    PieceKind::WhiteKing => 'W',
                    PieceKind::BlackKing => 'B',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
