use thiserror::Error;

use crate::{Board, BoardConfig, Color, Destination, Move, MoveSet, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over, {0:?} has won")]
    GameOver(Color),
    #[error("no piece of the side to move on {0}")]
    NotYourPiece(Square),
    #[error("{from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },
}

/// A game in progress: the authoritative board, whose turn it is and the
/// legal moves available to that side.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    legal: MoveSet,
    move_count: u32,
}

impl Game {
    pub fn new(config: BoardConfig) -> Self {
        Self::from_board(Board::new(config), Color::White)
    }

    /// Resumes play from an arbitrary position.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let legal = board.all_moves_for_color(turn);
        Self {
            board,
            turn,
            legal,
            move_count: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Completed white moves.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn legal_moves(&self) -> &MoveSet {
        &self.legal
    }

    /// Destinations for the piece on `square`; empty if it may not move.
    pub fn moves_for(&self, square: Square) -> &[Destination] {
        self.legal.get(&square).unwrap_or(&[])
    }

    pub fn is_on_turn(&self, kind: PieceKind) -> bool {
        kind.color() == Some(self.turn)
    }

    /// The winner once decided: the side that took the last enemy piece, or
    /// the opponent of a side left without a legal move.
    pub fn outcome(&self) -> Option<Color> {
        self.board.winner().or_else(|| {
            self.legal
                .is_empty()
                .then_some(self.turn.opponent())
        })
    }

    /// Moves the piece on `from` to `to` if that is one of its legal
    /// destinations, filling in the captured squares from the legal set.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        self.ensure_running()?;
        if !self.is_on_turn(self.board.piece(from)) {
            return Err(MoveError::NotYourPiece(from));
        }
        let dest = self
            .moves_for(from)
            .iter()
            .find(|d| d.to == to)
            .ok_or(MoveError::IllegalDestination { from, to })?;
        let mv = Move::capture(from, to, dest.captured.clone());
        self.commit(&mv);
        Ok(mv)
    }

    /// Plays a move chosen elsewhere, typically by a search.
    pub fn play(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.ensure_running()?;
        if !self.is_on_turn(self.board.piece(mv.from)) {
            return Err(MoveError::NotYourPiece(mv.from));
        }
        if !self.legal.contains(mv) {
            return Err(MoveError::IllegalDestination {
                from: mv.from,
                to: mv.to,
            });
        }
        self.commit(mv);
        Ok(())
    }

    fn ensure_running(&self) -> Result<(), MoveError> {
        match self.outcome() {
            Some(winner) => Err(MoveError::GameOver(winner)),
            None => Ok(()),
        }
    }

    fn commit(&mut self, mv: &Move) {
        self.board.apply(mv);
        if self.turn == Color::White {
            self.move_count += 1;
        }
        log::info!("{:?} plays {}", self.turn, mv);

        self.turn = self.turn.opponent();
        self.legal = self.board.all_moves_for_color(self.turn);
        if let Some(winner) = self.outcome() {
            log::info!("{:?} wins after {} moves", winner, self.move_count);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn white_moves_first_and_turns_alternate() {
        let mut game = Game::default();
        for i in 0..6 {
            let expected = if i % 2 == 0 { Color::White } else { Color::Black };
            assert_eq!(game.turn(), expected);
            assert!(game.is_on_turn(expected.man()));
            assert!(game.is_on_turn(expected.king()));
            assert!(!game.is_on_turn(expected.opponent().man()));
            let mv = game.legal_moves().moves().next().unwrap();
            game.play(&mv).unwrap();
        }
        assert_eq!(game.move_count(), 3);
    }

    #[test]
    fn try_move_fills_in_captures() {
        let board = Board::from_rows(&[
            [0u8, 2, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
            [0, 0, 2, 0, 0, 0],
            [0, 1, 0, 0, 0, 0],
            [0, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let mut game = Game::from_board(board, Color::White);
        let mv = game.try_move(sq(4, 1), sq(2, 3)).unwrap();
        assert_eq!(mv.captured, vec![sq(3, 2)]);
        assert_eq!(game.board().black_count(), 1);
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn rejects_wrong_side_and_bad_destinations() {
        let mut game = Game::default();
        assert_eq!(
            game.try_move(sq(2, 1), sq(3, 2)),
            Err(MoveError::NotYourPiece(sq(2, 1)))
        );
        assert_eq!(
            game.try_move(sq(4, 1), sq(3, 2)),
            Err(MoveError::NotYourPiece(sq(4, 1)))
        );
        assert_eq!(
            game.try_move(sq(5, 0), sq(3, 2)),
            Err(MoveError::IllegalDestination { from: sq(5, 0), to: sq(3, 2) })
        );
        assert!(game.moves_for(sq(7, 0)).is_empty());
        assert!(game.play(&Move::new(sq(5, 2), sq(3, 4))).is_err());
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn capturing_the_last_piece_ends_the_game() {
        let board = Board::from_rows(&[
            [0u8, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 2, 0],
            [0, 1, 0, 0],
        ])
        .unwrap();
        let mut game = Game::from_board(board, Color::White);
        game.try_move(sq(3, 1), sq(1, 3)).unwrap();
        assert_eq!(game.outcome(), Some(Color::White));
        assert_eq!(
            game.try_move(sq(1, 3), sq(0, 2)),
            Err(MoveError::GameOver(Color::White))
        );
    }

    #[test]
    fn side_without_moves_loses() {
        // black's only man is pinned against the bottom edge
        let board = Board::from_rows(&[
            [0u8, 1, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 2, 0],
        ])
        .unwrap();
        let game = Game::from_board(board, Color::Black);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.outcome(), Some(Color::White));
    }
}
