use checkers_core::{Board, Color, Move};

use crate::config::SearchConfig;
use crate::search::Searcher;

const MIN_DEPTH: u8 = 1;
const MAX_DEPTH: u8 = 10;

/// How a computer player picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Minimax,
    Random,
}

/// A computer player for one side.
#[derive(Debug, Clone)]
pub struct CheckersAI {
    color: Color,
    strategy: Strategy,
    searcher: Searcher,
}

impl CheckersAI {
    /// Depth outside `MIN_DEPTH..=MAX_DEPTH` is clamped into range.
    pub fn new(color: Color, strategy: Strategy, config: SearchConfig) -> Self {
        let depth = config.depth().clamp(MIN_DEPTH, MAX_DEPTH);
        let config = SearchConfig::new(depth, config.seed(), config.heuristic())
            .unwrap_or(config);
        CheckersAI {
            color,
            strategy,
            searcher: Searcher::new(config),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// The move this player wants on `board`, or `None` if it cannot move.
    pub fn get_move(&self, board: &Board) -> Option<Move> {
        match self.strategy {
            Strategy::Minimax => self.searcher.best_move(board, self.color),
            Strategy::Random => self.searcher.random_move(board, self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Heuristic;

    #[test]
    fn deep_requests_are_clamped() {
        let config = SearchConfig::new(40, 7, Heuristic::Material).unwrap();
        let ai = CheckersAI::new(Color::Black, Strategy::Minimax, config);
        assert_eq!(ai.strategy(), Strategy::Minimax);
        assert_eq!(ai.searcher().config().depth(), MAX_DEPTH);
        assert_eq!(ai.searcher().config().seed(), 7);
        assert_eq!(ai.searcher().config().heuristic(), Heuristic::Material);
    }

    #[test]
    fn both_strategies_return_legal_moves() {
        let board = Board::standard();
        let config = SearchConfig::new(3, 25, Heuristic::Positional).unwrap();
        for strategy in [Strategy::Minimax, Strategy::Random] {
            let ai = CheckersAI::new(Color::White, strategy, config);
            let mv = ai.get_move(&board).unwrap();
            assert!(board.all_moves_for_color(Color::White).contains(&mv));
        }
    }
}
