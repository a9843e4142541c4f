// Depth-limited minimax with alpha-beta pruning, plus a seeded random mover.
use checkers_core::{Board, Color, Move};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::{Heuristic, SearchConfig};
use crate::evaluation::{material_score, positional_score, winner_of, WIN_SCORE};

// Bounds for the search window; every real score lies strictly inside.
const INFINITY: i32 = i32::MAX;

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Backed-up score from White's point of view.
    pub score: i32,
    /// Move that reaches the score; `None` if the side to move has none.
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Static score of `board` with the configured heuristic.
    pub fn evaluate(&self, board: &Board) -> i32 {
        match self.config.heuristic() {
            Heuristic::Material => material_score(board),
            Heuristic::Positional => positional_score(board),
        }
    }

    /// Searches `config.depth()` plies for `color`. White maximizes.
    pub fn search(&self, board: &Board, color: Color) -> SearchResult {
        let (score, best_move) = self.minimax(
            board,
            self.config.depth(),
            color == Color::White,
            -INFINITY,
            INFINITY,
        );
        debug!(
            "{:?} searched {} plies: eval {}, move {}",
            color,
            self.config.depth(),
            score,
            best_move
                .as_ref()
                .map_or_else(|| "none".to_string(), Move::to_string)
        );
        SearchResult { score, best_move }
    }

    pub fn best_move(&self, board: &Board, color: Color) -> Option<Move> {
        self.search(board, color).best_move
    }

    /// Minimax over cloned boards. Returns the backed-up value and the move
    /// leading to it; on equal values the move enumerated last wins.
    pub fn minimax(
        &self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        if depth == 0 || winner_of(board).is_some() {
            return (self.evaluate(board), None);
        }

        let color = if maximizing { Color::White } else { Color::Black };
        let legal = board.all_moves_for_color(color);

        // No move available: that side has lost.
        if legal.is_empty() {
            let score = self.evaluate(board);
            let score = if maximizing {
                score - WIN_SCORE
            } else {
                score + WIN_SCORE
            };
            trace!("{:?} is blocked at depth {}, score {}", color, depth, score);
            return (score, None);
        }

        let mut best_move = None;
        if maximizing {
            let mut max_eval = -INFINITY;
            for mv in legal.moves() {
                let mut child = board.clone();
                child.apply(&mv);
                let (value, _) = self.minimax(&child, depth - 1, false, alpha, beta);
                if value >= max_eval {
                    max_eval = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(max_eval);
                if beta <= alpha {
                    trace!("beta cutoff at depth {}", depth);
                    break;
                }
            }
            (max_eval, best_move)
        } else {
            let mut min_eval = INFINITY;
            for mv in legal.moves() {
                let mut child = board.clone();
                child.apply(&mv);
                let (value, _) = self.minimax(&child, depth - 1, true, alpha, beta);
                if value <= min_eval {
                    min_eval = value;
                    best_move = Some(mv);
                }
                beta = beta.min(min_eval);
                if beta <= alpha {
                    trace!("alpha cutoff at depth {}", depth);
                    break;
                }
            }
            (min_eval, best_move)
        }
    }

    /// A uniformly chosen piece and destination among the legal moves.
    /// The generator is reseeded on every call, so the same position always
    /// gives the same move.
    pub fn random_move(&self, board: &Board, color: Color) -> Option<Move> {
        let legal = board.all_moves_for_color(color);
        let mut rng = StdRng::seed_from_u64(self.config.seed());

        let origins: Vec<_> = legal.origins().collect();
        let from = *origins.choose(&mut rng)?;
        let dest = legal.get(&from)?.choose(&mut rng)?;
        Some(Move::capture(from, dest.to, dest.captured.clone()))
    }
}
