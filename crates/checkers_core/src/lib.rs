// Core checkers game logic modules
pub mod board;
pub mod config;
pub mod game;
pub mod moves;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::{Board, BoardError};
pub use config::{BoardConfig, ConfigError};
pub use game::{Game, MoveError};
pub use moves::{Destination, Move, MoveSet};
pub use piece::{Color, Direction, PieceKind};
pub use position::Square;
