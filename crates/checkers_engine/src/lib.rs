pub mod ai;
pub mod config;
pub mod evaluation;
pub mod search;

pub use ai::{CheckersAI, Strategy};
pub use config::{Heuristic, SearchConfig};
pub use evaluation::{material_score, positional_score, winner_of};
pub use search::{SearchResult, Searcher};
