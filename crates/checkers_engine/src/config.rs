use std::fmt;
use std::str::FromStr;

use checkers_core::ConfigError;
use thiserror::Error;

pub const DEFAULT_DEPTH: u8 = 6;
pub const DEFAULT_SEED: u64 = 25;

/// Which static evaluation scores the leaves of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Men and kings only.
    Material,
    /// Material plus a bonus for advanced men.
    #[default]
    Positional,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic `{0}`, expected `material` or `positional`")]
pub struct ParseHeuristicError(String);

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material" => Ok(Heuristic::Material),
            "positional" => Ok(Heuristic::Positional),
            _ => Err(ParseHeuristicError(s.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Material => write!(f, "material"),
            Heuristic::Positional => write!(f, "positional"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    depth: u8,
    seed: u64,
    heuristic: Heuristic,
}

impl SearchConfig {
    pub fn new(depth: u8, seed: u64, heuristic: Heuristic) -> Result<Self, ConfigError> {
        if depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(Self {
            depth,
            seed,
            heuristic,
        })
    }

    /// Plies searched by `best_move`.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Seed for the random mover.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            seed: DEFAULT_SEED,
            heuristic: Heuristic::default(),
        }
    }
}
