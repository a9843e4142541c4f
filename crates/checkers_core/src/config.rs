use thiserror::Error;

pub const DEFAULT_ROWS: usize = 8;
pub const DEFAULT_COLS: usize = 8;
const MIN_SIDE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be even and at least 4, got {rows}x{cols}")]
    BadDimensions { rows: usize, cols: usize },
    #[error("search depth must be at least one ply")]
    ZeroDepth,
}

/// Board geometry. Only constructible with dimensions that allow a balanced
/// starting layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let valid = |n: usize| n >= MIN_SIDE && n % 2 == 0;
        if !valid(rows) || !valid(cols) {
            return Err(ConfigError::BadDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Rows filled with pieces for each side at the start of a game.
    pub fn home_rows(&self) -> usize {
        (self.rows - 2) / 2
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_even_sizes() {
        for size in [4, 6, 8, 10] {
            let config = BoardConfig::new(size, size).unwrap();
            assert_eq!(config.rows(), size);
        }
        assert_eq!(BoardConfig::default().home_rows(), 3);
    }

    #[test]
    fn rejects_odd_or_tiny_sizes() {
        assert_eq!(
            BoardConfig::new(7, 8),
            Err(ConfigError::BadDimensions { rows: 7, cols: 8 })
        );
        assert!(BoardConfig::new(2, 2).is_err());
        assert!(BoardConfig::new(8, 5).is_err());
    }
}
