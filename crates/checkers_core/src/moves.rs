use std::cmp::Ordering;
use std::fmt;

use indexmap::IndexMap;

use crate::{Board, Color, PieceKind, Square};

/// One legal landing square for a piece, with the squares it jumps on the way.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination {
    pub to: Square,
    pub captured: Vec<Square>,
}

impl Destination {
    pub fn step(to: Square) -> Self {
        Self {
            to,
            captured: Vec::new(),
        }
    }

    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured: Vec<Square>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: Vec::new(),
        }
    }

    pub fn capture(from: Square, to: Square, captured: Vec<Square>) -> Self {
        Self { from, to, captured }
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if self.is_capture() {
            write!(f, " x")?;
            for sq in &self.captured {
                write!(f, " {sq}")?;
            }
        }
        Ok(())
    }
}

/// Legal destinations per origin square, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    by_origin: IndexMap<Square, Vec<Destination>>,
    max_captures: usize,
}

impl MoveSet {
    pub fn get(&self, origin: &Square) -> Option<&[Destination]> {
        self.by_origin.get(origin).map(Vec::as_slice)
    }

    pub fn origins(&self) -> impl Iterator<Item = Square> + '_ {
        self.by_origin.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Destination])> + '_ {
        self.by_origin.iter().map(|(&sq, dests)| (sq, dests.as_slice()))
    }

    /// Every legal move, origins in discovery order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.iter().flat_map(|(from, dests)| {
            dests
                .iter()
                .map(move |d| Move::capture(from, d.to, d.captured.clone()))
        })
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.get(&mv.from).is_some_and(|dests| {
            dests
                .iter()
                .any(|d| d.to == mv.to && d.captured == mv.captured)
        })
    }

    /// Number of origin squares with at least one move.
    pub fn len(&self) -> usize {
        self.by_origin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_origin.is_empty()
    }

    /// Captures made by every move in the set; 0 when none can capture.
    pub fn max_captures(&self) -> usize {
        self.max_captures
    }
}

impl Board {
    /// All destinations for the `kind` piece standing on `square`, keeping
    /// only the longest capture chains it can make. Plain steps are offered
    /// only when no capture exists.
    pub fn moves_for_piece(&self, square: Square, kind: PieceKind) -> Vec<Destination> {
        if kind.is_empty() {
            return Vec::new();
        }
        let mut captured = Vec::new();
        self.chain_moves(square, kind, &mut captured)
    }

    // `captured` is the chain so far; every frame pops what it pushes.
    fn chain_moves(
        &self,
        from: Square,
        kind: PieceKind,
        captured: &mut Vec<Square>,
    ) -> Vec<Destination> {
        let dirs = kind.directions();
        let mut found: Vec<Destination> = Vec::new();

        // plain steps only before the first capture
        if captured.is_empty() {
            for &dir in dirs {
                if let Some(to) = self.neighbour(from, dir, 1) {
                    if self.piece(to).is_empty() {
                        found.push(Destination::step(to));
                    }
                }
            }
        }

        for &dir in dirs {
            let (Some(over), Some(landing)) =
                (self.neighbour(from, dir, 1), self.neighbour(from, dir, 2))
            else {
                continue;
            };
            if !kind.is_opponent(self.piece(over)) || !self.piece(landing).is_empty() {
                continue;
            }
            if captured.contains(&over) {
                continue;
            }

            captured.push(over);
            let best = found.last().map_or(0, Destination::capture_count);
            if !found.is_empty() && captured.len() > best {
                found.clear();
            }
            if found.is_empty() || captured.len() >= best {
                found.push(Destination {
                    to: landing,
                    captured: captured.clone(),
                });
            }

            let longer = self.chain_moves(landing, kind, captured);
            let longer_vs_found = match (longer.last(), found.last()) {
                (Some(tail), Some(current)) => {
                    Some(tail.capture_count().cmp(&current.capture_count()))
                }
                _ => None,
            };
            match longer_vs_found {
                Some(Ordering::Greater) => found = longer,
                Some(Ordering::Equal) => found.extend(longer),
                _ => {}
            }
            captured.pop();
        }

        found
    }

    /// Legal moves for `color` under the mandatory maximum capture rule:
    /// only pieces whose best chain matches the side's longest chain are
    /// kept. Men are scanned before kings, each row-major.
    pub fn all_moves_for_color(&self, color: Color) -> MoveSet {
        let mut set = MoveSet::default();

        for kind in [color.man(), color.king()] {
            for square in self.squares_of(kind) {
                let dests = self.moves_for_piece(square, kind);
                let Some(first) = dests.first() else {
                    continue;
                };
                let count = first.capture_count();
                if count > set.max_captures {
                    set.by_origin.clear();
                    set.max_captures = count;
                }
                if count >= set.max_captures {
                    set.by_origin.insert(square, dests);
                }
            }
        }

        log::trace!(
            "{:?} has {} movable pieces, {} captures each",
            color,
            set.len(),
            set.max_captures
        );
        set
    }
}
