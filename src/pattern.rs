//! Board layout mask.
//!
//! A pattern classifies each cell of the 5x5 grid as either needing a song
//! or being a free space. Free cells are always considered matched, so they
//! never contribute to a board's song list.

use crate::constants::DEFAULT_PATTERN;

/// One cell of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Requires a distinct song.
    Filled,
    /// Wild space, pre-matched, holds no song.
    Free,
}

/// Immutable cell mask shared by every board in a run.
#[derive(Debug, Clone)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// The standard decorative mask from `constants`.
    pub fn standard() -> Self {
        Self::new(DEFAULT_PATTERN.to_vec())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell indices that require a song, in grid order.
    pub fn filled_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Filled)
            .map(|(i, _)| i)
    }

    /// Number of songs a board built from this pattern will hold.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Filled).count()
    }
}
