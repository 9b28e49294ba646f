//! Draw-night simulation for one set of boards.
//!
//! Songs are drawn uniformly without replacement from the full catalog.
//! After every draw each board is checked; the first draw on which at least
//! one board completes ends the trial. Boards completing on that same draw
//! all count as winners; nothing is re-checked afterwards.

use crate::board_generation::Board;
use crate::catalog::Catalog;
use rand::Rng;
use std::collections::HashSet;

/// Outcome of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    /// Draws taken until the first winner appeared (or the pool emptied).
    pub draws_until_win: u32,
    /// Boards complete on that final draw. Zero only in the degenerate case
    /// of no boards (or a board song missing from the catalog).
    pub winner_count: u32,
}

/// Run the draw loop against `boards` until a winner or pool exhaustion.
pub fn simulate_draws(boards: &[Board], catalog: &Catalog, rng: &mut impl Rng) -> TrialResult {
    let mut pool: Vec<String> = catalog.songs().to_vec();
    let mut drawn: HashSet<String> = HashSet::with_capacity(pool.len());
    let mut draws = 0u32;
    let mut winners = 0u32;

    while winners == 0 && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        let song = pool.swap_remove(index);
        drawn.insert(song);
        draws += 1;

        winners = boards.iter().filter(|b| b.is_won(&drawn)).count() as u32;
    }

    TrialResult {
        draws_until_win: draws,
        winner_count: winners,
    }
}
