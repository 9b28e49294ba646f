//! Trial runner: generate boards, simulate draws, repeat.
//!
//! Every trial allocates fresh generation state (usage counters, pools), so
//! no randomness or bias leaks across trials. With a fixed seed each trial
//! gets its own deterministic RNG derived from `seed + trial index`.

use super::config::SimConfig;
use super::report::SimReport;
use crate::board_generation::generate_boards;
use crate::catalog::Catalog;
use crate::draw_logic::{simulate_draws, TrialResult};
use crate::pattern::Pattern;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
///
/// Callers should run `validate_setup` on the catalog/pattern pair first;
/// the generation invariants assume it passed.
pub fn run_simulation(config: &SimConfig, catalog: &Catalog, pattern: &Pattern) -> SimReport {
    let mut trials = Vec::with_capacity(config.num_trials as usize);

    for trial_idx in 0..config.num_trials {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + trial_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let trial = run_single_trial(config.num_boards, catalog, pattern, &mut rng);
        trials.push(trial);

        if config.verbosity >= 1 && (trial_idx + 1) % 100 == 0 {
            println!("Completed {}/{} trials", trial_idx + 1, config.num_trials);
        }
    }

    SimReport::from_trials(trials, config.num_boards)
}

/// One independent trial: fresh boards, fresh draw pool.
fn run_single_trial(
    num_boards: u32,
    catalog: &Catalog,
    pattern: &Pattern,
    rng: &mut ChaCha8Rng,
) -> TrialResult {
    let boards = generate_boards(catalog, pattern, num_boards, rng);
    simulate_draws(&boards, catalog, rng)
}
