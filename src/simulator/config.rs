//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of boards in play each trial
    pub num_boards: u32,

    /// Number of independent trials to run
    pub num_trials: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = progress every 100 trials)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_boards: 5,
            num_trials: 1000,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a small smoke run
    pub fn quick() -> Self {
        Self {
            num_trials: 100,
            verbosity: 0,
            ..Default::default()
        }
    }
}
