//! Bingo Night - board generation and draw simulation library.
//!
//! Generates usage-weighted bingo boards from a fixed song catalog, draws
//! songs without replacement until a board wins, and aggregates many trials
//! into distributional statistics.

pub mod board_generation;
pub mod catalog;
pub mod constants;
pub mod draw_logic;
pub mod pattern;
pub mod simulator;

pub use board_generation::{generate_boards, validate_setup, Board, SetupError, UsageStats};
pub use catalog::Catalog;
pub use draw_logic::{simulate_draws, TrialResult};
pub use pattern::{Cell, Pattern};
