//! Monte Carlo analysis of game-night outcomes.
//!
//! Run many independent trials (generate boards, draw until a winner) to
//! characterize how many draws a session takes and how often several boards
//! win on the same draw.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
