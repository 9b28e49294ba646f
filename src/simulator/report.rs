//! Simulation report generation.

use crate::draw_logic::TrialResult;
use serde::Serialize;

/// Aggregated results from all trials of a run.
///
/// Draw statistics index into the ascending-sorted draw counts: median at
/// `len / 2`, 75th percentile at `len * 3 / 4` (truncating). Winner
/// statistics over an empty subset are `None` rather than NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub num_boards: u32,
    pub num_trials: u32,

    // Draws-until-win distribution
    pub min_draws: u32,
    pub mean_draws: f64,
    pub median_draws: u32,
    pub p75_draws: u32,

    // Winner-count analysis
    pub zero_winner_trials: u32,
    pub multi_winner_trials: u32,
    pub multi_winner_probability: f64,
    pub max_winners_when_multiple: Option<u32>,
    pub mean_winners_when_multiple: Option<f64>,
    pub three_plus_winner_trials: u32,
    pub three_plus_winner_probability: f64,

    // Raw trial results for detailed analysis (not serialized)
    #[serde(skip)]
    pub trial_results: Vec<TrialResult>,
}

impl SimReport {
    /// Aggregate a run's trial results. An empty `trials` vector yields a
    /// zeroed report with `None` winner subsets.
    pub fn from_trials(trials: Vec<TrialResult>, num_boards: u32) -> Self {
        let num_trials = trials.len() as u32;

        let mut draws: Vec<u32> = trials.iter().map(|t| t.draws_until_win).collect();
        draws.sort_unstable();

        let (min_draws, mean_draws, median_draws, p75_draws) = if draws.is_empty() {
            (0, 0.0, 0, 0)
        } else {
            let sum: u64 = draws.iter().map(|&d| d as u64).sum();
            (
                draws[0],
                sum as f64 / draws.len() as f64,
                draws[draws.len() / 2],
                draws[draws.len() * 3 / 4],
            )
        };

        let zero_winner_trials = trials.iter().filter(|t| t.winner_count == 0).count() as u32;

        let multi: Vec<u32> = trials
            .iter()
            .filter(|t| t.winner_count > 1)
            .map(|t| t.winner_count)
            .collect();
        let multi_winner_trials = multi.len() as u32;
        let max_winners_when_multiple = multi.iter().max().copied();
        let mean_winners_when_multiple = if multi.is_empty() {
            None
        } else {
            Some(multi.iter().map(|&w| w as f64).sum::<f64>() / multi.len() as f64)
        };

        let three_plus_winner_trials =
            trials.iter().filter(|t| t.winner_count >= 3).count() as u32;

        let probability = |count: u32| {
            if num_trials == 0 {
                0.0
            } else {
                count as f64 / num_trials as f64
            }
        };

        Self {
            num_boards,
            num_trials,
            min_draws,
            mean_draws,
            median_draws,
            p75_draws,
            zero_winner_trials,
            multi_winner_trials,
            multi_winner_probability: probability(multi_winner_trials),
            max_winners_when_multiple,
            mean_winners_when_multiple,
            three_plus_winner_trials,
            three_plus_winner_probability: probability(three_plus_winner_trials),
            trial_results: trials,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Boards: {}   Trials: {}\n\n",
            self.num_boards, self.num_trials
        ));

        report.push_str("── DRAWS TO WIN ─────────────────────────────────────────────────\n");
        report.push_str(&format!("  Lowest:          {}\n", self.min_draws));
        report.push_str(&format!("  Average:         {:.2}\n", self.mean_draws));
        report.push_str(&format!("  Median:          {}\n", self.median_draws));
        report.push_str(&format!("  75th Percentile: {}\n\n", self.p75_draws));

        report.push_str("── WINNERS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Multiple winners:    {} trials ({:.2}%)\n",
            self.multi_winner_trials,
            self.multi_winner_probability * 100.0
        ));
        match self.max_winners_when_multiple {
            Some(max) => report.push_str(&format!("  Max when multiple:   {}\n", max)),
            None => report.push_str("  Max when multiple:   n/a\n"),
        }
        match self.mean_winners_when_multiple {
            Some(mean) => report.push_str(&format!("  Avg when multiple:   {:.2}\n", mean)),
            None => report.push_str("  Avg when multiple:   n/a\n"),
        }
        report.push_str(&format!(
            "  Three or more:       {} trials ({:.2}%)\n",
            self.three_plus_winner_trials,
            self.three_plus_winner_probability * 100.0
        ));
        if self.zero_winner_trials > 0 {
            report.push_str(&format!(
                "  No winner (degenerate): {} trials\n",
                self.zero_winner_trials
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Plain-text summary for the stats file.
    pub fn summary_file_text(&self) -> String {
        format!(
            "Number of boards: {}\nNumber of trials: {}\n\nAverage: {:.2}\nMedian: {}\n75th Percentile: {}\n",
            self.num_boards, self.num_trials, self.mean_draws, self.median_draws, self.p75_draws
        )
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
