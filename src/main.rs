//! Bingo night simulator CLI.
//!
//! Usage:
//!   bingo-night [NUM_BOARDS] [NUM_TRIALS] [OPTIONS]
//!
//! Examples:
//!   bingo-night                 # 5 boards, 1000 trials
//!   bingo-night 8 5000          # 8 boards, 5000 trials
//!   bingo-night --seed 42       # Reproducible run

use bingo_night::simulator::{run_simulation, SimConfig};
use bingo_night::{validate_setup, Catalog, Pattern};
use std::env;
use std::process;

const STATS_FILE: &str = "bingo_stats.txt";

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, save_json) = parse_args(&args);

    let catalog = Catalog::standard();
    let pattern = Pattern::standard();

    if let Err(e) = validate_setup(&catalog, &pattern) {
        eprintln!("Invalid setup: {}", e);
        process::exit(1);
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                  BINGO NIGHT SIMULATOR                        ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Boards:   {}", config.num_boards);
    println!("  Trials:   {}", config.num_trials);
    println!("  Catalog:  {} songs", catalog.len());
    println!("  Pattern:  {} filled cells", pattern.filled_count());
    if let Some(seed) = config.seed {
        println!("  Seed:     {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config, &catalog, &pattern);

    println!("{}", report.to_text());

    if let Err(e) = std::fs::write(STATS_FILE, report.summary_file_text()) {
        eprintln!("Failed to write {}: {}", STATS_FILE, e);
        process::exit(1);
    }
    println!("Results have been written to {}", STATS_FILE);

    if save_json {
        let filename = format!(
            "bingo_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut save_json = false;
    let mut positionals: Vec<&str> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--json" => {
                save_json = true;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            other => {
                positionals.push(other);
            }
        }
        i += 1;
    }

    // Positional values that fail to parse fall back to the defaults
    if let Some(boards) = positionals.first() {
        config.num_boards = boards.parse().unwrap_or(config.num_boards);
    }
    if let Some(trials) = positionals.get(1) {
        config.num_trials = trials.parse().unwrap_or(config.num_trials);
    }

    (config, save_json)
}

fn print_help() {
    println!("Bingo Night Simulator");
    println!();
    println!("USAGE:");
    println!("    bingo-night [NUM_BOARDS] [NUM_TRIALS] [OPTIONS]");
    println!();
    println!("ARGS:");
    println!("    NUM_BOARDS          Boards in play per trial (default: 5)");
    println!("    NUM_TRIALS          Independent trials to run (default: 1000)");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -q, --quiet         Suppress progress output");
    println!("    --json              Save a timestamped JSON report");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    bingo-night                 # Default run");
    println!("    bingo-night 8 5000          # 8 boards, 5000 trials");
    println!("    bingo-night --seed 42       # Reproducible");
}
