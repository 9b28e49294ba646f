//! Board generation with usage-weighted song selection.
//!
//! Boards are generated in sequence within one trial. A shared `UsageStats`
//! biases selection toward songs that have been used less often overall, and
//! within those, toward songs never used at the exact cell position being
//! filled. Consecutive boards never share a song unless the candidate pool
//! had to be replenished mid-board.

use crate::catalog::Catalog;
use crate::pattern::Pattern;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;

/// Per-trial selection counters, reset for every trial.
#[derive(Debug, Default)]
pub struct UsageStats {
    global: HashMap<String, u32>,
    by_position: HashMap<(String, usize), u32>,
}

impl UsageStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Times `song` has appeared on any board, any position, this trial.
    pub fn global_count(&self, song: &str) -> u32 {
        self.global.get(song).copied().unwrap_or(0)
    }

    /// Times `song` has occupied cell `position` this trial.
    pub fn position_count(&self, song: &str, position: usize) -> u32 {
        self.by_position
            .get(&(song.to_string(), position))
            .copied()
            .unwrap_or(0)
    }

    pub fn record(&mut self, song: &str, position: usize) {
        *self.global.entry(song.to_string()).or_insert(0) += 1;
        *self
            .by_position
            .entry((song.to_string(), position))
            .or_insert(0) += 1;
    }
}

/// One generated board: the songs occupying its filled cells, in cell order.
#[derive(Debug, Clone)]
pub struct Board {
    songs: Vec<String>,
}

impl Board {
    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// A board wins once every one of its songs has been drawn. Free cells
    /// hold no song, so they are matched by construction.
    pub fn is_won(&self, drawn: &HashSet<String>) -> bool {
        self.songs.iter().all(|s| drawn.contains(s))
    }
}

/// Pick one candidate index, weighted by inverse usage.
///
/// Weight per candidate is `1/max(1, global) * 1/max(1, positional)`, so a
/// song never used anywhere carries the maximum weight of 1.0 and a song
/// already seen at this exact position is strongly demoted. Selection walks
/// the candidates once against a uniform draw in `[0, total_weight)`; the
/// final index is the fallback if float summation overruns.
pub fn weighted_pick(
    candidates: &[String],
    usage: &UsageStats,
    position: usize,
    rng: &mut impl Rng,
) -> usize {
    assert!(
        !candidates.is_empty(),
        "weighted_pick called with no candidates"
    );

    let weight_of = |song: &str| {
        let usage_weight = 1.0 / usage.global_count(song).max(1) as f64;
        let position_weight = 1.0 / usage.position_count(song, position).max(1) as f64;
        usage_weight * position_weight
    };

    let total_weight: f64 = candidates.iter().map(|s| weight_of(s)).sum();
    let mut roll = rng.gen_range(0.0..total_weight);

    for (index, song) in candidates.iter().enumerate() {
        let weight = weight_of(song);
        if roll < weight {
            return index;
        }
        roll -= weight;
    }

    candidates.len() - 1
}

/// Generate `num_boards` boards for one trial.
///
/// Each board's candidate pool starts as the catalog minus the exact song
/// set of the immediately preceding board (board 0 excludes nothing). If the
/// pool empties mid-board it is replenished with every catalog song not yet
/// on the current board, which may reintroduce previous-board songs but can
/// never duplicate a song within the board being built.
pub fn generate_boards(
    catalog: &Catalog,
    pattern: &Pattern,
    num_boards: u32,
    rng: &mut impl Rng,
) -> Vec<Board> {
    let mut boards = Vec::with_capacity(num_boards as usize);
    let mut usage = UsageStats::new();
    let mut last_board_songs: HashSet<String> = HashSet::new();

    for _ in 0..num_boards {
        let mut pool: Vec<String> = catalog
            .songs()
            .iter()
            .filter(|s| !last_board_songs.contains(*s))
            .cloned()
            .collect();
        let mut current_songs: HashSet<String> = HashSet::new();
        let mut songs = Vec::with_capacity(pattern.filled_count());

        for position in pattern.filled_positions() {
            if pool.is_empty() {
                pool.extend(
                    catalog
                        .songs()
                        .iter()
                        .filter(|s| !current_songs.contains(*s))
                        .cloned(),
                );
            }
            let index = weighted_pick(&pool, &usage, position, rng);
            let song = pool.remove(index);
            usage.record(&song, position);
            current_songs.insert(song.clone());
            songs.push(song);
        }

        boards.push(Board { songs });
        last_board_songs = current_songs;
    }

    boards
}

/// Setup-time configuration problems, rejected before any trial runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    EmptyCatalog,
    CatalogTooSmall { catalog: usize, filled: usize },
    DuplicateCatalogSong(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::EmptyCatalog => write!(f, "catalog contains no songs"),
            SetupError::CatalogTooSmall { catalog, filled } => write!(
                f,
                "catalog has {} songs but the pattern needs {} filled cells",
                catalog, filled
            ),
            SetupError::DuplicateCatalogSong(song) => {
                write!(f, "catalog lists \"{}\" more than once", song)
            }
        }
    }
}

impl Error for SetupError {}

/// Validate that boards can be built without duplicate songs.
///
/// The no-duplicate invariant requires at least as many catalog songs as
/// filled cells; checked once at startup rather than discovered mid-run.
pub fn validate_setup(catalog: &Catalog, pattern: &Pattern) -> Result<(), SetupError> {
    if catalog.is_empty() {
        return Err(SetupError::EmptyCatalog);
    }

    let mut seen = HashSet::new();
    for song in catalog.songs() {
        if !seen.insert(song.as_str()) {
            return Err(SetupError::DuplicateCatalogSong(song.clone()));
        }
    }

    let filled = pattern.filled_count();
    if catalog.len() < filled {
        return Err(SetupError::CatalogTooSmall {
            catalog: catalog.len(),
            filled,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Cell;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn small_catalog(n: usize) -> Catalog {
        Catalog::new((0..n).map(|i| format!("song-{}", i)).collect())
    }

    fn all_filled_pattern(n: usize) -> Pattern {
        Pattern::new(vec![Cell::Filled; n])
    }

    #[test]
    fn test_weighted_pick_single_candidate() {
        let mut rng = create_test_rng();
        let usage = UsageStats::new();
        let candidates = vec!["only".to_string()];

        for position in 0..10 {
            assert_eq!(weighted_pick(&candidates, &usage, position, &mut rng), 0);
        }
    }

    #[test]
    fn test_weighted_pick_uniform_when_no_usage() {
        let mut rng = create_test_rng();
        let usage = UsageStats::new();
        let candidates: Vec<String> =
            vec!["a".to_string(), "b".to_string(), "c".to_string()];

        let mut counts = [0u32; 3];
        let samples = 3000;
        for _ in 0..samples {
            counts[weighted_pick(&candidates, &usage, 0, &mut rng)] += 1;
        }

        // Each candidate should land near samples/3
        for count in counts {
            assert!(
                count > 800 && count < 1200,
                "expected roughly uniform counts, got {:?}",
                counts
            );
        }
    }

    #[test]
    fn test_weighted_pick_avoids_heavily_used_songs() {
        let mut rng = create_test_rng();
        let mut usage = UsageStats::new();
        let candidates = vec!["worn".to_string(), "fresh".to_string()];

        // "worn" used 1000 times at this position and globally
        for _ in 0..1000 {
            usage.record("worn", 0);
        }

        let mut worn_picks = 0;
        for _ in 0..1000 {
            if weighted_pick(&candidates, &usage, 0, &mut rng) == 0 {
                worn_picks += 1;
            }
        }

        // Weight ratio is 1 : 1,000,000 so "worn" should almost never win
        assert!(worn_picks < 50, "worn picked {} times", worn_picks);
    }

    #[test]
    #[should_panic(expected = "no candidates")]
    fn test_weighted_pick_empty_candidates_panics() {
        let mut rng = create_test_rng();
        let usage = UsageStats::new();
        weighted_pick(&[], &usage, 0, &mut rng);
    }

    #[test]
    fn test_boards_have_no_duplicates_and_correct_length() {
        let mut rng = create_test_rng();
        let catalog = Catalog::standard();
        let pattern = Pattern::standard();

        let boards = generate_boards(&catalog, &pattern, 10, &mut rng);
        assert_eq!(boards.len(), 10);

        for board in &boards {
            assert_eq!(board.len(), pattern.filled_count());
            let unique: HashSet<_> = board.songs().iter().collect();
            assert_eq!(unique.len(), board.len(), "duplicate song on a board");
        }
    }

    #[test]
    fn test_consecutive_boards_are_disjoint() {
        let mut rng = create_test_rng();
        // 51 songs and 15 filled cells: replenishment can never trigger
        let catalog = Catalog::standard();
        let pattern = Pattern::standard();

        let boards = generate_boards(&catalog, &pattern, 8, &mut rng);
        for pair in boards.windows(2) {
            let previous: HashSet<_> = pair[0].songs().iter().collect();
            for song in pair[1].songs() {
                assert!(
                    !previous.contains(song),
                    "{} appears on consecutive boards",
                    song
                );
            }
        }
    }

    #[test]
    fn test_exact_fit_board_is_a_permutation_of_the_catalog() {
        let mut rng = create_test_rng();
        let catalog = small_catalog(3);
        let pattern = all_filled_pattern(3);

        let boards = generate_boards(&catalog, &pattern, 1, &mut rng);
        assert_eq!(boards.len(), 1);

        let mut songs: Vec<_> = boards[0].songs().to_vec();
        songs.sort();
        let mut expected: Vec<_> = catalog.songs().to_vec();
        expected.sort();
        assert_eq!(songs, expected);
    }

    #[test]
    fn test_replenishment_keeps_boards_duplicate_free() {
        let mut rng = create_test_rng();
        // Second board starts with an empty pool (previous board used every
        // song), forcing an immediate replenish
        let catalog = small_catalog(4);
        let pattern = all_filled_pattern(4);

        let boards = generate_boards(&catalog, &pattern, 3, &mut rng);
        for board in &boards {
            let unique: HashSet<_> = board.songs().iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_zero_boards_yields_empty_sequence() {
        let mut rng = create_test_rng();
        let boards = generate_boards(&Catalog::standard(), &Pattern::standard(), 0, &mut rng);
        assert!(boards.is_empty());
    }

    #[test]
    fn test_usage_stats_counting() {
        let mut usage = UsageStats::new();
        assert_eq!(usage.global_count("x"), 0);
        assert_eq!(usage.position_count("x", 3), 0);

        usage.record("x", 3);
        usage.record("x", 7);

        assert_eq!(usage.global_count("x"), 2);
        assert_eq!(usage.position_count("x", 3), 1);
        assert_eq!(usage.position_count("x", 7), 1);
        assert_eq!(usage.position_count("x", 0), 0);
    }

    #[test]
    fn test_validate_setup_rejects_small_catalog() {
        let catalog = small_catalog(10);
        let pattern = Pattern::standard();
        assert_eq!(
            validate_setup(&catalog, &pattern),
            Err(SetupError::CatalogTooSmall {
                catalog: 10,
                filled: 15
            })
        );
    }

    #[test]
    fn test_validate_setup_rejects_empty_and_duplicates() {
        let pattern = all_filled_pattern(1);
        assert_eq!(
            validate_setup(&Catalog::new(vec![]), &pattern),
            Err(SetupError::EmptyCatalog)
        );

        let dup = Catalog::new(vec!["a".to_string(), "a".to_string()]);
        assert_eq!(
            validate_setup(&dup, &pattern),
            Err(SetupError::DuplicateCatalogSong("a".to_string()))
        );
    }

    #[test]
    fn test_validate_setup_accepts_standard_configuration() {
        assert!(validate_setup(&Catalog::standard(), &Pattern::standard()).is_ok());
    }
}
