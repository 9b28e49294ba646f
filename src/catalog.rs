//! The fixed, ordered pool of songs that boards draw from.

use crate::constants::SONG_TITLES;

/// Immutable ordered song list. Both board generation and the draw
/// simulation treat this as the universe of songs for a run.
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<String>,
}

impl Catalog {
    pub fn new(songs: Vec<String>) -> Self {
        Self { songs }
    }

    /// The hardcoded standard catalog from `constants`.
    pub fn standard() -> Self {
        Self::new(SONG_TITLES.iter().map(|s| s.to_string()).collect())
    }

    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
