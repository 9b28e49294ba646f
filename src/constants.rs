//! Compile-time catalog and pattern data.
//!
//! The simulation core never references these directly; they are handed in
//! from `main`, so swapping the song list or the mask is a data-only change.

use crate::pattern::Cell;

// Board layout constants
pub const BOARD_SIZE: usize = 5;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// The standard song catalog. Order is fixed and significant: usage counters
/// and candidate pools iterate it in this order.
pub const SONG_TITLES: &[&str] = &[
    "Picture to Burn",
    "The Outside",
    "I'm Only Me When I'm With You",
    "Mary's Song",
    "Fearless",
    "The Other Side of the Door",
    "Breathe",
    "The Way I Loved You",
    "Mr. Perfectly Fine",
    "Back to December",
    "Mine",
    "Speak Now",
    "Electric Touch",
    "Timeless",
    "The Moment I Knew",
    "Red",
    "Begin Again",
    "I Knew You Were Trouble",
    "Come Back...Be Here",
    "Blank Space",
    "Style",
    "Say Don't Go",
    "Clean",
    "\"Slut!\"",
    "Don't Blame Me",
    "This Is Why We Can't Have Nice Things",
    "Look What You Made Me Do",
    "Gorgeous",
    "I Forgot That You Existed",
    "London Boy",
    "Daylight",
    "All Of The Girls You Loved Before",
    "Cornelia Street",
    "The 1",
    "August",
    "Invisible String",
    "My Tears Ricochet",
    "Tolerate It",
    "Marjorie",
    "'Tis The Damn Season",
    "Evermore",
    "Maroon",
    "Karma",
    "Paris",
    "Question…?",
    "Hits Different",
    "The Black Dog",
    "The Tortured Poets Department",
    "Guilty as Sin?",
    "But Daddy I Love Him",
    "I'm Gonna Get You Back",
];

const F: Cell = Cell::Filled;
const W: Cell = Cell::Free;

/// The standard 5x5 mask: 15 filled cells, with the free cells tracing a
/// decorative shape through the middle (center cell included).
#[rustfmt::skip]
pub const DEFAULT_PATTERN: [Cell; TOTAL_CELLS] = [
    F, W, F, F, F,
    F, W, W, W, F,
    F, W, W, F, F,
    F, W, W, W, F,
    F, W, F, F, F,
];
