//! Texas Hold'em snapshot analysis.
//!
//! Given a fixed set of hole cards and a partial or complete board, this
//! crate answers who is ahead, by how much, and which single next card
//! changes that. It also decodes opaque hand scores back into human
//! descriptions like "full house, sixes full of sevens".
pub mod analysis;
pub mod cards;
pub mod equity;
pub mod score;

mod error;
pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, tie, and equity fractions in [0, 1].
pub type Probability = f64;

// ============================================================================
// SCORE ENCODING
// ============================================================================
/// Width of each category band in the score space. `score / CATEGORY_OFFSET`
/// is the category (1 = high card ... 9 = straight flush).
pub const CATEGORY_OFFSET: u16 = 4096;
/// Number of distinct ranks, Two through Ace.
pub const RANK_COUNT: u16 = 13;

// ============================================================================
// EQUITY SAMPLING
// ============================================================================
/// Default number of sampled runouts when enumeration is not exhaustive.
pub const MONTE_CARLO_TRIALS: usize = 100_000;
/// Default seed for sampled runouts, so repeated runs agree.
pub const MONTE_CARLO_SEED: u64 = 0x5EED;

/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let _ = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}
