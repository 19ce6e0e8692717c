//! Random source construction.
//!
//! Scoring and identification take any `rand::Rng`; callers build one here
//! so that a configured seed reproduces the same results on every platform.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source used by the analysis services
pub type AnalysisRng = ChaCha8Rng;

/// Seeded source when a seed is given, entropy-seeded otherwise
pub fn analysis_rng(seed: Option<u64>) -> AnalysisRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
