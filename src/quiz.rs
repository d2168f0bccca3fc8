//! Question assembly: mixing wrong translations with the correct one.
//! Pure functions, generic over the RNG so tests stay deterministic.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::WRONG_OPTIONS_LIMIT;

/// Builds the answer options for one question: the wrong translations are
/// deduplicated, shuffled, and truncated to at most three, then the correct
/// one is mixed in and the whole set shuffled again. With a small vocabulary
/// fewer than four options come back; the correct one is always among them.
pub fn build_options<R: Rng>(correct: &str, wrongs: Vec<String>, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for w in wrongs {
        if w != correct && !pool.contains(&w) {
            pool.push(w);
        }
    }
    pool.shuffle(rng);
    pool.truncate(WRONG_OPTIONS_LIMIT);
    pool.push(correct.to_string());
    pool.shuffle(rng);
    pool
}

/// Accuracy as a percentage in [0, 100]; zero attempts is zero, not a fault.
pub fn accuracy(correct: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    }
}
