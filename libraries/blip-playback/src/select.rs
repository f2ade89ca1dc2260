//! Random sound selection
//!
//! Uniform selection over the whole library. The currently active sound
//! is not excluded, so the same sound can play twice in a row, and a
//! one-sound library always reselects that sound.

use rand::Rng;

/// Pick a uniformly random index into a collection of `len` items
///
/// Returns None for an empty collection.
pub(crate) fn random_index(rng: &mut impl Rng, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(rng.gen_range(0..len))
    }
}
