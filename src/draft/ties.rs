use rand::{seq::SliceRandom, Rng};

use super::Candidate;

/// Order one tier: heaviest first, equal weights in uniformly random order.
///
/// Returns registry indices.
pub(crate) fn shuffle_tier<R: Rng + ?Sized>(mut tier: Vec<Candidate>, rng: &mut R) -> Vec<usize> {
    tier.sort_by(|a, b| b.1.cmp(&a.1));
    for group in tier.chunk_by_mut(|a, b| a.1 == b.1) {
        if group.len() > 1 {
            group.shuffle(rng);
        }
    }
    tier.into_iter().map(|(idx, _)| idx).collect()
}
