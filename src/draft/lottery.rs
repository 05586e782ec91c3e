use rand::Rng;

use super::Candidate;

/// Lottery: weighted draw over `(registry index, weight)` candidates.
///
/// Returns the position of the winner inside `pool`, so the caller can take
/// it out. A single candidate wins without touching the generator.
pub(crate) fn pick<R: Rng + ?Sized>(pool: &[Candidate], rng: &mut R) -> Option<usize> {
    match pool.len() {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }
    // Weight 0 never reaches here through the registry; count it as 1 anyway.
    let total: u64 = pool.iter().map(|&(_, w)| w.max(1) as u64).sum();

    let draw = rng.gen_range(0..total);
    let mut acc: u64 = 0;
    for (pos, &(_, weight)) in pool.iter().enumerate() {
        acc += weight.max(1) as u64;
        if draw < acc {
            return Some(pos);
        }
    }
    // Unreachable as `draw < total`.
    Some(pool.len() - 1)
}
