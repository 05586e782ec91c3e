use crate::registry::Participant;

/// Flatten the first pick and the per-tier sequences into names.
///
/// Tier sequences are given highest priority first.
pub(crate) fn assemble(
    participants: &[Participant],
    first_pick: usize,
    tiers: [Vec<usize>; 3],
) -> Vec<String> {
    std::iter::once(first_pick)
        .chain(tiers.into_iter().flatten())
        .map(|idx| participants[idx].name.clone())
        .collect()
}
