use rand::{thread_rng, Rng};

use crate::registry::{Participant, Tier};

mod assemble;
mod lottery;
mod ties;

/// `(registry index, weight)`.
pub(crate) type Candidate = (usize, u32);

/// Fewest participants a draft order can be computed for.
pub const MIN_PARTICIPANTS: usize = 2;

/// Participants split by tier, in registry order.
#[derive(Debug, Default)]
struct Tiers {
    odds_for_first: Vec<Candidate>,
    regular: Vec<Candidate>,
    last: Vec<Candidate>,
}

impl Tiers {
    fn partition(participants: &[Participant]) -> Self {
        let mut tiers = Self::default();
        for (idx, p) in participants.iter().enumerate() {
            let candidate = (idx, p.weight);
            match p.tier() {
                Tier::OddsForFirst => tiers.odds_for_first.push(candidate),
                Tier::Regular => tiers.regular.push(candidate),
                // More than one only with a hand-crafted share payload.
                Tier::Last => tiers.last.push(candidate),
            }
        }
        tiers
    }

    /// Draw the first pick from the highest-priority non-empty tier and take
    /// it out of that tier.
    ///
    /// 1) OddsForFirst -> weighted draw
    /// 2) Regular      -> weighted draw
    /// 3) Last         -> weighted draw (only last picks left)
    fn draw_first_pick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, Tier)> {
        for (tier, pool) in [
            (Tier::OddsForFirst, &mut self.odds_for_first),
            (Tier::Regular, &mut self.regular),
            (Tier::Last, &mut self.last),
        ] {
            if let Some(pos) = lottery::pick(pool, rng) {
                let (idx, _) = pool.remove(pos);
                return Some((idx, tier));
            }
        }
        None
    }
}

/// Compute a draft order using the thread-local generator.
///
/// Returns `None` with fewer than [`MIN_PARTICIPANTS`] participants.
pub fn compute_draft_order(participants: &[Participant]) -> Option<Vec<String>> {
    compute_draft_order_with(participants, &mut thread_rng())
}

/// Compute a draft order drawing from `rng`.
///
/// Position 0 goes to a weighted draw from the highest-priority non-empty
/// tier. Everyone else follows grouped by tier (odds for first, regular,
/// last), heaviest first within a tier, with equal weights shuffled.
pub fn compute_draft_order_with<R: Rng + ?Sized>(
    participants: &[Participant],
    rng: &mut R,
) -> Option<Vec<String>> {
    if participants.len() < MIN_PARTICIPANTS {
        tracing::debug!(len = participants.len(), "not enough participants to randomize");
        return None;
    }

    let mut tiers = Tiers::partition(participants);
    let (first_pick, tier) = tiers.draw_first_pick(rng)?;
    tracing::debug!(name = %participants[first_pick].name, ?tier, "first pick drawn");

    let Tiers {
        odds_for_first,
        regular,
        last,
    } = tiers;
    let order = assemble::assemble(
        participants,
        first_pick,
        [
            ties::shuffle_tier(odds_for_first, rng),
            ties::shuffle_tier(regular, rng),
            ties::shuffle_tier(last, rng),
        ],
    );
    tracing::debug!(?order, "draft order computed");
    Some(order)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn too_few_participants_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(compute_draft_order_with(&[], &mut rng), None);
        assert_eq!(
            compute_draft_order_with(&[Participant::new("solo")], &mut rng),
            None
        );
    }

    #[test]
    fn one_per_tier_is_deterministic() {
        let participants = [
            Participant::new("A"),
            Participant::new("B").with_odds_for_first(true),
            Participant::new("C").with_last(true),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(
                compute_draft_order_with(&participants, &mut rng).unwrap(),
                ["B", "A", "C"]
            );
        }
    }

    #[test]
    fn only_last_picks_still_produce_an_order() {
        let participants = [
            Participant::new("x").with_last(true),
            Participant::new("y").with_last(true),
        ];
        let order = compute_draft_order(&participants).unwrap();
        assert_eq!(order.len(), 2);
        assert!(order.contains(&"x".to_string()) && order.contains(&"y".to_string()));
    }

    #[test]
    fn draw_removes_the_winner_from_its_tier() {
        let participants = [
            Participant::new("r1"),
            Participant::new("r2"),
            Participant::new("l").with_last(true),
        ];
        let mut tiers = Tiers::partition(&participants);
        let mut rng = StdRng::seed_from_u64(11);
        let (idx, tier) = tiers.draw_first_pick(&mut rng).unwrap();
        assert_eq!(tier, Tier::Regular);
        assert!(idx < 2);
        assert_eq!(tiers.regular.len(), 1);
        assert_eq!(tiers.last, [(2, 1)]);
    }
}
