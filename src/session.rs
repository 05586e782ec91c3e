use rand::{thread_rng, Rng};
use url::Url;

use crate::{
    config::RevealConfig,
    draft,
    error::{Error, Result},
    registry::{parse_weight_input, Participant, Registry},
    reveal::RevealSequence,
    share::{order_matches_roster, SharePayload},
};

/// Everything one user works with: participants, the last computed order,
/// and whether the session came from a share link.
///
/// Any successful change to the participants clears the draft order.
/// A locked session refuses every change except [`Session::reset`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: Registry,
    draft_order: Vec<String>,
    locked: bool,
}

impl Session {
    /// Empty, unlocked session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Locked session holding a shared snapshot.
    pub fn from_payload(payload: SharePayload) -> Self {
        if !payload.order_matches_roster() {
            tracing::warn!(
                participants = payload.names.len(),
                picks = payload.draft_order.len(),
                "shared draft order does not match its participants"
            );
        }
        Self {
            registry: Registry::from_participants(payload.names),
            draft_order: payload.draft_order,
            locked: true,
        }
    }

    /// Session for a share link.
    ///
    /// Anything that does not decode yields an empty, unlocked session.
    pub fn open_share_link(link: &str) -> Self {
        match SharePayload::from_link(link) {
            Ok(payload) => {
                tracing::info!(participants = payload.names.len(), "opened shared draft order");
                Self::from_payload(payload)
            }
            Err(err) => {
                tracing::warn!(%err, "failed to load shared draft order");
                Self::default()
            }
        }
    }

    pub fn participants(&self) -> &[Participant] {
        self.registry.participants()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Last computed order; empty when invalidated.
    pub fn draft_order(&self) -> &[String] {
        &self.draft_order
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// At least two participants and not locked.
    pub fn can_randomize(&self) -> bool {
        !self.locked && self.registry.len() >= draft::MIN_PARTICIPANTS
    }

    fn mutate<T>(&mut self, f: impl FnOnce(&mut Registry) -> Result<T>) -> Result<&[Participant]> {
        if self.locked {
            return Err(Error::Locked);
        }
        f(&mut self.registry)?;
        self.draft_order.clear();
        Ok(self.registry.participants())
    }

    pub fn add(&mut self, name: &str) -> Result<&[Participant]> {
        self.mutate(|r| r.add(name).map(|_| ()))
    }

    pub fn remove(&mut self, name: &str) -> Result<&[Participant]> {
        self.mutate(|r| r.remove(name))
    }

    pub fn set_last(&mut self, name: &str, value: bool) -> Result<&[Participant]> {
        self.mutate(|r| r.set_last(name, value))
    }

    pub fn toggle_last(&mut self, name: &str) -> Result<&[Participant]> {
        self.mutate(|r| r.toggle_last(name))
    }

    pub fn set_odds_for_first(&mut self, name: &str, value: bool) -> Result<&[Participant]> {
        self.mutate(|r| r.set_odds_for_first(name, value))
    }

    pub fn toggle_odds_for_first(&mut self, name: &str) -> Result<&[Participant]> {
        self.mutate(|r| r.toggle_odds_for_first(name))
    }

    /// Set the weight, clamped to `[1, 100]`.
    pub fn set_weight(&mut self, name: &str, weight: i64) -> Result<&[Participant]> {
        self.mutate(|r| r.set_weight(name, weight))
    }

    /// Set the weight from free-form text, see [`parse_weight_input`].
    pub fn set_weight_input(&mut self, name: &str, input: &str) -> Result<&[Participant]> {
        let weight = parse_weight_input(input);
        self.mutate(|r| r.set_weight(name, weight.into()))
    }

    /// Nudge the weight within the participant's tier range.
    pub fn adjust_weight(&mut self, name: &str, delta: i64) -> Result<&[Participant]> {
        self.mutate(|r| r.adjust_weight(name, delta))
    }

    /// Remove every participant.
    pub fn clear(&mut self) -> Result<&[Participant]> {
        self.mutate(|r| {
            r.clear();
            Ok(())
        })
    }

    /// Drop everything, including the lock.
    pub fn reset(&mut self) {
        if self.locked {
            tracing::info!("unlocking shared draft order");
        }
        *self = Self::default();
    }

    /// Compute and store a new draft order.
    ///
    /// `Ok(None)` with fewer than two participants.
    pub fn randomize(&mut self) -> Result<Option<&[String]>> {
        self.randomize_with(&mut thread_rng())
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<&[String]>> {
        if self.locked {
            return Err(Error::Locked);
        }
        match draft::compute_draft_order_with(self.registry.participants(), rng) {
            Some(order) => {
                self.draft_order = order;
                Ok(Some(self.draft_order.as_slice()))
            }
            None => Ok(None),
        }
    }

    /// Snapshot for a share link.
    pub fn share_payload(&self) -> Result<SharePayload> {
        if self.registry.is_empty() {
            return Err(Error::NothingToShare);
        }
        Ok(SharePayload::new(
            self.registry.participants().to_vec(),
            self.draft_order.clone(),
        ))
    }

    /// Share link pointing at `base`.
    pub fn share_link(&self, base: &Url) -> Result<Url> {
        self.share_payload()?.to_url(base)
    }

    /// Reveal schedule for the current order.
    ///
    /// Locked sessions count down first. `None` unless the order is a
    /// reordering of the current participants.
    pub fn reveal(&self, config: &RevealConfig) -> Option<RevealSequence> {
        if !order_matches_roster(&self.draft_order, self.registry.participants()) {
            return None;
        }
        Some(RevealSequence::new(&self.draft_order, config, self.locked))
    }
}
