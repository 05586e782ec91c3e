use serde::Serialize;

use super::participant::{clamp_weight, Participant};
use crate::error::{Error, Result};

/// The participant table.
///
/// Uniqueness of names and the single last pick are kept by the mutation
/// methods themselves; nothing is validated after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    participants: Vec<Participant>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take participants as they are, e.g. from a decoded share link.
    ///
    /// No invariant is enforced here; the shuffle engine tolerates
    /// duplicate last picks.
    pub fn from_participants(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Find a participant by exact name.
    pub fn get(&self, name: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Participant> {
        self.participants
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| Error::UnknownParticipant(name.to_string()))
    }

    /// Append a regular participant. The name is trimmed first.
    ///
    /// Fails without touching the table if the name is empty or taken.
    pub fn add(&mut self, name: &str) -> Result<&Participant> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.get(name).is_some() {
            return Err(Error::DuplicateName(name.to_string()));
        }
        self.participants.push(Participant::new(name));
        Ok(&self.participants[self.participants.len() - 1])
    }

    /// Remove a participant by name.
    pub fn remove(&mut self, name: &str) -> Result<Participant> {
        let idx = self
            .participants
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| Error::UnknownParticipant(name.to_string()))?;
        Ok(self.participants.remove(idx))
    }

    /// Set or unset the last-pick flag.
    ///
    /// Setting it clears the flag on every other participant, whose weights
    /// are re-derived unless they were set by hand.
    pub fn set_last(&mut self, name: &str, value: bool) -> Result<()> {
        // Fail on unknown names before touching anyone else.
        self.get_mut(name)?;
        if value {
            for other in self
                .participants
                .iter_mut()
                .filter(|p| p.name != name && p.is_last)
            {
                other.is_last = false;
                other.rederive_weight();
            }
        }
        let participant = self.get_mut(name)?;
        participant.is_last = value;
        participant.rederive_weight();
        Ok(())
    }

    /// Flip the last-pick flag. Returns the new value.
    pub fn toggle_last(&mut self, name: &str) -> Result<bool> {
        let value = !self.get_mut(name)?.is_last;
        self.set_last(name, value)?;
        Ok(value)
    }

    /// Set or unset odds for first, re-deriving the weight unless set by hand.
    pub fn set_odds_for_first(&mut self, name: &str, value: bool) -> Result<()> {
        let participant = self.get_mut(name)?;
        participant.has_odds_for_first = value;
        participant.rederive_weight();
        Ok(())
    }

    /// Flip odds for first. Returns the new value.
    pub fn toggle_odds_for_first(&mut self, name: &str) -> Result<bool> {
        let value = !self.get_mut(name)?.has_odds_for_first;
        self.set_odds_for_first(name, value)?;
        Ok(value)
    }

    /// Set the weight directly, clamped to `[MIN_WEIGHT, MAX_WEIGHT]` only.
    ///
    /// Marks the weight as custom. Returns the stored weight.
    pub fn set_weight(&mut self, name: &str, weight: i64) -> Result<u32> {
        let participant = self.get_mut(name)?;
        participant.weight = clamp_weight(weight);
        participant.has_custom_weight = true;
        Ok(participant.weight)
    }

    /// Nudge the weight by `delta`, clamped to the participant's tier range
    /// (see [`Tier::adjust_range`](super::Tier::adjust_range)).
    ///
    /// Marks the weight as custom. Returns the stored weight.
    pub fn adjust_weight(&mut self, name: &str, delta: i64) -> Result<u32> {
        let participant = self.get_mut(name)?;
        let range = participant.tier().adjust_range();
        let weight = (participant.weight as i64)
            .saturating_add(delta)
            .clamp(*range.start() as i64, *range.end() as i64);
        participant.weight = weight as u32;
        participant.has_custom_weight = true;
        Ok(participant.weight)
    }

    /// Drop every participant.
    pub fn clear(&mut self) {
        self.participants.clear();
    }
}
