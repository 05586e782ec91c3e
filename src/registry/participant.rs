use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Lowest weight a participant can carry.
pub const MIN_WEIGHT: u32 = 1;
/// Highest weight a participant can carry.
pub const MAX_WEIGHT: u32 = 100;

/// Default weight for participants with odds for first.
pub const ODDS_FOR_FIRST_WEIGHT: u32 = 10;
/// Default weight for regular participants.
pub const REGULAR_WEIGHT: u32 = 5;
/// Default weight for the last pick.
pub const LAST_PICK_WEIGHT: u32 = 1;

/// Priority class used to order participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Eligible for the weighted first-pick draw and ranked ahead of everyone else.
    OddsForFirst,
    Regular,
    /// Forced to the end of the order.
    Last,
}

impl Tier {
    /// Range `adjust_weight` clamps into for this tier.
    pub fn adjust_range(&self) -> RangeInclusive<u32> {
        match self {
            Self::Last => MIN_WEIGHT..=4,
            Self::OddsForFirst => 6..=MAX_WEIGHT,
            Self::Regular => 2..=9,
        }
    }
}

/// One entry of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "crate::share::ParticipantEntry")]
pub struct Participant {
    /// Unique, non-empty name.
    pub name: String,
    /// Forced last pick. At most one participant has it set.
    pub is_last: bool,
    /// Eligible for the weighted first-pick draw.
    pub has_odds_for_first: bool,
    /// Weight in `[MIN_WEIGHT, MAX_WEIGHT]`.
    pub weight: u32,
    /// The weight was edited by hand; flag toggles leave it alone.
    pub has_custom_weight: bool,
}

impl Participant {
    /// Create a regular participant with the default weight.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_last: false,
            has_odds_for_first: false,
            weight: REGULAR_WEIGHT,
            has_custom_weight: false,
        }
    }

    /// Builder-style helper for the odds-for-first flag. Re-derives the weight.
    pub fn with_odds_for_first(mut self, value: bool) -> Self {
        self.has_odds_for_first = value;
        self.rederive_weight();
        self
    }

    /// Builder-style helper for the last-pick flag. Re-derives the weight.
    pub fn with_last(mut self, value: bool) -> Self {
        self.is_last = value;
        self.rederive_weight();
        self
    }

    /// Builder-style helper setting a custom weight (clamped to the valid range).
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight.clamp(MIN_WEIGHT, MAX_WEIGHT);
        self.has_custom_weight = true;
        self
    }

    /// Which tier this participant belongs to.
    ///
    /// The last-pick flag wins over odds for first.
    pub fn tier(&self) -> Tier {
        if self.is_last {
            Tier::Last
        } else if self.has_odds_for_first {
            Tier::OddsForFirst
        } else {
            Tier::Regular
        }
    }

    /// Weight derived from the flags alone.
    pub fn default_weight(&self) -> u32 {
        default_weight(self.is_last, self.has_odds_for_first)
    }

    /// Reset the weight to the flag default unless it was set by hand.
    pub(crate) fn rederive_weight(&mut self) {
        if !self.has_custom_weight {
            self.weight = self.default_weight();
        }
    }
}

/// Weight derived from the flags. Odds for first is checked before last pick.
pub fn default_weight(is_last: bool, has_odds_for_first: bool) -> u32 {
    if has_odds_for_first {
        ODDS_FOR_FIRST_WEIGHT
    } else if is_last {
        LAST_PICK_WEIGHT
    } else {
        REGULAR_WEIGHT
    }
}

/// Clamp an arbitrary value into `[MIN_WEIGHT, MAX_WEIGHT]`.
pub fn clamp_weight(value: i64) -> u32 {
    value.clamp(MIN_WEIGHT as i64, MAX_WEIGHT as i64) as u32
}

/// Interpret free-form weight input.
///
/// Takes the leading integer (optional sign, surrounding whitespace ignored).
/// Input with no digits, or a zero, falls back to the regular weight.
pub fn parse_weight_input(input: &str) -> u32 {
    let input = input.trim();
    let (sign, digits) = match input.as_bytes().first() {
        Some(b'-') => (-1, &input[1..]),
        Some(b'+') => (1, &input[1..]),
        _ => (1, input),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = match digits[..end].parse::<i64>() {
        Ok(value) => value.saturating_mul(sign),
        // Either no digits or too many of them.
        Err(_) if end > 0 => i64::MAX.saturating_mul(sign),
        Err(_) => 0,
    };
    if value == 0 {
        REGULAR_WEIGHT
    } else {
        clamp_weight(value)
    }
}
