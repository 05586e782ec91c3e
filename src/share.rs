//! Share links: the session snapshot as JSON in the `data` query parameter.
//!
//! Decoding accepts older links whose `names` are bare strings, and objects
//! with any of the flag fields missing.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    error::{Error, Result},
    registry::{clamp_weight, default_weight, Participant},
};

/// Query parameter carrying the payload.
pub const SHARE_QUERY_PARAM: &str = "data";

/// Snapshot carried by a share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub names: Vec<Participant>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub draft_order: Vec<String>,
}

impl SharePayload {
    pub fn new(names: Vec<Participant>, draft_order: Vec<String>) -> Self {
        Self { names, draft_order }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `base` with the payload appended as the `data` query parameter.
    ///
    /// Any previous `data` parameter on `base` is replaced.
    pub fn to_url(&self, base: &Url) -> Result<Url> {
        let json = self.to_json()?;
        let mut url = base.clone();
        let kept: Vec<(String, String)> = base
            .query_pairs()
            .filter(|(key, _)| key != SHARE_QUERY_PARAM)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair(SHARE_QUERY_PARAM, &json);
        Ok(url)
    }

    /// Decode the payload from a share link.
    pub fn from_url(url: &Url) -> Result<Self> {
        let (_, json) = url
            .query_pairs()
            .find(|(key, _)| key == SHARE_QUERY_PARAM)
            .ok_or(Error::MissingShareData(SHARE_QUERY_PARAM))?;
        Self::from_json(&json)
    }

    /// Parse `link` and decode its payload.
    pub fn from_link(link: &str) -> Result<Self> {
        Self::from_url(&Url::parse(link.trim())?)
    }

    /// Whether the draft order is exactly a reordering of the participants.
    pub fn order_matches_roster(&self) -> bool {
        order_matches_roster(&self.draft_order, &self.names)
    }
}

/// Whether `order` is a non-empty permutation of the participant names.
pub fn order_matches_roster(order: &[String], participants: &[Participant]) -> bool {
    if order.is_empty() || order.len() != participants.len() {
        return false;
    }
    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for p in participants {
        *remaining.entry(p.name.as_str()).or_default() += 1;
    }
    order.iter().all(|name| match remaining.get_mut(name.as_str()) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    })
}

/// One element of `names` as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ParticipantEntry {
    /// Links made before flags existed.
    Name(String),
    Full(RawParticipant),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawParticipant {
    name: String,
    #[serde(default, deserialize_with = "truthy")]
    is_last: bool,
    #[serde(default, deserialize_with = "truthy")]
    has_odds_for_first: bool,
    #[serde(default)]
    weight: Value,
    #[serde(default, deserialize_with = "truthy")]
    has_custom_weight: bool,
}

impl From<ParticipantEntry> for Participant {
    fn from(entry: ParticipantEntry) -> Self {
        match entry {
            ParticipantEntry::Name(name) => Participant::new(name),
            ParticipantEntry::Full(raw) => {
                let weight = match raw.weight.as_f64() {
                    Some(weight) if weight.is_finite() => clamp_weight(weight.round() as i64),
                    _ => default_weight(raw.is_last, raw.has_odds_for_first),
                };
                Participant {
                    name: raw.name,
                    is_last: raw.is_last,
                    has_odds_for_first: raw.has_odds_for_first,
                    weight,
                    has_custom_weight: raw.has_custom_weight,
                }
            }
        }
    }
}

/// Loose boolean: `null`, `false`, `0`, `""` are false, anything else true.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
