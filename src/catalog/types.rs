//! Core data types for the dapp catalog
//!
//! - `DappId`: Identifier shared by dapp records and rating events
//! - `DappData`: A dapp record as returned by the contract gateway
//! - `DappRating`: A single rating event from the subgraph
//! - `RatingsMap`: Mean star value per dapp, rebuilt every fetch cycle

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Dapp identifier
///
/// The contract gateway encodes ids as integers while the subgraph encodes
/// them as strings. Both deserialize to the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DappId(String);

impl DappId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DappId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for DappId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for DappId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for DappId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => DappId(s),
            RawId::Unsigned(n) => DappId(n.to_string()),
            RawId::Signed(n) => DappId(n.to_string()),
        })
    }
}

/// A dapp record
///
/// Replaced wholesale on every fetch cycle. `average_rating` is not part of
/// the source payload; it is filled in after ratings are merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DappData {
    pub dapp_id: DappId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub average_rating: f64,
}

impl DappData {
    /// Create a dapp record with empty metadata and no rating
    pub fn new(dapp_id: impl Into<DappId>, name: impl Into<String>) -> Self {
        Self {
            dapp_id: dapp_id.into(),
            name: name.into(),
            description: String::new(),
            url: String::new(),
            image_url: String::new(),
            platform: String::new(),
            average_rating: 0.0,
        }
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: set site URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder method: set icon URL
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Builder method: set platform tag
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Builder method: set average rating
    pub fn average_rating(mut self, average_rating: f64) -> Self {
        self.average_rating = average_rating;
        self
    }
}

/// A single rating submission event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DappRating {
    pub dapp_id: DappId,
    /// Star value, nominally 1-5
    #[serde(deserialize_with = "deserialize_star_rating")]
    pub star_rating: u32,
}

/// Subgraphs may serialize integer fields as strings
fn deserialize_star_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStars {
        Number(u32),
        Text(String),
    }

    match RawStars::deserialize(deserializer)? {
        RawStars::Number(n) => Ok(n),
        RawStars::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl DappRating {
    pub fn new(dapp_id: impl Into<DappId>, star_rating: u32) -> Self {
        Self {
            dapp_id: dapp_id.into(),
            star_rating,
        }
    }
}

/// Mean star value keyed by dapp id
pub type RatingsMap = HashMap<DappId, f64>;
