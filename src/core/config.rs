//! Runtime-injected configuration.
//!
//! The deployment step attaches a key-value object to the page before the app
//! starts. The shell decodes that object exactly once into an [`EnvConfig`]
//! and passes it down explicitly; nothing in the core reads ambient global
//! state, and the snapshot is never reassigned after construction.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Key of the one value the stock views display.
pub const API_URL_KEY: &str = "API_URL";

/// Immutable snapshot of the runtime environment object.
///
/// A missing key is not an error: lookups return `None` and the views render
/// an empty value in its place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvConfig {
    values: BTreeMap<String, String>,
}

impl EnvConfig {
    /// An empty snapshot, as used when the env object never materialized.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Decode a JSON object into a snapshot, keeping only string values.
    ///
    /// Anything that is not a JSON object yields `None`; the caller falls
    /// back to an empty snapshot rather than failing.
    #[cfg(feature = "serde")]
    pub fn from_json_str(raw: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        let object = value.as_object()?;

        let values = object
            .iter()
            .filter_map(|(k, v)| Some((k.clone(), v.as_str()?.to_string())))
            .collect();
        Some(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn api_url(&self) -> Option<&str> {
        self.get(API_URL_KEY)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
