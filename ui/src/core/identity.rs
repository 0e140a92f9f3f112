//! Identifier generation for toolbar items and hosts.
//!
//! The native layer distinguishes toolbar entries purely by their identifier
//! string, so each mounted item needs exactly one identifier for its whole
//! lifetime. Generation is constructor-scoped: callers invoke
//! [`ItemIdentifier::generate`] once when an item comes into existence and hold
//! on to the value, instead of relying on any rendering framework to memoize
//! it for them.

use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Random suffix length for item identifiers. Twelve alphanumeric characters
/// keep collisions out of reach for any realistic toolbar size.
const ITEM_ID_LEN: usize = 12;

/// Opaque identifier for a single toolbar item instance.
///
/// Invariant: unique per mounted instance and never regenerated while the
/// instance is alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemIdentifier(String);

impl ItemIdentifier {
    /// Generates a fresh identifier. Call once per item instance.
    pub fn generate() -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ITEM_ID_LEN)
            .map(char::from)
            .collect();
        Self(format!("tbi-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier for a mounted toolbar host, used to correlate attach/detach
/// notifications with the native layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostToken(String);

impl HostToken {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HostToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
