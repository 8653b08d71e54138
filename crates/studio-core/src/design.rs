//! Saved-design encoding with a time-to-live.
//!
//! The builder keeps the in-progress design in browser storage for a limited
//! time. Only the encoding and the expiry rule live here; reading and
//! writing the storage itself is the UI layer's job.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::node::CanvasNode;

const MS_PER_MINUTE: u64 = 60 * 1000;

/// Storage settings for saved designs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Key the UI stores the design under.
    pub storage_key: String,
    /// Minutes a saved design stays valid.
    pub ttl_minutes: u64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            storage_key: "nativecn_studio".to_string(),
            ttl_minutes: 60,
        }
    }
}

/// A snapshot of the canvas with its expiry time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDesign {
    pub nodes: Vec<CanvasNode>,
    /// Milliseconds since the Unix epoch.
    pub saved_at: u64,
    /// Milliseconds since the Unix epoch.
    pub expires_at: u64,
}

impl SavedDesign {
    /// Snapshot `nodes` at `now_ms`, valid for `ttl_minutes`.
    pub fn new(nodes: Vec<CanvasNode>, now_ms: u64, ttl_minutes: u64) -> Self {
        Self {
            nodes,
            saved_at: now_ms,
            expires_at: now_ms.saturating_add(ttl_minutes.saturating_mul(MS_PER_MINUTE)),
        }
    }

    /// A design is expired once `now_ms` is strictly past its expiry time.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms > self.expires_at
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Decode a stored design, returning its nodes.
///
/// Malformed or expired designs yield an empty canvas.
pub fn restore_nodes(raw: &str, now_ms: u64) -> Vec<CanvasNode> {
    match SavedDesign::from_json(raw) {
        Ok(design) if design.is_expired(now_ms) => {
            tracing::debug!(expires_at = design.expires_at, now_ms, "saved design expired");
            Vec::new()
        }
        Ok(design) => design.nodes,
        Err(err) => {
            tracing::debug!(%err, "discarding unreadable saved design");
            Vec::new()
        }
    }
}
