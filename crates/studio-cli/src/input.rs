//! Design file loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use studio_core::{CanvasNode, DesignConfig, SavedDesign};

/// A design file: either a saved design with expiry or a bare node array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DesignFile {
    Saved(SavedDesign),
    Nodes(Vec<CanvasNode>),
}

/// Nodes read from a design file.
#[derive(Debug)]
pub struct LoadedDesign {
    pub nodes: Vec<CanvasNode>,
    /// The file was a saved design past its expiry time.
    pub expired: bool,
}

/// Parse design JSON. Expired designs are still returned, flagged.
pub fn parse_design(raw: &str, now_ms: u64) -> Result<LoadedDesign> {
    let file: DesignFile =
        serde_json::from_str(raw).context("expected a saved design or an array of nodes")?;

    Ok(match file {
        DesignFile::Saved(design) => LoadedDesign {
            expired: design.is_expired(now_ms),
            nodes: design.nodes,
        },
        DesignFile::Nodes(nodes) => LoadedDesign {
            nodes,
            expired: false,
        },
    })
}

/// Read and parse a design file, warning when it has expired.
pub fn load_design(path: &Path, now_ms: u64) -> Result<Vec<CanvasNode>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read design {}", path.display()))?;
    let design =
        parse_design(&raw, now_ms).with_context(|| format!("invalid design {}", path.display()))?;

    if design.expired {
        tracing::warn!(path = %path.display(), "saved design has expired, generating anyway");
    }
    tracing::debug!(nodes = design.nodes.len(), "loaded design");
    Ok(design.nodes)
}

/// Encode `nodes` as a saved design that expires after the configured TTL.
pub fn stamp_design(nodes: Vec<CanvasNode>, now_ms: u64, config: &DesignConfig) -> Result<String> {
    let design = SavedDesign::new(nodes, now_ms, config.ttl_minutes);
    tracing::debug!(expires_at = design.expires_at, "stamped design");
    Ok(design.to_json()?)
}
