//! Persisted dock layout state.
//!
//! Only layout is persisted, never attribute data: docking area, relative
//! tab order (as produced by tab-order reconstruction), visibility, and
//! raised state. Written on shutdown, read on startup, with graceful
//! fallback to defaults when a value is absent or malformed.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tabs::WidgetId;

/// Docking area of the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DockArea {
    Left,
    Right,
    Top,
    Bottom,
}

impl Default for DockArea {
    fn default() -> Self {
        DockArea::Right
    }
}

fn default_true() -> bool {
    true
}

/// Layout snapshot for one dock widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockState {
    #[serde(default)]
    pub area: DockArea,
    /// Relative tab order: ordered peer identities sharing the stack
    #[serde(default)]
    pub order: Vec<WidgetId>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub raised: bool,
}

impl Default for DockState {
    fn default() -> Self {
        Self {
            area: DockArea::default(),
            order: Vec::new(),
            visible: true,
            raised: true,
        }
    }
}

impl DockState {
    /// Load from disk, or return defaults if missing or malformed
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No layout file at {}, using defaults", path.display());
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("Failed to parse layout at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read layout at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save to disk, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating layout directory {}", parent.display()))?;
        }
        let content = serde_yaml::to_string(self).context("serializing layout state")?;
        std::fs::write(path, content)
            .with_context(|| format!("writing layout to {}", path.display()))?;
        tracing::info!("Saved layout to {}", path.display());
        Ok(())
    }

    /// Peers that must be re-tabified after `own_id` to replay the saved
    /// order on startup.
    ///
    /// After the host adds this panel into the stack, every saved peer
    /// *behind* it that is currently tabified must be removed and re-added
    /// so it lands behind again. Returns those peers in saved order.
    pub fn peers_to_replay(&self, own_id: &str, currently_tabified: &[WidgetId]) -> Vec<WidgetId> {
        let Some(own_index) = self.order.iter().position(|id| id == own_id) else {
            return Vec::new();
        };
        self.order[own_index + 1..]
            .iter()
            .filter(|id| currently_tabified.contains(id))
            .cloned()
            .collect()
    }
}
