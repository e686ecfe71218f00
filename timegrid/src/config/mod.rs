//! Render options loading.
//!
//! Static labels and layout switches for the rendered document.  Every key is
//! optional; absent keys keep their defaults.
//!
//! ```yaml
//! break_label: "LUNCH"
//! day_header: "Day's"
//! legend_header: "Subject Code Theory"
//! coordinator_title: "Class Coordinator"
//! co_coordinator_title: "Class Co-coordinator"
//! legend_column: true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

// ── RenderOptions ─────────────────────────────────────────────────────────────

/// Labels and layout switches used by the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Text of the vertical break cell.
    pub break_label: String,
    /// Header of the day-label column.
    pub day_header: String,
    /// Header of the legend column.
    pub legend_header: String,
    pub coordinator_title: String,
    pub co_coordinator_title: String,
    /// Whether to add the legend column after the last time column.
    pub legend_column: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            break_label: String::from("LUNCH"),
            day_header: String::from("Day's"),
            legend_header: String::from("Subject Code Theory"),
            coordinator_title: String::from("Class Coordinator"),
            co_coordinator_title: String::from("Class Co-coordinator"),
            legend_column: true,
        }
    }
}

impl RenderOptions {
    /// Parses `path` as YAML.
    ///
    /// An empty file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, the YAML is invalid, or
    /// it contains an unknown key.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading render options from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot open options file: {}", path.display()))?;

        if content.trim().is_empty() {
            debug!("Options file is empty, using defaults");
            return Ok(Self::default());
        }

        let options: RenderOptions = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML file: {}", path.display()))?;

        debug!(?options, "render options loaded");
        Ok(options)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
