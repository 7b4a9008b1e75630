//! Layout persistence - JSON blob behind a pluggable load/save interface
//!
//! The persisted schema stores tool ids as strings so that a layout written
//! by a build with a different tool set still loads: unknown ids are skipped
//! and missing tools fall back to their default location.
//!
//! Nothing here ever fails loudly. Read and parse errors degrade to defaults,
//! write errors are reported to the caller as `String` and logged there.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::store::{LayoutState, DEFAULT_SIDEBAR_WIDTH, DEFAULT_TOOLS_SECTION_HEIGHT};
use crate::panel::{PanelGeometry, PanelGeometryManager};
use crate::tool::{ToolId, ToolLocation};

/// Serialized form of the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedLayout {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: f32,
    #[serde(default = "default_tools_section_height")]
    pub tools_section_height: f32,
    #[serde(default)]
    pub sidebar: Vec<String>,
    #[serde(default)]
    pub bottom_dock: Vec<String>,
    #[serde(default)]
    pub floating: Vec<String>,
    /// Last known floating panel geometry per tool id
    #[serde(default)]
    pub panels: BTreeMap<String, PanelGeometry>,
}

fn default_sidebar_width() -> f32 {
    DEFAULT_SIDEBAR_WIDTH
}

fn default_tools_section_height() -> f32 {
    DEFAULT_TOOLS_SECTION_HEIGHT
}

impl Default for PersistedLayout {
    fn default() -> Self {
        Self::capture(&LayoutState::default(), &PanelGeometryManager::default())
    }
}

impl PersistedLayout {
    pub const CURRENT_VERSION: u32 = 1;

    /// Snapshot the live stores
    pub fn capture(layout: &LayoutState, panels: &PanelGeometryManager) -> Self {
        let names = |location: ToolLocation| -> Vec<String> {
            layout
                .tools_for(location)
                .iter()
                .map(|tool| tool.as_str().to_string())
                .collect()
        };

        Self {
            version: Self::CURRENT_VERSION,
            sidebar_width: layout.sidebar_width(),
            tools_section_height: layout.tools_section_height(),
            sidebar: names(ToolLocation::Sidebar),
            bottom_dock: names(ToolLocation::BottomDock),
            floating: names(ToolLocation::Floating),
            panels: panels
                .geometries()
                .map(|(tool, geometry)| (tool.as_str().to_string(), *geometry))
                .collect(),
        }
    }

    /// Rebuild the layout store, repairing whatever the blob got wrong
    pub fn to_layout(&self) -> LayoutState {
        if self.version > Self::CURRENT_VERSION {
            tracing::warn!(
                version = self.version,
                "layout was written by a newer version, loading what is understood"
            );
        }

        LayoutState::from_orders(
            parse_tools(&self.sidebar),
            parse_tools(&self.bottom_dock),
            parse_tools(&self.floating),
            self.sidebar_width,
            self.tools_section_height,
        )
    }

    /// Rebuild the panel geometry store; all panels start closed
    pub fn to_panels(&self) -> PanelGeometryManager {
        let mut panels = PanelGeometryManager::default();
        for (name, geometry) in &self.panels {
            match name.parse::<ToolId>() {
                Ok(tool) => panels.restore_geometry(tool, *geometry),
                Err(e) => tracing::debug!("skipping persisted panel: {}", e),
            }
        }
        panels
    }

    /// Parse a JSON blob; `None` for anything that is not a layout object
    pub fn from_json(contents: &str) -> Option<Self> {
        match serde_json::from_str(contents) {
            Ok(layout) => Some(layout),
            Err(e) => {
                tracing::warn!("Failed to parse persisted layout: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize layout: {}", e))
    }
}

fn parse_tools(names: &[String]) -> Vec<ToolId> {
    names
        .iter()
        .filter_map(|name| match name.parse::<ToolId>() {
            Ok(tool) => Some(tool),
            Err(e) => {
                tracing::debug!("skipping persisted tool: {}", e);
                None
            }
        })
        .collect()
}

/// Storage backend for the layout blob
pub trait LayoutPersistence: std::fmt::Debug {
    /// Load the stored layout, `None` when missing or unreadable
    fn load(&self) -> Option<PersistedLayout>;

    /// Store the layout
    fn save(&mut self, layout: &PersistedLayout) -> Result<(), String>;
}

/// Load both stores from `persistence`, falling back to defaults
pub fn load_or_default(persistence: &dyn LayoutPersistence) -> (LayoutState, PanelGeometryManager) {
    match persistence.load() {
        Some(persisted) => (persisted.to_layout(), persisted.to_panels()),
        None => (LayoutState::default(), PanelGeometryManager::default()),
    }
}

/// Layout stored as a JSON file, by default `~/.config/toolbench/layout.json`
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File persistence at the standard config location
    pub fn default_location() -> Option<Self> {
        crate::config_paths::layout_file().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayoutPersistence for JsonFilePersistence {
    fn load(&self) -> Option<PersistedLayout> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let layout = PersistedLayout::from_json(&contents);
                if layout.is_some() {
                    tracing::info!("Loaded layout from {}", self.path.display());
                }
                layout
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "Layout file not found at {}, using defaults",
                    self.path.display()
                );
                None
            }
            Err(e) => {
                tracing::warn!("Failed to read layout at {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, layout: &PersistedLayout) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create layout directory: {}", e))?;
        }

        let content = layout.to_json()?;

        // Write-then-rename so a crash mid-write never leaves a truncated file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .map_err(|e| format!("Failed to write layout to {}: {}", tmp.display(), e))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| format!("Failed to replace {}: {}", self.path.display(), e))?;

        tracing::debug!("Saved layout to {}", self.path.display());
        Ok(())
    }
}

/// In-memory persistence holding the raw JSON text
///
/// Used by tests and by hosts that keep layout elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    contents: Option<String>,
    saves: usize,
    fail_saves: bool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored text, which need not be valid
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Make every `save` fail, as a full or read-only store would
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl LayoutPersistence for MemoryPersistence {
    fn load(&self) -> Option<PersistedLayout> {
        self.contents.as_deref().and_then(PersistedLayout::from_json)
    }

    fn save(&mut self, layout: &PersistedLayout) -> Result<(), String> {
        if self.fail_saves {
            return Err("storage quota exceeded".to_string());
        }
        self.contents = Some(layout.to_json()?);
        self.saves += 1;
        Ok(())
    }
}
