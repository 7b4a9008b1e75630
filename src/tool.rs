//! Tool registry - static metadata for every workbench tool
//!
//! Tools are the addressable features of the workbench (calculator, comparison
//! chart, balance validator, ...). Each tool has exactly one launcher location
//! and, when opened, a floating panel seeded from its default geometry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Rect};

/// Unique identifier for a tool
///
/// Serialized as kebab-case (`"difficulty-curve"`) for the persisted layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    Calculator,
    ComparisonChart,
    BalanceValidator,
    Simulation,
    DifficultyCurve,
    PresetComparison,
    GrowthCurve,
    ChartViewer,
    FormulaHelper,
    ExportImport,
}

impl ToolId {
    /// All tools in registry order
    pub const ALL: [ToolId; 10] = [
        ToolId::Calculator,
        ToolId::ComparisonChart,
        ToolId::BalanceValidator,
        ToolId::Simulation,
        ToolId::DifficultyCurve,
        ToolId::PresetComparison,
        ToolId::GrowthCurve,
        ToolId::ChartViewer,
        ToolId::FormulaHelper,
        ToolId::ExportImport,
    ];

    /// Static metadata for this tool
    pub fn meta(&self) -> &'static ToolMeta {
        &TOOLS[*self as usize]
    }

    /// Stable string id used in persisted state and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Calculator => "calculator",
            ToolId::ComparisonChart => "comparison-chart",
            ToolId::BalanceValidator => "balance-validator",
            ToolId::Simulation => "simulation",
            ToolId::DifficultyCurve => "difficulty-curve",
            ToolId::PresetComparison => "preset-comparison",
            ToolId::GrowthCurve => "growth-curve",
            ToolId::ChartViewer => "chart-viewer",
            ToolId::FormulaHelper => "formula-helper",
            ToolId::ExportImport => "export-import",
        }
    }

    pub fn default_location(&self) -> ToolLocation {
        self.meta().default_location
    }

    pub fn default_geometry(&self) -> Rect {
        self.meta().default_geometry
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ToolId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown tool id: {}", s))
    }
}

/// Where a tool's launcher lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolLocation {
    /// Vertical tool list in the sidebar
    Sidebar,
    /// Horizontal icon row anchored to the bottom of the window
    BottomDock,
    /// Free-floating launcher
    Floating,
}

impl ToolLocation {
    pub const ALL: [ToolLocation; 3] = [
        ToolLocation::Sidebar,
        ToolLocation::BottomDock,
        ToolLocation::Floating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolLocation::Sidebar => "sidebar",
            ToolLocation::BottomDock => "bottom-dock",
            ToolLocation::Floating => "floating",
        }
    }

    /// Axis along which items of this location are laid out
    pub fn axis(&self) -> Axis {
        match self {
            ToolLocation::Sidebar | ToolLocation::Floating => Axis::Vertical,
            ToolLocation::BottomDock => Axis::Horizontal,
        }
    }
}

impl fmt::Display for ToolLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sidebar" => Ok(ToolLocation::Sidebar),
            "bottom-dock" | "dock" | "bottom" => Ok(ToolLocation::BottomDock),
            "floating" => Ok(ToolLocation::Floating),
            other => Err(format!("Unknown tool location: {}", other)),
        }
    }
}

/// Static display metadata for a tool
#[derive(Debug, Clone)]
pub struct ToolMeta {
    pub id: ToolId,
    /// Icon name from the icon set
    pub icon: &'static str,
    /// Accent color as `#rrggbb`
    pub accent: &'static str,
    /// Localization key for the tool's label
    pub label_key: &'static str,
    /// Floating panel rectangle used when the panel is first opened or reset
    pub default_geometry: Rect,
    pub default_location: ToolLocation,
}

/// Registry of all tools, indexed by `ToolId as usize`
pub static TOOLS: &[ToolMeta] = &[
    ToolMeta {
        id: ToolId::Calculator,
        icon: "calculator",
        accent: "#3b82f6",
        label_key: "tools.calculator",
        default_geometry: Rect::new(300.0, 46.0, 400.0, 500.0),
        default_location: ToolLocation::Sidebar,
    },
    ToolMeta {
        id: ToolId::ComparisonChart,
        icon: "bar-chart",
        accent: "#8b5cf6",
        label_key: "tools.comparisonChart",
        default_geometry: Rect::new(340.0, 80.0, 640.0, 480.0),
        default_location: ToolLocation::Sidebar,
    },
    ToolMeta {
        id: ToolId::BalanceValidator,
        icon: "scale",
        accent: "#10b981",
        label_key: "tools.balanceValidator",
        default_geometry: Rect::new(380.0, 110.0, 520.0, 560.0),
        default_location: ToolLocation::Sidebar,
    },
    ToolMeta {
        id: ToolId::Simulation,
        icon: "swords",
        accent: "#ef4444",
        label_key: "tools.simulation",
        default_geometry: Rect::new(420.0, 90.0, 600.0, 540.0),
        default_location: ToolLocation::Sidebar,
    },
    ToolMeta {
        id: ToolId::DifficultyCurve,
        icon: "trending-up",
        accent: "#f59e0b",
        label_key: "tools.difficultyCurve",
        default_geometry: Rect::new(360.0, 60.0, 720.0, 520.0),
        default_location: ToolLocation::BottomDock,
    },
    ToolMeta {
        id: ToolId::PresetComparison,
        icon: "git-compare",
        accent: "#06b6d4",
        label_key: "tools.presetComparison",
        default_geometry: Rect::new(400.0, 120.0, 560.0, 480.0),
        default_location: ToolLocation::BottomDock,
    },
    ToolMeta {
        id: ToolId::GrowthCurve,
        icon: "line-chart",
        accent: "#84cc16",
        label_key: "tools.growthCurve",
        default_geometry: Rect::new(320.0, 70.0, 600.0, 460.0),
        default_location: ToolLocation::BottomDock,
    },
    ToolMeta {
        id: ToolId::ChartViewer,
        icon: "pie-chart",
        accent: "#ec4899",
        label_key: "tools.chartViewer",
        default_geometry: Rect::new(440.0, 100.0, 640.0, 500.0),
        default_location: ToolLocation::BottomDock,
    },
    ToolMeta {
        id: ToolId::FormulaHelper,
        icon: "function-square",
        accent: "#6366f1",
        label_key: "tools.formulaHelper",
        default_geometry: Rect::new(300.0, 140.0, 420.0, 520.0),
        default_location: ToolLocation::BottomDock,
    },
    ToolMeta {
        id: ToolId::ExportImport,
        icon: "file-down",
        accent: "#64748b",
        label_key: "tools.exportImport",
        default_geometry: Rect::new(460.0, 130.0, 480.0, 420.0),
        default_location: ToolLocation::Sidebar,
    },
];
