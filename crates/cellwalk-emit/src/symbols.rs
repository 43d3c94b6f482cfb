//! Names of the externally defined symbols the emitted block references.

use cellwalk_ir::Level;
use serde::{Deserialize, Serialize};

/// Symbol names substituted into the emitted traversal block.
///
/// The consuming shader defines all of these; the generator substitutes
/// them verbatim and never checks them against the downstream symbol
/// table. Defaults match the renderer's cell-traversal shader.
///
/// The per-level dimension symbol (`level_dims_prefix`) and the fixed
/// finest-level clamp symbol (`finest_dims`) are deliberately separate
/// fields: the shader spells them `lDims_2` and `lDims1`, and the clamp
/// always reads level-1 dimensions regardless of the level being derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolNames {
    /// Ray origin argument.
    pub origin: String,
    /// Ray direction argument.
    pub dir: String,
    /// Face index argument.
    pub side_id: String,
    /// Ray/cell-bbox intersection primitive.
    pub intersect_fn: String,
    /// Per-level dimension symbol prefix; level L reads `{prefix}{L}`.
    pub level_dims_prefix: String,
    /// Fixed finest-level dimension symbol used by the edge clamp.
    pub finest_dims: String,
    /// Fast-axis loop variable prefix, suffixed with the level.
    pub x_var_prefix: String,
    /// Slow-axis loop variable prefix, suffixed with the level.
    pub y_var_prefix: String,
    /// Fast-axis bound symbol prefix, suffixed with the level.
    pub x_end_prefix: String,
    /// Slow-axis bound symbol prefix, suffixed with the level.
    pub y_end_prefix: String,
}

impl Default for SymbolNames {
    fn default() -> Self {
        Self {
            origin: "origin".to_string(),
            dir: "dir".to_string(),
            side_id: "sideID".to_string(),
            intersect_fn: "IntersectRaySideCellBBoxDirect".to_string(),
            level_dims_prefix: "lDims_".to_string(),
            finest_dims: "lDims1".to_string(),
            x_var_prefix: "x_".to_string(),
            y_var_prefix: "y_".to_string(),
            x_end_prefix: "xEnd_".to_string(),
            y_end_prefix: "yEnd_".to_string(),
        }
    }
}

impl SymbolNames {
    /// Fast-axis loop variable at `level`, e.g. `x_2`.
    pub fn x_var(&self, level: Level) -> String {
        format!("{}{}", self.x_var_prefix, level)
    }

    /// Slow-axis loop variable at `level`, e.g. `y_2`.
    pub fn y_var(&self, level: Level) -> String {
        format!("{}{}", self.y_var_prefix, level)
    }

    /// Fast-axis exclusive bound at `level`, e.g. `xEnd_2`.
    pub fn x_end(&self, level: Level) -> String {
        format!("{}{}", self.x_end_prefix, level)
    }

    /// Slow-axis exclusive bound at `level`, e.g. `yEnd_2`.
    pub fn y_end(&self, level: Level) -> String {
        format!("{}{}", self.y_end_prefix, level)
    }

    /// Dimension symbol at `level`, e.g. `lDims_2`.
    pub fn level_dims(&self, level: Level) -> String {
        format!("{}{}", self.level_dims_prefix, level)
    }
}
