#![warn(missing_docs)]

//! Unrolled cell-traversal source generation for the cellwalk renderer.
//!
//! This crate synthesizes the nested-loop source block that the volume
//! renderer's cell-traversal shader compiles: one loop pair and one
//! intersection guard per hierarchy level, coarsest outermost, with the
//! next finer level's bounds derived inside each guard. The emitted text
//! is the whole product — the renderer consumes it verbatim ahead of
//! shader compilation.
//!
//! Generation is pure and deterministic: the same depth and settings
//! always produce byte-identical text.
//!
//! # Example
//!
//! ```ignore
//! use cellwalk_emit::{emit_traversal, EmitSettings};
//!
//! let block = emit_traversal(6, &EmitSettings::default())?;
//! std::fs::write("VolumeCellTraversal.inc", block)?;
//! ```

pub mod build;
pub mod depth;
pub mod error;
pub mod render;
pub mod symbols;

pub use build::build_ir;
pub use depth::{suggested_depth, Vendor};
pub use error::{EmitError, Result};
pub use render::{render, RenderSettings};
pub use symbols::SymbolNames;

use cellwalk_ir::TraversalIr;
use serde::{Deserialize, Serialize};

/// Settings for traversal emission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmitSettings {
    /// Externally defined symbol names substituted into the block.
    pub symbols: SymbolNames,
    /// Text formatting options.
    pub render: RenderSettings,
}

impl EmitSettings {
    /// Serialize to JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Traversal source generator bound to a settings profile.
#[derive(Debug, Clone, Default)]
pub struct TraversalEmitter {
    settings: EmitSettings,
}

impl TraversalEmitter {
    /// Create an emitter with the given settings.
    pub fn new(settings: EmitSettings) -> Self {
        Self { settings }
    }

    /// Build the traversal structure for `depth` levels without rendering.
    pub fn build_ir(&self, depth: i32) -> Result<TraversalIr> {
        build::build_ir(depth, &self.settings.symbols)
    }

    /// Emit the full source block for `depth` levels.
    pub fn emit(&self, depth: i32) -> Result<String> {
        let ir = self.build_ir(depth)?;
        Ok(render::render(&ir, &self.settings.render))
    }
}

/// Emit the traversal source block for `depth` levels.
pub fn emit_traversal(depth: i32, settings: &EmitSettings) -> Result<String> {
    TraversalEmitter::new(settings.clone()).emit(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_is_deterministic() {
        let settings = EmitSettings::default();
        let first = emit_traversal(4, &settings).expect("emit");
        let second = emit_traversal(4, &settings).expect("emit");
        assert_eq!(first, second);
    }

    #[test]
    fn emitter_matches_convenience_function() {
        let settings = EmitSettings::default();
        let emitter = TraversalEmitter::new(settings.clone());
        assert_eq!(
            emitter.emit(3).expect("emit"),
            emit_traversal(3, &settings).expect("emit")
        );
    }

    #[test]
    fn invalid_depth_emits_nothing() {
        assert!(emit_traversal(0, &EmitSettings::default()).is_err());
        assert!(emit_traversal(-1, &EmitSettings::default()).is_err());
    }

    #[test]
    fn roundtrip_settings() {
        let settings = EmitSettings {
            render: RenderSettings {
                leaf_body: Some("Sample(x_0, y_0);".to_string()),
                ..RenderSettings::default()
            },
            ..EmitSettings::default()
        };

        let json = settings.to_json().expect("serialize");
        let restored = EmitSettings::from_json(&json).expect("deserialize");
        assert_eq!(settings, restored);
    }

    #[test]
    fn custom_symbols_flow_through() {
        let mut settings = EmitSettings::default();
        settings.symbols.intersect_fn = "HitCell".to_string();
        settings.symbols.side_id = "face".to_string();

        let text = emit_traversal(1, &settings).expect("emit");
        assert!(text.contains("if (HitCell(origin, dir, x_0, y_0, face, 0)) {"));
    }
}
