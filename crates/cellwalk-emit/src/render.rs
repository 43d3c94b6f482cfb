//! Rendering the traversal structure to source text.
//!
//! This module owns every piece of literal syntax: loop headers, the guard
//! call, the ternary derivation statements, braces, indentation. The
//! downstream shader compiler consumes the block verbatim, so the operator
//! and branching factor in the derivation template are contract surface.
//!
//! Composition is by progressive wrapping: the innermost fragment is
//! rendered first and each coarser level wraps it inside its own guard.

use cellwalk_ir::{BoundDerivation, GuardCall, LevelBlock, LoopAxis, TraversalIr};
use serde::{Deserialize, Serialize};

/// Text formatting options for the emitted block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// One indentation step, prepended per enclosing construct.
    pub indent_unit: String,
    /// Optional source snippet spliced into the innermost guard body.
    /// `None` leaves the leaf position empty for the consumer to fill.
    pub leaf_body: Option<String>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
            leaf_body: None,
        }
    }
}

/// Render the traversal structure to its source block.
pub fn render(ir: &TraversalIr, settings: &RenderSettings) -> String {
    let mut fragment = String::new();
    for block in ir.blocks.iter().rev() {
        fragment = render_block(block, &fragment, settings);
    }
    fragment
}

fn render_block(block: &LevelBlock, inner: &str, settings: &RenderSettings) -> String {
    let mut body = String::new();
    match &block.child_bounds {
        Some(bounds) => {
            body.push_str(&render_derivation(&bounds.y));
            body.push_str(&render_derivation(&bounds.x));
            body.push_str(inner);
        }
        None => {
            if let Some(leaf) = &settings.leaf_body {
                body.push_str(leaf);
                if !leaf.ends_with('\n') {
                    body.push('\n');
                }
            }
        }
    }

    let guard = wrap(&guard_header(&block.guard), &body, settings);
    let x_loop = wrap(&loop_header(&block.x), &guard, settings);
    wrap(&loop_header(&block.y), &x_loop, settings)
}

fn loop_header(axis: &LoopAxis) -> String {
    format!(
        "for (int {} = 0; {} < {}; {}++) {{",
        axis.var, axis.var, axis.end, axis.var
    )
}

fn guard_header(guard: &GuardCall) -> String {
    format!("if ({}({})) {{", guard.function, guard.args.join(", "))
}

fn render_derivation(derivation: &BoundDerivation) -> String {
    format!(
        "{} = ({} == {}) ? {} : {};\n",
        derivation.target,
        derivation.index_var,
        derivation.last_index,
        derivation.clamp,
        derivation.split
    )
}

/// Wrap `body` in `header { ... }`, indenting the body one step.
fn wrap(header: &str, body: &str, settings: &RenderSettings) -> String {
    let mut out = String::with_capacity(header.len() + body.len() + 8);
    out.push_str(header);
    out.push('\n');
    for line in body.lines() {
        if !line.is_empty() {
            out.push_str(&settings.indent_unit);
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push_str("}\n");
    out
}
