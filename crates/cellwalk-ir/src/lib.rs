//! Intermediate representation for the cellwalk traversal generator.
//!
//! This crate defines the structural form of an unrolled hierarchical cell
//! traversal: an ordered list of per-level records naming the loop
//! variables, bound symbols, the intersection guard, and the bounds derived
//! for the next finer level.
//!
//! The IR is purely declarative — no text formatting. It exists so the
//! traversal structure (nesting order, guard placement, bound derivation)
//! can be inspected and tested as data before it is rendered to source
//! text by `cellwalk-emit`.

use serde::{Deserialize, Serialize};

/// Hierarchy level index. Level 0 is the finest; higher levels are coarser.
pub type Level = i32;

/// One loop axis at a traversal level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopAxis {
    /// Loop variable name, e.g. `y_2`.
    pub var: String,
    /// Exclusive upper-bound symbol, e.g. `yEnd_2`.
    pub end: String,
}

/// The intersection test gating descent into a cell's subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardCall {
    /// Name of the intersection primitive, defined by the consuming shader.
    pub function: String,
    /// Arguments in call order.
    pub args: Vec<String>,
}

/// One child-bound derivation for a single axis.
///
/// Rendered as `target = (index_var == last_index) ? clamp : split;` —
/// at the edge of the grid the child bound clamps to the true finest-level
/// extent instead of the uniform branching-factor extrapolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundDerivation {
    /// Symbol assigned, e.g. `yEnd_1`.
    pub target: String,
    /// Parent loop variable tested against the grid edge, e.g. `y_2`.
    pub index_var: String,
    /// Last valid index at the parent level, e.g. `lDims_2.y - 1`.
    pub last_index: String,
    /// Bound used at the grid edge, e.g. `lDims1.y`.
    pub clamp: String,
    /// Bound used everywhere else, e.g. `(y_2+1)*2`.
    pub split: String,
}

/// Bounds derived for the next finer level, in emission order (y, then x).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildBounds {
    /// Slow-axis derivation, emitted first.
    pub y: BoundDerivation,
    /// Fast-axis derivation.
    pub x: BoundDerivation,
}

/// One unrolled traversal level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelBlock {
    /// Level index of this block.
    pub level: Level,
    /// Outer (slow) loop axis.
    pub y: LoopAxis,
    /// Inner (fast) loop axis.
    pub x: LoopAxis,
    /// Intersection guard gating the level's body.
    pub guard: GuardCall,
    /// Present on every level except the innermost.
    pub child_bounds: Option<ChildBounds>,
}

/// The full traversal structure, outermost (coarsest) level first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TraversalIr {
    /// Per-level blocks, ordered coarsest to finest.
    pub blocks: Vec<LevelBlock>,
}

impl TraversalIr {
    /// Number of unrolled levels.
    pub fn depth(&self) -> usize {
        self.blocks.len()
    }

    /// The outermost (coarsest) block.
    pub fn outermost(&self) -> Option<&LevelBlock> {
        self.blocks.first()
    }

    /// The innermost (finest) block.
    pub fn innermost(&self) -> Option<&LevelBlock> {
        self.blocks.last()
    }

    /// Check the structural invariant: at least one block, levels
    /// contiguous and strictly descending to 0, and child bounds present
    /// exactly on the non-innermost blocks.
    pub fn is_well_formed(&self) -> bool {
        let n = self.blocks.len() as Level;
        if n == 0 {
            return false;
        }
        self.blocks.iter().enumerate().all(|(i, block)| {
            let expected = n - 1 - i as Level;
            block.level == expected && block.child_bounds.is_some() == (expected > 0)
        })
    }
}
