//! Traversal structure construction.
//!
//! Unrolling is an explicit fold over levels rather than recursion: one
//! [`LevelBlock`] per level, produced coarsest-first. Nesting depth never
//! maps to call depth, and the resulting order is testable as data before
//! any text exists.

use cellwalk_ir::{BoundDerivation, ChildBounds, GuardCall, Level, LevelBlock, LoopAxis, TraversalIr};

use crate::error::{EmitError, Result};
use crate::symbols::SymbolNames;

/// Build the traversal structure for `depth` unrolled levels.
///
/// Levels run from `depth - 1` (coarsest, outermost) down to `0` (finest,
/// innermost). Every non-innermost block carries the bound derivations for
/// its child level.
pub fn build_ir(depth: i32, symbols: &SymbolNames) -> Result<TraversalIr> {
    if depth < 1 {
        return Err(EmitError::InvalidDepth(depth));
    }

    let mut blocks = Vec::with_capacity(depth as usize);
    for level in (0..depth).rev() {
        blocks.push(build_level(level, symbols));
    }

    Ok(TraversalIr { blocks })
}

fn build_level(level: Level, symbols: &SymbolNames) -> LevelBlock {
    let x_var = symbols.x_var(level);
    let y_var = symbols.y_var(level);

    let guard = GuardCall {
        function: symbols.intersect_fn.clone(),
        args: vec![
            symbols.origin.clone(),
            symbols.dir.clone(),
            x_var.clone(),
            y_var.clone(),
            symbols.side_id.clone(),
            level.to_string(),
        ],
    };

    // A cell's children normally span twice its index extent, except in
    // the last row/column of the grid, where the bound clamps to the true
    // finest-level extent.
    let child_bounds = (level > 0).then(|| ChildBounds {
        y: derive_bound(symbols.y_end(level - 1), &y_var, level, "y", symbols),
        x: derive_bound(symbols.x_end(level - 1), &x_var, level, "x", symbols),
    });

    LevelBlock {
        level,
        y: LoopAxis {
            var: y_var,
            end: symbols.y_end(level),
        },
        x: LoopAxis {
            var: x_var,
            end: symbols.x_end(level),
        },
        guard,
        child_bounds,
    }
}

fn derive_bound(
    target: String,
    index_var: &str,
    level: Level,
    axis: &str,
    symbols: &SymbolNames,
) -> BoundDerivation {
    BoundDerivation {
        target,
        index_var: index_var.to_string(),
        last_index: format!("{}.{} - 1", symbols.level_dims(level), axis),
        clamp: format!("{}.{}", symbols.finest_dims, axis),
        split: format!("({}+1)*2", index_var),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_depth() {
        let err = build_ir(0, &SymbolNames::default()).unwrap_err();
        assert!(matches!(err, EmitError::InvalidDepth(0)));
    }

    #[test]
    fn rejects_negative_depth() {
        let err = build_ir(-1, &SymbolNames::default()).unwrap_err();
        assert!(matches!(err, EmitError::InvalidDepth(-1)));
    }

    #[test]
    fn single_level_structure() {
        let ir = build_ir(1, &SymbolNames::default()).expect("build");

        assert_eq!(ir.depth(), 1);
        let block = ir.innermost().unwrap();
        assert_eq!(block.level, 0);
        assert!(block.child_bounds.is_none());
        assert_eq!(block.y.var, "y_0");
        assert_eq!(block.y.end, "yEnd_0");
        assert_eq!(block.x.var, "x_0");
        assert_eq!(block.x.end, "xEnd_0");
        assert_eq!(
            block.guard.args,
            vec!["origin", "dir", "x_0", "y_0", "sideID", "0"]
        );
    }

    #[test]
    fn levels_ordered_coarsest_first() {
        let ir = build_ir(4, &SymbolNames::default()).expect("build");

        let levels: Vec<i32> = ir.blocks.iter().map(|b| b.level).collect();
        assert_eq!(levels, vec![3, 2, 1, 0]);
        assert!(ir.is_well_formed());
    }

    #[test]
    fn derivations_follow_tie_break_rule() {
        let ir = build_ir(3, &SymbolNames::default()).expect("build");

        let bounds = ir.outermost().unwrap().child_bounds.as_ref().unwrap();
        assert_eq!(bounds.y.target, "yEnd_1");
        assert_eq!(bounds.y.index_var, "y_2");
        assert_eq!(bounds.y.last_index, "lDims_2.y - 1");
        assert_eq!(bounds.y.clamp, "lDims1.y");
        assert_eq!(bounds.y.split, "(y_2+1)*2");
        assert_eq!(bounds.x.target, "xEnd_1");
        assert_eq!(bounds.x.split, "(x_2+1)*2");

        // The clamp reads level-1 dimensions on every level.
        let mid = ir.blocks[1].child_bounds.as_ref().unwrap();
        assert_eq!(mid.y.clamp, "lDims1.y");
        assert_eq!(mid.y.last_index, "lDims_1.y - 1");
    }

    #[test]
    fn guard_level_argument_matches_block() {
        let ir = build_ir(5, &SymbolNames::default()).expect("build");

        for block in &ir.blocks {
            assert_eq!(block.guard.args[5], block.level.to_string());
        }
    }
}
