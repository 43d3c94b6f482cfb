//! Unroll-depth selection heuristic.
//!
//! Deeper unrolling buys traversal speed but costs shader compile time,
//! and the deepest hierarchies pay the worst ratio. The table below was
//! measured against real datasets; NVIDIA's loop optimizer additionally
//! compiles nests deeper than 6 in exponential time, hence the vendor cap.

use serde::{Deserialize, Serialize};

/// GPU vendor, as far as the depth heuristic is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Vendor {
    /// NVIDIA driver stack.
    Nvidia,
    /// AMD driver stack.
    Amd,
    /// Intel driver stack.
    Intel,
    /// Anything else.
    #[default]
    Other,
}

/// Pick how many hierarchy levels to unroll, given the number of
/// bounding-box levels the dataset provides.
pub fn suggested_depth(bb_levels: i32, vendor: Vendor) -> i32 {
    let mut levels = bb_levels;

    if levels == 12 {
        levels -= 4;
    } else if levels >= 9 {
        levels -= 3;
    } else if levels >= 7 {
        levels -= 2;
    } else if levels >= 2 {
        levels -= 1;
    }

    if vendor == Vendor::Nvidia && levels > 6 {
        levels = 6;
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_table() {
        assert_eq!(suggested_depth(12, Vendor::Other), 8);
        assert_eq!(suggested_depth(10, Vendor::Other), 7);
        assert_eq!(suggested_depth(9, Vendor::Other), 6);
        assert_eq!(suggested_depth(8, Vendor::Other), 6);
        assert_eq!(suggested_depth(7, Vendor::Other), 5);
        assert_eq!(suggested_depth(6, Vendor::Other), 5);
        assert_eq!(suggested_depth(2, Vendor::Other), 1);
        assert_eq!(suggested_depth(1, Vendor::Other), 1);
    }

    #[test]
    fn nvidia_caps_at_six() {
        assert_eq!(suggested_depth(12, Vendor::Nvidia), 6);
        assert_eq!(suggested_depth(10, Vendor::Nvidia), 6);
        assert_eq!(suggested_depth(9, Vendor::Nvidia), 6);
        assert_eq!(suggested_depth(8, Vendor::Nvidia), 6);
        assert_eq!(suggested_depth(7, Vendor::Nvidia), 5);
    }

    #[test]
    fn cap_applies_only_to_nvidia() {
        assert_eq!(suggested_depth(12, Vendor::Amd), 8);
        assert_eq!(suggested_depth(12, Vendor::Intel), 8);
    }
}
