//! Collision-layer bitmask used to filter neighbor queries.

use std::fmt;
use std::ops::{BitAnd, BitOr};

/// A 32-bit layer bitmask.
///
/// Agents occupy one or more layers; the separation behavior only reacts to
/// neighbors whose mask intersects its configured filter.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Matches every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Matches no layer.
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask with only layer `bit` set.
    ///
    /// # Panics
    /// Panics if `bit >= 32`.
    #[inline]
    pub const fn single(bit: u32) -> LayerMask {
        assert!(bit < 32);
        LayerMask(1 << bit)
    }

    /// `true` if the two masks share at least one layer.
    #[inline]
    pub const fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    /// Everything interacts with everything unless configured otherwise.
    fn default() -> Self {
        LayerMask::ALL
    }
}

impl BitOr for LayerMask {
    type Output = LayerMask;
    #[inline]
    fn bitor(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 | rhs.0)
    }
}

impl BitAnd for LayerMask {
    type Output = LayerMask;
    #[inline]
    fn bitand(self, rhs: LayerMask) -> LayerMask {
        LayerMask(self.0 & rhs.0)
    }
}

impl fmt::Display for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerMask({:#010x})", self.0)
    }
}
