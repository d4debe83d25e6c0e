// SPDX-License-Identifier: Apache-2.0 OR MIT
// Format flags controlling which prefix fragments are rendered

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Independent bitset of prefix options, combinable with `|`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    /// Calendar date, `YYYY-MM-DD`
    pub const DATE: Flags = Flags(1 << 0);
    /// Wall-clock time, `HH:MM:SS`
    pub const TIME: Flags = Flags(1 << 1);
    /// Field name decorations (`DATE = `, `LEVEL = `, ...)
    pub const LABELS: Flags = Flags(1 << 2);
    /// Call site with the path as captured
    pub const CALLER: Flags = Flags(1 << 3);
    /// Call site with only the final path segment; wins over `CALLER`
    pub const SHORT_CALLER: Flags = Flags(1 << 4);

    const ALL_BITS: u8 = 0b1_1111;

    pub const fn empty() -> Self {
        Flags(0)
    }

    pub const fn all() -> Self {
        Flags(Self::ALL_BITS)
    }

    /// Build from raw bits, dropping any that are not defined
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Flags(bits & Self::ALL_BITS)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set
    #[inline]
    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if any bit of `other` is set
    #[inline]
    pub const fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }

    pub fn insert(&mut self, other: Flags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Flags) {
        self.0 &= !other.0;
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0 & Self::ALL_BITS)
    }
}
