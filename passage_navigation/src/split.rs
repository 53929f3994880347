// Copyright 2025 the Passage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Columns of a split layout.

bitflags::bitflags! {
    /// Columns of a split controller that hold a navigation stack.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SplitColumns: u8 {
        /// Leading column.
        const PRIMARY       = 0b0000_0001;
        /// Middle column of a three-column layout.
        const SUPPLEMENTARY = 0b0000_0010;
        /// Trailing, content column.
        const SECONDARY     = 0b0000_0100;
        /// Single stack shown when the split is collapsed.
        const COMPACT       = 0b0000_1000;
        /// Every column.
        const ALL = Self::PRIMARY.bits()
            | Self::SUPPLEMENTARY.bits()
            | Self::SECONDARY.bits()
            | Self::COMPACT.bits();
    }
}

impl SplitColumns {
    /// Each single column, compact first.
    pub const EACH: [Self; 4] = [
        Self::COMPACT,
        Self::PRIMARY,
        Self::SUPPLEMENTARY,
        Self::SECONDARY,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_each() {
        for column in SplitColumns::EACH {
            assert!(SplitColumns::ALL.contains(column));
        }
        assert_eq!(SplitColumns::ALL.bits(), 0b1111);
    }
}
