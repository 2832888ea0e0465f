//! # Register Ranges
//!
//! A [`RegisterRange`] is a closed, inclusive interval of 16-bit addresses
//! claimed by one device. [`compare`] classifies two ranges against each
//! other; it is the ordering function of the table sort, and any pair it does
//! not classify as strictly before or after counts as an overlap.

use std::fmt;

/// Closed interval of bus addresses `[low, high]`.
///
/// `low <= high` is the caller's responsibility and is not checked here.
///
/// # Examples
///
/// ```rust
/// use devmap6502::RegisterRange;
///
/// let via = RegisterRange::new(0xF600, 0xF60F);
/// assert!(via.contains(0xF600));
/// assert!(via.contains(0xF60F));
/// assert!(!via.contains(0xF610));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterRange {
    /// Lowest address in the range
    pub low: u16,
    /// Highest address in the range (inclusive)
    pub high: u16,
}

impl RegisterRange {
    /// Create a range covering `low..=high`.
    pub const fn new(low: u16, high: u16) -> Self {
        Self { low, high }
    }

    /// Returns true if `address` lies within `low..=high`.
    pub const fn contains(&self, address: u16) -> bool {
        self.low <= address && address <= self.high
    }
}

impl fmt::Display for RegisterRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:04X}-0x{:04X}", self.low, self.high)
    }
}

/// Classification of one register range relative to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOrdering {
    /// X lies entirely below Y
    Lesser,
    /// X lies entirely above Y
    Greater,
    /// X and Y cover exactly the same addresses
    Equal,
    /// X and Y share at least one address without being identical
    Intersecting,
}

impl RangeOrdering {
    /// Returns true for [`RangeOrdering::Equal`] and
    /// [`RangeOrdering::Intersecting`].
    pub const fn is_overlap(self) -> bool {
        matches!(self, RangeOrdering::Equal | RangeOrdering::Intersecting)
    }
}

/// Compare register range `x` against register range `y`.
///
/// `x` is [`RangeOrdering::Lesser`] only when its high address is strictly
/// below `y`'s low address, and [`RangeOrdering::Greater`] only when its low
/// address is strictly above `y`'s high address. Ranges that share an
/// endpoint, contain one another, or partially overlap are
/// [`RangeOrdering::Intersecting`].
///
/// # Examples
///
/// ```rust
/// use devmap6502::{compare, RangeOrdering, RegisterRange};
///
/// let a = RegisterRange::new(1, 2);
/// let b = RegisterRange::new(3, 4);
/// assert_eq!(compare(a, b), RangeOrdering::Lesser);
/// assert_eq!(compare(b, a), RangeOrdering::Greater);
/// assert_eq!(compare(a, a), RangeOrdering::Equal);
/// assert_eq!(
///     compare(RegisterRange::new(1, 5), b),
///     RangeOrdering::Intersecting
/// );
/// ```
pub fn compare(x: RegisterRange, y: RegisterRange) -> RangeOrdering {
    if x.low < y.low && x.high < y.high && x.high < y.low {
        RangeOrdering::Lesser
    } else if x.low > y.low && x.high > y.high && x.low > y.high {
        RangeOrdering::Greater
    } else if x.low == y.low && x.high == y.high {
        RangeOrdering::Equal
    } else {
        RangeOrdering::Intersecting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(low: u16, high: u16) -> RegisterRange {
        RegisterRange::new(low, high)
    }

    #[test]
    fn test_compare_lesser() {
        assert_eq!(compare(r(1, 2), r(3, 4)), RangeOrdering::Lesser);
        assert_eq!(compare(r(0x0100, 0x01FF), r(0x0300, 0x03FF)), RangeOrdering::Lesser);
    }

    #[test]
    fn test_compare_greater() {
        assert_eq!(compare(r(3, 4), r(1, 2)), RangeOrdering::Greater);
        assert_eq!(compare(r(0xF600, 0xF60F), r(0x0000, 0x00FF)), RangeOrdering::Greater);
    }

    #[test]
    fn test_compare_equal() {
        assert_eq!(compare(r(0, 0), r(0, 0)), RangeOrdering::Equal);
        assert_eq!(compare(r(1, 5), r(1, 5)), RangeOrdering::Equal);
    }

    #[test]
    fn test_compare_intersecting() {
        // Containment in both directions
        assert_eq!(compare(r(1, 5), r(3, 4)), RangeOrdering::Intersecting);
        assert_eq!(compare(r(3, 4), r(1, 5)), RangeOrdering::Intersecting);
        assert_eq!(compare(r(1, 3), r(2, 2)), RangeOrdering::Intersecting);

        // Partial overlap
        assert_eq!(compare(r(1, 3), r(2, 5)), RangeOrdering::Intersecting);
        assert_eq!(compare(r(2, 5), r(1, 3)), RangeOrdering::Intersecting);

        // Same low, different high
        assert_eq!(compare(r(1, 3), r(1, 5)), RangeOrdering::Intersecting);
    }

    #[test]
    fn test_compare_shared_endpoint_is_intersecting() {
        // [1,3] and [3,5] both claim address 3
        assert_eq!(compare(r(1, 3), r(3, 5)), RangeOrdering::Intersecting);
        assert_eq!(compare(r(3, 5), r(1, 3)), RangeOrdering::Intersecting);
    }

    #[test]
    fn test_compare_adjacent_without_gap() {
        // [1,3] and [4,5] share no address: 3 < 4 satisfies the strict test
        assert_eq!(compare(r(1, 3), r(4, 5)), RangeOrdering::Lesser);
        assert_eq!(compare(r(4, 5), r(1, 3)), RangeOrdering::Greater);
    }

    #[test]
    fn test_compare_address_space_edges() {
        assert_eq!(compare(r(0x0000, 0x0000), r(0xFFFF, 0xFFFF)), RangeOrdering::Lesser);
        assert_eq!(compare(r(0x0000, 0xFFFF), r(0x8000, 0x8000)), RangeOrdering::Intersecting);
    }

    #[test]
    fn test_is_overlap() {
        assert!(RangeOrdering::Equal.is_overlap());
        assert!(RangeOrdering::Intersecting.is_overlap());
        assert!(!RangeOrdering::Lesser.is_overlap());
        assert!(!RangeOrdering::Greater.is_overlap());
    }

    #[test]
    fn test_contains() {
        let range = r(0x0101, 0x01FF);
        assert!(!range.contains(0x0100));
        assert!(range.contains(0x0101));
        assert!(range.contains(0x0110));
        assert!(range.contains(0x01FF));
        assert!(!range.contains(0x0200));
    }
}
