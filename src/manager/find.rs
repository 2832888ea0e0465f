//! Binary search for the entry servicing an address.

use super::{DeviceEntry, VirtualDeviceManager};
use crate::merge_sort::midpoint;

impl VirtualDeviceManager {
    /// Find the entry whose range covers `address`.
    ///
    /// Only meaningful after a successful [`sort`](Self::sort); on an
    /// unsorted table the result is unspecified. Returns `None` for an empty
    /// table and for addresses below, above, or between registered ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devmap6502::{RamDevice, RegisterRange, VirtualDeviceManager};
    ///
    /// let mut manager = VirtualDeviceManager::new().unwrap();
    /// let range = RegisterRange::new(0x0101, 0x01FF);
    /// manager.register(range.low, range.high, RamDevice::new(range)).unwrap();
    /// manager.sort().unwrap();
    ///
    /// assert_eq!(manager.find(0x0110).map(|e| e.range()), Some(range));
    /// assert!(manager.find(0x0050).is_none());
    /// assert!(manager.find(0x5000).is_none());
    /// ```
    pub fn find(&self, address: u16) -> Option<&DeviceEntry> {
        binary_search(&self.entries, address).map(|index| &self.entries[index])
    }

    /// Mutable counterpart of [`find`](Self::find).
    pub fn find_mut(&mut self, address: u16) -> Option<&mut DeviceEntry> {
        binary_search(&self.entries, address).map(move |index| &mut self.entries[index])
    }
}

/// Recursive binary search over a sorted slice of entries, returning the
/// index of the entry covering `address`.
fn binary_search(array: &[DeviceEntry], address: u16) -> Option<usize> {
    match array.len() {
        0 => None,
        1 => array[0].contains(address).then_some(0),
        entries => {
            let mid = midpoint(0, entries);
            let range = array[mid].range;

            if address < range.low && mid > 0 {
                binary_search(&array[..mid], address)
            } else if address > range.high && mid < entries {
                binary_search(&array[mid..], address).map(|index| index + mid)
            } else if range.contains(address) {
                Some(mid)
            } else {
                None
            }
        }
    }
}
