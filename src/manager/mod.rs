//! # Virtual Device Manager
//!
//! The device table behind the memory bus. Peripherals register the
//! register range they service; once registration is complete the table is
//! sorted, which is also where overlapping ranges are rejected. Lookups then
//! binary-search the sorted table.
//!
//! ## Lifecycle
//!
//! ```text
//! Empty --register--> Registering --sort ok--> Sorted
//!                          |
//!                          +-------sort err--> Unsorted
//! ```
//!
//! Registering from any state moves the table back to `Registering`; the next
//! sort re-validates every entry.

use std::fmt;

use log::{debug, warn};

use crate::devices::VirtualDevice;
use crate::error::{Error, Result};
use crate::merge_sort::merge_sort;
use crate::range::RegisterRange;

mod find;

/// Number of entries a new table has room for.
pub const INITIAL_CAPACITY: usize = 10;

/// One registered device and the range it services.
pub struct DeviceEntry {
    range: RegisterRange,
    device: Box<dyn VirtualDevice>,
}

impl DeviceEntry {
    /// The register range this entry was registered with.
    pub fn range(&self) -> RegisterRange {
        self.range
    }

    /// Returns true if this entry services `address`.
    pub fn contains(&self, address: u16) -> bool {
        self.range.contains(address)
    }

    /// The registered device.
    pub fn device(&self) -> &dyn VirtualDevice {
        self.device.as_ref()
    }

    /// The registered device, mutably.
    pub fn device_mut(&mut self) -> &mut dyn VirtualDevice {
        self.device.as_mut()
    }
}

impl fmt::Debug for DeviceEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DeviceEntry")
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

/// Where the table is in its register/sort lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Nothing registered and never sorted
    Empty,
    /// Entries were added since the last sort
    Registering,
    /// The last sort succeeded; lookups are valid
    Sorted,
    /// The last sort found an overlap; lookups are unspecified
    Unsorted,
}

/// Table mapping register ranges to the devices that service them.
///
/// # Examples
///
/// ```rust
/// use devmap6502::{RamDevice, RegisterRange, ViaDevice, VirtualDeviceManager};
///
/// let mut manager = VirtualDeviceManager::new().unwrap();
///
/// let via = ViaDevice::range();
/// manager.register(via.low, via.high, ViaDevice::new()).unwrap();
///
/// let ram = RegisterRange::new(0x0000, 0x7FFF);
/// manager.register(ram.low, ram.high, RamDevice::new(ram)).unwrap();
///
/// manager.sort().unwrap();
///
/// assert!(manager.address_mapped(0xF60D));
/// assert!(!manager.address_mapped(0x8000));
/// ```
pub struct VirtualDeviceManager {
    entries: Vec<DeviceEntry>,
    capacity: usize,
    state: TableState,
}

impl VirtualDeviceManager {
    /// Create an empty table with room for [`INITIAL_CAPACITY`] entries.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if the entry storage cannot be allocated.
    pub fn new() -> Result<Self> {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty table with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| Error::OutOfMemory {
                requested: capacity,
            })?;

        debug!("created device table with capacity {}", capacity);

        Ok(Self {
            entries,
            capacity,
            state: TableState::Empty,
        })
    }

    /// Register `device` as the handler for `low..=high`.
    ///
    /// Ranges may be registered in any order. Overlaps are not checked here;
    /// [`sort`](Self::sort) rejects them. When the table is full its capacity
    /// grows by half.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if growing the table fails. The table is left
    /// unchanged.
    pub fn register<D>(&mut self, low: u16, high: u16, device: D) -> Result<()>
    where
        D: VirtualDevice + 'static,
    {
        if self.entries.len() == self.capacity {
            self.grow()?;
        }

        let range = RegisterRange::new(low, high);
        self.entries.push(DeviceEntry {
            range,
            device: Box::new(device),
        });
        self.state = TableState::Registering;

        debug!(
            "registered device for {} ({} of {})",
            range,
            self.entries.len(),
            self.capacity
        );

        Ok(())
    }

    fn grow(&mut self) -> Result<()> {
        // A zero or one entry table still needs to make progress
        let new_capacity = self.capacity + (self.capacity / 2).max(1);

        self.entries
            .try_reserve_exact(new_capacity - self.entries.len())
            .map_err(|_| Error::OutOfMemory {
                requested: new_capacity,
            })?;

        debug!(
            "grew device table from {} to {} entries",
            self.capacity, new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Sort the table by register range, rejecting overlapping ranges.
    ///
    /// Must be called after the last registration and before any lookup.
    /// The sort is a merge sort that aborts at the first merge whose two
    /// heads are equal or intersecting.
    ///
    /// # Errors
    ///
    /// - [`Error::Overlap`] naming the two conflicting ranges. The table is
    ///   then [`TableState::Unsorted`] and must not be used for lookups.
    /// - [`Error::OutOfMemory`] if the scratch buffers cannot be allocated.
    pub fn sort(&mut self) -> Result<()> {
        let count = self.entries.len();

        let mut keys: Vec<(RegisterRange, usize)> = Vec::new();
        let mut scratch: Vec<(RegisterRange, usize)> = Vec::new();
        for buffer in [&mut keys, &mut scratch] {
            buffer
                .try_reserve_exact(count)
                .map_err(|_| Error::OutOfMemory { requested: count })?;
        }

        keys.extend(
            self.entries
                .iter()
                .enumerate()
                .map(|(index, entry)| (entry.range, index)),
        );
        scratch.extend_from_slice(&keys);

        let range_of = |key: &(RegisterRange, usize)| key.0;
        if let Err(err) = merge_sort(&mut keys, &mut scratch, &range_of) {
            warn!("device table sort failed: {}", err);
            self.state = TableState::Unsorted;
            return Err(err);
        }

        // keys[i].1 names the entry that belongs at position i
        for position in 0..count {
            let mut source = keys[position].1;
            while source < position {
                source = keys[source].1;
            }
            self.entries.swap(position, source);
        }

        self.state = TableState::Sorted;
        debug!("sorted {} device entries", count);
        Ok(())
    }

    /// Destroy the table and every registered device.
    pub fn release(self) {
        debug!("releasing device table with {} entries", self.entries.len());
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries the table can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TableState {
        self.state
    }

    /// Returns true if the last sort succeeded and nothing was registered
    /// since.
    pub fn is_sorted(&self) -> bool {
        self.state == TableState::Sorted
    }

    /// Entries in table order: insertion order before sorting, ascending
    /// range order after a successful sort.
    pub fn entries(&self) -> &[DeviceEntry] {
        &self.entries
    }

    /// Registered ranges in table order.
    pub fn ranges(&self) -> impl Iterator<Item = RegisterRange> + '_ {
        self.entries.iter().map(DeviceEntry::range)
    }
}

impl fmt::Debug for VirtualDeviceManager {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("VirtualDeviceManager")
            .field("entries", &self.entries)
            .field("capacity", &self.capacity)
            .field("state", &self.state)
            .finish()
    }
}
