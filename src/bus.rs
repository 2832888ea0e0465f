//! # Bus Adapter
//!
//! Exposes a sorted [`VirtualDeviceManager`] as a single read/write pair,
//! the shape the CPU core expects from any memory-mapped device. An address
//! no entry covers fails with [`Error::NotMapped`]; otherwise the access is
//! forwarded to the entry's device and its result is returned verbatim.
//!
//! Because the manager implements [`VirtualDevice`] itself, a whole table can
//! be registered as the device for a sub-range of another table.

use log::trace;

use crate::devices::VirtualDevice;
use crate::error::{Error, Result};
use crate::manager::VirtualDeviceManager;

impl VirtualDeviceManager {
    /// Read a byte from the device mapped at `address`.
    ///
    /// # Errors
    ///
    /// [`Error::NotMapped`] if no device covers `address`, or whatever error
    /// the device itself returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devmap6502::{Error, RamDevice, RegisterRange, VirtualDeviceManager};
    ///
    /// let mut manager = VirtualDeviceManager::new().unwrap();
    /// let range = RegisterRange::new(0x0000, 0x00FF);
    /// manager.register(range.low, range.high, RamDevice::new(range)).unwrap();
    /// manager.sort().unwrap();
    ///
    /// assert_eq!(manager.read(0x0010), Ok(0x00));
    /// assert_eq!(manager.read(0x0100), Err(Error::NotMapped { address: 0x0100 }));
    /// ```
    pub fn read(&mut self, address: u16) -> Result<u8> {
        match self.find_mut(address) {
            Some(entry) => entry.device_mut().read(address),
            None => {
                trace!("read from unmapped address 0x{:04X}", address);
                Err(Error::NotMapped { address })
            }
        }
    }

    /// Write a byte to the device mapped at `address`.
    ///
    /// # Errors
    ///
    /// [`Error::NotMapped`] if no device covers `address`, or whatever error
    /// the device itself returned.
    pub fn write(&mut self, address: u16, value: u8) -> Result<()> {
        match self.find_mut(address) {
            Some(entry) => entry.device_mut().write(address, value),
            None => {
                trace!(
                    "write of 0x{:02X} to unmapped address 0x{:04X}",
                    value,
                    address
                );
                Err(Error::NotMapped { address })
            }
        }
    }

    /// Returns true if some registered device covers `address`.
    pub fn address_mapped(&self, address: u16) -> bool {
        self.find(address).is_some()
    }
}

impl VirtualDevice for VirtualDeviceManager {
    fn read(&mut self, address: u16) -> Result<u8> {
        VirtualDeviceManager::read(self, address)
    }

    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        VirtualDeviceManager::write(self, address, value)
    }
}
