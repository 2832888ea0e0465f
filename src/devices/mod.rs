//! Virtual devices that can be attached to the device table.
//!
//! A peripheral services every bus access inside the register range it was
//! registered for. The device table calls it with the absolute bus address,
//! so a device that knows its base address can decode registers itself.
//!
//! # Architecture
//!
//! - **VirtualDevice trait**: read/write interface shared by peripherals and
//!   by the device table itself, so tables can be nested
//! - **Shared devices**: `Rc<RefCell<D>>` is a device too, letting the
//!   registering peripheral keep a handle to its own state
//! - **Implementations**: RAM, the demo VIA, and a callback adapter
//!
//! # Example
//!
//! ```rust
//! use devmap6502::{RamDevice, RegisterRange, VirtualDeviceManager};
//!
//! let mut manager = VirtualDeviceManager::new().unwrap();
//!
//! let range = RegisterRange::new(0x0200, 0x02FF);
//! manager.register(range.low, range.high, RamDevice::new(range)).unwrap();
//! manager.sort().unwrap();
//!
//! manager.write(0x0242, 0xAA).unwrap();
//! assert_eq!(manager.read(0x0242).unwrap(), 0xAA);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;

pub mod callback;
pub mod ram;
pub mod via;

pub use callback::CallbackDevice;
pub use ram::RamDevice;
pub use via::ViaDevice;

/// Interface for memory-mapped peripherals.
///
/// Both operations receive the absolute bus address. Errors are passed back
/// to the caller of the bus unchanged, so a device may return any
/// [`Error`](crate::Error), usually [`Error::Device`](crate::Error::Device)
/// carrying its own status code.
///
/// `read` takes `&mut self` because reading a hardware register commonly has
/// side effects (clearing an interrupt flag, popping a FIFO).
///
/// # Examples
///
/// ```rust
/// use devmap6502::{Result, VirtualDevice};
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl VirtualDevice for Latch {
///     fn read(&mut self, _address: u16) -> Result<u8> {
///         Ok(self.value)
///     }
///
///     fn write(&mut self, _address: u16, value: u8) -> Result<()> {
///         self.value = value;
///         Ok(())
///     }
/// }
/// ```
pub trait VirtualDevice {
    /// Read the byte at `address`.
    fn read(&mut self, address: u16) -> Result<u8>;

    /// Write `value` to `address`.
    fn write(&mut self, address: u16, value: u8) -> Result<()>;
}

impl<D: VirtualDevice + ?Sized> VirtualDevice for Rc<RefCell<D>> {
    fn read(&mut self, address: u16) -> Result<u8> {
        self.borrow_mut().read(address)
    }

    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        self.borrow_mut().write(address, value)
    }
}

impl<D: VirtualDevice + ?Sized> VirtualDevice for Box<D> {
    fn read(&mut self, address: u16) -> Result<u8> {
        (**self).read(address)
    }

    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        (**self).write(address, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegisterRange;

    #[test]
    fn test_shared_device_sees_writes() {
        let ram = Rc::new(RefCell::new(RamDevice::new(RegisterRange::new(0x10, 0x1F))));
        let mut handle = Rc::clone(&ram);

        handle.write(0x12, 0x34).unwrap();
        assert_eq!(ram.borrow_mut().read(0x12).unwrap(), 0x34);
        assert_eq!(handle.read(0x12).unwrap(), 0x34);
    }

    #[test]
    fn test_boxed_device_forwards() {
        let mut boxed: Box<dyn VirtualDevice> =
            Box::new(RamDevice::new(RegisterRange::new(0x00, 0x0F)));

        boxed.write(0x0F, 0x99).unwrap();
        assert_eq!(boxed.read(0x0F).unwrap(), 0x99);
    }
}
