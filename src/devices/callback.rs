//! Device built from a context value and a pair of read/write functions.
//!
//! Useful for peripherals whose state lives in a plain struct and whose
//! register handling is a pair of free functions.

use std::fmt;

use super::VirtualDevice;
use crate::error::Result;

/// Read handler: `(context, address) -> byte`.
pub type ReadFn<C> = fn(&mut C, u16) -> Result<u8>;

/// Write handler: `(context, address, byte)`.
pub type WriteFn<C> = fn(&mut C, u16, u8) -> Result<()>;

/// A device made of a context plus read and write handlers.
///
/// The handlers receive the context back unchanged on every access.
///
/// # Examples
///
/// ```rust
/// use devmap6502::{CallbackDevice, Result, VirtualDevice};
///
/// fn read_counter(count: &mut u32, _address: u16) -> Result<u8> {
///     *count += 1;
///     Ok(*count as u8)
/// }
///
/// fn write_counter(count: &mut u32, _address: u16, value: u8) -> Result<()> {
///     *count = u32::from(value);
///     Ok(())
/// }
///
/// let mut device = CallbackDevice::new(0u32, read_counter, write_counter);
/// assert_eq!(device.read(0xF000).unwrap(), 1);
/// device.write(0xF000, 0x10).unwrap();
/// assert_eq!(device.read(0xF000).unwrap(), 0x11);
/// assert_eq!(*device.context(), 0x11);
/// ```
pub struct CallbackDevice<C> {
    context: C,
    read: ReadFn<C>,
    write: WriteFn<C>,
}

impl<C> CallbackDevice<C> {
    /// Bundle `context` with its handlers.
    pub fn new(context: C, read: ReadFn<C>, write: WriteFn<C>) -> Self {
        Self {
            context,
            read,
            write,
        }
    }

    /// Borrow the context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Mutably borrow the context.
    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Give the context back.
    pub fn into_context(self) -> C {
        self.context
    }
}

impl<C: fmt::Debug> fmt::Debug for CallbackDevice<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CallbackDevice")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<C> VirtualDevice for CallbackDevice<C> {
    fn read(&mut self, address: u16) -> Result<u8> {
        (self.read)(&mut self.context, address)
    }

    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        (self.write)(&mut self.context, address, value)
    }
}
