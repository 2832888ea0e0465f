//! RAM device implementation.
//!
//! Provides readable and writable storage for one register range.

use super::VirtualDevice;
use crate::error::{Error, Result};
use crate::range::RegisterRange;

/// Simple RAM device covering a register range.
///
/// Every address in the range is readable and writable. Accesses outside
/// the range fail with [`Error::NotMapped`].
///
/// # Examples
///
/// ```rust
/// use devmap6502::{RamDevice, RegisterRange, VirtualDevice};
///
/// let mut ram = RamDevice::new(RegisterRange::new(0x0400, 0x07FF));
///
/// ram.write(0x0442, 0xAA).unwrap();
/// assert_eq!(ram.read(0x0442).unwrap(), 0xAA);
/// assert!(ram.read(0x0800).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RamDevice {
    range: RegisterRange,
    data: Vec<u8>,
}

impl RamDevice {
    /// Create a zero-filled RAM device covering `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range.low > range.high`. Use [`try_new`](Self::try_new)
    /// for bounds that come from outside the program.
    pub fn new(range: RegisterRange) -> Self {
        match Self::try_new(range) {
            Ok(ram) => ram,
            Err(err) => panic!("{}", err),
        }
    }

    /// Create a zero-filled RAM device covering `range`, rejecting an
    /// inverted range.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRange`] if `range.low > range.high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devmap6502::{Error, RamDevice, RegisterRange};
    ///
    /// assert!(RamDevice::try_new(RegisterRange::new(0x0000, 0x00FF)).is_ok());
    ///
    /// let inverted = RegisterRange::new(5, 1);
    /// assert_eq!(
    ///     RamDevice::try_new(inverted).unwrap_err(),
    ///     Error::InvalidRange { range: inverted }
    /// );
    /// ```
    pub fn try_new(range: RegisterRange) -> Result<Self> {
        let span = range
            .high
            .checked_sub(range.low)
            .ok_or(Error::InvalidRange { range })?;

        Ok(Self {
            range,
            data: vec![0; usize::from(span) + 1],
        })
    }

    /// The range this device was sized for.
    pub fn range(&self) -> RegisterRange {
        self.range
    }

    /// Load bytes starting at absolute `address`.
    ///
    /// # Panics
    ///
    /// Panics if the bytes do not fit inside the device's range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devmap6502::{RamDevice, RegisterRange, VirtualDevice};
    ///
    /// let mut ram = RamDevice::new(RegisterRange::new(0x0100, 0x01FF));
    /// ram.load_bytes(0x0100, &[0x01, 0x02, 0x03]);
    ///
    /// assert_eq!(ram.read(0x0101).unwrap(), 0x02);
    /// ```
    pub fn load_bytes(&mut self, address: u16, bytes: &[u8]) {
        let start = usize::from(address - self.range.low);
        let end = start + bytes.len();
        self.data[start..end].copy_from_slice(bytes);
    }

    fn offset(&self, address: u16) -> Result<usize> {
        if self.range.contains(address) {
            Ok(usize::from(address - self.range.low))
        } else {
            Err(Error::NotMapped { address })
        }
    }
}

impl VirtualDevice for RamDevice {
    fn read(&mut self, address: u16) -> Result<u8> {
        let offset = self.offset(address)?;
        Ok(self.data[offset])
    }

    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        let offset = self.offset(address)?;
        self.data[offset] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_new() {
        let mut ram = RamDevice::new(RegisterRange::new(0x1000, 0x10FF));

        for address in 0x1000..=0x10FF {
            assert_eq!(ram.read(address).unwrap(), 0x00);
        }
    }

    #[test]
    fn test_ram_read_write() {
        let mut ram = RamDevice::new(RegisterRange::new(0x1000, 0x10FF));

        ram.write(0x1000, 0xAA).unwrap();
        ram.write(0x1064, 0xBB).unwrap();
        ram.write(0x10FF, 0xCC).unwrap();

        assert_eq!(ram.read(0x1000).unwrap(), 0xAA);
        assert_eq!(ram.read(0x1064).unwrap(), 0xBB);
        assert_eq!(ram.read(0x10FF).unwrap(), 0xCC);
    }

    #[test]
    fn test_ram_outside_range() {
        let mut ram = RamDevice::new(RegisterRange::new(0x1000, 0x10FF));

        assert_eq!(
            ram.read(0x0FFF),
            Err(Error::NotMapped { address: 0x0FFF })
        );
        assert_eq!(
            ram.write(0x1100, 0x42),
            Err(Error::NotMapped { address: 0x1100 })
        );
    }

    #[test]
    fn test_ram_full_address_space() {
        let mut ram = RamDevice::new(RegisterRange::new(0x0000, 0xFFFF));

        ram.write(0xFFFF, 0x12).unwrap();
        assert_eq!(ram.read(0xFFFF).unwrap(), 0x12);
    }

    #[test]
    fn test_ram_inverted_range_rejected() {
        let range = RegisterRange::new(5, 1);
        assert_eq!(
            RamDevice::try_new(range).unwrap_err(),
            Error::InvalidRange { range }
        );
    }

    #[test]
    #[should_panic(expected = "low bound above its high bound")]
    fn test_ram_new_inverted_range_panics() {
        RamDevice::new(RegisterRange::new(0x0200, 0x01FF));
    }

    #[test]
    fn test_ram_single_address() {
        let mut ram = RamDevice::try_new(RegisterRange::new(0xFFFF, 0xFFFF)).unwrap();
        ram.write(0xFFFF, 0x01).unwrap();
        assert_eq!(ram.read(0xFFFF).unwrap(), 0x01);
    }

    #[test]
    fn test_ram_load_bytes() {
        let mut ram = RamDevice::new(RegisterRange::new(0x0200, 0x02FF));
        ram.load_bytes(0x0210, &[0xDE, 0xAD, 0xBE, 0xEF]);

        assert_eq!(ram.read(0x0210).unwrap(), 0xDE);
        assert_eq!(ram.read(0x0213).unwrap(), 0xEF);
        assert_eq!(ram.read(0x0214).unwrap(), 0x00);
    }

    #[test]
    #[should_panic]
    fn test_ram_load_bytes_overflow() {
        let mut ram = RamDevice::new(RegisterRange::new(0x0200, 0x0203));
        ram.load_bytes(0x0202, &[0x01, 0x02, 0x03]);
    }
}
