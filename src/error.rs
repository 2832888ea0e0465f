//! Error type shared by the device table, the bus adapter, and devices.

use thiserror::Error;

use crate::range::RegisterRange;

/// Errors returned by device table operations and bus dispatch.
///
/// Device implementations return this type as well, so a status raised by a
/// peripheral travels through the bus unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An allocation for the entry table or the sort scratch buffer failed.
    #[error("out of memory allocating room for {requested} device entries")]
    OutOfMemory {
        /// Number of entries the failed allocation was sized for
        requested: usize,
    },

    /// Two registered ranges are equal or intersect. Raised by sort only.
    #[error("register range {first} overlaps register range {second}")]
    Overlap {
        /// Range from the left run of the failing merge
        first: RegisterRange,
        /// Range from the right run of the failing merge
        second: RegisterRange,
    },

    /// A range's low bound is above its high bound.
    #[error("register range {range} has its low bound above its high bound")]
    InvalidRange {
        /// The rejected range
        range: RegisterRange,
    },

    /// No registered device covers the address.
    #[error("no device is mapped at address 0x{address:04X}")]
    NotMapped {
        /// Address that was dispatched
        address: u16,
    },

    /// A device reported a failure while servicing an access.
    #[error("device at 0x{address:04X} failed with status 0x{status:08X}")]
    Device {
        /// Address that was being serviced
        address: u16,
        /// Device-specific status code
        status: u32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::Overlap {
            first: RegisterRange::new(0x0100, 0x01FF),
            second: RegisterRange::new(0x0180, 0x02FF),
        };
        assert_eq!(
            err.to_string(),
            "register range 0x0100-0x01FF overlaps register range 0x0180-0x02FF"
        );

        let err = Error::InvalidRange {
            range: RegisterRange::new(0x0005, 0x0001),
        };
        assert_eq!(
            err.to_string(),
            "register range 0x0005-0x0001 has its low bound above its high bound"
        );

        let err = Error::NotMapped { address: 0xF610 };
        assert_eq!(err.to_string(), "no device is mapped at address 0xF610");

        let err = Error::Device {
            address: 0xF600,
            status: 0x8000_1000,
        };
        assert_eq!(
            err.to_string(),
            "device at 0xF600 failed with status 0x80001000"
        );
    }
}
