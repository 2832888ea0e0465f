//! Virtual 6522 VIA for the demo phone memory map.
//!
//! The VIA occupies sixteen registers at `0xF600-0xF60F`.
//!
//! | Address | Name  | Description                       |
//! |---------|-------|-----------------------------------|
//! | $F600   | IORB  | Port B data                       |
//! | $F601   | IORA  | Port A data (handshake)           |
//! | $F602   | DDRB  | Port B data direction             |
//! | $F603   | DDRA  | Port A data direction             |
//! | $F604   | T1C-L | Timer 1 counter low               |
//! | $F605   | T1C-H | Timer 1 counter high              |
//! | $F606   | T1L-L | Timer 1 latch low                 |
//! | $F607   | T1L-H | Timer 1 latch high                |
//! | $F608   | T2C-L | Timer 2 counter low               |
//! | $F609   | T2C-H | Timer 2 counter high              |
//! | $F60A   | SR    | Shift register                    |
//! | $F60B   | ACR   | Auxiliary control register        |
//! | $F60C   | PCR   | Peripheral control register       |
//! | $F60D   | IFR   | Interrupt flag register           |
//! | $F60E   | IER   | Interrupt enable register         |
//! | $F60F   | IORA  | Port A data (no handshake)        |
//!
//! Only register storage is modelled: writes are latched and reads return
//! the latched value. Timers, ports, and interrupts are not emulated.

use super::VirtualDevice;
use crate::error::{Error, Result};
use crate::range::RegisterRange;

/// Port B data
pub const VIA_REGISTER_IORB: u16 = 0xF600;
/// Port A data, with handshake
pub const VIA_REGISTER_IORA: u16 = 0xF601;
/// Port B data direction
pub const VIA_REGISTER_DDRB: u16 = 0xF602;
/// Port A data direction
pub const VIA_REGISTER_DDRA: u16 = 0xF603;
/// Timer 1 counter, low byte
pub const VIA_REGISTER_T1C1L: u16 = 0xF604;
/// Timer 1 counter, high byte
pub const VIA_REGISTER_T1C1H: u16 = 0xF605;
/// Timer 1 latch, low byte
pub const VIA_REGISTER_T1LL: u16 = 0xF606;
/// Timer 1 latch, high byte
pub const VIA_REGISTER_T1LH: u16 = 0xF607;
/// Timer 2 counter, low byte
pub const VIA_REGISTER_T2CL: u16 = 0xF608;
/// Timer 2 counter, high byte
pub const VIA_REGISTER_T2CH: u16 = 0xF609;
/// Shift register
pub const VIA_REGISTER_SR: u16 = 0xF60A;
/// Auxiliary control register
pub const VIA_REGISTER_ACR: u16 = 0xF60B;
/// Peripheral control register
pub const VIA_REGISTER_PCR: u16 = 0xF60C;
/// Interrupt flag register
pub const VIA_REGISTER_IFR: u16 = 0xF60D;
/// Interrupt enable register
pub const VIA_REGISTER_IER: u16 = 0xF60E;
/// Port A data, without handshake
pub const VIA_REGISTER_IORA_NH: u16 = 0xF60F;

/// Register window claimed by the VIA.
pub const VIA_REGISTER_RANGE: RegisterRange =
    RegisterRange::new(VIA_REGISTER_IORB, VIA_REGISTER_IORA_NH);

/// Virtual VIA register file.
#[derive(Debug, Clone, Default)]
pub struct ViaDevice {
    registers: [u8; 16],
}

impl ViaDevice {
    /// Create a VIA with every register cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// The range to register this device under.
    pub const fn range() -> RegisterRange {
        VIA_REGISTER_RANGE
    }

    /// Current value of the register at absolute `address`, if it is a VIA
    /// register.
    pub fn register(&self, address: u16) -> Option<u8> {
        Self::index(address).ok().map(|index| self.registers[index])
    }

    fn index(address: u16) -> Result<usize> {
        if VIA_REGISTER_RANGE.contains(address) {
            Ok(usize::from(address - VIA_REGISTER_RANGE.low))
        } else {
            Err(Error::NotMapped { address })
        }
    }
}

impl VirtualDevice for ViaDevice {
    fn read(&mut self, address: u16) -> Result<u8> {
        let index = Self::index(address)?;
        Ok(self.registers[index])
    }

    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        let index = Self::index(address)?;
        self.registers[index] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_via_range() {
        assert_eq!(ViaDevice::range(), RegisterRange::new(0xF600, 0xF60F));
    }

    #[test]
    fn test_via_registers_latch() {
        let mut via = ViaDevice::new();

        via.write(VIA_REGISTER_DDRA, 0xFF).unwrap();
        via.write(VIA_REGISTER_IER, 0x7F).unwrap();

        assert_eq!(via.read(VIA_REGISTER_DDRA).unwrap(), 0xFF);
        assert_eq!(via.read(VIA_REGISTER_IER).unwrap(), 0x7F);
        assert_eq!(via.read(VIA_REGISTER_DDRB).unwrap(), 0x00);
        assert_eq!(via.register(VIA_REGISTER_IER), Some(0x7F));
    }

    #[test]
    fn test_via_outside_window() {
        let mut via = ViaDevice::new();

        assert_eq!(via.read(0xF610), Err(Error::NotMapped { address: 0xF610 }));
        assert_eq!(via.register(0xF5FF), None);
    }
}
