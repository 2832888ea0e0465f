//! # 6502 Device Table
//!
//! A register-range dispatch table for 6502 emulator memory buses. Each
//! virtual peripheral registers the range of addresses it services; the
//! table is then sorted once, which also rejects any two devices claiming
//! overlapping ranges; and every CPU access afterwards is resolved by binary
//! search to the device that owns the address.
//!
//! ## Quick Start
//!
//! ```rust
//! use devmap6502::{Error, RamDevice, RegisterRange, ViaDevice, VirtualDeviceManager};
//!
//! let mut bus = VirtualDeviceManager::new().unwrap();
//!
//! // Registration order does not matter
//! let via = ViaDevice::range();
//! bus.register(via.low, via.high, ViaDevice::new()).unwrap();
//!
//! let ram = RegisterRange::new(0x0000, 0x7FFF);
//! bus.register(ram.low, ram.high, RamDevice::new(ram)).unwrap();
//!
//! // Finalize before the first access
//! bus.sort().unwrap();
//!
//! bus.write(0x0200, 0x42).unwrap();
//! assert_eq!(bus.read(0x0200), Ok(0x42));
//! assert_eq!(bus.read(0x9000), Err(Error::NotMapped { address: 0x9000 }));
//! ```
//!
//! ## Modules
//!
//! - `range` - Register ranges and the range comparator
//! - `merge_sort` - Midpoint helper and the overlap-detecting merge sort
//! - `manager` - The device table: register, sort, find, release
//! - `bus` - Read/write dispatch over a sorted table
//! - `devices` - The `VirtualDevice` trait and bundled devices

pub mod bus;
pub mod devices;
pub mod error;
pub mod manager;
pub mod merge_sort;
pub mod range;
pub mod wasm;

// Re-export public API
pub use devices::{CallbackDevice, RamDevice, ViaDevice, VirtualDevice};
pub use error::{Error, Result};
pub use manager::{DeviceEntry, TableState, VirtualDeviceManager, INITIAL_CAPACITY};
pub use merge_sort::midpoint;
pub use range::{compare, RangeOrdering, RegisterRange};

#[cfg(feature = "wasm")]
pub use wasm::WasmDeviceManager;
