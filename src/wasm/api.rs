//! WASM API for the device table.
//!
//! JavaScript registers register ranges backed by JS functions, sorts the
//! table, then dispatches reads and writes through it.

use super::byte_from_js_number;
use crate::{Error, RamDevice, RegisterRange, Result, ViaDevice, VirtualDevice, VirtualDeviceManager};
use wasm_bindgen::prelude::*;

/// Status reported when a JS callback throws or a read returns something
/// other than a byte.
pub const JS_CALLBACK_FAILED: u32 = 0x8000_2000;

/// Device whose registers are serviced by a pair of JS functions.
///
/// `read(address)` must return an integer in `0..=255`; `write(address,
/// value)` may return anything.
struct JsDevice {
    read: js_sys::Function,
    write: js_sys::Function,
}

impl VirtualDevice for JsDevice {
    fn read(&mut self, address: u16) -> Result<u8> {
        let failed = Error::Device {
            address,
            status: JS_CALLBACK_FAILED,
        };

        let value = self
            .read
            .call1(&JsValue::NULL, &JsValue::from(address))
            .map_err(|_| failed.clone())?;

        value.as_f64().and_then(byte_from_js_number).ok_or(failed)
    }

    fn write(&mut self, address: u16, value: u8) -> Result<()> {
        self.write
            .call2(&JsValue::NULL, &JsValue::from(address), &JsValue::from(value))
            .map(|_| ())
            .map_err(|_| Error::Device {
                address,
                status: JS_CALLBACK_FAILED,
            })
    }
}

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<Error> for JsError {
    fn from(err: Error) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Device table handle for JavaScript.
#[wasm_bindgen]
pub struct WasmDeviceManager {
    inner: VirtualDeviceManager,
}

#[wasm_bindgen]
impl WasmDeviceManager {
    /// Create an empty table
    #[wasm_bindgen(constructor)]
    pub fn new() -> std::result::Result<WasmDeviceManager, JsError> {
        Ok(WasmDeviceManager {
            inner: VirtualDeviceManager::new()?,
        })
    }

    /// Register JS read/write functions for `low..=high`
    pub fn register(
        &mut self,
        low: u16,
        high: u16,
        read: js_sys::Function,
        write: js_sys::Function,
    ) -> std::result::Result<(), JsError> {
        Ok(self.inner.register(low, high, JsDevice { read, write })?)
    }

    /// Register zero-filled RAM for `low..=high`; fails if `low > high`
    pub fn register_ram(&mut self, low: u16, high: u16) -> std::result::Result<(), JsError> {
        let ram = RamDevice::try_new(RegisterRange::new(low, high))?;
        Ok(self.inner.register(low, high, ram)?)
    }

    /// Register the demo VIA at its fixed window
    pub fn register_via(&mut self) -> std::result::Result<(), JsError> {
        let range = ViaDevice::range();
        Ok(self.inner.register(range.low, range.high, ViaDevice::new())?)
    }

    /// Sort the table; fails if any two ranges overlap
    pub fn sort(&mut self) -> std::result::Result<(), JsError> {
        Ok(self.inner.sort()?)
    }

    pub fn read(&mut self, address: u16) -> std::result::Result<u8, JsError> {
        Ok(self.inner.read(address)?)
    }

    pub fn write(&mut self, address: u16, value: u8) -> std::result::Result<(), JsError> {
        Ok(self.inner.write(address, value)?)
    }

    pub fn address_mapped(&self, address: u16) -> bool {
        self.inner.address_mapped(address)
    }

    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn sorted(&self) -> bool {
        self.inner.is_sorted()
    }
}
