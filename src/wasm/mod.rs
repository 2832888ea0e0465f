//! WebAssembly bindings for the device table.
//!
//! This module lets a browser front end build a memory map out of
//! JavaScript-backed devices and dispatch bus accesses through it.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::WasmDeviceManager;

/// Convert a number returned by a JS read callback into a byte.
///
/// Only integral values in `0..=255` are accepted; fractions, NaN, and
/// out-of-range values yield `None`.
#[cfg_attr(not(feature = "wasm"), allow(dead_code))]
pub(crate) fn byte_from_js_number(value: f64) -> Option<u8> {
    if value.fract() == 0.0 && (0.0..=255.0).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_from_js_number_accepts_bytes() {
        assert_eq!(byte_from_js_number(0.0), Some(0x00));
        assert_eq!(byte_from_js_number(66.0), Some(0x42));
        assert_eq!(byte_from_js_number(255.0), Some(0xFF));
    }

    #[test]
    fn test_byte_from_js_number_rejects_out_of_range() {
        assert_eq!(byte_from_js_number(256.0), None);
        assert_eq!(byte_from_js_number(300.0), None);
        assert_eq!(byte_from_js_number(-1.0), None);
    }

    #[test]
    fn test_byte_from_js_number_rejects_non_integers() {
        assert_eq!(byte_from_js_number(1.5), None);
        assert_eq!(byte_from_js_number(f64::NAN), None);
        assert_eq!(byte_from_js_number(f64::INFINITY), None);
    }
}
