//! Fuzz target for the device table.
//!
//! Registers arbitrary ranges, sorts, and dispatches arbitrary accesses,
//! checking the sort and lookup invariants along the way.

#![no_main]

use arbitrary::Arbitrary;
use devmap6502::{Error, RamDevice, RegisterRange, VirtualDeviceManager};
use libfuzzer_sys::fuzz_target;

/// One bus access after the table is sorted
#[derive(Debug, Arbitrary)]
enum Access {
    Read(u16),
    Write(u16, u8),
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Raw (a, b) pairs; each becomes the range min(a,b)..=max(a,b)
    ranges: Vec<(u16, u16)>,
    accesses: Vec<Access>,
}

fuzz_target!(|input: FuzzInput| {
    let ranges: Vec<RegisterRange> = input
        .ranges
        .iter()
        .take(64)
        .map(|&(a, b)| RegisterRange::new(a.min(b), a.max(b)))
        .collect();

    let mut manager = VirtualDeviceManager::new().unwrap();
    for range in &ranges {
        manager
            .register(range.low, range.high, RamDevice::new(*range))
            .unwrap();
    }

    let overlapping = ranges.iter().enumerate().any(|(i, x)| {
        ranges[i + 1..]
            .iter()
            .any(|y| x.low <= y.high && y.low <= x.high)
    });

    match manager.sort() {
        Ok(()) => assert!(!overlapping, "sort accepted overlapping ranges"),
        Err(Error::Overlap { .. }) => {
            assert!(overlapping, "sort rejected disjoint ranges");
            return;
        }
        Err(err) => panic!("unexpected sort error: {}", err),
    }

    let sorted: Vec<RegisterRange> = manager.ranges().collect();
    for pair in sorted.windows(2) {
        assert!(pair[0].high < pair[1].low);
    }

    for access in input.accesses.iter().take(256) {
        let address = match *access {
            Access::Read(address) => address,
            Access::Write(address, _) => address,
        };
        let expected = ranges.iter().copied().find(|r| r.contains(address));
        assert_eq!(manager.find(address).map(|e| e.range()), expected);

        let result = match *access {
            Access::Read(address) => manager.read(address).map(|_| ()),
            Access::Write(address, value) => manager.write(address, value),
        };
        assert_eq!(result.is_ok(), expected.is_some());
    }
});
