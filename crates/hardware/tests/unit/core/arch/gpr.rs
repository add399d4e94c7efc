//! # General-Purpose Register Tests
//!
//! Tests for the RISC-V general-purpose register file implementation.

use proptest::prelude::*;
use rvmini_core::core::arch::gpr::Gpr;

#[test]
fn test_gpr_new_initializes_to_zero() {
    let gpr = Gpr::new();
    for i in 0..32 {
        assert_eq!(gpr.read(i), 0);
    }
}

#[test]
fn test_gpr_read_write_x0_always_zero() {
    let mut gpr = Gpr::new();
    gpr.write(0, 0xDEAD_BEEF);
    assert_eq!(gpr.read(0), 0);
}

#[test]
fn test_gpr_read_write_x31() {
    let mut gpr = Gpr::new();
    gpr.write(31, 0x9999_AAAA);
    assert_eq!(gpr.read(31), 0x9999_AAAA);
}

#[test]
fn test_gpr_write_all_registers() {
    let mut gpr = Gpr::new();
    for i in 1..32 {
        let value = (i as u64) << 32 | (i as u64);
        gpr.write(i, value);
        assert_eq!(gpr.read(i), value);
    }
}

#[test]
fn test_gpr_registers_are_independent() {
    let mut gpr = Gpr::new();
    gpr.write(10, 1);
    gpr.write(11, 2);
    assert_eq!(gpr.read(10), 1);
    assert_eq!(gpr.read(11), 2);
    assert_eq!(gpr.read(12), 0);
}

proptest! {
    #[test]
    fn prop_x0_reads_zero_after_any_writes(
        writes in proptest::collection::vec((0usize..32, any::<u64>()), 0..64)
    ) {
        let mut gpr = Gpr::new();
        for (idx, val) in writes {
            gpr.write(idx, val);
        }
        prop_assert_eq!(gpr.read(0), 0);
    }

    #[test]
    fn prop_last_write_wins(idx in 1usize..32, first in any::<u64>(), second in any::<u64>()) {
        let mut gpr = Gpr::new();
        gpr.write(idx, first);
        gpr.write(idx, second);
        prop_assert_eq!(gpr.read(idx), second);
    }
}
