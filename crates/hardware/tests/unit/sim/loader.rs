//! # Binary Loading Tests
//!
//! Reading images from disk and placing them in guest RAM.

use std::io::Write;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rvmini_core::SimError;
use rvmini_core::core::Cpu;
use rvmini_core::sim::loader;
use tempfile::NamedTempFile;

use crate::common::builder::program::hello_world;
use crate::common::harness::{RAM_BASE, RAM_SIZE, TestContext, test_config};

/// Helper function to create a test CPU instance.
fn create_test_cpu() -> Cpu {
    Cpu::new(&test_config()).unwrap()
}

/// Helper function to create a temporary binary file for testing.
fn create_temp_binary(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_binary_success() {
    let image = hello_world();
    let temp_file = create_temp_binary(&image);
    assert_eq!(loader::load_binary(temp_file.path()).unwrap(), image);
}

#[test]
fn test_load_binary_empty_file() {
    let temp_file = create_temp_binary(&[]);
    assert!(loader::load_binary(temp_file.path()).unwrap().is_empty());
}

#[test]
fn test_load_binary_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = loader::load_binary(dir.path().join("missing.bin")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}

#[test]
fn test_load_image_sets_pc_and_clears_registers() {
    let mut cpu = create_test_cpu();
    cpu.regs.write(10, 5);
    cpu.pc = 0;
    cpu.exit_code = Some(1);

    loader::load_image(&mut cpu, &[0x13, 0, 0, 0], RAM_BASE + 8).unwrap();

    assert_eq!(cpu.pc, RAM_BASE + 8);
    assert_eq!(cpu.regs.read(10), 0);
    assert!(!cpu.halted());
}

#[test]
fn test_image_filling_ram_exactly_fits() {
    let mut cpu = create_test_cpu();
    let image = vec![0xAB; RAM_SIZE];
    loader::load_image(&mut cpu, &image, RAM_BASE).unwrap();
    assert_eq!(cpu.memory.slice(RAM_BASE, RAM_SIZE as u64), Some(&image[..]));
}

#[test]
fn test_oversized_image_rejected_without_touching_ram() {
    let mut cpu = create_test_cpu();
    cpu.pc = RAM_BASE + 0x40;
    let image = vec![0xFF; RAM_SIZE + 1];

    let err = loader::load_image(&mut cpu, &image, RAM_BASE).unwrap_err();

    assert!(matches!(
        err,
        SimError::ImageTooLarge { size, capacity } if size == RAM_SIZE + 1 && capacity == RAM_SIZE
    ));
    assert_eq!(cpu.memory.read_le(RAM_BASE, 8), Some(0));
    assert_eq!(cpu.pc, RAM_BASE + 0x40);
}

#[test]
fn test_oversized_image_produces_no_output() {
    let mut ctx = TestContext::new();
    let mut image = hello_world();
    image.resize(RAM_SIZE + 4, 0);

    assert!(matches!(ctx.sim.load(&image), Err(SimError::ImageTooLarge { .. })));
    assert!(ctx.output().is_empty());
    assert_eq!(ctx.cpu().stats.instructions_retired, 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_image_copied_verbatim(image in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let mut cpu = create_test_cpu();
        loader::load_image(&mut cpu, &image, RAM_BASE).unwrap();
        prop_assert_eq!(cpu.memory.slice(RAM_BASE, image.len() as u64), Some(&image[..]));
        prop_assert_eq!(cpu.memory.read_le(RAM_BASE + image.len() as u64, 1), Some(0));
    }
}
