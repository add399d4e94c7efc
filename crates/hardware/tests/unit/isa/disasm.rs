//! # Disassembler Tests

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvmini_core::isa::disasm::{disassemble, format_op};
use rvmini_core::isa::instruction::Op;

#[rstest]
#[case(0x00A0_0513, "addi a0, zero, 10")]
#[case(0xFFF5_0593, "addi a1, a0, -1")]
#[case(0x0015_051B, "addiw a0, a0, 1")]
#[case(0x1234_5537, "lui a0, 0x12345")]
#[case(0x0000_0597, "auipc a1, 0x0")]
#[case(0x02C6_2603, "lw a2, 44(a2)")]
#[case(0x0085_3503, "ld a0, 8(a0)")]
#[case(0xFFF5_4503, "lbu a0, -1(a0)")]
#[case(0x0000_0073, "ecall")]
#[case(0x0010_0073, "ebreak")]
#[case(0x0000_0000, "unknown")]
#[case(0x0031_00B3, "unknown")]
fn test_disassemble(#[case] inst: u32, #[case] expected: &str) {
    assert_eq!(disassemble(inst), expected);
}

#[test]
fn test_format_op_upper_immediate_negative() {
    let op = Op::Lui {
        rd: 10,
        imm: 0xFFFF_FFFF_8000_0000_u64 as i64,
    };
    assert_eq!(format_op(&op), "lui a0, 0x80000");
}
