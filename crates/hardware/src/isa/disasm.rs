//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing and fault diagnostics. Only the executable subset
//! is rendered with operands; `EBREAK` is named so that fault reports read well,
//! and every other encoding renders as `"unknown"`.
//!
//! # Usage
//!
//! ```
//! use rvmini_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::isa::abi;
use crate::isa::decode::decode_op;
use crate::isa::instruction::Op;
use crate::isa::system::opcodes as sys_op;

/// Number of bits the upper immediate is shifted by in LUI/AUIPC.
const U_IMM_SHIFT: u32 = 12;

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a mnemonic like `"lw a2, 44(a2)"` or `"unknown"` for
/// unsupported encodings.
pub fn disassemble(inst: u32) -> String {
    match decode_op(inst) {
        Some(op) => format_op(&op),
        None if inst == sys_op::EBREAK => "ebreak".to_string(),
        None => "unknown".to_string(),
    }
}

/// Renders an already-decoded operation.
pub fn format_op(op: &Op) -> String {
    match *op {
        Op::Addi { rd, rs1, imm } => {
            format!("addi {}, {}, {}", abi::name(rd), abi::name(rs1), imm)
        }
        Op::Addiw { rd, rs1, imm } => {
            format!("addiw {}, {}, {}", abi::name(rd), abi::name(rs1), imm)
        }
        Op::Lui { rd, imm } => format!("lui {}, {:#x}", abi::name(rd), upper(imm)),
        Op::Auipc { rd, imm } => format!("auipc {}, {:#x}", abi::name(rd), upper(imm)),
        Op::Load { kind, rd, rs1, imm } => format!(
            "{} {}, {}({})",
            kind.mnemonic(),
            abi::name(rd),
            imm,
            abi::name(rs1)
        ),
        Op::Ecall => "ecall".to_string(),
    }
}

/// Recovers the 20-bit field written in assembly from a shifted U-type immediate.
fn upper(imm: i64) -> u32 {
    (imm as u32) >> U_IMM_SHIFT
}
