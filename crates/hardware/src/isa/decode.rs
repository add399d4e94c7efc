//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RISC-V instruction encodings. Decoding
//! happens in two steps:
//! 1. **Field extraction:** `decode` pulls out the opcode, register indices, `funct3`,
//!    and the sign-extended immediate for the I-type and U-type formats.
//! 2. **Classification:** `decode_op` maps the fields onto an executable [`Op`], or
//!    `None` when the encoding is outside the supported subset.

use crate::isa::instruction::{Decoded, InstructionBits, LoadKind, Op};
use crate::isa::rv64i::{funct3, opcodes};
use crate::isa::system::opcodes as sys_ops;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// The immediate occupies the upper 12 bits and is sign-extended.
const I_IMM_SHIFT: u32 = 20;

/// Bit mask for extracting U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// The immediate stays in place (low 12 bits zero) and is sign-extended from bit 31.
const U_IMM_MASK: u32 = 0xFFFFF000;

/// Decodes a RISC-V instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure containing all extracted instruction fields.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_IMM_32 => decode_i_type_imm(inst),
        opcodes::OP_LUI | opcodes::OP_AUIPC => decode_u_type_imm(inst),
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: InstructionBits::rd(&inst),
        rs1: InstructionBits::rs1(&inst),
        funct3: InstructionBits::funct3(&inst),
        imm,
    }
}

/// Decodes an instruction and classifies it as an executable operation.
///
/// Returns `None` for any encoding outside the supported subset, including
/// reserved `funct3` values of otherwise supported opcodes.
pub fn decode_op(inst: u32) -> Option<Op> {
    let d = decode(inst);
    match d.opcode {
        opcodes::OP_IMM if d.funct3 == funct3::ADDI => Some(Op::Addi {
            rd: d.rd,
            rs1: d.rs1,
            imm: d.imm,
        }),
        opcodes::OP_IMM_32 if d.funct3 == funct3::ADDI => Some(Op::Addiw {
            rd: d.rd,
            rs1: d.rs1,
            imm: d.imm,
        }),
        opcodes::OP_LUI => Some(Op::Lui {
            rd: d.rd,
            imm: d.imm,
        }),
        opcodes::OP_AUIPC => Some(Op::Auipc {
            rd: d.rd,
            imm: d.imm,
        }),
        opcodes::OP_LOAD => LoadKind::from_funct3(d.funct3).map(|kind| Op::Load {
            kind,
            rd: d.rd,
            rs1: d.rs1,
            imm: d.imm,
        }),
        sys_ops::OP_SYSTEM if d.raw == sys_ops::ECALL => Some(Op::Ecall),
        _ => None,
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// Used for Load and Immediate Arithmetic instructions.
fn decode_i_type_imm(inst: u32) -> i64 {
    ((inst as i32) >> I_IMM_SHIFT) as i64
}

/// Decodes the immediate value for U-Type instructions.
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// Used for LUI and AUIPC.
fn decode_u_type_imm(inst: u32) -> i64 {
    ((inst & U_IMM_MASK) as i32) as i64
}
