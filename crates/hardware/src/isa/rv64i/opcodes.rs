//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes (bits 6-0) the simulator decodes. Every other
//! major opcode is reported as an illegal instruction.

/// Load instructions (LB, LH, LW, LD, etc.).
pub const OP_LOAD: u32 = 0b0000011;

/// Immediate arithmetic instructions (ADDI).
pub const OP_IMM: u32 = 0b0010011;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;

/// 32-bit Immediate arithmetic (ADDIW) - RV64 only.
pub const OP_IMM_32: u32 = 0b0011011;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;
