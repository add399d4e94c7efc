//! RISC-V System Opcodes.

/// System instructions (ECALL, EBREAK, CSR access).
pub const OP_SYSTEM: u32 = 0b1110011;

/// Environment Call (ECALL).
/// Used to make a request to the execution environment (here, the host).
pub const ECALL: u32 = 0x0000_0073;

/// Breakpoint (EBREAK). Recognised by the disassembler only; executing it is illegal.
pub const EBREAK: u32 = 0x0010_0073;
