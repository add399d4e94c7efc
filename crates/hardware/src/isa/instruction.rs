//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the structures produced by decoding:
//! the raw field view (`Decoded`) and the executable operation (`Op`).

use crate::isa::rv64i::funct3;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Fields that do not exist in the instruction's format hold whatever bits occupy
/// that position; `imm` is zero for formats without an immediate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Sign-extended immediate value.
    pub imm: i64,
}

/// Width and extension mode of an integer load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadKind {
    /// `LB`: one byte, sign-extended.
    Byte,
    /// `LH`: two bytes, sign-extended.
    Half,
    /// `LW`: four bytes, sign-extended.
    Word,
    /// `LD`: eight bytes.
    Double,
    /// `LBU`: one byte, zero-extended.
    ByteUnsigned,
    /// `LHU`: two bytes, zero-extended.
    HalfUnsigned,
    /// `LWU`: four bytes, zero-extended.
    WordUnsigned,
}

impl LoadKind {
    /// Maps a LOAD `funct3` to its load kind; `None` for reserved encodings.
    pub const fn from_funct3(f3: u32) -> Option<Self> {
        match f3 {
            funct3::LB => Some(Self::Byte),
            funct3::LH => Some(Self::Half),
            funct3::LW => Some(Self::Word),
            funct3::LD => Some(Self::Double),
            funct3::LBU => Some(Self::ByteUnsigned),
            funct3::LHU => Some(Self::HalfUnsigned),
            funct3::LWU => Some(Self::WordUnsigned),
            _ => None,
        }
    }

    /// Number of bytes read from memory.
    pub const fn size(self) -> u64 {
        match self {
            Self::Byte | Self::ByteUnsigned => 1,
            Self::Half | Self::HalfUnsigned => 2,
            Self::Word | Self::WordUnsigned => 4,
            Self::Double => 8,
        }
    }

    /// Extends a little-endian value of `size()` bytes to the full register width.
    pub const fn extend(self, raw: u64) -> u64 {
        match self {
            Self::Byte => raw as u8 as i8 as i64 as u64,
            Self::Half => raw as u16 as i16 as i64 as u64,
            Self::Word => raw as u32 as i32 as i64 as u64,
            Self::Double => raw,
            Self::ByteUnsigned => raw as u8 as u64,
            Self::HalfUnsigned => raw as u16 as u64,
            Self::WordUnsigned => raw as u32 as u64,
        }
    }

    /// Assembly mnemonic for this load.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Byte => "lb",
            Self::Half => "lh",
            Self::Word => "lw",
            Self::Double => "ld",
            Self::ByteUnsigned => "lbu",
            Self::HalfUnsigned => "lhu",
            Self::WordUnsigned => "lwu",
        }
    }
}

/// An executable operation from the supported instruction subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// `rd = rs1 + imm` (also the `li` and `mv` pseudo-instructions).
    Addi {
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Sign-extended 12-bit immediate.
        imm: i64,
    },
    /// `rd = sext32(rs1 + imm)`, emitted for large `li` constants on RV64.
    Addiw {
        /// Destination register.
        rd: usize,
        /// Source register.
        rs1: usize,
        /// Sign-extended 12-bit immediate.
        imm: i64,
    },
    /// `rd = imm` where `imm` already carries the upper 20 bits.
    Lui {
        /// Destination register.
        rd: usize,
        /// Sign-extended upper immediate (low 12 bits zero).
        imm: i64,
    },
    /// `rd = pc + imm`, the first half of `la` and of PC-relative loads.
    Auipc {
        /// Destination register.
        rd: usize,
        /// Sign-extended upper immediate (low 12 bits zero).
        imm: i64,
    },
    /// `rd = extend(mem[rs1 + imm])`.
    Load {
        /// Access width and extension.
        kind: LoadKind,
        /// Destination register.
        rd: usize,
        /// Base address register.
        rs1: usize,
        /// Sign-extended 12-bit offset.
        imm: i64,
    },
    /// System-call trap into the host.
    Ecall,
}
