use rvmini_core::isa::rv64i::{funct3, opcodes::*};
use rvmini_core::isa::system::opcodes::{EBREAK, ECALL, OP_SYSTEM};

/// Encodes I-type, U-type and system instructions field by field.
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    imm: i32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rd: 0,
            funct3: 0,
            rs1: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    /// 12-bit immediate for I-type, 20-bit upper immediate for U-type.
    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- Helpers for Common Instructions ---

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(OP_IMM).rd(rd).rs1(rs1).funct3(funct3::ADDI).imm(imm)
    }

    pub fn addiw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode(OP_IMM_32).rd(rd).rs1(rs1).funct3(funct3::ADDI).imm(imm)
    }

    /// `li rd, imm` for 12-bit constants.
    pub fn li(self, rd: u32, imm: i32) -> Self {
        self.addi(rd, 0, imm)
    }

    /// `mv rd, rs1`.
    pub fn mv(self, rd: u32, rs1: u32) -> Self {
        self.addi(rd, rs1, 0)
    }

    pub fn lui(self, rd: u32, imm20: i32) -> Self {
        self.opcode(OP_LUI).rd(rd).imm(imm20)
    }

    pub fn auipc(self, rd: u32, imm20: i32) -> Self {
        self.opcode(OP_AUIPC).rd(rd).imm(imm20)
    }

    pub fn load(self, f3: u32, rd: u32, rs1: u32, offset: i32) -> Self {
        self.opcode(OP_LOAD).rd(rd).rs1(rs1).funct3(f3).imm(offset)
    }

    pub fn lb(self, rd: u32, rs1: u32, offset: i32) -> Self {
        self.load(funct3::LB, rd, rs1, offset)
    }

    pub fn lbu(self, rd: u32, rs1: u32, offset: i32) -> Self {
        self.load(funct3::LBU, rd, rs1, offset)
    }

    pub fn lh(self, rd: u32, rs1: u32, offset: i32) -> Self {
        self.load(funct3::LH, rd, rs1, offset)
    }

    pub fn lw(self, rd: u32, rs1: u32, offset: i32) -> Self {
        self.load(funct3::LW, rd, rs1, offset)
    }

    pub fn lwu(self, rd: u32, rs1: u32, offset: i32) -> Self {
        self.load(funct3::LWU, rd, rs1, offset)
    }

    pub fn ld(self, rd: u32, rs1: u32, offset: i32) -> Self {
        self.load(funct3::LD, rd, rs1, offset)
    }

    pub fn ecall(self) -> Self {
        self.opcode(OP_SYSTEM).imm(0)
    }

    pub fn ebreak(self) -> Self {
        self.opcode(OP_SYSTEM).imm(1)
    }

    pub fn build(self) -> u32 {
        match self.opcode {
            OP_LUI | OP_AUIPC => {
                ((self.imm as u32 & 0xFFFFF) << 12) | (self.rd << 7) | self.opcode
            }
            OP_SYSTEM if self.imm == 0 => ECALL,
            OP_SYSTEM => EBREAK,
            _ => {
                ((self.imm as u32 & 0xFFF) << 20)
                    | (self.rs1 << 15)
                    | (self.funct3 << 12)
                    | (self.rd << 7)
                    | self.opcode
            }
        }
    }
}
