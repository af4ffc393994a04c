//! The assembler's intermediate representation between parsing and encoding: one [`Line`] per
//! surviving source line, carrying register indices and immediates already extracted from the
//! parse tree but before label operands are resolved to PC-relative offsets.

use zhuji_vm::Opcode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Label(String),
    Instruction(Instruction),
}

/// A branch/jump operand: either a literal offset, already resolved at parse time, or a label
/// name to be resolved against the symbol table built in the assembler's first pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Offset(i32),
    Label(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Reg3 {
        op: Opcode,
        rd: u8,
        rs1: u8,
        rs2: u8,
    },
    Addi {
        rd: u8,
        rs: u8,
        imm: i32,
    },
    Branch {
        op: Opcode,
        rs1: u8,
        rs2: u8,
        target: Target,
    },
    Jal {
        rd: u8,
        target: Target,
    },
    Jalr {
        rd: u8,
        rs: u8,
        imm: i32,
    },
    MemOp {
        op: Opcode,
        r: u8,
        offset: i32,
        base: u8,
    },
    /// Pseudo: `li rd, imm`. Expands to `addi rd, x0, imm` at encode time; never reaches
    /// bytecode as its own shape.
    Li {
        rd: u8,
        imm: i32,
    },
    /// Pseudo: `mv rd, rs`. Expands to `addi rd, rs, 0` at encode time.
    Mv {
        rd: u8,
        rs: u8,
    },
}
