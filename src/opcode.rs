//! The closed catalogue of instruction kinds.
//!
//! Every opcode has a fixed *shape* (the arrangement of the four bytecode words that follow
//! it), an assembly mnemonic, and — for the opcodes the code generator actually lowers — an
//! x86-64 mnemonic family. This module is the single source of truth all three pipeline
//! stages (assembler, interpreter, code generator) agree on.

use num::FromPrimitive;
use num::traits::ToPrimitive;
use num_derive::{FromPrimitive, ToPrimitive};
use util::{EnumFromStr, ParseEnumError};

/// The shape of an instruction's four-word encoding, `[opcode, a, b, c]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    /// `op, rd, rs1, rs2` — `ADD SUB MUL DIV MOD`.
    Reg3,
    /// `op, rX, rY, imm` — `ADDI` (`rX=rd, rY=rs`) and the branches/`JAL` (`rX`/`rY` per
    /// opcode, `imm` a PC-relative byte offset for branches and `JAL`).
    RegImm,
    /// `op, r, offset, base` — `LW` (`r=rd`), `SW` (`r=rs`).
    MemOp,
    /// `op, rd, rs, imm` — `JALR`.
    Jalr,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Addi,
    Lw,
    Sw,
    Beq,
    Blt,
    Bne,
    Bge,
    Jal,
    Jalr,
}

impl Opcode {
    /// Recovers an opcode from its bytecode word. Bytecode is assumed to come from a
    /// well-formed producer (the assembler); an unrecognised word is a programmer error in
    /// whatever built the bytecode, not a condition this interpreter/codegen recovers from.
    pub fn from_word(word: i32) -> Option<Opcode> {
        FromPrimitive::from_i32(word)
    }

    pub fn to_word(self) -> i32 {
        ToPrimitive::to_i32(&self).expect("Opcode -> i32 is total")
    }

    pub fn shape(self) -> Shape {
        use Opcode::*;
        match self {
            Add | Sub | Mul | Div | Mod => Shape::Reg3,
            Addi | Beq | Blt | Bne | Bge | Jal => Shape::RegImm,
            Lw | Sw => Shape::MemOp,
            Jalr => Shape::Jalr,
        }
    }

    /// The textual mnemonic accepted by the assembler (lowercase, as in the input syntax).
    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            Add => "add",
            Sub => "sub",
            Mul => "mul",
            Div => "div",
            Mod => "mod",
            Addi => "addi",
            Lw => "lw",
            Sw => "sw",
            Beq => "beq",
            Blt => "blt",
            Bne => "bne",
            Bge => "bge",
            Jal => "jal",
            Jalr => "jalr",
        }
    }

    pub fn from_mnemonic(s: &str) -> Option<Opcode> {
        use Opcode::*;
        Some(match s {
            "add" => Add,
            "sub" => Sub,
            "mul" => Mul,
            "div" => Div,
            "mod" => Mod,
            "addi" => Addi,
            "lw" => Lw,
            "sw" => Sw,
            "beq" => Beq,
            "blt" => Blt,
            "bne" => Bne,
            "bge" => Bge,
            "jal" => Jal,
            "jalr" => Jalr,
            _ => return None,
        })
    }

    /// The x86-64 mnemonic family the code generator lowers this opcode to. `None` for
    /// opcodes whose x86 lowering isn't a single mnemonic (branches, `JAL`/`JALR`, which the
    /// code generator handles structurally instead — see `zhuji_codegen::lower`).
    pub fn x86_mnemonic(self) -> Option<&'static str> {
        use Opcode::*;
        match self {
            Add => Some("addq"),
            Sub => Some("subq"),
            Mul => Some("imulq"),
            Div | Mod => Some("idivq"),
            Addi => Some("movq"),
            Lw | Sw => Some("movq"),
            Beq | Blt | Bne | Bge | Jal | Jalr => None,
        }
    }

    /// The conditional-jump mnemonic a branch opcode lowers to. `None` for non-branches.
    pub fn conditional_jump(self) -> Option<&'static str> {
        use Opcode::*;
        match self {
            Beq => Some("je"),
            Blt => Some("jl"),
            Bne => Some("jne"),
            Bge => Some("jge"),
            _ => None,
        }
    }

    pub fn is_branch(self) -> bool {
        self.conditional_jump().is_some()
    }
}

impl EnumFromStr for Opcode {
    /// As [`Opcode::from_mnemonic`], but in the `util` crate's shared `ParseEnumError` shape,
    /// so an unrecognised mnemonic looks the same whether it's caught here or anywhere else in
    /// the workspace an `EnumFromStr` parse fails.
    fn from_str(s: &str) -> Result<Opcode, ParseEnumError> {
        Opcode::from_mnemonic(s).ok_or_else(|| ParseEnumError {
            value: s.to_string(),
            enum_name: "Opcode",
        })
    }
}
