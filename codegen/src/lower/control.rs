//! Branch-target discovery and the control-flow lowerings: conditional branches, `JAL`-as-call,
//! and the `JALR x0, _, 0`-as-return function convention.
//!
//! Label reconstruction is a two-pass affair over the bytecode (spec.md §4.6): a first pass
//! records every address a branch or `JAL` can land on, then the second pass (driven by
//! [`crate::generator`]) emits a label — or, for a `JAL` target, a full prologue — immediately
//! before the instruction sitting at that address.

use std::collections::HashSet;

use zhuji_vm::{Opcode, Word};

use crate::error::Error;
use crate::regmap;

/// The label text a bytecode address reconstructs to: `L<decimal-ip>` (spec.md §6).
pub fn label(address: i32) -> String {
    format!("L{}", address)
}

/// Every address reachable as a branch target (`branches`) or as a `JAL` call target
/// (`functions`), discovered in one pass over the bytecode. An address can appear in both
/// sets; the generator gives `functions` priority when deciding whether to also emit a
/// prologue.
pub struct Targets {
    pub branches: HashSet<i32>,
    pub functions: HashSet<i32>,
}

pub fn find_targets(bytecode: &[Word]) -> Targets {
    let mut branches = HashSet::new();
    let mut functions = HashSet::new();

    let mut ip: i32 = 0;
    while (ip as usize) < bytecode.len() {
        let opcode = Opcode::from_word(bytecode[ip as usize])
            .unwrap_or_else(|| panic!("unknown opcode word {} at ip {}", bytecode[ip as usize], ip));
        let offset = bytecode[ip as usize + 3];

        if opcode.is_branch() {
            branches.insert(ip + offset);
        } else if opcode == Opcode::Jal {
            functions.insert(ip + offset);
        }

        ip += 4;
    }

    Targets { branches, functions }
}

/// A bare branch-target label, `Li:`.
pub fn label_only(address: i32) -> String {
    format!("{}:\n", label(address))
}

/// A `JAL` target's label plus function prologue: `Li:\npushq %rbp\nmovq %rsp, %rbp`.
pub fn function_label(address: i32) -> String {
    format!("{}:\npushq %rbp\nmovq %rsp, %rbp\n", label(address))
}

/// `BEQ/BLT/BNE/BGE rs1, rs2, off` at instruction address `ip`, lowered to a compare against
/// the label the offset resolves to. AT&T `cmpq %rs2, %rs1` sets flags as `rs1 - rs2`, so the
/// conditional jump that follows tests the same relation the opcode names (spec.md §9).
pub fn branch(op: Opcode, rs1: u8, rs2: u8, ip: i32, offset: i32) -> Result<String, Error> {
    let rs1_s = regmap::operand(rs1)?;
    let rs2_s = regmap::operand(rs2)?;
    let mnemonic = op
        .conditional_jump()
        .unwrap_or_else(|| panic!("{:?} is not a branch opcode", op));
    Ok(format!(
        "cmpq {}, {}\n{} {}\n",
        rs2_s,
        rs1_s,
        mnemonic,
        label(ip + offset)
    ))
}

/// `JAL _, _, off` at instruction address `ip` -> `call Li+off`.
pub fn call(ip: i32, offset: i32) -> String {
    format!("call {}\n", label(ip + offset))
}

/// `JALR 0, _, 0` -> function epilogue. Any other destination is rejected by the caller before
/// this is reached (spec.md §4.6: "`JALR` with any destination other than `x0` is rejected at
/// codegen time as unsupported").
pub fn ret_epilogue() -> String {
    "movq %rbp, %rsp\npopq %rbp\nret\n".to_string()
}
