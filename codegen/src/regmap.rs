//! The register remap: `x0` lowers to the immediate `$0`, `x1..x15` to a fixed run of x86-64
//! general-purpose registers. `x16..x31` have no mapping — a program that reaches the code
//! generator using one of them is ill-formed for this backend (the interpreter accepts the
//! full register file; only codegen is limited to 16 registers).

use crate::error::Error;

pub fn operand(reg: u8) -> Result<&'static str, Error> {
    match reg {
        0 => Ok("$0"),
        1 => Ok("%rax"),
        2 => Ok("%rbx"),
        3 => Ok("%rcx"),
        4 => Ok("%rdx"),
        5 => Ok("%rsi"),
        6 => Ok("%rdi"),
        7 => Ok("%r8"),
        8 => Ok("%r9"),
        9 => Ok("%r10"),
        10 => Ok("%r11"),
        11 => Ok("%r12"),
        12 => Ok("%r13"),
        13 => Ok("%r14"),
        14 => Ok("%r15"),
        15 => Ok("%rbp"),
        other => Err(Error::UnmappedRegister(other)),
    }
}
