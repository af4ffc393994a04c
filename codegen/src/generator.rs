//! Walks a bytecode stream once and lowers it to a complete GNU-assembler-syntax x86-64 file.
//!
//! The literal prelude (`.bss`/`.text`/`_start`) and exit trailer (`sys_exit` via syscall 60)
//! bracket the lowered instruction stream; everything between them is produced by dispatching
//! each instruction, by opcode, to the matching `lower::*` function and threading a single
//! `String` output buffer — the same builder shape the teacher's own interpreter threads a
//! register file and memory through.

use zhuji_vm::{Opcode, Word};

use crate::error::Error;
use crate::lower::{arithmetic, control, division, memory};

const EXIT_TRAILER: &str = "movq %rax, %rdi\nmovq $60, %rax\nsyscall\n";

/// Lowers `bytecode` to a complete x86-64 assembly file, with a 1024-byte `mem` buffer.
pub fn generate(bytecode: &[Word]) -> Result<String, Error> {
    generate_with_mem_size(bytecode, 1024)
}

/// As [`generate`], but with an explicitly sized `.bss` `mem` buffer. `generate` is simply
/// this called with `1024`, the size every interpreter-side test fixture in this workspace
/// uses, so the two sides of the pipeline share one parameter instead of a codegen-only
/// hardcoded literal.
pub fn generate_with_mem_size(bytecode: &[Word], mem_size: usize) -> Result<String, Error> {
    let targets = control::find_targets(bytecode);
    let len = bytecode.len() as i32;

    let mut out = String::new();
    out.push_str(".bss\n");
    out.push_str(&format!("mem: .space {}\n", mem_size));
    out.push_str(".text\n.global _start\n_start:\n");

    let mut trailer_emitted = false;
    let mut ip: i32 = 0;

    while (ip as usize) < bytecode.len() {
        if targets.functions.contains(&ip) {
            out.push_str(&control::function_label(ip));
        } else if targets.branches.contains(&ip) {
            out.push_str(&control::label_only(ip));
        }

        let idx = ip as usize;
        let opcode = Opcode::from_word(bytecode[idx])
            .unwrap_or_else(|| panic!("unknown opcode word {} at ip {}", bytecode[idx], ip));
        let a = bytecode[idx + 1];
        let b = bytecode[idx + 2];
        let c = bytecode[idx + 3];

        match opcode {
            Opcode::Addi => out.push_str(&arithmetic::addi(a as u8, b as u8, c)?),
            Opcode::Add | Opcode::Sub | Opcode::Mul => {
                let mnemonic = opcode
                    .x86_mnemonic()
                    .unwrap_or_else(|| panic!("{:?} has no x86 mnemonic", opcode));
                out.push_str(&arithmetic::reg3(mnemonic, a as u8, b as u8, c as u8)?)
            }
            Opcode::Div => out.push_str(&division::div_mod(true, a as u8, b as u8, c as u8)?),
            Opcode::Mod => out.push_str(&division::div_mod(false, a as u8, b as u8, c as u8)?),
            Opcode::Lw => out.push_str(&memory::lw(a as u8, b)?),
            Opcode::Sw => out.push_str(&memory::sw(a as u8, b)?),
            Opcode::Beq | Opcode::Blt | Opcode::Bne | Opcode::Bge => {
                out.push_str(&control::branch(opcode, a as u8, b as u8, ip, c)?);
            }
            Opcode::Jal => {
                out.push_str(&control::call(ip, c));
                if !trailer_emitted {
                    out.push_str(EXIT_TRAILER);
                    trailer_emitted = true;
                }
            }
            Opcode::Jalr => {
                if a != 0 {
                    return Err(Error::UnsupportedReturn { rd: a as u8 });
                }
                out.push_str(&control::ret_epilogue());
            }
        }

        ip += 4;
    }

    // Any label that resolves to one-past-the-end is emitted before the trailer (not after):
    // a branch that jumps here must fall straight into the exit syscall, the same code a
    // normal fallthrough past the last instruction reaches. Putting the trailer first would
    // make that jump land past it, skipping `sys_exit` entirely.
    if targets.functions.contains(&len) {
        out.push_str(&control::function_label(len));
    } else if targets.branches.contains(&len) {
        out.push_str(&control::label_only(len));
    }

    if !trailer_emitted {
        out.push_str(EXIT_TRAILER);
    }

    Ok(out)
}
