mod instructions;

use crate::memory::Memory;
use crate::opcode::Opcode;
use crate::register::RegisterFile;
use crate::processor::execute;

/// Runs `bytecode` against a fresh register file and 1024-byte memory, returning both for
/// assertions.
pub fn run(bytecode: &[i32]) -> (RegisterFile, Memory) {
    let mut registers = RegisterFile::new();
    let mut memory = Memory::new(1024);
    execute(bytecode, &mut registers, &mut memory);
    (registers, memory)
}

pub fn reg3(op: Opcode, rd: i32, rs1: i32, rs2: i32) -> [i32; 4] {
    [op.to_word(), rd, rs1, rs2]
}

pub fn reg_imm(op: Opcode, x: i32, y: i32, imm: i32) -> [i32; 4] {
    [op.to_word(), x, y, imm]
}

#[test]
fn sum_one_to_five() {
    // S1 from spec.md: sums 1..=5 into x1, counts in x2 up to 6.
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, 0),
        reg_imm(Opcode::Addi, 2, 0, 1),
        reg_imm(Opcode::Addi, 3, 0, 6),
        reg3(Opcode::Add, 1, 1, 2),
        reg_imm(Opcode::Addi, 2, 2, 1),
        reg_imm(Opcode::Blt, 2, 3, -8),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(1), 15);
    assert_eq!(registers.read(2), 6);
}

#[test]
fn fibonacci() {
    // S2 from spec.md: ninth Fibonacci number ends up in x2.
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, 0),
        reg_imm(Opcode::Addi, 2, 0, 1),
        reg_imm(Opcode::Addi, 3, 0, 9),
        reg_imm(Opcode::Addi, 4, 0, 0),
        reg_imm(Opcode::Bge, 4, 3, 24),
        reg3(Opcode::Add, 5, 1, 2),
        reg3(Opcode::Add, 1, 2, 0),
        reg3(Opcode::Add, 2, 5, 0),
        reg_imm(Opcode::Addi, 4, 4, 1),
        reg_imm(Opcode::Blt, 4, 3, -20),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(2), 55);
}
