use crate::opcode::Opcode;
use crate::processor::test::{reg_imm, run};

#[test]
fn branch_taken_when_equal() {
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, 5),
        reg_imm(Opcode::Addi, 2, 0, 5),
        reg_imm(Opcode::Beq, 1, 2, 8),
        reg_imm(Opcode::Addi, 1, 0, 99),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(1), 5);
}

#[test]
fn branch_not_taken_when_unequal() {
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, 5),
        reg_imm(Opcode::Addi, 2, 0, 6),
        reg_imm(Opcode::Beq, 1, 2, 8),
        reg_imm(Opcode::Addi, 1, 0, 99),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(1), 99);
}
