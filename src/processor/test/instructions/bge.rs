use crate::opcode::Opcode;
use crate::processor::test::{reg_imm, run};

#[test]
fn branch_taken_when_greater_or_equal() {
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, 9),
        reg_imm(Opcode::Addi, 2, 0, 9),
        reg_imm(Opcode::Bge, 1, 2, 8),
        reg_imm(Opcode::Addi, 1, 0, 99),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(1), 9);
}
