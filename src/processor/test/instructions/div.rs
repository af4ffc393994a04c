use crate::opcode::Opcode;
use crate::processor::test::{reg3, reg_imm, run};

#[test]
fn truncates_toward_zero() {
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, -7),
        reg_imm(Opcode::Addi, 2, 0, 2),
        reg3(Opcode::Div, 3, 1, 2),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(3), -3);
}
