use crate::opcode::Opcode;
use crate::processor::test::{reg3, reg_imm, run};

#[test]
fn subtracts_two_registers() {
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, 50),
        reg_imm(Opcode::Addi, 2, 0, 8),
        reg3(Opcode::Sub, 3, 1, 2),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(3), 42);
}
