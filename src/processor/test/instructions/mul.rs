use crate::opcode::Opcode;
use crate::processor::test::{reg3, reg_imm, run};

#[test]
fn multiplies_two_registers() {
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, 6),
        reg_imm(Opcode::Addi, 2, 0, 7),
        reg3(Opcode::Mul, 3, 1, 2),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(3), 42);
}
