use crate::opcode::Opcode;
use crate::processor::test::{reg3, reg_imm, run};

#[test]
fn links_return_address_and_jumps() {
    // jal x1, _, 8 jumps one instruction forward and records the return address in x1.
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Jal, 1, 0, 8),
        reg_imm(Opcode::Addi, 2, 0, 99), // skipped
        reg_imm(Opcode::Addi, 3, 0, 1),
        reg3(Opcode::Add, 4, 0, 0),
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(1), 4);
    assert_eq!(registers.read(2), 0);
    assert_eq!(registers.read(3), 1);
}
