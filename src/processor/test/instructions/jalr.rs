use crate::opcode::Opcode;
use crate::processor::test::{reg_imm, run};

#[test]
fn rd_zero_discards_link() {
    let bytecode: Vec<i32> = [[Opcode::Jalr.to_word(), 0, 0, 8]].concat();
    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(0), 0);
}

#[test]
fn call_and_return_resumes_after_the_call_site() {
    // An unconditional jal x0 skips over a small callee to a mainline call site; the
    // mainline calls the callee with jal x1, and the callee returns via jalr x0, x1, 0.
    // Only the mainline's own trailing instruction runs after the return, since nothing in
    // the bytecode falls through back into the callee once control resumes.
    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Jal, 0, 0, 12),     // skip to mainline
        reg_imm(Opcode::Addi, 3, 0, 1),     // callee body
        [Opcode::Jalr.to_word(), 0, 1, 0],  // callee return
        reg_imm(Opcode::Jal, 1, 0, -8),     // mainline: call the callee
        reg_imm(Opcode::Addi, 2, 0, 7),     // resumed after the call returns
    ]
    .concat();

    let (registers, _) = run(&bytecode);
    assert_eq!(registers.read(1), 16);
    assert_eq!(registers.read(2), 7);
    assert_eq!(registers.read(3), 1);
}
