use crate::opcode::Opcode;
use crate::memory::Memory;
use crate::register::RegisterFile;
use crate::processor::execute;
use crate::processor::test::reg_imm;

#[test]
fn stores_word_at_base_plus_offset() {
    let mut registers = RegisterFile::new();
    let mut memory = Memory::new(1024);

    let bytecode: Vec<i32> = [
        reg_imm(Opcode::Addi, 1, 0, 7),
        reg_imm(Opcode::Addi, 4, 0, 16),
        [Opcode::Sw.to_word(), 1, 4, 4],
    ]
    .concat();

    execute(&bytecode, &mut registers, &mut memory);
    assert_eq!(memory.load_word(20), 7);
}
