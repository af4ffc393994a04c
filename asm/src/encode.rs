//! Pass 2: encoding. Walks the parsed lines again, in lock-step with the same instruction
//! pointer pass 1 used, emitting each real instruction's four bytecode words and resolving any
//! label operand to a PC-relative byte offset — relative to the address of the branch/jump
//! instruction itself, per the shared bytecode contract.

use zhuji_vm::{Opcode, Word};

use crate::ast::{Instruction, Line, Target};
use crate::error::Error;
use crate::labels::LabelTable;

pub fn encode(lines: &[(usize, Line)], labels: &LabelTable) -> Result<Vec<Word>, Error> {
    let mut bytecode = Vec::new();
    let mut ip: i32 = 0;

    for (lineno, line) in lines {
        let instr = match line {
            Line::Label(_) => continue,
            Line::Instruction(instr) => instr,
        };

        bytecode.extend_from_slice(&encode_instruction(instr, ip, labels, *lineno)?);
        ip += 4;
    }

    Ok(bytecode)
}

fn resolve(target: &Target, ip: i32, labels: &LabelTable, line: usize) -> Result<i32, Error> {
    match target {
        Target::Offset(offset) => Ok(*offset),
        Target::Label(name) => labels
            .get(name)
            .map(|&address| address - ip)
            .ok_or_else(|| Error::UnknownLabel {
                line,
                name: name.clone(),
            }),
    }
}

fn encode_instruction(
    instr: &Instruction,
    ip: i32,
    labels: &LabelTable,
    line: usize,
) -> Result<[Word; 4], Error> {
    use Instruction::*;

    Ok(match instr {
        Reg3 { op, rd, rs1, rs2 } => [op.to_word(), *rd as i32, *rs1 as i32, *rs2 as i32],
        Addi { rd, rs, imm } => [Opcode::Addi.to_word(), *rd as i32, *rs as i32, *imm],
        Branch { op, rs1, rs2, target } => {
            let offset = resolve(target, ip, labels, line)?;
            [op.to_word(), *rs1 as i32, *rs2 as i32, offset]
        }
        Jal { rd, target } => {
            let offset = resolve(target, ip, labels, line)?;
            [Opcode::Jal.to_word(), *rd as i32, 0, offset]
        }
        Jalr { rd, rs, imm } => [Opcode::Jalr.to_word(), *rd as i32, *rs as i32, *imm],
        MemOp { op, r, offset, base } => [op.to_word(), *r as i32, *offset, *base as i32],
        // li rd, imm -> addi rd, x0, imm
        Li { rd, imm } => [Opcode::Addi.to_word(), *rd as i32, 0, *imm],
        // mv rd, rs -> addi rd, rs, 0
        Mv { rd, rs } => [Opcode::Addi.to_word(), *rd as i32, *rs as i32, 0],
    })
}
