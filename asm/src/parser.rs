//! Turns one preprocessed source line into a [`Line`](crate::ast::Line), via the pest grammar
//! in `grammar.pest`.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser as PestParser;

use zhuji_vm::Opcode;

use crate::ast::{Instruction, Line, Target};
use crate::error::Error;

#[derive(PestParser)]
#[grammar = "grammar.pest"]
struct AsmParser;

pub fn parse_line(text: &str, line: usize) -> Result<Line, Error> {
    let pair = AsmParser::parse(Rule::line, text)
        .map_err(|source| Error::Syntax {
            line,
            source: Box::new(source),
        })?
        .next()
        .unwrap();

    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::label_def => {
            let name = inner.into_inner().next().unwrap().as_str().to_string();
            Ok(Line::Label(name))
        }
        Rule::instruction => build_instruction(inner, line).map(Line::Instruction),
        Rule::EOI => unreachable!("blank lines are filtered out before parsing"),
        _ => unreachable!(),
    }
}

fn build_instruction(pair: Pair<Rule>, line: usize) -> Result<Instruction, Error> {
    let inner = pair.into_inner().next().unwrap();
    let mut p = inner.clone().into_inner();

    Ok(match inner.as_rule() {
        Rule::instr_reg3 => {
            let op = reg3_opcode(p.next().unwrap().as_str());
            let rd = parse_register(p.next().unwrap(), line)?;
            let rs1 = parse_register(p.next().unwrap(), line)?;
            let rs2 = parse_register(p.next().unwrap(), line)?;
            Instruction::Reg3 { op, rd, rs1, rs2 }
        }
        Rule::instr_addi => {
            p.next();
            let rd = parse_register(p.next().unwrap(), line)?;
            let rs = parse_register(p.next().unwrap(), line)?;
            let imm = parse_int(p.next().unwrap(), line)?;
            Instruction::Addi { rd, rs, imm }
        }
        Rule::instr_branch => {
            let op = branch_opcode(p.next().unwrap().as_str());
            let rs1 = parse_register(p.next().unwrap(), line)?;
            let rs2 = parse_register(p.next().unwrap(), line)?;
            let target = parse_target(p.next().unwrap(), line)?;
            Instruction::Branch { op, rs1, rs2, target }
        }
        Rule::instr_jal => {
            p.next();
            let rd = parse_register(p.next().unwrap(), line)?;
            let target = parse_target(p.next().unwrap(), line)?;
            Instruction::Jal { rd, target }
        }
        Rule::instr_jalr => {
            p.next();
            let rd = parse_register(p.next().unwrap(), line)?;
            let rs = parse_register(p.next().unwrap(), line)?;
            let imm = parse_int(p.next().unwrap(), line)?;
            Instruction::Jalr { rd, rs, imm }
        }
        Rule::instr_memop => {
            let op = memop_opcode(p.next().unwrap().as_str());
            let r = parse_register(p.next().unwrap(), line)?;
            let (offset, base) = parse_mem_operand(p.next().unwrap(), line)?;
            Instruction::MemOp { op, r, offset, base }
        }
        Rule::instr_li => {
            p.next();
            let rd = parse_register(p.next().unwrap(), line)?;
            let imm = parse_int(p.next().unwrap(), line)?;
            Instruction::Li { rd, imm }
        }
        Rule::instr_mv => {
            p.next();
            let rd = parse_register(p.next().unwrap(), line)?;
            let rs = parse_register(p.next().unwrap(), line)?;
            Instruction::Mv { rd, rs }
        }
        _ => unreachable!(),
    })
}

// The grammar only ever hands these functions a mnemonic it already knows belongs to the
// right shape (`mn_reg3`, `mn_branch`, `mn_memop`), so resolving it through the single
// canonical mnemonic table `Opcode::from_mnemonic` (the same one the VM and code generator
// share) can't fail in practice; the `expect` documents that precondition instead of
// duplicating the mnemonic-to-opcode mapping per shape.
fn reg3_opcode(mnemonic: &str) -> Opcode {
    Opcode::from_mnemonic(mnemonic).expect("grammar only admits reg3 mnemonics here")
}

fn branch_opcode(mnemonic: &str) -> Opcode {
    Opcode::from_mnemonic(mnemonic).expect("grammar only admits branch mnemonics here")
}

fn memop_opcode(mnemonic: &str) -> Opcode {
    Opcode::from_mnemonic(mnemonic).expect("grammar only admits memop mnemonics here")
}

fn parse_register(pair: Pair<Rule>, line: usize) -> Result<u8, Error> {
    let text = pair.as_str();
    let value: u32 = text[1..].parse().expect("grammar guarantees digits after 'x'");
    if value > 31 {
        Err(Error::RegisterOutOfRange {
            line,
            name: text.to_string(),
        })
    } else {
        Ok(value as u8)
    }
}

fn parse_int(pair: Pair<Rule>, line: usize) -> Result<i32, Error> {
    let text = pair.as_str();
    text.parse().map_err(|_| Error::MalformedImmediate {
        line,
        text: text.to_string(),
    })
}

fn parse_target(pair: Pair<Rule>, line: usize) -> Result<Target, Error> {
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::int => Ok(Target::Offset(parse_int(inner, line)?)),
        Rule::identifier => Ok(Target::Label(inner.as_str().to_string())),
        _ => unreachable!(),
    }
}

fn parse_mem_operand(pair: Pair<Rule>, line: usize) -> Result<(i32, u8), Error> {
    let mut inner = pair.into_inner();
    let offset = parse_int(inner.next().unwrap(), line)?;
    let base = parse_register(inner.next().unwrap(), line)?;
    Ok((offset, base))
}
