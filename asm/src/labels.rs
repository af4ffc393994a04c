//! Pass 1: the symbol table. Walks the parsed lines once, assigning each label the bytecode
//! address (in bytes) of the instruction that immediately follows it. Label-only lines don't
//! advance the instruction pointer; every real instruction — pseudo-instructions included,
//! since they always expand to exactly one real instruction — advances it by four.

use std::collections::HashMap;

use crate::ast::Line;

pub type LabelTable = HashMap<String, i32>;

pub fn collect(lines: &[(usize, Line)]) -> LabelTable {
    let mut labels = LabelTable::new();
    let mut ip: i32 = 0;

    for (_, line) in lines {
        match line {
            Line::Label(name) => {
                labels.insert(name.clone(), ip);
            }
            Line::Instruction(_) => ip += 4,
        }
    }

    labels
}
