//! Textual assembler for the `zhuji` toolchain: turns a program written against the bytecode
//! ISA [`zhuji_vm`](../zhuji_vm/index.html) defines into the flat `Vec<Word>` bytecode stream
//! the interpreter and code generator both consume.
//!
//! Assembly is a two-pass batch transform with no partial results on failure: [`labels`]
//! collects the symbol table in a first pass over the parsed program, then [`encode`] walks
//! the same lines again, resolving every branch/jump label operand to a PC-relative offset as
//! it emits bytecode.

pub mod ast;
mod encode;
mod error;
mod labels;
mod parser;
mod preprocess;

pub use error::Error;
pub use labels::LabelTable;

use ast::Line;
use zhuji_vm::Word;

/// Assembles `source` into a flat bytecode stream.
///
/// Lines are comment-stripped and blank-filtered first (see [`preprocess`]), then parsed one
/// at a time into [`ast::Line`]s before the two-pass label resolution and encoding described
/// above. The first error — malformed syntax, a malformed immediate, or a branch/jump operand
/// that names no known label — aborts assembly; no partial bytecode is returned.
pub fn assemble(source: &str) -> Result<Vec<Word>, Error> {
    let lines: Vec<(usize, Line)> = preprocess::strip_comments_and_blanks(source)
        .into_iter()
        .map(|(lineno, text)| parser::parse_line(&text, lineno).map(|line| (lineno, line)))
        .collect::<Result<_, _>>()?;

    let labels = labels::collect(&lines);
    encode::encode(&lines, &labels)
}
