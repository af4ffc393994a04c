//! The compile driver: `assemble` then `generate`, composed into one `Result`-returning
//! function. The interpreter is deliberately not on this path — it exists to validate bytecode
//! semantics independently of code generation, not to run it (spec.md §4.7).

use std::fmt;

/// Either stage of the pipeline can fail; `compile` surfaces whichever one did.
#[derive(Debug)]
pub enum CompileError {
    Assemble(zhuji_asm::Error),
    Codegen(zhuji_codegen::Error),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompileError::Assemble(err) => write!(f, "assembling failed: {}", err),
            CompileError::Codegen(err) => write!(f, "generating code failed: {}", err),
        }
    }
}

impl std::error::Error for CompileError {}

impl From<zhuji_asm::Error> for CompileError {
    fn from(err: zhuji_asm::Error) -> CompileError {
        CompileError::Assemble(err)
    }
}

impl From<zhuji_codegen::Error> for CompileError {
    fn from(err: zhuji_codegen::Error) -> CompileError {
        CompileError::Codegen(err)
    }
}

/// Assembles `source`, then lowers the resulting bytecode to x86-64 assembly text.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let bytecode = zhuji_asm::assemble(source)?;
    let asm = zhuji_codegen::generate(&bytecode)?;
    Ok(asm)
}

/// Derives the default output path from an input path: strip a trailing `.s` suffix (if any),
/// then append `.x86.s`. Matches the original driver's `strings.TrimSuffix(input, ".s") +
/// ".x86.s"` exactly, including the no-op case where the input has no `.s` suffix to strip.
pub fn default_output_path(input: &str) -> String {
    let stem = input.strip_suffix(".s").unwrap_or(input);
    format!("{}.x86.s", stem)
}
