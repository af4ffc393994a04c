//! Register file, linear memory, and bytecode interpreter for the `zhuji` toolchain.
//!
//! This crate is the shared vocabulary the assembler ([`zhuji_asm`](../zhuji_asm/index.html))
//! and code generator ([`zhuji_codegen`](../zhuji_codegen/index.html)) crates build on: the
//! [`Opcode`](opcode/enum.Opcode.html) catalogue that fixes the bytecode's instruction shapes,
//! and the [`Processor`](processor/struct.Processor.html) that interprets it directly, used
//! for testing and development rather than on the code generation path.

pub mod memory;
pub mod opcode;
pub mod processor;
pub mod register;

pub use memory::Memory;
pub use opcode::{Opcode, Shape};
pub use processor::{execute, Processor, Step};
pub use register::RegisterFile;

/// Bytecode words: each instruction occupies exactly four of these.
pub type Word = i32;
