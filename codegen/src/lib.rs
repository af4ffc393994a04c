//! Lowers [`zhuji_vm`] bytecode to GNU-assembler-syntax (AT&T) x86-64 text, ready for a system
//! assembler and linker to turn into a Linux executable.
//!
//! The interpreter is *not* on this path — [`generate`] only ever reads the bytecode it's
//! given, it never runs it. The two sides of the pipeline are required to agree on the shared
//! [`zhuji_vm::Opcode`] catalogue instead, not on a shared execution engine.

mod error;
mod generator;
mod lower;
mod regmap;

pub use error::Error;
pub use generator::{generate, generate_with_mem_size};
