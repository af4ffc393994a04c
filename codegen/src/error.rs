use std::fmt;

/// The two programmer-error classes the code generator rejects rather than silently
/// miscompiling: a register outside the closed `x0..x15` map, and a `JALR` whose destination
/// isn't `x0` (the only supported function-return shape).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    UnmappedRegister(u8),
    UnsupportedReturn { rd: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnmappedRegister(reg) => write!(
                f,
                "register x{} has no x86-64 mapping; the code generator only supports x0..x15",
                reg
            ),
            Error::UnsupportedReturn { rd } => write!(
                f,
                "jalr with destination x{} is unsupported; only `jalr x0, rs, 0` as a function return is",
                rd
            ),
        }
    }
}

impl std::error::Error for Error {}
