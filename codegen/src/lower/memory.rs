//! `LW`/`SW` lowering. Codegen addresses a single static `.bss` buffer (`mem`) rather than the
//! runtime base register the interpreter honours; see the module-level note in
//! [`crate::generator`] for the scope limitation this implies.

use crate::error::Error;
use crate::regmap;

fn mem_operand(offset: i32) -> String {
    if offset < 0 {
        format!("mem-{}(%rip)", -offset)
    } else {
        format!("mem+{}(%rip)", offset)
    }
}

/// `LW rd, off, _` -> `movq mem+off(%rip), rd`. The base register is ignored.
pub fn lw(rd: u8, offset: i32) -> Result<String, Error> {
    let rd_s = regmap::operand(rd)?;
    Ok(format!("movq {}, {}\n", mem_operand(offset), rd_s))
}

/// `SW rs, off, _` -> `movq rs, mem+off(%rip)`. The base register is ignored.
pub fn sw(rs: u8, offset: i32) -> Result<String, Error> {
    let rs_s = regmap::operand(rs)?;
    Ok(format!("movq {}, {}\n", rs_s, mem_operand(offset)))
}
