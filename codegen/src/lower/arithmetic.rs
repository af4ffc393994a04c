//! `ADDI` and the commutative-ish `ADD`/`SUB`/`MUL` reg3 lowerings.

use crate::error::Error;
use crate::regmap;

/// `ADDI rd, rs, imm`. A zero source is the `LI` pseudo-instruction's expansion and lowers to
/// a plain immediate move; otherwise the source is moved into `rd` first, with a trailing
/// `addq` only when the immediate is actually non-zero.
pub fn addi(rd: u8, rs: u8, imm: i32) -> Result<String, Error> {
    let rd_s = regmap::operand(rd)?;

    Ok(if rs == 0 {
        format!("movq ${}, {}\n", imm, rd_s)
    } else {
        let rs_s = regmap::operand(rs)?;
        let mut out = format!("movq {}, {}\n", rs_s, rd_s);
        if imm != 0 {
            out.push_str(&format!("addq ${}, {}\n", imm, rd_s));
        }
        out
    })
}

/// `ADD`/`SUB`/`MUL rd, rs1, rs2`, given the x86-64 mnemonic (`addq`/`subq`/`imulq`). Two
/// operand x86 forces the destination to coincide with a source: if `rd == rs1` the other
/// source folds straight in; if `rd == rs2` the fold only preserves the original semantics
/// for a commutative op (ADD, MUL) — a caller lowering SUB with `rd == rs2` is asking for an
/// ill-formed precondition this function does not special-case (see DESIGN.md). Otherwise
/// `rs1` is moved into `rd` first.
pub fn reg3(mnemonic: &str, rd: u8, rs1: u8, rs2: u8) -> Result<String, Error> {
    let rd_s = regmap::operand(rd)?;
    let rs1_s = regmap::operand(rs1)?;
    let rs2_s = regmap::operand(rs2)?;

    Ok(if rd == rs1 {
        format!("{} {}, {}\n", mnemonic, rs2_s, rd_s)
    } else if rd == rs2 {
        format!("{} {}, {}\n", mnemonic, rs1_s, rd_s)
    } else {
        format!("movq {}, {}\n{} {}, {}\n", rs1_s, rd_s, mnemonic, rs2_s, rd_s)
    })
}
