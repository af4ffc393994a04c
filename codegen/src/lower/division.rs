//! `DIV`/`MOD` lowering: x86's `idivq` takes the dividend as the 128-bit `%rdx:%rax` pair and
//! leaves quotient in `%rax`, remainder in `%rdx`. Getting the dividend into `%rax` without
//! clobbering a divisor that's already sitting there is the one load-bearing case split in
//! this whole code generator (spec.md §9).

use crate::error::Error;
use crate::regmap;

/// Lowers `DIV rd, rs1, rs2` (`is_div = true`, result in `%rax`) or `MOD rd, rs1, rs2`
/// (`is_div = false`, result in `%rdx`), picking one of three sub-cases by where the dividend
/// (`rs1`) and the `%rax`-resident operand land:
///
/// 1. `rs1` is already `%rax` — divide in place.
/// 2. Neither operand is `%rax` — move the dividend in, then divide.
/// 3. `rs2` (the divisor) is `%rax` — exchange first so the divisor moves out of `%rax` and
///    the dividend moves in, then divide by the register that now holds the divisor.
///
/// An implementation that always does `movq %rs1, %rax` without checking would silently
/// clobber `rs2` in sub-case 3.
pub fn div_mod(is_div: bool, rd: u8, rs1: u8, rs2: u8) -> Result<String, Error> {
    let rd_s = regmap::operand(rd)?;
    let rs1_s = regmap::operand(rs1)?;
    let rs2_s = regmap::operand(rs2)?;
    let result_reg = if is_div { "%rax" } else { "%rdx" };

    Ok(if rs1 == 1 {
        format!("cqto\nidivq {}\nmovq {}, {}\n", rs2_s, result_reg, rd_s)
    } else if rs2 != 1 {
        format!(
            "movq {}, %rax\ncqto\nidivq {}\nmovq {}, {}\n",
            rs1_s, rs2_s, result_reg, rd_s
        )
    } else {
        format!(
            "xchgq {}, {}\ncqto\nidivq {}\nmovq {}, {}\n",
            rs1_s, rs2_s, rs1_s, result_reg, rd_s
        )
    })
}
