//! Arithmetic Logic Unit (ALU).
//!
//! Implements the five functions the single-cycle datapath needs: add,
//! subtract, and, or, and signed set-less-than. The zero flag feeds the
//! branch decision for `beq`.

use crate::common::DecodeError;
use crate::core::signals::AluControl;

/// ALU outputs for one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// 32-bit result.
    pub result: u32,
    /// Set iff `result == 0`.
    pub zero: bool,
}

/// Arithmetic Logic Unit for the RV32I subset.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes an ALU function.
    ///
    /// # Arguments
    ///
    /// * `control` - ALU function selected by the ALU decoder
    /// * `a`       - Operand A (`rs1`)
    /// * `b`       - Operand B (`rs2` or the immediate)
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32sc_core::core::signals::AluControl;
    /// use rv32sc_core::core::units::alu::Alu;
    ///
    /// let out = Alu::execute(AluControl::Sub, 7, 7);
    /// assert_eq!(out.result, 0);
    /// assert!(out.zero);
    ///
    /// // -5 < 10 as signed words
    /// let out = Alu::execute(AluControl::Slt, -5_i32 as u32, 10);
    /// assert_eq!(out.result, 1);
    /// ```
    pub const fn execute(control: AluControl, a: u32, b: u32) -> AluOutput {
        let result = match control {
            AluControl::Add => a.wrapping_add(b),
            AluControl::Sub => a.wrapping_sub(b),
            AluControl::And => a & b,
            AluControl::Or => a | b,
            AluControl::Slt => less_than_from_flags(a, b) as u32,
        };
        AluOutput {
            result,
            zero: result == 0,
        }
    }

    /// Executes an ALU function given its raw 3-bit selector.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedAluControl`] for selectors with no
    /// ALU function.
    pub const fn execute_bits(control: u32, a: u32, b: u32) -> Result<AluOutput, DecodeError> {
        match AluControl::from_bits(control) {
            Ok(control) => Ok(Self::execute(control, a, b)),
            Err(e) => Err(e),
        }
    }
}

/// Signed less-than derived from the subtractor's flags.
///
/// `a < b` iff the sign of `a - b` differs from the signed-overflow flag.
/// Overflow occurs when the operands' signs differ and the difference's sign
/// differs from `a`. This agrees with a native signed comparison for every
/// operand pair, including the `i32::MIN`/`i32::MAX` extremes where a
/// sign-only check gets it wrong.
pub const fn less_than_from_flags(a: u32, b: u32) -> bool {
    let diff = a.wrapping_sub(b);
    let negative = diff >> 31 == 1;
    let overflow = ((a ^ b) & (a ^ diff)) >> 31 == 1;
    negative != overflow
}
