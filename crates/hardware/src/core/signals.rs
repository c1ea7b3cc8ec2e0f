//! Control signals and selector encodings.
//!
//! This module defines the signals the controller drives into the datapath. It performs:
//! 1. **Selector Typing:** Each multi-bit selector (`ImmSrc`, `ResultSrc`, `ALUOp`,
//!    `ALUControl`) is a closed enum, so the datapath's muxes are exhaustive matches.
//! 2. **Raw Conversion:** `from_bits` is the only way a raw bit pattern becomes a
//!    selector; undefined patterns are decode errors.
//! 3. **Control Vector:** [`MainSignals`] is the main decoder's output and
//!    [`ControlSignals`] the full per-cycle vector with `ALUControl` attached.
//!
//! Nothing here holds state: the controller recomputes every signal each cycle.

use crate::common::DecodeError;

/// Immediate format selector for the immediate extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmSrc {
    /// `00`: 12-bit immediate in bits 31:20.
    I,
    /// `01`: store immediate split across bits 31:25 and 11:7.
    S,
    /// `10`: branch offset, 13 bits with an implicit zero LSB.
    B,
    /// `11`: jump offset, 21 bits with an implicit zero LSB.
    J,
}

impl ImmSrc {
    /// Converts a raw 2-bit selector.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidImmSrc`] for values above `0b11`.
    pub const fn from_bits(bits: u32) -> Result<Self, DecodeError> {
        match bits {
            0b00 => Ok(Self::I),
            0b01 => Ok(Self::S),
            0b10 => Ok(Self::B),
            0b11 => Ok(Self::J),
            other => Err(DecodeError::InvalidImmSrc(other)),
        }
    }

    /// Returns the 2-bit hardware encoding.
    pub const fn bits(self) -> u32 {
        match self {
            Self::I => 0b00,
            Self::S => 0b01,
            Self::B => 0b10,
            Self::J => 0b11,
        }
    }
}

/// Write-back source selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultSrc {
    /// `00`: the ALU result.
    Alu,
    /// `01`: data read from memory.
    Memory,
    /// `10`: the return address, `PC + 4`.
    PcPlus4,
}

impl ResultSrc {
    /// Converts a raw 2-bit selector.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidResultSrc`] for `0b11` and above.
    pub const fn from_bits(bits: u32) -> Result<Self, DecodeError> {
        match bits {
            0b00 => Ok(Self::Alu),
            0b01 => Ok(Self::Memory),
            0b10 => Ok(Self::PcPlus4),
            other => Err(DecodeError::InvalidResultSrc(other)),
        }
    }

    /// Returns the 2-bit hardware encoding.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Alu => 0b00,
            Self::Memory => 0b01,
            Self::PcPlus4 => 0b10,
        }
    }
}

/// Coarse ALU class from the main decoder, refined by the ALU decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `00`: address arithmetic, always add.
    Add,
    /// `01`: branch comparison, always subtract.
    Subtract,
    /// `10`: operation chosen by `funct3`/`funct7`.
    Funct,
}

impl AluOp {
    /// Converts a raw 2-bit selector.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedAluOp`] for `0b11` and above.
    pub const fn from_bits(bits: u32) -> Result<Self, DecodeError> {
        match bits {
            0b00 => Ok(Self::Add),
            0b01 => Ok(Self::Subtract),
            0b10 => Ok(Self::Funct),
            other => Err(DecodeError::UnsupportedAluOp(other)),
        }
    }

    /// Returns the 2-bit hardware encoding.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Add => 0b00,
            Self::Subtract => 0b01,
            Self::Funct => 0b10,
        }
    }
}

/// ALU function selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluControl {
    /// `000`: `a + b`.
    Add,
    /// `001`: `a - b`.
    Sub,
    /// `010`: `a & b`.
    And,
    /// `011`: `a | b`.
    Or,
    /// `101`: signed `a < b`.
    Slt,
}

impl AluControl {
    /// Converts a raw 3-bit selector.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnsupportedAluControl`] for `100`, `110`, `111`
    /// and anything wider than three bits.
    pub const fn from_bits(bits: u32) -> Result<Self, DecodeError> {
        match bits {
            0b000 => Ok(Self::Add),
            0b001 => Ok(Self::Sub),
            0b010 => Ok(Self::And),
            0b011 => Ok(Self::Or),
            0b101 => Ok(Self::Slt),
            other => Err(DecodeError::UnsupportedAluControl(other)),
        }
    }

    /// Returns the 3-bit hardware encoding.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Add => 0b000,
            Self::Sub => 0b001,
            Self::And => 0b010,
            Self::Or => 0b011,
            Self::Slt => 0b101,
        }
    }
}

/// Main decoder output: every control signal except `ALUControl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct MainSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Immediate format.
    pub imm_src: ImmSrc,
    /// ALU operand B is the immediate rather than `rs2`.
    pub alu_src: bool,
    /// Enable data memory write.
    pub mem_write: bool,
    /// Write-back source.
    pub result_src: ResultSrc,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Coarse ALU class.
    pub alu_op: AluOp,
    /// Instruction is an unconditional jump.
    pub jump: bool,
}

impl MainSignals {
    /// Packs the signals into the decoder's 11-bit control word.
    ///
    /// Bit order, MSB first: `RegWrite, ImmSrc[1:0], ALUSrc, MemWrite,
    /// ResultSrc[1:0], Branch, ALUOp[1:0], Jump`.
    pub const fn to_bits(self) -> u32 {
        ((self.reg_write as u32) << 10)
            | (self.imm_src.bits() << 8)
            | ((self.alu_src as u32) << 7)
            | ((self.mem_write as u32) << 6)
            | (self.result_src.bits() << 4)
            | ((self.branch as u32) << 3)
            | (self.alu_op.bits() << 1)
            | (self.jump as u32)
    }

    /// Unpacks an 11-bit control word.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when `ResultSrc` or `ALUOp` hold `11`.
    pub const fn from_bits(bits: u32) -> Result<Self, DecodeError> {
        let imm_src = match ImmSrc::from_bits((bits >> 8) & 0b11) {
            Ok(v) => v,
            Err(e) => return Err(e),
        };
        let result_src = match ResultSrc::from_bits((bits >> 4) & 0b11) {
            Ok(v) => v,
            Err(e) => return Err(e),
        };
        let alu_op = match AluOp::from_bits((bits >> 1) & 0b11) {
            Ok(v) => v,
            Err(e) => return Err(e),
        };
        Ok(Self {
            reg_write: (bits >> 10) & 1 == 1,
            imm_src,
            alu_src: (bits >> 7) & 1 == 1,
            mem_write: (bits >> 6) & 1 == 1,
            result_src,
            branch: (bits >> 3) & 1 == 1,
            alu_op,
            jump: bits & 1 == 1,
        })
    }
}

/// Full control vector for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable data memory write.
    pub mem_write: bool,
    /// ALU operand B is the immediate rather than `rs2`.
    pub alu_src: bool,
    /// Instruction is an unconditional jump.
    pub jump: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Immediate format.
    pub imm_src: ImmSrc,
    /// Write-back source.
    pub result_src: ResultSrc,
    /// Coarse ALU class.
    pub alu_op: AluOp,
    /// ALU function.
    pub alu_control: AluControl,
}

impl ControlSignals {
    /// Attaches the ALU decoder's selection to the main decoder's signals.
    pub const fn new(main: MainSignals, alu_control: AluControl) -> Self {
        Self {
            reg_write: main.reg_write,
            mem_write: main.mem_write,
            alu_src: main.alu_src,
            jump: main.jump,
            branch: main.branch,
            imm_src: main.imm_src,
            result_src: main.result_src,
            alu_op: main.alu_op,
            alu_control,
        }
    }

    /// Next-PC select: `(Branch AND Zero) OR Jump`.
    #[inline]
    pub const fn pc_src(&self, zero: bool) -> bool {
        (self.branch && zero) || self.jump
    }
}
