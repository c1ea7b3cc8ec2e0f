//! ALU decoder truth table.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rv32sc_core::common::DecodeError;
use rv32sc_core::core::control::alu_decoder::decode;
use rv32sc_core::core::signals::{AluControl, AluOp};

#[rstest]
fn fixed_classes_ignore_the_function_fields(
    #[values(false, true)] opcode_b5: bool,
    #[values(0, 1, 2, 3, 4, 5, 6, 7)] funct3: u32,
    #[values(false, true)] funct7_b5: bool,
) {
    assert_eq!(decode(opcode_b5, funct3, funct7_b5, AluOp::Add), Ok(AluControl::Add));
    assert_eq!(decode(opcode_b5, funct3, funct7_b5, AluOp::Subtract), Ok(AluControl::Sub));
}

#[rstest]
#[case::addi(false, false, AluControl::Add)]
#[case::addi_with_bit30_set(false, true, AluControl::Add)]
#[case::add(true, false, AluControl::Add)]
#[case::sub(true, true, AluControl::Sub)]
fn funct3_zero_subtracts_only_for_sub(
    #[case] opcode_b5: bool,
    #[case] funct7_b5: bool,
    #[case] expected: AluControl,
) {
    assert_eq!(decode(opcode_b5, 0b000, funct7_b5, AluOp::Funct), Ok(expected));
}

#[rstest]
#[case(0b010, AluControl::Slt)]
#[case(0b110, AluControl::Or)]
#[case(0b111, AluControl::And)]
fn logic_and_compare(#[case] funct3: u32, #[case] expected: AluControl) {
    for opcode_b5 in [false, true] {
        for funct7_b5 in [false, true] {
            assert_eq!(decode(opcode_b5, funct3, funct7_b5, AluOp::Funct), Ok(expected));
        }
    }
}

#[rstest]
#[case(0b001)]
#[case(0b011)]
#[case(0b100)]
#[case(0b101)]
fn undefined_funct3_is_an_error(#[case] funct3: u32) {
    assert_eq!(
        decode(true, funct3, false, AluOp::Funct),
        Err(DecodeError::UnsupportedFunct3 { funct3 })
    );
}
