//! ALU function and flag tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use rv32sc_core::common::DecodeError;
use rv32sc_core::core::signals::AluControl;
use rv32sc_core::core::units::alu::{Alu, less_than_from_flags};

const NEG1: u32 = -1_i32 as u32;
const I32_MIN: u32 = i32::MIN as u32;
const I32_MAX: u32 = i32::MAX as u32;

#[rstest]
#[case(AluControl::Add, 5, 12, 17)]
#[case(AluControl::Add, I32_MAX, 1, I32_MIN)]
#[case(AluControl::Add, NEG1, 1, 0)]
#[case(AluControl::Sub, 12, 5, 7)]
#[case(AluControl::Sub, 0, 1, NEG1)]
#[case(AluControl::Sub, I32_MIN, 1, I32_MAX)]
#[case(AluControl::And, 12, 7, 4)]
#[case(AluControl::Or, 3, 5, 7)]
#[case(AluControl::Slt, 3, 5, 1)]
#[case(AluControl::Slt, 5, 3, 0)]
#[case(AluControl::Slt, 3, 3, 0)]
#[case(AluControl::Slt, NEG1, 0, 1)]
#[case(AluControl::Slt, 0, NEG1, 0)]
#[case(AluControl::Slt, I32_MIN, I32_MAX, 1)]
#[case(AluControl::Slt, I32_MAX, I32_MIN, 0)]
#[case(AluControl::Slt, I32_MIN, 1, 1)]
fn results(#[case] control: AluControl, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(control, a, b).result, expected);
}

#[test]
fn undefined_selector() {
    assert_eq!(
        Alu::execute_bits(0b111, 1, 2),
        Err(DecodeError::UnsupportedAluControl(0b111))
    );
    assert_eq!(Alu::execute_bits(0b001, 9, 9).map(|o| o.zero), Ok(true));
}

proptest! {
    #[test]
    fn zero_flag_tracks_result(a: u32, b: u32) {
        for control in [AluControl::Add, AluControl::Sub, AluControl::And, AluControl::Or, AluControl::Slt] {
            let out = Alu::execute(control, a, b);
            prop_assert_eq!(out.zero, out.result == 0);
        }
    }

    #[test]
    fn sub_is_zero_iff_equal(a: u32, b: u32) {
        prop_assert_eq!(Alu::execute(AluControl::Sub, a, b).zero, a == b);
    }

    #[test]
    fn slt_matches_flag_formula(a: u32, b: u32) {
        let native = Alu::execute(AluControl::Slt, a, b).result == 1;
        prop_assert_eq!(native, less_than_from_flags(a, b));
        prop_assert_eq!(native, (a as i32) < (b as i32));
    }
}
