//! Selector encodings and the packed control word.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use rv32sc_core::common::DecodeError;
use rv32sc_core::core::signals::{AluControl, AluOp, ImmSrc, MainSignals, ResultSrc};

#[test]
fn alu_control_codes() {
    assert_eq!(AluControl::Add.bits(), 0b000);
    assert_eq!(AluControl::Sub.bits(), 0b001);
    assert_eq!(AluControl::And.bits(), 0b010);
    assert_eq!(AluControl::Or.bits(), 0b011);
    assert_eq!(AluControl::Slt.bits(), 0b101);
}

#[test]
fn undefined_selectors_are_errors() {
    assert_eq!(AluOp::from_bits(0b11), Err(DecodeError::UnsupportedAluOp(0b11)));
    assert_eq!(ResultSrc::from_bits(0b11), Err(DecodeError::InvalidResultSrc(0b11)));
    assert_eq!(ImmSrc::from_bits(0b100), Err(DecodeError::InvalidImmSrc(0b100)));
    for bits in [0b100, 0b110, 0b111, 0b1000] {
        assert_eq!(AluControl::from_bits(bits), Err(DecodeError::UnsupportedAluControl(bits)));
    }
}

#[test]
fn control_word_with_alu_op_11_is_rejected() {
    assert_eq!(
        MainSignals::from_bits(0b1_00_0_0_00_0_11_0),
        Err(DecodeError::UnsupportedAluOp(0b11))
    );
}

proptest! {
    #[test]
    fn defined_control_words_unpack_and_repack(word in 0u32..(1 << 11)) {
        let result_src = (word >> 4) & 0b11;
        let alu_op = (word >> 1) & 0b11;
        match MainSignals::from_bits(word) {
            Ok(signals) => {
                prop_assert_eq!(signals.to_bits(), word);
            }
            Err(_) => {
                prop_assert!(result_src == 0b11 || alu_op == 0b11);
            }
        }
    }
}
