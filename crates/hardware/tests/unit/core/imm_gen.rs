//! Immediate extractor tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use rv32sc_core::common::DecodeError;
use rv32sc_core::core::signals::ImmSrc;
use rv32sc_core::core::units::imm_gen::{extend, extend_bits};

use crate::common::builder::InstructionBuilder;

#[rstest]
#[case(0x00500113, ImmSrc::I, 5)]
#[case(0xFF718393, ImmSrc::I, -9)]
#[case(0xFFF00093, ImmSrc::I, -1)]
#[case(0x0471AA23, ImmSrc::S, 84)]
#[case(0x02728863, ImmSrc::B, 48)]
#[case(0xFE108EE3, ImmSrc::B, -4)]
#[case(0x008001EF, ImmSrc::J, 8)]
#[case(0xFF9FF0EF, ImmSrc::J, -8)]
#[case(0x001000EF, ImmSrc::J, 2048)]
fn known_immediates(#[case] inst: u32, #[case] src: ImmSrc, #[case] imm: i32) {
    assert_eq!(extend(inst, src) as i32, imm);
}

#[test]
fn raw_selector() {
    assert_eq!(extend_bits(0x0471AA23, 0b01), Ok(84));
    assert_eq!(extend_bits(0, 0b100), Err(DecodeError::InvalidImmSrc(0b100)));
}

#[test]
fn branch_and_jump_offsets_are_even() {
    assert_eq!(extend(u32::MAX, ImmSrc::B) & 1, 0);
    assert_eq!(extend(u32::MAX, ImmSrc::J) & 1, 0);
}

proptest! {
    #[test]
    fn i_type_round_trip(imm in -2048i32..2048) {
        let inst = InstructionBuilder::new().addi(1, 2, imm).build();
        prop_assert_eq!(extend(inst, ImmSrc::I) as i32, imm);
    }

    #[test]
    fn s_type_round_trip(imm in -2048i32..2048) {
        let inst = InstructionBuilder::new().sw(2, 1, imm).build();
        prop_assert_eq!(extend(inst, ImmSrc::S) as i32, imm);
    }

    #[test]
    fn b_type_round_trip(half in -2048i32..2048) {
        let imm = half * 2;
        let inst = InstructionBuilder::new().beq(1, 2, imm).build();
        prop_assert_eq!(extend(inst, ImmSrc::B) as i32, imm);
    }

    #[test]
    fn j_type_round_trip(half in -(1i32 << 19)..(1i32 << 19)) {
        let imm = half * 2;
        let inst = InstructionBuilder::new().jal(1, imm).build();
        prop_assert_eq!(extend(inst, ImmSrc::J) as i32, imm);
    }

    #[test]
    fn bit31_is_the_sign_for_every_format(low in 0u32..(1 << 31)) {
        for src in [ImmSrc::I, ImmSrc::S, ImmSrc::B, ImmSrc::J] {
            prop_assert!((extend(low | (1 << 31), src) as i32) < 0);
            prop_assert!((extend(low, src) as i32) >= 0);
        }
    }
}
