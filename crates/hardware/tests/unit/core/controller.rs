//! Controller composition tests.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rv32sc_core::common::DecodeError;
use rv32sc_core::core::control::Controller;
use rv32sc_core::core::signals::{AluControl, ImmSrc, ResultSrc};

use crate::common::builder::InstructionBuilder;

fn b() -> InstructionBuilder {
    InstructionBuilder::new()
}

#[rstest]
#[case::add(b().add(3, 1, 2).build(), AluControl::Add)]
#[case::sub(b().sub(3, 1, 2).build(), AluControl::Sub)]
#[case::and(b().and(3, 1, 2).build(), AluControl::And)]
#[case::or(b().or(3, 1, 2).build(), AluControl::Or)]
#[case::slt(b().slt(3, 1, 2).build(), AluControl::Slt)]
#[case::addi(b().addi(3, 1, -1).build(), AluControl::Add)]
#[case::andi(b().andi(3, 1, 0xF).build(), AluControl::And)]
#[case::ori(b().ori(3, 1, 0xF).build(), AluControl::Or)]
#[case::slti(b().slti(3, 1, 4).build(), AluControl::Slt)]
#[case::lw(b().lw(3, 1, 8).build(), AluControl::Add)]
#[case::sw(b().sw(1, 3, 8).build(), AluControl::Add)]
#[case::beq(b().beq(1, 2, 8).build(), AluControl::Sub)]
#[case::jal(b().jal(1, 8).build(), AluControl::Add)]
fn alu_function_per_instruction(#[case] inst: u32, #[case] expected: AluControl) {
    assert_eq!(Controller::decode(inst).unwrap().alu_control, expected);
}

#[test]
fn addi_with_negative_immediate_still_adds() {
    // imm = -1024 sets instruction bit 30, which is funct7[5] for R-type.
    let inst = b().addi(1, 0, -1024).build();
    assert_eq!((inst >> 30) & 1, 1);
    assert_eq!(Controller::decode(inst).unwrap().alu_control, AluControl::Add);
}

#[test]
fn store_signals() {
    let s = Controller::decode(b().sw(3, 7, 84).build()).unwrap();
    assert!(s.mem_write);
    assert!(!s.reg_write);
    assert!(s.alu_src);
    assert_eq!(s.imm_src, ImmSrc::S);
    assert_eq!(s.result_src, ResultSrc::Alu);
}

#[rstest]
#[case::beq_equal(b().beq(1, 2, 8).build(), true, true)]
#[case::beq_not_equal(b().beq(1, 2, 8).build(), false, false)]
#[case::jal_always(b().jal(1, 8).build(), false, true)]
#[case::add_never(b().add(1, 2, 3).build(), true, false)]
fn next_pc_select(#[case] inst: u32, #[case] zero: bool, #[case] taken: bool) {
    assert_eq!(Controller::decode(inst).unwrap().pc_src(zero), taken);
}

#[test]
fn unsupported_funct3_fails_the_whole_vector() {
    // xor x1, x1, x2
    let inst = b().opcode(0b0110011).rd(1).rs1(1).rs2(2).funct3(0b100).build();
    assert_eq!(
        Controller::decode(inst),
        Err(DecodeError::UnsupportedFunct3 { funct3: 0b100 })
    );
}

#[test]
fn unsupported_opcode_is_reported_first() {
    // lui x1, 1
    assert_eq!(
        Controller::decode(0x000010B7),
        Err(DecodeError::UnsupportedOpcode(0b0110111))
    );
}
