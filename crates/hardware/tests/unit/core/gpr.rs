//! Register file tests.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use rv32sc_core::core::arch::gpr::{NUM_REGS, RegisterFile};

#[test]
fn starts_cleared() {
    let regs = RegisterFile::new();
    assert_eq!(regs.snapshot(), [0; NUM_REGS]);
}

#[test]
fn write_then_read() {
    let mut regs = RegisterFile::new();
    regs.write(31, 0xDEAD_BEEF);
    assert_eq!(regs.read(31), 0xDEAD_BEEF);
    regs.reset();
    assert_eq!(regs.read(31), 0);
}

#[test]
fn dump_uses_abi_names() {
    let mut regs = RegisterFile::new();
    regs.write(2, 25);
    let text = regs.to_string();
    assert_eq!(text.lines().count(), NUM_REGS / 2);
    assert!(text.contains("sp   = 0x00000019"));
    assert!(text.contains("x0  zero"));
}

proptest! {
    #[test]
    fn x0_is_hardwired(val: u32) {
        let mut regs = RegisterFile::new();
        regs.write(0, val);
        prop_assert_eq!(regs.read(0), 0);
        prop_assert_eq!(regs.snapshot()[0], 0);
    }

    #[test]
    fn writes_touch_only_their_register(idx in 1usize..NUM_REGS, val: u32) {
        let mut regs = RegisterFile::new();
        regs.write(idx, val);
        for other in 0..NUM_REGS {
            let expected = if other == idx { val } else { 0 };
            prop_assert_eq!(regs.read(other), expected);
        }
    }
}
