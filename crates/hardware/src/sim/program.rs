//! Reference test program.
//!
//! The standard single-cycle acceptance program. It exercises every
//! supported instruction and ends by storing 25 to address 100, then spins
//! on `beq x2, x2, 0`. The only earlier store targets address 96.
//!
//! ```text
//! 0x00  addi x2, x0, 5       x2 = 5
//! 0x04  addi x3, x0, 12      x3 = 12
//! 0x08  addi x7, x3, -9      x7 = 3
//! 0x0c  or   x4, x7, x2      x4 = 7
//! 0x10  and  x5, x3, x4      x5 = 4
//! 0x14  add  x5, x5, x4      x5 = 11
//! 0x18  beq  x5, x7, end     not taken
//! 0x1c  slt  x4, x3, x4      x4 = 0
//! 0x20  beq  x4, x0, around  taken
//! 0x24  addi x5, x0, 0       skipped
//! 0x28  slt  x4, x7, x2      x4 = 1           (around)
//! 0x2c  add  x7, x4, x5      x7 = 12
//! 0x30  sub  x7, x7, x2      x7 = 7
//! 0x34  sw   x7, 84(x3)      [96] = 7
//! 0x38  lw   x2, 96(x0)      x2 = 7
//! 0x3c  add  x9, x2, x5      x9 = 18
//! 0x40  jal  x3, end         x3 = 0x44
//! 0x44  addi x2, x0, 1       skipped
//! 0x48  add  x2, x2, x9      x2 = 25          (end)
//! 0x4c  sw   x2, 0x20(x3)    [100] = 25
//! 0x50  beq  x2, x2, 0       spin
//! ```

/// Encoded reference program, word 0 at address 0.
pub const DEFAULT_PROGRAM: [u32; 21] = [
    0x00500113, 0x00C00193, 0xFF718393, 0x0023E233, 0x0041F2B3, 0x004282B3, 0x02728863,
    0x0041A233, 0x00020463, 0x00000293, 0x0023A233, 0x005203B3, 0x402383B3, 0x0471AA23,
    0x06002103, 0x005104B3, 0x008001EF, 0x00100113, 0x00910133, 0x0221A023, 0x00210063,
];

/// Byte address of the final self-loop.
pub const DEFAULT_PROGRAM_SPIN_PC: u32 = 0x50;
