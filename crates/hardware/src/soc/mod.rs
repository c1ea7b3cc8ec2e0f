//! System-side collaborators.
//!
//! The core reaches memory only through the [`Memory`] trait; [`WordMemory`]
//! is the backing store the simulation harness attaches for both the
//! instruction and the data side.

/// Word-addressed RAM.
pub mod memory;

/// Memory collaborator trait.
pub mod traits;

pub use memory::WordMemory;
pub use traits::Memory;
