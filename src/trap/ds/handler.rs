// tt_runtime/src/trap/ds/handler.rs

//! # Trap Handler Contract
//!
//! The signatures tying user handlers, the dispatch path, and the halt
//! collaborator together.

use super::context::TrapFrame;
use crate::Word;

/// The function signature for a trap handler.
///
/// Dispatch does not resume the trapping context: a handler receives the
/// cause word, the auxiliary value, and the captured frame, and is
/// expected to end in a halt or loop forever. The uninhabited return type
/// makes that part of the signature.
pub type TrapHandler = fn(cause: Word, val: Word, frame: &TrapFrame) -> !;

/// The board's halt collaborator, in injectable form.
///
/// On hardware this wraps the `halt` primitive in the boot assembly,
/// which stops or resets the machine. Tests substitute a double that
/// records the code and unwinds.
pub trait Halt {
    /// Stops the machine with `code`. Never returns to the caller.
    fn halt(&mut self, code: Word) -> !;
}
