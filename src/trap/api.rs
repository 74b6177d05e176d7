// tt_runtime/src/trap/api.rs

//! # Public API for the Trap Subsystem
//!
//! The surface user code touches: handler registration before traps are
//! enabled, and the dispatch entry consumed by the trap-entry glue.

use crate::console::CharDevice;
use crate::trap::ds::{Halt, TrapFrame, TrapHandler};
use crate::trap::infrastructure::dispatcher;
use crate::Word;

/// Registers `handler` as the process-wide trap handler.
///
/// Replaces whatever was registered before; the last registration wins
/// and there is no unregistration. Expected to run once at startup,
/// before traps are enabled. Until a handler is registered, every trap
/// goes to the built-in diagnostic reporter.
pub fn set_trap_handler(handler: TrapHandler) {
    dispatcher::install(handler);
}

/// Whether user code has registered a trap handler.
pub fn trap_handler_installed() -> bool {
    dispatcher::installed()
}

/// Routes a trap through the process-wide handler slot.
///
/// Called by the trap-entry glue, not by user code. The device and halt
/// collaborators are injected so alternative platforms and hosted tests
/// can observe the report; on the board they are the MMIO console and the
/// halt primitive. No validation of `cause` or `val` happens here; this
/// is a pure forwarding call.
pub fn dispatch_trap(
    cause: Word,
    val: Word,
    frame: &TrapFrame,
    dev: &mut dyn CharDevice,
    halt: &mut dyn Halt,
) -> ! {
    dispatcher::dispatch_active(cause, val, frame, dev, halt)
}
