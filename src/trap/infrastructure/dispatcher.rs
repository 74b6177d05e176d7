// tt_runtime/src/trap/infrastructure/dispatcher.rs

//! # Trap Dispatch
//!
//! Single-slot handler registration and the dispatch path that routes a
//! trap to the active handler or to the built-in diagnostic reporter.

use spin::RwLock;

use super::reporter;
use crate::console::CharDevice;
use crate::trap::ds::{Halt, TrapFrame, TrapHandler};
use crate::Word;

/// The runtime context owning the registered-handler slot.
///
/// At most one handler is active at a time; until one is registered, the
/// diagnostic reporter is the fallback. There is no unregistration; the
/// last registration wins.
pub struct Dispatcher {
    handler: Option<TrapHandler>,
}

impl Dispatcher {
    /// Creates a dispatcher with no registered handler.
    pub const fn new() -> Self {
        Self { handler: None }
    }

    /// Replaces the active handler. Last write wins.
    pub fn set_handler(&mut self, handler: TrapHandler) {
        self.handler = Some(handler);
    }

    /// Whether a handler has been registered.
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Routes a trap to the active handler, or to the diagnostic
    /// reporter when none was ever registered.
    ///
    /// Pure forwarding: `cause` and `val` are not validated. The device
    /// and halt collaborators are touched only on the reporter path; a
    /// registered handler receives exactly `(cause, val, frame)` and
    /// nothing else.
    pub fn dispatch(
        &self,
        cause: Word,
        val: Word,
        frame: &TrapFrame,
        dev: &mut dyn CharDevice,
        halt: &mut dyn Halt,
    ) -> ! {
        match self.handler {
            Some(handler) => handler(cause, val, frame),
            None => reporter::default_trap_handler(cause, val, frame, dev, halt),
        }
    }
}

/// The process-wide dispatcher.
///
/// One writer path (registration at startup, before traps are enabled)
/// and one reader path (dispatch at trap time). The lock documents that
/// policy rather than mediating real contention, since the board has a
/// single hardware thread. The read guard held across a dispatch is never
/// released; the machine halts first.
static ACTIVE: RwLock<Dispatcher> = RwLock::new(Dispatcher::new());

/// Installs `handler` in the process-wide slot.
pub fn install(handler: TrapHandler) {
    ACTIVE.write().set_handler(handler);
}

/// Whether the process-wide slot holds a handler.
pub fn installed() -> bool {
    ACTIVE.read().has_handler()
}

/// Dispatches through the process-wide slot.
pub fn dispatch_active(
    cause: Word,
    val: Word,
    frame: &TrapFrame,
    dev: &mut dyn CharDevice,
    halt: &mut dyn Halt,
) -> ! {
    ACTIVE.read().dispatch(cause, val, frame, dev, halt)
}
