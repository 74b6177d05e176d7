// tt_runtime/src/trap/mod.rs

//! # Trap Diagnostic Subsystem
//!
//! Captured-state reporting for the TT board. On any trap, the board's
//! trap-entry stub saves the full register file into a [`TrapFrame`] and
//! calls into this subsystem; dispatch routes the trap to the registered
//! handler or, when none exists, to the built-in diagnostic reporter,
//! which decodes the cause, renders the frame, and halts the machine.
//!
//! Registration runs once at startup, before traps are enabled. Handlers
//! never return normally; a nested trap while one runs is not protected
//! against.

// Make submodules accessible within the trap subsystem.
mod api;
mod ds;
mod infrastructure;

// Publicly re-export the entire API module.
pub use self::api::*;

// Re-export key data structures that users of the API might need directly.
pub use self::ds::{
    Halt, TrapFrame, TrapHandler, TrapKind, // Handler contract and frame layout
    NGPR, REG_NAMES,                        // Register file shape and mnemonics
};

// The built-in reporter, reusable from custom handlers.
pub use self::infrastructure::reporter::{default_trap_handler, dump_registers};

#[cfg(target_os = "none")]
pub use self::infrastructure::low_level::{breakpoint, MachineHalt};
