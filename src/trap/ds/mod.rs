// tt_runtime/src/trap/ds/mod.rs

//! # Trap Data Structures
//!
//! The data layer of the trap subsystem: the frame layout shared with the
//! trap-entry stub, cause decoding, and the handler contract. Everything
//! here is allocation-free and constructible in const context.

pub mod context;
pub mod handler;
pub mod types;

// Re-export key types for convenient access by other modules.
pub use self::context::{TrapFrame, NGPR, REG_NAMES};
pub use self::handler::{Halt, TrapHandler};
pub use self::types::TrapKind;
