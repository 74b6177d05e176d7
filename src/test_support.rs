// tt_runtime/src/test_support.rs

//! Shared doubles for the hosted test suite: a recording character device
//! and a halt collaborator that records its code and unwinds so tests can
//! take control back from diverging paths.

use std::vec::Vec;

use crate::console::CharDevice;
use crate::trap::Halt;
use crate::Word;

/// In-memory character device: records every written byte and serves
/// scripted input to `read_byte`.
pub(crate) struct RecordingConsole {
    written: Vec<u8>,
    input: Vec<u8>,
    cursor: usize,
}

impl RecordingConsole {
    pub(crate) fn new() -> Self {
        Self::with_input(b"")
    }

    pub(crate) fn with_input(input: &[u8]) -> Self {
        Self {
            written: Vec::new(),
            input: input.to_vec(),
            cursor: 0,
        }
    }

    /// Everything written so far, as raw bytes.
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.written
    }

    /// Everything written so far, as text.
    pub(crate) fn output(&self) -> &str {
        core::str::from_utf8(&self.written).expect("device stream is ASCII")
    }
}

impl CharDevice for RecordingConsole {
    fn write_byte(&mut self, c: u8) -> u8 {
        self.written.push(c);
        c
    }

    fn read_byte(&mut self) -> u8 {
        // Past the scripted input the register reads as an idle zero.
        let b = self.input.get(self.cursor).copied().unwrap_or(0);
        self.cursor += 1;
        b
    }
}

/// Halt double: records the halt code, then unwinds in place of the
/// machine actually stopping.
pub(crate) struct HaltRecorder {
    pub(crate) code: Option<Word>,
}

impl HaltRecorder {
    pub(crate) fn new() -> Self {
        Self { code: None }
    }
}

impl Halt for HaltRecorder {
    fn halt(&mut self, code: Word) -> ! {
        self.code = Some(code);
        panic!("halt({code})");
    }
}
