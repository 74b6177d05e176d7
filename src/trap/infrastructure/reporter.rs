// tt_runtime/src/trap/infrastructure/reporter.rs

//! # Diagnostic Reporter
//!
//! The built-in last-resort trap handler: decode the cause, print the
//! auxiliary value and the full register dump, halt. It runs when nothing
//! else can be assumed about machine state, so it allocates nothing,
//! buffers nothing, and never checks the device: every formatting buffer
//! is statically sufficient and writes cannot fail. A nested trap while
//! it runs is not handled.

use crate::console::CharDevice;
use crate::fmt::{self, MAX_INT_DIGITS};
use crate::trap::ds::{Halt, TrapFrame, TrapKind, NGPR};
use crate::Word;

/// Prints the full register dump: x1..x31 in index order, four to a
/// line, each value as fixed 8-digit hex, then the program counter
/// closing the final partial line.
pub fn dump_registers(frame: &TrapFrame, dev: &mut dyn CharDevice) {
    let mut dec = [0u8; MAX_INT_DIGITS];
    let mut hex = [0u8; 8];

    for i in 0..NGPR {
        // Single-digit indices get a pad space so the columns line up.
        if i < 9 {
            dev.write_byte(b' ');
        }
        dev.write_byte(b'x');
        let index = fmt::format_integer((i + 1) as i32, 10, &mut dec)
            .expect("base 10 is in range");
        dev.write_str(index);
        dev.write_str(": 0x");
        dev.write_str(fmt::format_hex_fixed(frame.gpr[i], &mut hex));
        dev.write_byte(if i % 4 == 3 { b'\n' } else { b' ' });
    }

    dev.write_str(" pc: 0x");
    dev.write_str(fmt::format_hex_fixed(frame.pc, &mut hex));
    dev.write_str("\n");
}

/// The default trap handler.
///
/// Renders the diagnostic report (banner, decoded cause, auxiliary
/// value, register dump) and halts the machine with the cause word.
/// Each step's output goes straight to the device with no buffering
/// between steps.
pub fn default_trap_handler(
    cause: Word,
    val: Word,
    frame: &TrapFrame,
    dev: &mut dyn CharDevice,
    halt: &mut dyn Halt,
) -> ! {
    let mut dec = [0u8; MAX_INT_DIGITS];
    let mut hex = [0u8; 8];

    dev.write_str("\nIT'S A TRAP!\n");

    dev.write_str("cause: ");
    dev.write_str(TrapKind::from_cause(cause).name());
    dev.write_str(" (");
    let digits = fmt::format_integer(cause as i32, 10, &mut dec)
        .expect("base 10 is in range");
    dev.write_str(digits);
    dev.write_str(") ");
    dev.write_str(" val: 0x");
    dev.write_str(fmt::format_hex_fixed(val, &mut hex));
    dev.write_byte(b'\n');

    dump_registers(frame, dev);

    // TODO: pick a halt-code convention that separates trap halts from
    // normal error halts.
    halt.halt(cause)
}

#[cfg(test)]
mod tests {
    use super::{default_trap_handler, dump_registers};
    use crate::test_support::{HaltRecorder, RecordingConsole};
    use crate::trap::ds::{TrapFrame, NGPR};
    use crate::Word;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    /// Frame with register x`i` holding `i` and a recognizable pc.
    fn counting_frame() -> TrapFrame {
        let mut frame = TrapFrame::new();
        for i in 0..NGPR {
            frame.gpr[i] = (i + 1) as Word;
        }
        frame.pc = 0xDEAD_BEEF;
        frame
    }

    const EXPECTED_DUMP: &str = concat!(
        " x1: 0x00000001  x2: 0x00000002  x3: 0x00000003  x4: 0x00000004\n",
        " x5: 0x00000005  x6: 0x00000006  x7: 0x00000007  x8: 0x00000008\n",
        " x9: 0x00000009 x10: 0x0000000A x11: 0x0000000B x12: 0x0000000C\n",
        "x13: 0x0000000D x14: 0x0000000E x15: 0x0000000F x16: 0x00000010\n",
        "x17: 0x00000011 x18: 0x00000012 x19: 0x00000013 x20: 0x00000014\n",
        "x21: 0x00000015 x22: 0x00000016 x23: 0x00000017 x24: 0x00000018\n",
        "x25: 0x00000019 x26: 0x0000001A x27: 0x0000001B x28: 0x0000001C\n",
        "x29: 0x0000001D x30: 0x0000001E x31: 0x0000001F  pc: 0xDEADBEEF\n",
    );

    #[test]
    fn dump_groups_four_registers_per_line() {
        let frame = counting_frame();
        let mut dev = RecordingConsole::new();
        dump_registers(&frame, &mut dev);
        assert_eq!(dev.output(), EXPECTED_DUMP);
    }

    #[test]
    fn default_handler_emits_the_full_report_then_halts_with_the_cause() {
        let frame = counting_frame();
        let mut dev = RecordingConsole::new();
        let mut halt = HaltRecorder::new();

        let unwound = catch_unwind(AssertUnwindSafe(|| {
            default_trap_handler(3, 0, &frame, &mut dev, &mut halt)
        }));
        assert!(unwound.is_err());

        let mut expected = std::string::String::new();
        expected.push_str("\nIT'S A TRAP!\n");
        expected.push_str("cause: ebreak (3)  val: 0x00000000\n");
        expected.push_str(EXPECTED_DUMP);
        // The whole report reached the device before halt ran.
        assert_eq!(dev.output(), expected);
        assert_eq!(halt.code, Some(3));
    }

    #[test]
    fn ecall_and_illegal_instruction_report_their_names() {
        for (cause, name) in [(11, "ecall"), (2, "illegal instruction")] {
            let frame = TrapFrame::new();
            let mut dev = RecordingConsole::new();
            let mut halt = HaltRecorder::new();

            let unwound = catch_unwind(AssertUnwindSafe(|| {
                default_trap_handler(cause, 0x104, &frame, &mut dev, &mut halt)
            }));
            assert!(unwound.is_err());

            let mut expected = std::string::String::from("\nIT'S A TRAP!\ncause: ");
            expected.push_str(name);
            assert!(dev.output().starts_with(&expected));
            assert_eq!(halt.code, Some(cause));
        }
    }

    #[test]
    fn unknown_causes_report_as_unknown_trap() {
        let frame = TrapFrame::new();
        let mut dev = RecordingConsole::new();
        let mut halt = HaltRecorder::new();

        let unwound = catch_unwind(AssertUnwindSafe(|| {
            default_trap_handler(99, 0xDEAD_0000, &frame, &mut dev, &mut halt)
        }));
        assert!(unwound.is_err());

        assert!(dev
            .output()
            .starts_with("\nIT'S A TRAP!\ncause: unknown trap (99)  val: 0xDEAD0000\n"));
        assert_eq!(halt.code, Some(99));
    }
}
