//! Copies a nine character input into a five byte buffer that sits next to a
//! sensitive value, first the way `strcpy` does and then with the bounded copy.
//!
//! The stack frame is modeled as a byte array laid out like the C frame: the
//! buffer at offset 0, padding, then a 4-byte `other_value` at offset 8.
//!
//! Run with `RUST_LOG=safestrings=trace` to see the library's trace events.

use safestrings::error::to_hresult;
use safestrings::length::length_bounded;
use safestrings::str::strncpy_strsafe;
use tracing_subscriber::EnvFilter;

const BUFFER: core::ops::Range<usize> = 0..5;
const OTHER_VALUE: core::ops::Range<usize> = 8..12;

struct Frame {
    memory: [u8; 16],
}

impl Frame {
    fn new(other_value: i32) -> Self {
        let mut memory = [0u8; 16];
        memory[OTHER_VALUE].copy_from_slice(&other_value.to_le_bytes());
        Self { memory }
    }

    fn other_value(&self) -> i32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.memory[OTHER_VALUE]);
        i32::from_le_bytes(raw)
    }

    /// Reads the buffer the way `printf("%s")` would: up to the first
    /// terminator anywhere in the frame.
    fn buffer_as_c_string(&self) -> String {
        let tail = &self.memory[BUFFER.start..];
        let len = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        String::from_utf8_lossy(&tail[..len]).into_owned()
    }
}

/// `strcpy` semantics: copies through the terminator with no bound at all.
fn unbounded_strcpy(memory: &mut [u8], at: usize, src: &[u8]) {
    let len = src.iter().position(|&b| b == 0).unwrap_or(src.len());
    memory[at..at + len].copy_from_slice(&src[..len]);
    memory[at + len] = 0;
}

fn show(buf: &[u8]) -> String {
    let len = length_bounded(buf, buf.len()).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

fn report(frame: &Frame) {
    println!("Destination buffer content= {}", frame.buffer_as_c_string());
    println!("Final other value= {}", frame.other_value());
    if frame.other_value() != 2 {
        println!("NOTE: The other value variable was overflowed into!!!");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Pretend this is security sensitive.
    let input = *b"123456789\0";
    println!("Source buffer content= {}", show(&input));

    println!("\n== vulnerable ==");
    let mut frame = Frame::new(2);
    println!("Original other value= {}", frame.other_value());
    unbounded_strcpy(&mut frame.memory, BUFFER.start, &input);
    println!("strcpy() executed...");
    report(&frame);

    println!("\n== fixed ==");
    let mut frame = Frame::new(2);
    println!("Original other value= {}", frame.other_value());
    let rc = strncpy_strsafe(&mut frame.memory[BUFFER], 5, &input);
    println!("strncpy_strsafe() executed... ({rc:?}, code {:#010x})", to_hresult(&rc));
    report(&frame);
}
