//! A packed record holds a short buffer directly followed by a secret.
//!
//! `strncpy` into the short buffer fills all five bytes and writes no
//! terminator, so printing the buffer runs on into the secret. The bounded
//! copy always terminates inside the buffer.
//!
//! Run with `RUST_LOG=safestrings=trace` to see the library's trace events.

use safestrings::error::{to_hresult, Error};
use safestrings::length::length_bounded;
use safestrings::str::strncpy_strsafe;
use tracing_subscriber::EnvFilter;

const BUFFER: core::ops::Range<usize> = 0..5;
const SECRET: core::ops::Range<usize> = 5..14;

/// `strncpy` semantics: copies at most `n` bytes and pads with terminators
/// only when the source is shorter than `n`.
fn legacy_strncpy(dest: &mut [u8], src: &[u8], n: usize) {
    let len = src.iter().position(|&b| b == 0).unwrap_or(src.len()).min(n);
    dest[..len].copy_from_slice(&src[..len]);
    dest[len..n].fill(0);
}

/// Reads a C string starting at `at` with no bound but the end of the record,
/// the way `printf("%s")` would.
fn c_string_at(record: &[u8], at: usize) -> String {
    let tail = &record[at..];
    let len = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
    String::from_utf8_lossy(&tail[..len]).into_owned()
}

fn show(buf: &[u8]) -> String {
    match length_bounded(buf, buf.len()) {
        Ok(len) => String::from_utf8_lossy(&buf[..len]).into_owned(),
        Err(_) => "<unterminated>".to_owned(),
    }
}

fn new_record() -> Result<[u8; 14], Error> {
    let mut record = [0u8; 14];
    strncpy_strsafe(&mut record[SECRET], 9, b"Password\0")?;
    Ok(record)
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let input = *b"123456789\0";
    println!("Source buffer content= {}", show(&input));

    println!("\n== vulnerable ==");
    let mut record = new_record()?;
    println!("Secret buffer value= {}", c_string_at(&record, SECRET.start));
    legacy_strncpy(&mut record[BUFFER], &input, 5);
    println!("strncpy() executed...");
    println!("Destination buffer content= {}", c_string_at(&record, BUFFER.start));
    println!("Final secret buffer value= {}", c_string_at(&record, SECRET.start));

    println!("\n== fixed ==");
    let mut record = new_record()?;
    println!("Secret buffer value= {}", c_string_at(&record, SECRET.start));
    let rc = strncpy_strsafe(&mut record[BUFFER], 5, &input);
    println!("strncpy_strsafe() executed... ({rc:?}, code {:#010x})", to_hresult(&rc));
    println!("Destination buffer content= {}", c_string_at(&record, BUFFER.start));
    println!("Final secret buffer value= {}", c_string_at(&record, SECRET.start));
    Ok(())
}
