use std::io::Write;

use crate::error::{PartckError, Result};
use crate::util::cursor::ByteCursor;

/// Read a little-endian base-128 varint: low 7 bits of each byte are payload,
/// least-significant group first, the high bit marks continuation.
///
/// Counts in the wire format are unbounded in principle; we cap them at 64
/// bits and fail with `IntegerOverflow` past that rather than guess at a
/// big-integer requirement no real header exercises.
pub fn read_varint(cur: &mut ByteCursor<'_>) -> Result<u64> {
    let mut value: u64 = 0;
    let mut shift: u32 = 0;
    loop {
        let byte = cur.take(1)?[0];
        let payload = (byte & 0x7f) as u64;
        if shift > 63 || (shift == 63 && payload > 1) {
            return Err(PartckError::IntegerOverflow);
        }
        value |= payload << shift;
        if byte & 0x80 == 0 {
            return Ok(value);
        }
        shift += 7;
    }
}

/// Mirror encoder for `read_varint`.
pub fn write_varint(mut w: impl Write, mut value: u64) -> std::io::Result<()> {
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        w.write_all(&[byte])?;
        if value == 0 {
            return Ok(());
        }
    }
}
