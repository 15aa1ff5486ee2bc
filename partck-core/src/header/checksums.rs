use std::io::Write;

use serde::{Serialize, Serializer};

use crate::error::{PartckError, Result};
use crate::util::cursor::ByteCursor;
use crate::util::varint::{read_varint, write_varint};

fn hex_u128<S: Serializer>(v: &u128, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{v:#x}"))
}

/// Decoded part checksums header (format version 1).
///
/// Field order mirrors the wire format exactly; there is no tagging, position
/// alone defines meaning. The hashes serialize as `0x…` strings so JSON never
/// has to carry 128-bit numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PartChecksums {
    /// Hash of the part's column/schema metadata.
    #[serde(serialize_with = "hex_u128")]
    pub columns_hash: u128,
    /// Count of files stored compressed.
    pub num_compressed_files: u64,
    /// Count of files stored uncompressed.
    pub num_uncompressed_files: u64,
    /// Hash spanning every file in the part.
    #[serde(serialize_with = "hex_u128")]
    pub hash_of_all_files: u128,
    /// Hash spanning only the uncompressed files.
    #[serde(serialize_with = "hex_u128")]
    pub hash_of_uncompressed_files: u128,
    /// Hash of the decompressed content of the compressed files; cross-check
    /// against corruption introduced by the compression layer itself.
    #[serde(serialize_with = "hex_u128")]
    pub uncompressed_hash_of_compressed_files: u128,
}

fn read_u64_le(cur: &mut ByteCursor<'_>) -> Result<u64> {
    Ok(u64::from_le_bytes(cur.take(8)?.try_into().unwrap()))
}

// High half first on the wire, combined as (hi << 64) + lo.
fn read_u128_le(cur: &mut ByteCursor<'_>) -> Result<u128> {
    let hi = read_u64_le(cur)? as u128;
    let lo = read_u64_le(cur)? as u128;
    Ok((hi << 64) + lo)
}

fn write_u128_le(mut w: impl Write, v: u128) -> std::io::Result<()> {
    let hi = (v >> 64) as u64;
    let lo = v as u64;
    w.write_all(&hi.to_le_bytes())?;
    w.write_all(&lo.to_le_bytes())
}

impl PartChecksums {
    /// Decode the header body (version line already stripped).
    ///
    /// Single forward pass, first failure wins; the input must be consumed
    /// exactly. Leftover bytes mean a version mismatch or a corrupt header and
    /// are rejected, never ignored.
    pub fn decode(body: &[u8]) -> Result<Self> {
        let mut cur = ByteCursor::new(body);

        let columns_hash = read_u128_le(&mut cur)?;
        let num_compressed_files = read_varint(&mut cur)?;
        let num_uncompressed_files = read_varint(&mut cur)?;
        let hash_of_all_files = read_u128_le(&mut cur)?;
        let hash_of_uncompressed_files = read_u128_le(&mut cur)?;
        let uncompressed_hash_of_compressed_files = read_u128_le(&mut cur)?;

        if !cur.is_empty() {
            return Err(PartckError::TrailingBytes {
                remaining_len: cur.remaining(),
            });
        }

        Ok(Self {
            columns_hash,
            num_compressed_files,
            num_uncompressed_files,
            hash_of_all_files,
            hash_of_uncompressed_files,
            uncompressed_hash_of_compressed_files,
        })
    }

    /// Write the header body in wire order (no version line).
    pub fn write_to(&self, mut w: impl Write) -> std::io::Result<()> {
        write_u128_le(&mut w, self.columns_hash)?;
        write_varint(&mut w, self.num_compressed_files)?;
        write_varint(&mut w, self.num_uncompressed_files)?;
        write_u128_le(&mut w, self.hash_of_all_files)?;
        write_u128_le(&mut w, self.hash_of_uncompressed_files)?;
        write_u128_le(&mut w, self.uncompressed_hash_of_compressed_files)
    }
}
