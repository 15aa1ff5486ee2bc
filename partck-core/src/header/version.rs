use crate::error::{PartckError, Result};
use crate::header::checksums::PartChecksums;

pub const VERSION_LINE_PREFIX: &str = "part header format version: ";
pub const FORMAT_VERSION: u64 = 1;

/// Split the leading `part header format version: N\n` line off a raw header,
/// returning the parsed version and the remaining body bytes.
pub fn split_version_line(raw: &[u8]) -> Result<(u64, &[u8])> {
    let nl = raw
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(PartckError::MissingVersionLine)?;
    let line = std::str::from_utf8(&raw[..nl]).map_err(|_| PartckError::MissingVersionLine)?;
    let digits = line
        .strip_prefix(VERSION_LINE_PREFIX)
        .ok_or(PartckError::MissingVersionLine)?;
    let version = digits
        .trim()
        .parse::<u64>()
        .map_err(|_| PartckError::MissingVersionLine)?;
    Ok((version, &raw[nl + 1..]))
}

/// Decode a raw header that still carries its version line.
///
/// Only format version 1 is understood; any other version is refused here so
/// the body decoder never has to guess at framing.
pub fn decode_with_version(raw: &[u8]) -> Result<PartChecksums> {
    let (version, body) = split_version_line(raw)?;
    if version != FORMAT_VERSION {
        return Err(PartckError::UnsupportedVersion(version));
    }
    PartChecksums::decode(body)
}
