use crate::error::Result;

/// Decode hex text into raw bytes, tolerating interior whitespace so dumps
/// copied out of logs or shell output work unedited.
pub fn parse_hex_bytes(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(compact)?)
}
