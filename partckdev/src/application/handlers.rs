use std::io::Read;
use std::path::{Path, PathBuf};

use partck_core::error::Result;
use partck_core::header::checksums::PartChecksums;
use partck_core::header::version::{decode_with_version, split_version_line};
use partck_core::util::hexstr::parse_hex_bytes;

fn read_input(path: &Path, hex_text: bool) -> Result<Vec<u8>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin().lock().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path)?
    };
    if hex_text {
        parse_hex_bytes(&String::from_utf8_lossy(&raw))
    } else {
        Ok(raw)
    }
}

fn render_text(h: &PartChecksums) -> String {
    format!(
        "columns_hash={:#x}\n\
         num_compressed_files={}\n\
         num_uncompressed_files={}\n\
         hash_of_all_files={:#x}\n\
         hash_of_uncompressed_files={:#x}\n\
         uncompressed_hash_of_compressed_files={:#x}",
        h.columns_hash,
        h.num_compressed_files,
        h.num_uncompressed_files,
        h.hash_of_all_files,
        h.hash_of_uncompressed_files,
        h.uncompressed_hash_of_compressed_files,
    )
}

pub fn handle_decode(input: PathBuf, body: bool, hex_text: bool, json: bool) -> Result<()> {
    let raw = read_input(&input, hex_text)?;
    let checksums = if body {
        PartChecksums::decode(&raw)?
    } else {
        decode_with_version(&raw)?
    };
    if json {
        let out = serde_json::to_string_pretty(&checksums)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        println!("{out}");
    } else {
        println!("{}", render_text(&checksums));
    }
    Ok(())
}

pub fn handle_version(input: PathBuf, hex_text: bool) -> Result<()> {
    let raw = read_input(&input, hex_text)?;
    let (version, body) = split_version_line(&raw)?;
    println!("format_version={version} body_len={}", body.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use partck_core::error::PartckError;
    use std::io::Write as _;

    fn sample() -> PartChecksums {
        PartChecksums {
            columns_hash: 0xa87ff4e7ca465e40b277926738581fb7,
            num_compressed_files: 41,
            num_uncompressed_files: 45,
            hash_of_all_files: 0xbc1bf40ebc3c5e33bff1bcc5b7c22352,
            hash_of_uncompressed_files: 0x2072cca2c0df31c8d550a0bdaf51c36,
            uncompressed_hash_of_compressed_files: 0xdd955e35caf59da9791cf4615ccbf6c7,
        }
    }

    fn write_versioned_header(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("checksums.bin");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"part header format version: 1\n").unwrap();
        sample().write_to(&mut f).unwrap();
        path
    }

    #[test]
    fn decode_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_versioned_header(&dir);
        handle_decode(path.clone(), false, false, false).unwrap();
        handle_decode(path, false, false, true).unwrap();
    }

    #[test]
    fn decode_hex_body() {
        let dir = tempfile::tempdir().unwrap();
        let mut wire = Vec::new();
        sample().write_to(&mut wire).unwrap();
        let path = dir.path().join("checksums.hex");
        std::fs::write(&path, hex_of(&wire)).unwrap();
        handle_decode(path, true, true, false).unwrap();
    }

    #[test]
    fn corrupt_file_surfaces_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bin");
        std::fs::write(&path, b"part header format version: 1\n\x01\x02").unwrap();
        assert!(matches!(
            handle_decode(path, false, false, false),
            Err(PartckError::TruncatedInput)
        ));
    }

    #[test]
    fn version_command_reads_the_line_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_versioned_header(&dir);
        handle_version(path, false).unwrap();
    }

    #[test]
    fn text_report_matches_wire_order() {
        let text = render_text(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "columns_hash=0xa87ff4e7ca465e40b277926738581fb7",
                "num_compressed_files=41",
                "num_uncompressed_files=45",
                "hash_of_all_files=0xbc1bf40ebc3c5e33bff1bcc5b7c22352",
                "hash_of_uncompressed_files=0x2072cca2c0df31c8d550a0bdaf51c36",
                "uncompressed_hash_of_compressed_files=0xdd955e35caf59da9791cf4615ccbf6c7",
            ]
        );
    }

    fn hex_of(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
