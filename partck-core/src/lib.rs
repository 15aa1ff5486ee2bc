#![forbid(unsafe_code)]

pub mod error;

pub mod util {
    pub mod cursor;
    pub mod hexstr;
    pub mod varint;
}

pub mod header {
    pub mod checksums;
    pub mod version;
}

// Re-exports: stable API surface
pub use error::{PartckError, Result};
pub use header::checksums::PartChecksums;
pub use header::version::{FORMAT_VERSION, decode_with_version, split_version_line};
