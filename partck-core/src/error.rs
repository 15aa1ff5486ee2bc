use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("truncated header: input ended in the middle of a field")]
    TruncatedInput,

    #[error("file count varint does not fit in 64 bits")]
    IntegerOverflow,

    #[error("{remaining_len} byte(s) left after the last header field")]
    TrailingBytes { remaining_len: usize },

    #[error("header does not start with a format version line")]
    MissingVersionLine,

    #[error("unsupported header format version: {0}")]
    UnsupportedVersion(u64),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, PartckError>;
