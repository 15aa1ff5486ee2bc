use crate::error::{PartckError, Result};

/// Forward-only cursor over an in-memory byte buffer.
///
/// The one primitive every reader in this crate is built on: `take` hands out
/// the next `n` bytes and advances, `remaining` says how many are left. The
/// cursor never backtracks.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume exactly `n` bytes, or fail without consuming anything.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.buf.len() < n {
            return Err(PartckError::TruncatedInput);
        }
        let (head, rest) = self.buf.split_at(n);
        self.buf = rest;
        Ok(head)
    }
}
