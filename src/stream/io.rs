//! Adapter from `std::io::Read` / `std::io::Write` to the byte stream contract.
//!
//! `std::io` calls may transfer fewer bytes than asked without being at end of
//! data, so the adapter loops until the request is satisfied, the handle
//! reports EOF (`Ok(0)`), or a hard error occurs. `Interrupted` is retried.
//! A hard error ends the transfer short and is kept for `take_error()`.

use super::{ByteSink, ByteSource};
use crate::error::{CodecError, Result};
use std::io::{self, Read, Write};
use tracing::debug;

/// Wraps an I/O handle as a `ByteSource` and/or `ByteSink`.
#[derive(Debug)]
pub struct IoStream<T> {
    inner: T,
    last_error: Option<io::Error>,
}

impl<T> IoStream<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            last_error: None,
        }
    }

    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Take the I/O error that cut the most recent transfer short, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// Surface a pending I/O error as a `CodecError::Io`.
    pub fn check(&mut self) -> Result<()> {
        match self.last_error.take() {
            Some(e) => Err(CodecError::Io(e)),
            None => Ok(()),
        }
    }
}

impl<T: Write> IoStream<T> {
    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}

impl<T: Read> ByteSource for IoStream<T> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!(error = %e, filled, requested = buf.len(), "read interrupted by I/O error");
                    self.last_error = Some(e);
                    break;
                }
            }
        }
        filled
    }
}

impl<T: Write> ByteSink for IoStream<T> {
    fn write(&mut self, buf: &[u8]) -> usize {
        let mut written = 0;
        while written < buf.len() {
            match self.inner.write(&buf[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    debug!(error = %e, written, requested = buf.len(), "write interrupted by I/O error");
                    self.last_error = Some(e);
                    break;
                }
            }
        }
        written
    }
}
