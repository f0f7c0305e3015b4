//! # Byte Streams
//!
//! The abstract byte source/sink contract the codec consumes, plus thin
//! adapters for the buffers and I/O handles callers already have.
//!
//! ## Contract
//! - `ByteSource::read` fills up to `buf.len()` bytes and returns the count
//!   actually transferred; fewer means end of data.
//! - `ByteSink::write` writes up to `buf.len()` bytes and returns the count
//!   actually accepted; fewer means the sink is full or failed.
//!
//! The codec compares every returned count against the request and turns any
//! mismatch into `ReadUnderrun` / `WriteFailure`. Adapters never buffer on
//! their own.
//!
//! ## Adapters
//! - `&[u8]` and `bytes::Bytes` as sources (consumed from the front)
//! - `Vec<u8>` and `bytes::BytesMut` as growable sinks
//! - `SliceSink`: fixed-capacity sink over `&mut [u8]`
//! - `IoStream`: any `std::io::Read` / `std::io::Write`
//! - `Metered`: counts traffic of another stream into `Metrics`

pub mod io;
pub mod metered;

pub use io::IoStream;
pub use metered::Metered;

use bytes::{Buf, BufMut, Bytes, BytesMut};

/// Source of bytes for a `BinaryReader`.
pub trait ByteSource {
    /// Fill up to `buf.len()` bytes and return how many were transferred.
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

/// Destination of bytes for a `BinaryWriter`.
pub trait ByteSink {
    /// Write up to `buf.len()` bytes and return how many were accepted.
    fn write(&mut self, buf: &[u8]) -> usize;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> usize {
        (**self).write(buf)
    }
}

impl ByteSource for &[u8] {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.len());
        let (head, tail) = self.split_at(n);
        buf[..n].copy_from_slice(head);
        *self = tail;
        n
    }
}

impl ByteSource for Bytes {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.remaining());
        self.copy_to_slice(&mut buf[..n]);
        n
    }
}

impl ByteSink for Vec<u8> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> usize {
        self.extend_from_slice(buf);
        buf.len()
    }
}

impl ByteSink for BytesMut {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> usize {
        self.put_slice(buf);
        buf.len()
    }
}

/// Fixed-capacity sink over a caller-provided slice.
///
/// Accepts bytes until the slice is full, then reports short writes.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes written so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Remaining capacity in bytes
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The written prefix of the slice
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl ByteSink for SliceSink<'_> {
    fn write(&mut self, buf: &[u8]) -> usize {
        let n = buf.len().min(self.remaining());
        self.buf[self.pos..self.pos + n].copy_from_slice(&buf[..n]);
        self.pos += n;
        n
    }
}
