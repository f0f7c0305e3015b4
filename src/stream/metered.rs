//! Metering wrapper: forwards to an inner stream and records every transfer.

use super::{ByteSink, ByteSource};
use crate::utils::metrics::Metrics;
use std::sync::Arc;

/// A source or sink whose traffic is counted into shared `Metrics`.
#[derive(Debug)]
pub struct Metered<S> {
    inner: S,
    metrics: Arc<Metrics>,
}

impl<S> Metered<S> {
    pub fn new(inner: S, metrics: Arc<Metrics>) -> Self {
        Self { inner, metrics }
    }

    pub fn metrics(&self) -> &Arc<Metrics> {
        &self.metrics
    }

    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for Metered<S> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let n = self.inner.read(buf);
        self.metrics.record_read(buf.len(), n);
        n
    }
}

impl<S: ByteSink> ByteSink for Metered<S> {
    fn write(&mut self, buf: &[u8]) -> usize {
        let n = self.inner.write(buf);
        self.metrics.record_write(buf.len(), n);
        n
    }
}
