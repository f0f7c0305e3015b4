//! # Wire Format Descriptor
//!
//! The immutable configuration shared by a reader and writer pair: the target
//! byte order and whether integers are compacted. A descriptor is fixed when a
//! reader or writer is constructed and never changes afterwards.

use serde::{Deserialize, Serialize};

/// Byte order of multi-byte fields on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most-significant byte first
    Big,
    /// Least-significant byte first
    #[default]
    Little,
}

impl ByteOrder {
    /// The byte order of the platform this code was compiled for.
    pub const fn native() -> Self {
        #[cfg(target_endian = "big")]
        let order = Self::Big;

        #[cfg(target_endian = "little")]
        let order = Self::Little;

        order
    }

    /// Network byte order, an alias for big-endian.
    pub const fn network() -> Self {
        Self::Big
    }

    /// Whether this order matches the host's native order.
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::native()),
            (Self::Big, Self::Big) | (Self::Little, Self::Little)
        )
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ByteOrder::Big => "big",
            ByteOrder::Little => "little",
        }
    }
}

/// Format descriptor: byte order plus compaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WireFormat {
    pub byte_order: ByteOrder,
    pub compacted: bool,
}

impl WireFormat {
    pub const fn new(byte_order: ByteOrder, compacted: bool) -> Self {
        Self {
            byte_order,
            compacted,
        }
    }

    /// Fixed-width integers in the given order
    pub const fn fixed(byte_order: ByteOrder) -> Self {
        Self::new(byte_order, false)
    }

    /// Compacted integers in the given order
    pub const fn compacted(byte_order: ByteOrder) -> Self {
        Self::new(byte_order, true)
    }

    pub const fn byte_order(self) -> ByteOrder {
        self.byte_order
    }

    pub const fn is_compacted(self) -> bool {
        self.compacted
    }
}
