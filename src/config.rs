//! # Configuration Management
//!
//! Centralized configuration for codec users.
//!
//! This module provides structured configuration for the wire format, decoding
//! limits and logging, so that both ends of a stream can load the same
//! descriptor from one place.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Direct instantiation with defaults
//! - Environment-specific overrides via `from_env()`
//!
//! ## Security Considerations
//! - Length prefixes are untrusted input: `max_sequence_len` and
//!   `max_frame_len` bound what a corrupt or hostile stream can make a reader allocate

use crate::core::format::{ByteOrder, WireFormat};
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Max elements accepted by a length-prefixed read (16 Mi)
pub const MAX_SEQUENCE_LEN: u64 = 16 * 1024 * 1024;

/// Max frame payload accepted by `FrameCodec` (16 MB)
pub const MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

/// Whether integers are compacted by default
pub const ENABLE_COMPACTION: bool = false;

/// Main configuration structure that contains all configurable settings
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CodecConfig {
    /// Wire format descriptor
    #[serde(default)]
    pub format: FormatConfig,

    /// Decoding limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CodecConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)
            .map_err(|e| CodecError::ConfigError(format!("Failed to open config file: {e}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| CodecError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Load configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| CodecError::ConfigError(format!("Failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(order) = std::env::var("WIRE_CODEC_BYTE_ORDER") {
            config.format.byte_order = order.parse()?;
        }

        if let Ok(compacted) = std::env::var("WIRE_CODEC_COMPACTED") {
            config.format.compacted = compacted.parse::<bool>().map_err(|_| {
                CodecError::ConfigError(format!(
                    "WIRE_CODEC_COMPACTED must be 'true' or 'false', got '{compacted}'"
                ))
            })?;
        }

        if let Ok(max) = std::env::var("WIRE_CODEC_MAX_SEQUENCE_LEN") {
            config.limits.max_sequence_len = max.parse::<u64>().map_err(|_| {
                CodecError::ConfigError(format!(
                    "WIRE_CODEC_MAX_SEQUENCE_LEN must be an unsigned integer, got '{max}'"
                ))
            })?;
        }

        if let Ok(max) = std::env::var("WIRE_CODEC_MAX_FRAME_LEN") {
            config.limits.max_frame_len = max.parse::<usize>().map_err(|_| {
                CodecError::ConfigError(format!(
                    "WIRE_CODEC_MAX_FRAME_LEN must be an unsigned integer, got '{max}'"
                ))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CodecError::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| CodecError::ConfigError(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// The wire format this configuration describes
    pub fn wire_format(&self) -> WireFormat {
        self.format.wire_format()
    }

    /// Validate the configuration for common issues and misconfigurations
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.limits.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CodecError::ConfigError(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Byte order as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrderSetting {
    Big,
    #[default]
    Little,
    /// Resolved to the host order when the format is built
    Native,
}

impl ByteOrderSetting {
    pub fn resolve(self) -> ByteOrder {
        match self {
            ByteOrderSetting::Big => ByteOrder::Big,
            ByteOrderSetting::Little => ByteOrder::Little,
            ByteOrderSetting::Native => ByteOrder::native(),
        }
    }
}

impl std::str::FromStr for ByteOrderSetting {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "big" | "be" | "network" => Ok(ByteOrderSetting::Big),
            "little" | "le" => Ok(ByteOrderSetting::Little),
            "native" | "host" => Ok(ByteOrderSetting::Native),
            other => Err(CodecError::ConfigError(format!(
                "Invalid byte order: '{other}' (expected 'big', 'little' or 'native')"
            ))),
        }
    }
}

/// Wire format configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormatConfig {
    /// Target byte order of multi-byte fields
    pub byte_order: ByteOrderSetting,

    /// Whether integers use the compacted header + magnitude encoding
    pub compacted: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrderSetting::default(),
            compacted: ENABLE_COMPACTION,
        }
    }
}

impl FormatConfig {
    pub fn wire_format(&self) -> WireFormat {
        WireFormat::new(self.byte_order.resolve(), self.compacted)
    }
}

impl From<&FormatConfig> for WireFormat {
    fn from(config: &FormatConfig) -> Self {
        config.wire_format()
    }
}

/// Decoding limits
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Maximum element count accepted from a sequence length prefix
    pub max_sequence_len: u64,

    /// Maximum payload size accepted by the frame codec
    pub max_frame_len: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_sequence_len: MAX_SEQUENCE_LEN,
            max_frame_len: MAX_FRAME_LEN,
        }
    }
}

impl LimitsConfig {
    /// Validate decoding limits
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_sequence_len == 0 {
            errors.push("Max sequence length must be greater than 0".to_string());
        }

        if self.max_frame_len == 0 {
            errors.push("Max frame length must be greater than 0".to_string());
        } else if self.max_frame_len > 1024 * 1024 * 1024 {
            errors.push(format!(
                "Max frame length too large: {} bytes (maximum recommended: 1 GB)",
                self.max_frame_len
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,

    /// Whether to emit ANSI colors
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("wire-codec"),
            log_level: Level::INFO,
            json_format: false,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// Helper module for tracing::Level serialization/deserialization
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let level_str = match *level {
            Level::TRACE => "trace",
            Level::DEBUG => "debug",
            Level::INFO => "info",
            Level::WARN => "warn",
            Level::ERROR => "error",
        };
        level_str.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level_str = String::deserialize(deserializer)?;
        Level::from_str(&level_str)
            .map_err(|_| serde::de::Error::custom(format!("Invalid log level: {level_str}")))
    }
}
