//! Audio backend error types

use thiserror::Error;

/// Errors that can occur while opening the output stream
#[derive(Error, Debug)]
pub enum AudioError {
    /// Requested host is not available on this system
    #[error("Audio host not available: {0}")]
    HostUnavailable(String),

    /// No default output device on the host
    #[error("No default output device")]
    NoDefaultDevice,

    /// Device not found by name
    #[error("Output device not found: {0}")]
    DeviceNotFound(String),

    /// Failed to enumerate devices
    #[error("Failed to enumerate audio devices: {0}")]
    DeviceEnumeration(String),

    /// Failed to get device configuration
    #[error("Failed to get device config: {0}")]
    ConfigError(String),

    /// Unsupported sample format
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Failed to build audio stream
    #[error("Failed to build audio stream: {0}")]
    StreamBuildError(String),

    /// Failed to start/play stream
    #[error("Failed to start audio stream: {0}")]
    StreamPlayError(String),
}

/// Result type for audio operations
pub type AudioResult<T> = Result<T, AudioError>;
