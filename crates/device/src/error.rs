//! Error types for the simulated device.

use crate::channel::Channel;
use thiserror::Error;

/// Result type for device operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Errors surfaced by the simulator. None are recovered internally.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// A trigger fired on a channel with an empty delegate slot.
    #[error("no delegate registered for channel {channel}")]
    NoDelegate { channel: Channel },

    /// Button identifier outside L1..L3 / R1..R3.
    #[error("unknown button '{0}' - expected one of L1, L2, L3, R1, R2, R3")]
    UnknownButton(String),

    /// Touchpad gesture label not recognised.
    #[error("unknown touchpad gesture '{0}' - expected 'left swipe', 'right swipe' or 'back and forth swipe'")]
    UnknownGesture(String),

    /// Simulator config JSON could not be parsed.
    #[error("invalid simulator config: {0}")]
    Config(#[source] serde_json::Error),
}
