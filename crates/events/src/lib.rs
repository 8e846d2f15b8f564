//! Shared event contracts for the simulated eyewear device.
//!
//! Every simulation trigger that reaches a registered delegate is mirrored
//! as one of the DTOs below, so a UI layer can observe the device without
//! registering delegates of its own. Using shared types keeps field names in
//! sync between the simulator and whatever renders it.
//!
//! Also provides the `EventBus` trait for decoupled event emission.

mod bus;

pub use bus::{publish, EmittedEvent, EventBus, EventBusRef, InMemoryEventBus, NullEventBus};

use serde::{Deserialize, Serialize};

/// Default lifetime of the touchpad indicator shown by the UI (3 seconds).
pub const DEFAULT_INDICATOR_DURATION_MS: u64 = 3000;

/// A typed event with a fixed topic.
pub trait DeviceEvent: Serialize {
    /// Topic the event is emitted under.
    const TOPIC: &'static str;
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Emitted when the simulated audio level changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioLevelChangedEvent {
    pub level: f64,
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl AudioLevelChangedEvent {
    pub fn new(level: f64) -> Self {
        Self {
            level,
            timestamp_ms: now_ms(),
        }
    }
}

impl DeviceEvent for AudioLevelChangedEvent {
    const TOPIC: &'static str = event_names::AUDIO_LEVEL_CHANGED;
}

/// Emitted when one or more frame buttons are pressed or held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonInputEvent {
    /// Button identifiers in the order they were reported (L1..R3).
    pub buttons: Vec<String>,
    /// True if the buttons were held rather than pressed.
    pub held: bool,
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl ButtonInputEvent {
    pub fn new(buttons: &[String], held: bool) -> Self {
        Self {
            buttons: buttons.to_vec(),
            held,
            timestamp_ms: now_ms(),
        }
    }
}

impl DeviceEvent for ButtonInputEvent {
    const TOPIC: &'static str = event_names::BUTTON_INPUT;
}

/// Emitted when the low power condition flips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowPowerChangedEvent {
    pub is_low_power: bool,
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl LowPowerChangedEvent {
    pub fn new(is_low_power: bool) -> Self {
        Self {
            is_low_power,
            timestamp_ms: now_ms(),
        }
    }
}

impl DeviceEvent for LowPowerChangedEvent {
    const TOPIC: &'static str = event_names::LOW_POWER_CHANGED;
}

/// Emitted when the device mode label changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeChangedEvent {
    pub mode: String,
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl ModeChangedEvent {
    pub fn new(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            timestamp_ms: now_ms(),
        }
    }
}

impl DeviceEvent for ModeChangedEvent {
    const TOPIC: &'static str = event_names::MODE_CHANGED;
}

/// Emitted for a touchpad gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchpadInputEvent {
    /// Gesture label, e.g. "left swipe".
    pub gesture: String,
    /// Which pad on the frame reported the gesture.
    pub pad_number: u32,
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl TouchpadInputEvent {
    pub fn new(gesture: impl Into<String>, pad_number: u32) -> Self {
        Self {
            gesture: gesture.into(),
            pad_number,
            timestamp_ms: now_ms(),
        }
    }
}

impl DeviceEvent for TouchpadInputEvent {
    const TOPIC: &'static str = event_names::TOUCHPAD_INPUT;
}

/// Emitted when the wearer heading changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WearerHeadingChangedEvent {
    /// Compass heading, nominally 0..=359.
    pub heading: f64,
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl WearerHeadingChangedEvent {
    pub fn new(heading: f64) -> Self {
        Self {
            heading,
            timestamp_ms: now_ms(),
        }
    }
}

impl DeviceEvent for WearerHeadingChangedEvent {
    const TOPIC: &'static str = event_names::WEARER_HEADING_CHANGED;
}

/// Request for the UI to show a transient touchpad indicator.
///
/// Producers: simulator (on every touchpad trigger)
/// Consumers: UI layer, which owns the timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchpadIndicatorEvent {
    pub gesture: String,
    pub pad_number: u32,
    /// How long the indicator should stay visible.
    pub duration_ms: u64,
    #[serde(default)]
    pub timestamp_ms: i64,
}

impl TouchpadIndicatorEvent {
    pub fn new(gesture: impl Into<String>, pad_number: u32, duration_ms: u64) -> Self {
        Self {
            gesture: gesture.into(),
            pad_number,
            duration_ms,
            timestamp_ms: now_ms(),
        }
    }
}

impl DeviceEvent for TouchpadIndicatorEvent {
    const TOPIC: &'static str = event_names::TOUCHPAD_INDICATOR;
}

/// Event names as constants to prevent typos.
pub mod event_names {
    pub const AUDIO_LEVEL_CHANGED: &str = "device:audio_level_changed";
    pub const BUTTON_INPUT: &str = "device:button_input";
    pub const LOW_POWER_CHANGED: &str = "device:low_power_changed";
    pub const MODE_CHANGED: &str = "device:mode_changed";
    pub const TOUCHPAD_INPUT: &str = "device:touchpad_input";
    pub const WEARER_HEADING_CHANGED: &str = "device:wearer_heading_changed";
    /// Transient touchpad indicator request for the UI.
    pub const TOUCHPAD_INDICATOR: &str = "ui:touchpad_indicator";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_input_serialize_camel_case() {
        let event = ButtonInputEvent::new(&["L1".to_string(), "R2".to_string()], true);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["buttons"], serde_json::json!(["L1", "R2"]));
        assert_eq!(json["held"], true);
        assert!(json["timestampMs"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_touchpad_input_deserialize_minimal() {
        let json = r#"{"gesture": "left swipe", "padNumber": 2}"#;
        let event: TouchpadInputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.gesture, "left swipe");
        assert_eq!(event.pad_number, 2);
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn test_indicator_carries_duration() {
        let event = TouchpadIndicatorEvent::new("right swipe", 1, DEFAULT_INDICATOR_DURATION_MS);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["durationMs"], 3000);
        assert_eq!(TouchpadIndicatorEvent::TOPIC, "ui:touchpad_indicator");
    }
}
