//! Read-only device capability and the telemetry snapshot behind it.

use crate::channel::Channel;
use serde::{Deserialize, Serialize};

/// Current values of every telemetry channel.
///
/// Numeric fields are stored exactly as given. `wearer_heading` is nominally
/// 0..=359 but is neither clamped nor wrapped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceSnapshot {
    /// Simulated audio amplitude.
    pub audio_level: f64,
    /// Last pressed button identifiers (L1..L3, R1..R3).
    pub button_input: Vec<String>,
    /// Whether the device reports a low power condition.
    pub low_power: bool,
    /// Free-form device mode label.
    pub mode: String,
    /// Last touchpad gesture record(s).
    pub touchpad_input: Vec<String>,
    /// Compass heading of the wearer.
    pub wearer_heading: f64,
}

/// Read-only view of a device: getters plus delegate registration.
///
/// Registering a delegate replaces any delegate already held for that
/// channel. Registration methods require `Self: Sized`, so `&dyn DeviceState`
/// is an observation-only handle.
pub trait DeviceState {
    fn audio_level(&self) -> f64;

    fn button_input(&self) -> &[String];

    fn low_power(&self) -> bool;

    fn mode(&self) -> &str;

    fn touchpad_input(&self) -> &[String];

    fn wearer_heading(&self) -> f64;

    /// Whether a delegate is currently registered for `channel`.
    fn has_delegate(&self, channel: Channel) -> bool;

    /// Copy of all current values.
    fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            audio_level: self.audio_level(),
            button_input: self.button_input().to_vec(),
            low_power: self.low_power(),
            mode: self.mode().to_string(),
            touchpad_input: self.touchpad_input().to_vec(),
            wearer_heading: self.wearer_heading(),
        }
    }

    /// Called with the new level.
    fn on_audio_level_changed<F>(&mut self, delegate: F)
    where
        F: FnMut(f64) + Send + 'static,
        Self: Sized;

    /// Called with the pressed buttons and `true` if they were held
    /// rather than simply pressed.
    fn on_button_input<F>(&mut self, delegate: F)
    where
        F: FnMut(&[String], bool) + Send + 'static,
        Self: Sized;

    fn on_low_power_change<F>(&mut self, delegate: F)
    where
        F: FnMut(bool) + Send + 'static,
        Self: Sized;

    fn on_mode_changed<F>(&mut self, delegate: F)
    where
        F: FnMut(&str) + Send + 'static,
        Self: Sized;

    /// Called with a gesture label such as "left swipe" and the number of
    /// the pad that reported it.
    fn on_touchpad_input<F>(&mut self, delegate: F)
    where
        F: FnMut(&str, u32) + Send + 'static,
        Self: Sized;

    fn on_wearer_heading_changed<F>(&mut self, delegate: F)
    where
        F: FnMut(f64) + Send + 'static,
        Self: Sized;
}
