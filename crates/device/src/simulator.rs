//! Simulation capability and the concrete simulated device.

use crate::channel::Channel;
use crate::config::SimulatorConfig;
use crate::delegate::Delegates;
use crate::error::DeviceResult;
use crate::state::{DeviceSnapshot, DeviceState};
use eyewear_events::{
    publish, AudioLevelChangedEvent, ButtonInputEvent, EventBusRef, LowPowerChangedEvent,
    ModeChangedEvent, NullEventBus, TouchpadIndicatorEvent, TouchpadInputEvent,
    WearerHeadingChangedEvent,
};
use std::sync::Arc;

/// Mutation and trigger operations layered on top of `DeviceState`.
///
/// Setters overwrite stored values without validation. Triggers only
/// dispatch: they invoke the registered delegate synchronously and never
/// touch stored state, so a caller may fire a value that differs from what
/// the getters return. Pair `set_*` with `simulate_*` when both are wanted.
///
/// Every trigger returns `DeviceError::NoDelegate` when its channel has no
/// delegate registered.
pub trait DeviceSimulation: DeviceState {
    fn set_audio_level(&mut self, value: f64);

    fn set_button_input(&mut self, values: &[String]);

    fn set_low_power(&mut self, value: bool);

    fn set_mode(&mut self, value: &str);

    fn set_touchpad_input(&mut self, values: &[String]);

    fn set_wearer_heading(&mut self, value: f64);

    fn simulate_audio_level_changed(&mut self, level: f64) -> DeviceResult<()>;

    fn simulate_button_input(&mut self, buttons: &[String], held: bool) -> DeviceResult<()>;

    fn simulate_low_power_change(&mut self, is_low_power: bool) -> DeviceResult<()>;

    fn simulate_mode_changed(&mut self, mode: &str) -> DeviceResult<()>;

    /// Also asks the UI, via the event bus, to show the touchpad indicator.
    fn simulate_touchpad_input(&mut self, gesture: &str, pad_number: u32) -> DeviceResult<()>;

    fn simulate_wearer_heading_changed(&mut self, heading: f64) -> DeviceResult<()>;

    /// Empty one channel's delegate slot. Returns whether one was registered.
    fn clear_delegate(&mut self, channel: Channel) -> bool;

    /// Restore the configured initial values. Delegates are kept.
    fn reset_state(&mut self);
}

/// A wearable device driven entirely by its caller.
///
/// The harness owns the instance for the whole session; nothing here is
/// shared or global.
pub struct SimulatedDevice {
    state: DeviceSnapshot,
    initial_state: DeviceSnapshot,
    delegates: Delegates,
    bus: EventBusRef,
    indicator_duration_ms: u64,
}

impl Default for SimulatedDevice {
    fn default() -> Self {
        Self::with_config(SimulatorConfig::default())
    }
}

impl SimulatedDevice {
    /// Create a device with default values and no event bus.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimulatorConfig) -> Self {
        tracing::debug!(
            indicator_duration_ms = config.indicator_duration_ms,
            "New simulated device initialized"
        );
        Self {
            state: config.initial_state.clone(),
            initial_state: config.initial_state,
            delegates: Delegates::default(),
            bus: Arc::new(NullEventBus),
            indicator_duration_ms: config.indicator_duration_ms,
        }
    }

    /// Publish every successful trigger on `bus`.
    pub fn with_event_bus(mut self, bus: EventBusRef) -> Self {
        self.bus = bus;
        self
    }

    /// Channels that currently have a delegate.
    pub fn registered_channels(&self) -> Vec<Channel> {
        self.delegates.registered()
    }
}

impl DeviceState for SimulatedDevice {
    fn audio_level(&self) -> f64 {
        self.state.audio_level
    }

    fn button_input(&self) -> &[String] {
        &self.state.button_input
    }

    fn low_power(&self) -> bool {
        self.state.low_power
    }

    fn mode(&self) -> &str {
        &self.state.mode
    }

    fn touchpad_input(&self) -> &[String] {
        &self.state.touchpad_input
    }

    fn wearer_heading(&self) -> f64 {
        self.state.wearer_heading
    }

    fn has_delegate(&self, channel: Channel) -> bool {
        self.delegates.is_registered(channel)
    }

    fn snapshot(&self) -> DeviceSnapshot {
        self.state.clone()
    }

    fn on_audio_level_changed<F>(&mut self, delegate: F)
    where
        F: FnMut(f64) + Send + 'static,
    {
        self.delegates.audio_level.register(Box::new(delegate));
    }

    fn on_button_input<F>(&mut self, delegate: F)
    where
        F: FnMut(&[String], bool) + Send + 'static,
    {
        self.delegates.button_input.register(Box::new(delegate));
    }

    fn on_low_power_change<F>(&mut self, delegate: F)
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.delegates.low_power.register(Box::new(delegate));
    }

    fn on_mode_changed<F>(&mut self, delegate: F)
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.delegates.mode.register(Box::new(delegate));
    }

    fn on_touchpad_input<F>(&mut self, delegate: F)
    where
        F: FnMut(&str, u32) + Send + 'static,
    {
        self.delegates.touchpad_input.register(Box::new(delegate));
    }

    fn on_wearer_heading_changed<F>(&mut self, delegate: F)
    where
        F: FnMut(f64) + Send + 'static,
    {
        self.delegates.wearer_heading.register(Box::new(delegate));
    }
}

impl DeviceSimulation for SimulatedDevice {
    fn set_audio_level(&mut self, value: f64) {
        self.state.audio_level = value;
    }

    fn set_button_input(&mut self, values: &[String]) {
        self.state.button_input = values.to_vec();
    }

    fn set_low_power(&mut self, value: bool) {
        self.state.low_power = value;
    }

    fn set_mode(&mut self, value: &str) {
        self.state.mode = value.to_string();
    }

    fn set_touchpad_input(&mut self, values: &[String]) {
        self.state.touchpad_input = values.to_vec();
    }

    fn set_wearer_heading(&mut self, value: f64) {
        self.state.wearer_heading = value;
    }

    fn simulate_audio_level_changed(&mut self, level: f64) -> DeviceResult<()> {
        let delegate = self.delegates.audio_level.get_mut()?;
        tracing::trace!(channel = %Channel::AudioLevel, level, "dispatching");
        delegate(level);
        publish(self.bus.as_ref(), &AudioLevelChangedEvent::new(level));
        Ok(())
    }

    fn simulate_button_input(&mut self, buttons: &[String], held: bool) -> DeviceResult<()> {
        let delegate = self.delegates.button_input.get_mut()?;
        tracing::trace!(channel = %Channel::ButtonInput, ?buttons, held, "dispatching");
        delegate(buttons, held);
        publish(self.bus.as_ref(), &ButtonInputEvent::new(buttons, held));
        Ok(())
    }

    fn simulate_low_power_change(&mut self, is_low_power: bool) -> DeviceResult<()> {
        let delegate = self.delegates.low_power.get_mut()?;
        tracing::trace!(channel = %Channel::LowPower, is_low_power, "dispatching");
        delegate(is_low_power);
        publish(self.bus.as_ref(), &LowPowerChangedEvent::new(is_low_power));
        Ok(())
    }

    fn simulate_mode_changed(&mut self, mode: &str) -> DeviceResult<()> {
        let delegate = self.delegates.mode.get_mut()?;
        tracing::trace!(channel = %Channel::Mode, mode, "dispatching");
        delegate(mode);
        publish(self.bus.as_ref(), &ModeChangedEvent::new(mode));
        Ok(())
    }

    fn simulate_touchpad_input(&mut self, gesture: &str, pad_number: u32) -> DeviceResult<()> {
        let delegate = self.delegates.touchpad_input.get_mut()?;
        tracing::trace!(channel = %Channel::TouchpadInput, gesture, pad_number, "dispatching");
        // The indicator goes out first so the UI can show it while the delegate runs.
        publish(
            self.bus.as_ref(),
            &TouchpadIndicatorEvent::new(gesture, pad_number, self.indicator_duration_ms),
        );
        delegate(gesture, pad_number);
        publish(self.bus.as_ref(), &TouchpadInputEvent::new(gesture, pad_number));
        Ok(())
    }

    fn simulate_wearer_heading_changed(&mut self, heading: f64) -> DeviceResult<()> {
        let delegate = self.delegates.wearer_heading.get_mut()?;
        tracing::trace!(channel = %Channel::WearerHeading, heading, "dispatching");
        delegate(heading);
        publish(self.bus.as_ref(), &WearerHeadingChangedEvent::new(heading));
        Ok(())
    }

    fn clear_delegate(&mut self, channel: Channel) -> bool {
        let cleared = self.delegates.clear(channel);
        if cleared {
            tracing::debug!(%channel, "cleared delegate");
        }
        cleared
    }

    fn reset_state(&mut self) {
        tracing::debug!("resetting device state to initial values");
        self.state = self.initial_state.clone();
    }
}

impl std::fmt::Debug for SimulatedDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedDevice")
            .field("state", &self.state)
            .field("delegates", &self.delegates.registered())
            .field("indicator_duration_ms", &self.indicator_duration_ms)
            .finish_non_exhaustive()
    }
}
