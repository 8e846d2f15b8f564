//! Per-channel delegate slots.

use crate::channel::Channel;
use crate::error::{DeviceError, DeviceResult};

/// Delegate for audio level changes.
pub type AudioLevelDelegate = dyn FnMut(f64) + Send;

/// Delegate for button input: pressed identifiers and whether they were held.
pub type ButtonInputDelegate = dyn FnMut(&[String], bool) + Send;

/// Delegate for low power transitions.
pub type LowPowerDelegate = dyn FnMut(bool) + Send;

/// Delegate for mode changes.
pub type ModeDelegate = dyn FnMut(&str) + Send;

/// Delegate for touchpad input: gesture label and pad number.
pub type TouchpadDelegate = dyn FnMut(&str, u32) + Send;

/// Delegate for wearer heading changes.
pub type WearerHeadingDelegate = dyn FnMut(f64) + Send;

/// Holds at most one delegate for a channel.
pub(crate) struct DelegateSlot<F: ?Sized> {
    channel: Channel,
    delegate: Option<Box<F>>,
}

impl<F: ?Sized> DelegateSlot<F> {
    pub(crate) fn empty(channel: Channel) -> Self {
        Self {
            channel,
            delegate: None,
        }
    }

    /// Store `delegate`, dropping whatever was registered before.
    pub(crate) fn register(&mut self, delegate: Box<F>) {
        if self.delegate.replace(delegate).is_some() {
            tracing::debug!(channel = %self.channel, "replaced delegate");
        } else {
            tracing::debug!(channel = %self.channel, "registered delegate");
        }
    }

    pub(crate) fn clear(&mut self) -> bool {
        self.delegate.take().is_some()
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.delegate.is_some()
    }

    pub(crate) fn get_mut(&mut self) -> DeviceResult<&mut F> {
        let channel = self.channel;
        self.delegate
            .as_deref_mut()
            .ok_or(DeviceError::NoDelegate { channel })
    }
}

/// The six delegate slots of one device.
pub(crate) struct Delegates {
    pub(crate) audio_level: DelegateSlot<AudioLevelDelegate>,
    pub(crate) button_input: DelegateSlot<ButtonInputDelegate>,
    pub(crate) low_power: DelegateSlot<LowPowerDelegate>,
    pub(crate) mode: DelegateSlot<ModeDelegate>,
    pub(crate) touchpad_input: DelegateSlot<TouchpadDelegate>,
    pub(crate) wearer_heading: DelegateSlot<WearerHeadingDelegate>,
}

impl Default for Delegates {
    fn default() -> Self {
        Self {
            audio_level: DelegateSlot::empty(Channel::AudioLevel),
            button_input: DelegateSlot::empty(Channel::ButtonInput),
            low_power: DelegateSlot::empty(Channel::LowPower),
            mode: DelegateSlot::empty(Channel::Mode),
            touchpad_input: DelegateSlot::empty(Channel::TouchpadInput),
            wearer_heading: DelegateSlot::empty(Channel::WearerHeading),
        }
    }
}

impl Delegates {
    pub(crate) fn is_registered(&self, channel: Channel) -> bool {
        match channel {
            Channel::AudioLevel => self.audio_level.is_registered(),
            Channel::ButtonInput => self.button_input.is_registered(),
            Channel::LowPower => self.low_power.is_registered(),
            Channel::Mode => self.mode.is_registered(),
            Channel::TouchpadInput => self.touchpad_input.is_registered(),
            Channel::WearerHeading => self.wearer_heading.is_registered(),
        }
    }

    pub(crate) fn clear(&mut self, channel: Channel) -> bool {
        match channel {
            Channel::AudioLevel => self.audio_level.clear(),
            Channel::ButtonInput => self.button_input.clear(),
            Channel::LowPower => self.low_power.clear(),
            Channel::Mode => self.mode.clear(),
            Channel::TouchpadInput => self.touchpad_input.clear(),
            Channel::WearerHeading => self.wearer_heading.clear(),
        }
    }

    pub(crate) fn registered(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|c| self.is_registered(*c))
            .collect()
    }
}
