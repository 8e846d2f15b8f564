//! Telemetry channels exposed by the device.

use eyewear_events::event_names;
use serde::{Deserialize, Serialize};

/// One of the six simulated telemetry/input streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    AudioLevel,
    ButtonInput,
    LowPower,
    Mode,
    TouchpadInput,
    WearerHeading,
}

impl Channel {
    /// All channels, in declaration order.
    pub const ALL: [Channel; 6] = [
        Channel::AudioLevel,
        Channel::ButtonInput,
        Channel::LowPower,
        Channel::Mode,
        Channel::TouchpadInput,
        Channel::WearerHeading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::AudioLevel => "audio_level",
            Channel::ButtonInput => "button_input",
            Channel::LowPower => "low_power",
            Channel::Mode => "mode",
            Channel::TouchpadInput => "touchpad_input",
            Channel::WearerHeading => "wearer_heading",
        }
    }

    /// Bus topic the simulator publishes this channel's triggers under.
    pub fn topic(&self) -> &'static str {
        match self {
            Channel::AudioLevel => event_names::AUDIO_LEVEL_CHANGED,
            Channel::ButtonInput => event_names::BUTTON_INPUT,
            Channel::LowPower => event_names::LOW_POWER_CHANGED,
            Channel::Mode => event_names::MODE_CHANGED,
            Channel::TouchpadInput => event_names::TOUCHPAD_INPUT,
            Channel::WearerHeading => event_names::WEARER_HEADING_CHANGED,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_topics_are_distinct() {
        let topics: HashSet<_> = Channel::ALL.iter().map(|c| c.topic()).collect();
        assert_eq!(topics.len(), Channel::ALL.len());
    }

    #[test]
    fn test_serde_matches_display() {
        for channel in Channel::ALL {
            let json = serde_json::to_string(&channel).unwrap();
            assert_eq!(json, format!("\"{}\"", channel));
        }
    }
}
