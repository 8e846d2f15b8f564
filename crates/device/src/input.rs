//! Button and touchpad vocabulary of the eyewear frame.
//!
//! Delegates and stored state stay string-typed; these enums are for
//! harnesses that want to build inputs without typos.

use crate::error::DeviceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Physical buttons on the frame: three per temple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    L1,
    L2,
    L3,
    R1,
    R2,
    R3,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::L1,
        Button::L2,
        Button::L3,
        Button::R1,
        Button::R2,
        Button::R3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::L1 => "L1",
            Button::L2 => "L2",
            Button::L3 => "L3",
            Button::R1 => "R1",
            Button::R2 => "R2",
            Button::R3 => "R3",
        }
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Button {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Button::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| DeviceError::UnknownButton(s.to_string()))
    }
}

/// Convert buttons into the string identifiers delegates receive.
pub fn button_labels(buttons: &[Button]) -> Vec<String> {
    buttons.iter().map(|b| b.as_str().to_string()).collect()
}

/// Gestures the touchpads report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchpadGesture {
    LeftSwipe,
    RightSwipe,
    BackAndForthSwipe,
}

impl TouchpadGesture {
    pub const ALL: [TouchpadGesture; 3] = [
        TouchpadGesture::LeftSwipe,
        TouchpadGesture::RightSwipe,
        TouchpadGesture::BackAndForthSwipe,
    ];

    /// Label passed to touchpad delegates.
    pub fn label(&self) -> &'static str {
        match self {
            TouchpadGesture::LeftSwipe => "left swipe",
            TouchpadGesture::RightSwipe => "right swipe",
            TouchpadGesture::BackAndForthSwipe => "back and forth swipe",
        }
    }
}

impl std::fmt::Display for TouchpadGesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TouchpadGesture {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TouchpadGesture::ALL
            .into_iter()
            .find(|g| g.label() == s)
            .ok_or_else(|| DeviceError::UnknownGesture(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_parse() {
        assert_eq!("R2".parse::<Button>().unwrap(), Button::R2);
        assert!(matches!(
            "R4".parse::<Button>(),
            Err(DeviceError::UnknownButton(ref s)) if s == "R4"
        ));
        // Identifiers are case sensitive.
        assert!("l1".parse::<Button>().is_err());
    }

    #[test]
    fn test_button_labels_keep_order() {
        assert_eq!(button_labels(&[Button::R3, Button::L1]), vec!["R3", "L1"]);
    }

    #[test]
    fn test_gesture_labels() {
        assert_eq!(TouchpadGesture::LeftSwipe.to_string(), "left swipe");
        assert_eq!(
            "back and forth swipe".parse::<TouchpadGesture>().unwrap(),
            TouchpadGesture::BackAndForthSwipe
        );
        assert!(matches!(
            "tap".parse::<TouchpadGesture>(),
            Err(DeviceError::UnknownGesture(_))
        ));
    }
}
