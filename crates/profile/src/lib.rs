//! Wearer profile reported by the companion phone app.
//!
//! A [`UserProfile`] is a snapshot: values are fixed at construction and
//! only readable afterwards. To change a setting, build a new profile.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while building a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Settings JSON could not be parsed.
    #[error("invalid profile settings: {0}")]
    InvalidSettings(#[source] serde_json::Error),
}

/// Construction input for a [`UserProfile`].
///
/// Numeric values are taken as given; `wearer_course` is nominally 0..=359
/// but is not clamped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSettings {
    /// Display brightness.
    pub brightness: f64,
    /// True if the device is set up for a left-handed wearer.
    pub handedness: bool,
    /// Unique identifier of the device.
    pub identifier: String,
    /// Wearer's style setting.
    pub style: String,
    pub wearer_age: u32,
    /// Wearer's course heading.
    pub wearer_course: f64,
    pub wearer_language: String,
}

/// Read-only wearer and device settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct UserProfile {
    settings: ProfileSettings,
}

impl UserProfile {
    pub fn new(settings: ProfileSettings) -> Self {
        tracing::debug!(identifier = %settings.identifier, "profile snapshot created");
        Self { settings }
    }

    /// Build a profile from the phone app's settings JSON.
    ///
    /// Keys are camelCase; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let settings = serde_json::from_str(json).map_err(ProfileError::InvalidSettings)?;
        Ok(Self::new(settings))
    }

    pub fn brightness(&self) -> f64 {
        self.settings.brightness
    }

    /// True if handedness is set to left.
    pub fn handedness(&self) -> bool {
        self.settings.handedness
    }

    pub fn identifier(&self) -> &str {
        &self.settings.identifier
    }

    pub fn style(&self) -> &str {
        &self.settings.style
    }

    pub fn wearer_age(&self) -> u32 {
        self.settings.wearer_age
    }

    /// Course heading, nominally 0..=359.
    pub fn wearer_course(&self) -> f64 {
        self.settings.wearer_course
    }

    pub fn wearer_language(&self) -> &str {
        &self.settings.wearer_language
    }

    /// Copy of the values this profile was built from.
    pub fn settings(&self) -> ProfileSettings {
        self.settings.clone()
    }
}

impl From<ProfileSettings> for UserProfile {
    fn from(settings: ProfileSettings) -> Self {
        Self::new(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileSettings {
        ProfileSettings {
            brightness: 0.8,
            handedness: true,
            identifier: "LARP-0042".to_string(),
            style: "neon".to_string(),
            wearer_age: 31,
            wearer_course: 359.0,
            wearer_language: "en-GB".to_string(),
        }
    }

    #[test]
    fn test_getters_return_construction_values() {
        let profile = UserProfile::new(sample());

        for _ in 0..2 {
            assert_eq!(profile.brightness(), 0.8);
            assert!(profile.handedness());
            assert_eq!(profile.identifier(), "LARP-0042");
            assert_eq!(profile.style(), "neon");
            assert_eq!(profile.wearer_age(), 31);
            assert_eq!(profile.wearer_course(), 359.0);
            assert_eq!(profile.wearer_language(), "en-GB");
        }
        assert_eq!(profile.settings(), sample());
    }

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.brightness(), 0.0);
        assert!(!profile.handedness());
        assert_eq!(profile.identifier(), "");
        assert_eq!(profile.style(), "");
        assert_eq!(profile.wearer_age(), 0);
        assert_eq!(profile.wearer_course(), 0.0);
        assert_eq!(profile.wearer_language(), "");
    }

    #[test]
    fn test_from_json_partial() {
        let json = r#"{"identifier": "LARP-7", "wearerAge": 19, "wearerCourse": 400}"#;
        let profile = UserProfile::from_json(json).unwrap();
        assert_eq!(profile.identifier(), "LARP-7");
        assert_eq!(profile.wearer_age(), 19);
        // Course is not clamped.
        assert_eq!(profile.wearer_course(), 400.0);
        assert_eq!(profile.wearer_language(), "");
    }

    #[test]
    fn test_from_json_invalid() {
        let err = UserProfile::from_json(r#"{"wearerAge": -3}"#).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidSettings(_)));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(UserProfile::from(sample())).unwrap();
        assert_eq!(json["wearerLanguage"], "en-GB");
    }
}
