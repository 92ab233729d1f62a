//! `[site.introAudio]` configuration for the hero audio player.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::util::require_non_empty;

/// Intro audio clip played from the home page hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "site.introAudio")]
pub struct IntroAudioConfig {
    /// Show the player.
    pub enabled: bool,

    /// Audio file path, relative to `public/`.
    pub src: String,

    /// Label displayed in the player.
    pub label: String,

    /// Clip length in seconds (drives the fixed progress bar).
    pub duration: u32,
}

impl Default for IntroAudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            src: "/audio/intro-web.mp3".into(),
            label: "INTRO.MP3".into(),
            duration: 30,
        }
    }
}

impl IntroAudioConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enabled {
            return;
        }
        require_non_empty(&self.src, Self::FIELDS.src, diag);
        if self.duration == 0 {
            diag.error_with_hint(
                Self::FIELDS.duration,
                "must be greater than 0 when the player is enabled",
                "set the clip length in seconds, or disable the player",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_rejected_when_enabled() {
        let audio = IntroAudioConfig {
            duration: 0,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        audio.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "site.introAudio.duration");
    }

    #[test]
    fn test_zero_duration_allowed_when_disabled() {
        let audio = IntroAudioConfig {
            enabled: false,
            duration: 0,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        audio.validate(&mut diag);
        assert!(diag.is_empty());
    }
}
