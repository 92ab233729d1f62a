//! Text direction for the `<html dir>` attribute.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document text direction: "ltr" | "rtl" | "auto".
///
/// Any other value is rejected when the config is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
    Auto,
}

impl TextDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loose IANA zone shape check (`Area/Location`, `UTC`, `GMT`).
///
/// The tz database itself is not consulted.
pub fn looks_like_iana_zone(zone: &str) -> bool {
    if matches!(zone, "UTC" | "GMT") {
        return true;
    }
    let mut segments = zone.split('/');
    let valid_segment = |s: &str| {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+'))
    };
    matches!(segments.next(), Some(area) if valid_segment(area))
        && zone.contains('/')
        && segments.all(valid_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        dir: TextDirection,
    }

    #[test]
    fn test_direction_parses_enumerated_values() {
        for (raw, expected) in [
            ("ltr", TextDirection::Ltr),
            ("rtl", TextDirection::Rtl),
            ("auto", TextDirection::Auto),
        ] {
            let probe: Probe = toml::from_str(&format!("dir = \"{raw}\"")).unwrap();
            assert_eq!(probe.dir, expected);
            assert_eq!(probe.dir.as_str(), raw);
        }
    }

    #[test]
    fn test_direction_rejects_other_values() {
        assert!(toml::from_str::<Probe>("dir = \"LTR\"").is_err());
        assert!(toml::from_str::<Probe>("dir = \"ttb\"").is_err());
    }

    #[test]
    fn test_iana_zone_shape() {
        assert!(looks_like_iana_zone("America/Guatemala"));
        assert!(looks_like_iana_zone("America/Argentina/Buenos_Aires"));
        assert!(looks_like_iana_zone("Etc/GMT+6"));
        assert!(looks_like_iana_zone("UTC"));
        assert!(!looks_like_iana_zone(""));
        assert!(!looks_like_iana_zone("Guatemala"));
        assert!(!looks_like_iana_zone("America/"));
        assert!(!looks_like_iana_zone("America/New York"));
    }
}
