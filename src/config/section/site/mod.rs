//! `[site]` section: the site settings record.
//!
//! Keys use the same camelCase names the page templates read
//! (`postPerIndex`, `editPost.url`, ...), so the exported record can be
//! consumed without renaming.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://devosfera.vercel.app/"
//! author = "Andrés Ujpán"
//! title = "Devosfera"
//! postPerIndex = 6
//! postPerPage = 8
//! scheduledPostMargin = 900000
//! dir = "ltr"
//! timezone = "America/Guatemala"
//!
//! [site.editPost]
//! enabled = true
//! url = "https://github.com/0xdres/astro-devosfera/edit/main/"
//!
//! [site.introAudio]
//! enabled = true
//! src = "/audio/intro-web.mp3"
//! duration = 30
//! ```

mod audio;
mod edit;
mod locale;
mod schedule;

pub use audio::IntroAudioConfig;
pub use edit::EditPostConfig;
pub use locale::TextDirection;
pub use schedule::ScheduleState;

use macros::Config;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

use crate::config::ConfigDiagnostics;
use crate::config::util::{require_non_empty, validate_http_url};

/// Fallback `<html lang>` when `lang` is left empty.
pub const DEFAULT_LANG: &str = "en";

/// Largest `scheduledPostMargin`; TOML integers are signed 64-bit.
pub const MAX_SCHEDULED_MARGIN: u64 = i64::MAX as u64;

/// Site-wide settings read by every page template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "site")]
pub struct SiteSettings {
    /// Deployed site URL.
    pub website: String,

    /// Author name.
    pub author: String,

    /// Author profile URL.
    pub profile: String,

    /// Site description.
    pub desc: String,

    /// Site title.
    pub title: String,

    /// Default OG image, relative to `public/`.
    pub og_image: String,

    /// Offer a light/dark theme toggle.
    pub light_and_dark_mode: bool,

    /// Posts listed on the home page.
    pub post_per_index: u32,

    /// Posts per paginated list page.
    pub post_per_page: u32,

    /// Milliseconds before its publish time at which a scheduled post is listed.
    pub scheduled_post_margin: u64,

    /// Show the archives page.
    pub show_archives: bool,

    /// Show the galleries page.
    pub show_galleries: bool,

    /// Show the back button on post pages.
    pub show_back_button: bool,

    /// Generate OG images per post at build time.
    pub dynamic_og_image: bool,

    /// Text direction: "ltr" | "rtl" | "auto".
    pub dir: TextDirection,

    /// HTML lang code, empty means "en".
    pub lang: String,

    /// Default IANA timezone, e.g. "America/Guatemala".
    pub timezone: String,

    #[config(sub)]
    pub edit_post: EditPostConfig,

    #[config(sub)]
    pub intro_audio: IntroAudioConfig,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            website: "https://devosfera.vercel.app/".into(),
            author: "Andrés Ujpán".into(),
            profile: "https://github.com/0xdres".into(),
            desc: "Un blog para compartir mis pensamientos y proyectos mientras aprendo cosas nuevas."
                .into(),
            title: "Devosfera".into(),
            og_image: "devosfera-og.webp".into(),
            light_and_dark_mode: true,
            post_per_index: 6,
            post_per_page: 8,
            scheduled_post_margin: 15 * 60 * 1000,
            show_archives: true,
            show_galleries: true,
            show_back_button: true,
            dynamic_og_image: true,
            dir: TextDirection::Ltr,
            lang: "es".into(),
            timezone: "America/Guatemala".into(),
            edit_post: EditPostConfig::default(),
            intro_audio: IntroAudioConfig::default(),
        }
    }
}

impl SiteSettings {
    /// Value for `<html lang>`.
    pub fn html_lang(&self) -> &str {
        if self.lang.trim().is_empty() {
            DEFAULT_LANG
        } else {
            &self.lang
        }
    }

    #[inline]
    pub fn scheduled_margin(&self) -> Duration {
        Duration::from_millis(self.scheduled_post_margin)
    }

    pub fn schedule_state(&self, pub_time: SystemTime, now: SystemTime) -> ScheduleState {
        ScheduleState::classify(pub_time, now, self.scheduled_margin())
    }

    /// Whether a post with this publish time is listed at `now`.
    pub fn is_visible(&self, pub_time: SystemTime, now: SystemTime) -> bool {
        self.schedule_state(pub_time, now).is_visible()
    }

    #[inline]
    pub fn edit_url(&self, post_path: &str) -> Option<String> {
        self.edit_post.edit_url(post_path)
    }

    /// Absolute URL of the static OG image, resolved under `website`.
    pub fn og_image_url(&self) -> Option<String> {
        if self.og_image.is_empty() {
            return None;
        }
        let mut base = url::Url::parse(&self.website).ok()?;
        // `website` names a directory even without a trailing slash
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&self.og_image).ok().map(|u| u.to_string())
    }

    /// Number of paginated list pages for `total_posts`.
    pub fn page_count(&self, total_posts: usize) -> usize {
        match self.post_per_page {
            0 => 0,
            per_page => total_posts.div_ceil(per_page as usize),
        }
    }

    /// Validate site settings.
    ///
    /// # Checks
    /// - identity strings are non-empty
    /// - `website` and `profile` are http(s) URLs
    /// - pagination sizes are greater than 0
    /// - `scheduledPostMargin` fits a TOML integer
    /// - enabled `editPost` / `introAudio` are usable
    /// - `timezone` looks like an IANA name (warning)
    /// - static `ogImage` present when dynamic images are off (warning)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        require_non_empty(&self.author, Self::FIELDS.author, diag);
        require_non_empty(&self.title, Self::FIELDS.title, diag);
        require_non_empty(&self.desc, Self::FIELDS.desc, diag);

        if require_non_empty(&self.website, Self::FIELDS.website, diag) {
            validate_http_url(&self.website, Self::FIELDS.website, diag);
        }
        if require_non_empty(&self.profile, Self::FIELDS.profile, diag) {
            validate_http_url(&self.profile, Self::FIELDS.profile, diag);
        }

        if self.post_per_index == 0 {
            diag.error(Self::FIELDS.post_per_index, "must be greater than 0");
        }
        if self.post_per_page == 0 {
            diag.error(Self::FIELDS.post_per_page, "must be greater than 0");
        }
        if self.scheduled_post_margin > MAX_SCHEDULED_MARGIN {
            diag.error(
                Self::FIELDS.scheduled_post_margin,
                format!("must be at most {MAX_SCHEDULED_MARGIN} milliseconds"),
            );
        }

        if !locale::looks_like_iana_zone(&self.timezone) {
            diag.warn(
                Self::FIELDS.timezone,
                format!(
                    "'{}' does not look like an IANA timezone (e.g. \"America/Guatemala\")",
                    self.timezone
                ),
            );
        }

        if !self.dynamic_og_image && self.og_image.trim().is_empty() {
            diag.warn(
                Self::FIELDS.og_image,
                "no static OG image while dynamic OG images are disabled",
            );
        }

        self.edit_post.validate(diag);
        self.intro_audio.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_satisfies_invariants() {
        let site = SiteSettings::default();
        assert!(site.post_per_index > 0);
        assert!(site.post_per_page > 0);
        assert_eq!(site.scheduled_margin(), Duration::from_secs(15 * 60));
        assert!(matches!(
            site.dir.as_str(),
            "ltr" | "rtl" | "auto"
        ));
        assert!(!site.intro_audio.enabled || site.intro_audio.duration > 0);

        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty(), "{diag}");
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_field_paths_use_file_keys() {
        assert_eq!(SiteSettings::FIELDS.post_per_index.as_str(), "site.postPerIndex");
        assert_eq!(
            SiteSettings::FIELDS.scheduled_post_margin.as_str(),
            "site.scheduledPostMargin"
        );
        assert_eq!(EditPostConfig::FIELDS.url.as_str(), "site.editPost.url");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let site: SiteSettings = toml::from_str("title = \"Otro\"\npostPerPage = 4").unwrap();
        assert_eq!(site.title, "Otro");
        assert_eq!(site.post_per_page, 4);
        assert_eq!(site.post_per_index, 6);
        assert_eq!(site.timezone, "America/Guatemala");
    }

    #[test]
    fn test_json_round_trip() {
        let site = SiteSettings::default();
        let json = serde_json::to_string(&site).unwrap();
        assert!(json.contains("\"postPerIndex\":6"));
        assert!(json.contains("\"dir\":\"ltr\""));
        let back: SiteSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, site);
    }

    #[test]
    fn test_toml_round_trip() {
        let site = SiteSettings {
            dir: TextDirection::Rtl,
            lang: String::new(),
            ..Default::default()
        };
        let text = toml::to_string(&site).unwrap();
        let back: SiteSettings = toml::from_str(&text).unwrap();
        assert_eq!(back, site);
    }

    #[test]
    fn test_largest_margin_round_trips() {
        let site = SiteSettings {
            scheduled_post_margin: MAX_SCHEDULED_MARGIN,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());

        let text = toml::to_string(&site).unwrap();
        let back: SiteSettings = toml::from_str(&text).unwrap();
        assert_eq!(back, site);
    }

    #[test]
    fn test_margin_beyond_toml_range_rejected() {
        let site = SiteSettings {
            scheduled_post_margin: MAX_SCHEDULED_MARGIN + 1,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.scheduledPostMargin"]);
    }

    #[test]
    fn test_zero_pagination_rejected() {
        let site = SiteSettings {
            post_per_index: 0,
            post_per_page: 0,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.postPerIndex", "site.postPerPage"]);
    }

    #[test]
    fn test_invalid_website_and_timezone() {
        let site = SiteSettings {
            website: "devosfera.vercel.app".into(),
            timezone: "Guatemala".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.errors()[0].field.as_str(), "site.website");
        assert_eq!(diag.warnings()[0].field.as_str(), "site.timezone");
    }

    #[test]
    fn test_html_lang_fallback() {
        let mut site = SiteSettings::default();
        assert_eq!(site.html_lang(), "es");
        site.lang.clear();
        assert_eq!(site.html_lang(), "en");
    }

    #[test]
    fn test_og_image_url() {
        let site = SiteSettings::default();
        assert_eq!(
            site.og_image_url().as_deref(),
            Some("https://devosfera.vercel.app/devosfera-og.webp")
        );
    }

    #[test]
    fn test_og_image_under_website_path() {
        let site = SiteSettings {
            website: "https://x.com/blog".into(),
            ..Default::default()
        };
        assert_eq!(
            site.og_image_url().as_deref(),
            Some("https://x.com/blog/devosfera-og.webp")
        );

        let site = SiteSettings {
            website: "https://x.com/blog/".into(),
            ..Default::default()
        };
        assert_eq!(
            site.og_image_url().as_deref(),
            Some("https://x.com/blog/devosfera-og.webp")
        );
    }

    #[test]
    fn test_page_count() {
        let site = SiteSettings::default();
        assert_eq!(site.page_count(0), 0);
        assert_eq!(site.page_count(8), 1);
        assert_eq!(site.page_count(9), 2);
    }

    #[test]
    fn test_visibility_uses_margin() {
        let site = SiteSettings::default();
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        assert!(site.is_visible(now + Duration::from_secs(10 * 60), now));
        assert!(!site.is_visible(now + Duration::from_secs(60 * 60), now));
    }

    #[test]
    fn test_template_parses_back_to_default() {
        let template = SiteSettings::template_with_header();
        assert!(template.starts_with("# Site-wide settings"));
        assert!(template.contains("[site]\n"));
        assert!(template.contains("[site.editPost]"));
        assert!(template.contains("[site.introAudio]"));

        let root: toml::Table = toml::from_str(&template).unwrap();
        let site: SiteSettings = root["site"].clone().try_into().unwrap();
        assert_eq!(site, SiteSettings::default());
    }
}
