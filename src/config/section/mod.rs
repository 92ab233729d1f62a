//! Configuration section definitions.
//!
//! Each module corresponds to a section in `devosfera.toml`:
//!
//! | Module  | TOML Section | Purpose                                   |
//! |---------|--------------|-------------------------------------------|
//! | `site`  | `[site]`     | Site settings record (identity, toggles)  |
//! | `icons` | `[icons]`    | Icon asset location for link directories  |
//!
//! `[[socials]]` and `[[shareLinks]]` hold [`crate::links::LinkEntry`] items.

mod icons;
pub mod site;

pub use icons::IconsConfig;
pub use site::{
    EditPostConfig, IntroAudioConfig, MAX_SCHEDULED_MARGIN, ScheduleState, SiteSettings,
    TextDirection,
};
