//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and whole-record replacement.
//! Readers holding an `Arc` from [`cfg`] keep seeing the snapshot they
//! loaded; a reload never mutates a published config in place.

use crate::config::SiteConfig;
use crate::utils::hash;
use anyhow::Result;
use arc_swap::ArcSwap;
use std::fs;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Current site configuration.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish the loaded config as the process-wide snapshot.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// Reload config from disk if content changed.
///
/// The new file must pass validation before it replaces the current
/// snapshot. Returns `Ok(true)` if config was updated, `Ok(false)` if
/// unchanged.
pub fn reload_config() -> Result<bool> {
    let current = cfg();

    let content = fs::read_to_string(&current.config_path)?;
    if hash::compute(&content) == current.content_hash {
        return Ok(false);
    }

    let new_config = SiteConfig::from_file_content(&current.config_path, &content)?;
    new_config.validate()?;

    CONFIG.store(Arc::new(new_config));
    Ok(true)
}
