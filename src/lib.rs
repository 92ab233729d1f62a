//! Devosfera - site settings and link directories for the devosfera blog.
//!
//! The page templates read two things from here: the [`SiteSettings`]
//! record and the [`LinkDirectories`] (author identity links and post
//! share links). Both are loaded once from `devosfera.toml`, or taken
//! from the built-in site when the file is absent, and are read-only
//! afterwards.
//!
//! ```ignore
//! let config = devosfera::config::init_config(SiteConfig::load("devosfera.toml".as_ref())?);
//! let github = &config.links().identity()[0];
//! assert_eq!(github.link_title, "Devosfera en GitHub");
//! ```
//!
//! [`SiteSettings`]: config::SiteSettings
//! [`LinkDirectories`]: links::LinkDirectories

pub mod cli;
pub mod config;
pub mod links;
pub mod logger;
pub mod utils;
