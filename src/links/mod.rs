//! Link directories: author identity links and post share links.
//!
//! | Module      | Purpose                                         |
//! |-------------|-------------------------------------------------|
//! | `entry`     | `LinkEntry` (configured) → `LinkDescriptor`     |
//! | `directory` | `LinkDirectories`, composed from the site title |
//! | `icon`      | `IconRef` and the `IconResolver` seam           |
//! | `defaults`  | Built-in link tables                            |

mod defaults;
mod directory;
mod entry;
mod icon;

pub use defaults::{default_share_links, default_socials};
pub use directory::LinkDirectories;
pub use entry::{LinkDescriptor, LinkEntry, LinkKind, TITLE_PLACEHOLDER};
pub use icon::{IconDir, IconRef, IconResolver};
