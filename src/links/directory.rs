//! The two link directories, composed once per loaded config.

use super::entry::{LinkDescriptor, LinkEntry, LinkKind};
use crate::config::section::SiteSettings;

/// Identity and share links in declared order.
///
/// Entries are never reordered, merged or filtered: "X" and "Mail"
/// appear in both directories with different destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkDirectories {
    identity: Vec<LinkDescriptor>,
    share: Vec<LinkDescriptor>,
}

impl LinkDirectories {
    pub fn compose(site: &SiteSettings, socials: &[LinkEntry], share_links: &[LinkEntry]) -> Self {
        let resolve = |entries: &[LinkEntry]| -> Vec<LinkDescriptor> {
            entries.iter().map(|e| e.resolve(site)).collect()
        };
        Self {
            identity: resolve(socials),
            share: resolve(share_links),
        }
    }

    #[inline]
    pub fn identity(&self) -> &[LinkDescriptor] {
        &self.identity
    }

    #[inline]
    pub fn share(&self) -> &[LinkDescriptor] {
        &self.share
    }

    pub fn get(&self, kind: LinkKind) -> &[LinkDescriptor] {
        match kind {
            LinkKind::Identity => &self.identity,
            LinkKind::Share => &self.share,
        }
    }
}
