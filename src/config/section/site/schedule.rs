//! Scheduled post visibility.
//!
//! A post dated in the future is listed once the remaining time drops
//! below `site.scheduledPostMargin`.

use std::time::{Duration, SystemTime};

/// Where a post's publish time sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleState {
    /// Publish time reached.
    Published,
    /// Due within the margin; listed already.
    Imminent,
    /// Further out than the margin; hidden.
    Scheduled,
}

impl ScheduleState {
    pub fn classify(pub_time: SystemTime, now: SystemTime, margin: Duration) -> Self {
        match pub_time.duration_since(now) {
            Err(_) => Self::Published,
            Ok(ahead) if ahead.is_zero() => Self::Published,
            Ok(ahead) if ahead < margin => Self::Imminent,
            Ok(_) => Self::Scheduled,
        }
    }

    #[inline]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Scheduled)
    }
}
