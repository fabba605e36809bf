use jiff::{Timestamp, Zoned, tz};

/// Where an auction sits relative to its bidding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionPhase {
    NotStarted,
    Active,
    Ended,
}

impl AuctionPhase {
    /// Both window boundaries count as active.
    pub fn at(start: Timestamp, end: Timestamp, now: Timestamp) -> Self {
        if now < start {
            Self::NotStarted
        } else if now > end {
            Self::Ended
        } else {
            Self::Active
        }
    }
}

/// Localize a timestamp to the browser's timezone
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(tz::TimeZone::system())
}

/// Format a zoned timestamp for display in RFC 2822 format
pub fn format_zoned_timestamp(zoned: &Zoned) -> String {
    zoned.strftime("%a, %d %b %Y %H:%M:%S %Z").to_string()
}
