//! PHY device record

use crate::config::LinkState;
use crate::phy::generic::LinkStatus;

/// State kept for one PHY on the bus
///
/// `address` is filled in by discovery; the link fields are maintained by
/// the link poller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyDevice {
    /// MDIO address (0-31)
    pub address: u8,
    /// Link state from the most recent poll
    pub current_link: LinkState,
    /// Link state last reported to the caller
    pub previous_link: LinkState,
    /// Speed/duplex decoded by the most recent status read
    pub negotiated: Option<LinkStatus>,
}

impl PhyDevice {
    /// Create a device record for a known address
    #[must_use]
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            current_link: LinkState::Down,
            previous_link: LinkState::Down,
            negotiated: None,
        }
    }

    /// Report a link transition since the previous call
    ///
    /// Returns the new state if `current_link` differs from the state last
    /// reported, and records it as reported.
    pub fn take_transition(&mut self) -> Option<LinkState> {
        if self.current_link == self.previous_link {
            return None;
        }
        self.previous_link = self.current_link;
        Some(self.current_link)
    }
}
