//! Vendor status register decoding
//!
//! Pure functions turning raw RTL8211 PHY Specific Status Register values
//! into [`LinkStatus`]. Every 16-bit input decodes; the reserved speed
//! encoding falls back to 10 Mbps.

use crate::config::{Duplex, LinkState, Speed};
use crate::internal::phy_regs::rtl8211f::{physr, physr_a43};
use crate::phy::generic::LinkStatus;

/// Decode the page 0 PHYSR (register 0x11)
#[must_use]
pub const fn parse_status(raw: u16) -> LinkStatus {
    let duplex = if raw & physr::DUPLEX != 0 {
        Duplex::Full
    } else {
        Duplex::Half
    };

    let speed = match raw & physr::SPEED_MASK {
        physr::SPEED_1000 => Speed::Mbps1000,
        physr::SPEED_100 => Speed::Mbps100,
        _ => Speed::Mbps10,
    };

    LinkStatus::new(speed, duplex)
}

/// Decode the RTL8211F page 0xA43 PHYSR (register 0x1A)
///
/// Used by [`Rtl8211f::read_realtime_status`](crate::phy::Rtl8211f::read_realtime_status).
#[must_use]
pub const fn parse_status_rtl8211f(raw: u16) -> LinkStatus {
    let duplex = if raw & physr_a43::DUPLEX != 0 {
        Duplex::Full
    } else {
        Duplex::Half
    };

    let speed = match raw & physr_a43::SPEED_MASK {
        physr_a43::SPEED_1000 => Speed::Mbps1000,
        physr_a43::SPEED_100 => Speed::Mbps100,
        _ => Speed::Mbps10,
    };

    LinkStatus::new(speed, duplex)
}

/// Real-time link bit of the page 0 PHYSR
#[must_use]
pub const fn link_from_status(raw: u16) -> LinkState {
    LinkState::from_bool(raw & physr::LINK != 0)
}

/// Whether speed and duplex resolution has finished
#[must_use]
pub const fn speed_resolved(raw: u16) -> bool {
    raw & physr::SPDDONE != 0
}
