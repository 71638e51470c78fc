//! Configuration types for the RTL8211F PHY driver

use crate::internal::constants::{
    ANEG_TIMEOUT_MS, LINK_SETTLE_MS, RESET_POLL_LIMIT, SPEED_DONE_POLL_LIMIT,
};
use crate::internal::phy_regs::rtl8211f::led;

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    #[default]
    Mbps10,
    /// 100 Mbps
    Mbps100,
    /// 1000 Mbps
    Mbps1000,
}

impl Speed {
    /// Link rate in megabits per second
    #[must_use]
    pub const fn mbps(self) -> u16 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
            Speed::Mbps1000 => 1000,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    #[default]
    Half,
    /// Full duplex
    Full,
}

/// Link state as tracked by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// No link established
    #[default]
    Down,
    /// Link established
    Up,
}

impl LinkState {
    /// Convert a link status bit into a state
    #[must_use]
    pub const fn from_bool(up: bool) -> Self {
        if up { LinkState::Up } else { LinkState::Down }
    }

    /// Returns `true` for [`LinkState::Up`]
    #[must_use]
    pub const fn is_up(self) -> bool {
        matches!(self, LinkState::Up)
    }
}

/// RGMII clock delay mode
///
/// Selects which internal 2 ns clock delays the PHY inserts. Pick the mode
/// that complements the board routing and the MAC's own delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgmiiDelay {
    /// No internal delays
    Rgmii,
    /// TX and RX delays
    RgmiiId,
    /// TX delay only
    #[default]
    RgmiiTxid,
    /// RX delay only
    RgmiiRxid,
}

impl RgmiiDelay {
    /// Whether the PHY should delay the TX clock
    #[must_use]
    pub const fn tx_delay(self) -> bool {
        matches!(self, RgmiiDelay::RgmiiId | RgmiiDelay::RgmiiTxid)
    }

    /// Whether the PHY should delay the RX clock
    #[must_use]
    pub const fn rx_delay(self) -> bool {
        matches!(self, RgmiiDelay::RgmiiId | RgmiiDelay::RgmiiRxid)
    }
}

/// Complete PHY configuration
///
/// Optional settings left as `None` are not written to the PHY, so the
/// strap/firmware defaults remain in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig {
    /// RGMII clock delay mode
    pub rgmii_delay: RgmiiDelay,
    /// LED control register value, `None` leaves LEDs untouched
    pub led_config: Option<u16>,
    /// 125 MHz CLKOUT enable, `None` leaves it untouched
    pub clkout: Option<bool>,
    /// Advanced Link Down Power Saving, `None` leaves it untouched
    pub aldps: Option<bool>,
    /// BMCR re-reads (1 ms apart) before a soft reset times out
    pub reset_poll_limit: u32,
    /// Auto-negotiation timeout in milliseconds
    pub aneg_timeout_ms: u32,
    /// PHYSR re-reads (1 ms apart) waiting for speed resolution
    pub speed_done_polls: u32,
    /// Settle delay after speed resolution in milliseconds
    pub link_settle_ms: u32,
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PhyConfig {
    /// Create a new configuration with defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rgmii_delay: RgmiiDelay::RgmiiTxid,
            led_config: Some(led::GREEN_LINK_YELLOW_ACT),
            clkout: None,
            aldps: None,
            reset_poll_limit: RESET_POLL_LIMIT,
            aneg_timeout_ms: ANEG_TIMEOUT_MS,
            speed_done_polls: SPEED_DONE_POLL_LIMIT,
            link_settle_ms: LINK_SETTLE_MS,
        }
    }

    /// Set the RGMII delay mode
    #[must_use]
    pub const fn with_rgmii_delay(mut self, mode: RgmiiDelay) -> Self {
        self.rgmii_delay = mode;
        self
    }

    /// Set the LED control value, or `None` to skip LED programming
    #[must_use]
    pub const fn with_led_config(mut self, value: Option<u16>) -> Self {
        self.led_config = value;
        self
    }

    /// Enable or disable the 125 MHz CLKOUT pin
    #[must_use]
    pub const fn with_clkout(mut self, enabled: bool) -> Self {
        self.clkout = Some(enabled);
        self
    }

    /// Enable or disable Advanced Link Down Power Saving
    #[must_use]
    pub const fn with_aldps(mut self, enabled: bool) -> Self {
        self.aldps = Some(enabled);
        self
    }

    /// Set the soft reset poll ceiling
    #[must_use]
    pub const fn with_reset_poll_limit(mut self, polls: u32) -> Self {
        self.reset_poll_limit = polls;
        self
    }

    /// Set the auto-negotiation timeout
    #[must_use]
    pub const fn with_aneg_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.aneg_timeout_ms = timeout_ms;
        self
    }

    /// Set the speed-resolution poll ceiling
    #[must_use]
    pub const fn with_speed_done_polls(mut self, polls: u32) -> Self {
        self.speed_done_polls = polls;
        self
    }

    /// Set the post-resolution settle delay
    #[must_use]
    pub const fn with_link_settle_ms(mut self, settle_ms: u32) -> Self {
        self.link_settle_ms = settle_ms;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
