//! Generic PHY Driver Trait
//!
//! This module defines the common interface for Ethernet PHY drivers and the
//! IEEE 802.3 Clause 22 procedures shared by them: discovery, soft reset,
//! auto-negotiation and link polling.

use embedded_hal::delay::DelayNs;

use crate::config::{Duplex, LinkState, Speed};
use crate::error::{Error, Result};
use crate::hal::mdio::MdioBus;
use crate::phy::device::PhyDevice;

// =============================================================================
// Link Status
// =============================================================================

/// Ethernet link status information
///
/// Contains the negotiated or configured link parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 1000 Mbps Full Duplex
    pub const fn gigabit_full() -> Self {
        Self::new(Speed::Mbps1000, Duplex::Full)
    }

    /// 1000 Mbps Half Duplex
    pub const fn gigabit_half() -> Self {
        Self::new(Speed::Mbps1000, Duplex::Half)
    }

    /// 100 Mbps Full Duplex
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }

    /// 100 Mbps Half Duplex
    pub const fn fast_half() -> Self {
        Self::new(Speed::Mbps100, Duplex::Half)
    }

    /// 10 Mbps Full Duplex
    pub const fn slow_full() -> Self {
        Self::new(Speed::Mbps10, Duplex::Full)
    }

    /// 10 Mbps Half Duplex
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

impl core::fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let duplex = match self.duplex {
            Duplex::Full => "full",
            Duplex::Half => "half",
        };
        write!(f, "{} Mbps {} duplex", self.speed.mbps(), duplex)
    }
}

// =============================================================================
// PHY Capabilities
// =============================================================================

/// PHY hardware capabilities
///
/// Indicates what features the PHY chip (or its link partner) supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyCapabilities {
    /// Supports 1000BASE-T Full Duplex
    pub speed_1000_fd: bool,
    /// Supports 1000BASE-T Half Duplex
    pub speed_1000_hd: bool,
    /// Supports 100BASE-TX Full Duplex
    pub speed_100_fd: bool,
    /// Supports 100BASE-TX Half Duplex
    pub speed_100_hd: bool,
    /// Supports 10BASE-T Full Duplex
    pub speed_10_fd: bool,
    /// Supports 10BASE-T Half Duplex
    pub speed_10_hd: bool,
    /// Supports auto-negotiation
    pub auto_negotiation: bool,
    /// Supports PAUSE flow control
    pub pause: bool,
    /// Supports asymmetric PAUSE
    pub pause_asymmetric: bool,
}

impl PhyCapabilities {
    /// Fastest mode present in both sets, if any
    #[must_use]
    pub const fn best_common(&self, other: &Self) -> Option<LinkStatus> {
        if self.speed_1000_fd && other.speed_1000_fd {
            Some(LinkStatus::gigabit_full())
        } else if self.speed_1000_hd && other.speed_1000_hd {
            Some(LinkStatus::gigabit_half())
        } else if self.speed_100_fd && other.speed_100_fd {
            Some(LinkStatus::fast_full())
        } else if self.speed_100_hd && other.speed_100_hd {
            Some(LinkStatus::fast_half())
        } else if self.speed_10_fd && other.speed_10_fd {
            Some(LinkStatus::slow_full())
        } else if self.speed_10_hd && other.speed_10_hd {
            Some(LinkStatus::slow_half())
        } else {
            None
        }
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// Trait for Ethernet PHY drivers
///
/// This trait defines the common interface for PHY drivers. Implementations
/// handle chip-specific register access and initialization sequences.
///
/// # IEEE 802.3 Compliance
///
/// All PHY drivers must support the standard Clause 22 registers (0-15),
/// but may also use vendor-specific registers (16-31) for advanced features.
pub trait PhyDriver {
    /// Get the PHY address (0-31)
    fn address(&self) -> u8;

    /// Initialize the PHY
    ///
    /// This should perform any chip-specific initialization sequence,
    /// typically including a soft reset and basic configuration.
    fn init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()>;

    /// Perform a soft reset
    ///
    /// Writes to BMCR.RESET and waits for it to self-clear.
    fn soft_reset<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()>;

    /// Check if the link is up
    ///
    /// Returns `true` if PHY has detected a valid link partner.
    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool>;

    /// Get current link status with speed/duplex
    ///
    /// Returns `None` if link is down, `Some(LinkStatus)` if link is up.
    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>>;

    /// Poll for link changes
    ///
    /// This is a convenience method that should be called periodically.
    /// Returns `Some(LinkStatus)` when a new link is established,
    /// `None` if link is still down or unchanged.
    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>>;

    /// Enable auto-negotiation
    ///
    /// Advertises every supported mode and restarts negotiation.
    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()>;

    /// Force specific speed and duplex
    ///
    /// Disables auto-negotiation and forces the PHY to use the specified
    /// link parameters. Use with caution - mismatched settings will cause
    /// link failure.
    fn force_link<M: MdioBus>(&mut self, mdio: &mut M, status: LinkStatus) -> Result<()>;

    /// Get PHY capabilities
    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities>;

    /// Read the PHY identifier (OUI + model + revision)
    ///
    /// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32>;

    /// Check if auto-negotiation is complete
    fn is_auto_negotiation_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool>;

    /// Get the link partner's advertised abilities (if AN complete)
    fn link_partner_abilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities>;
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::internal::constants::{ANEG_POLL_INTERVAL_MS, PHY_ADDR_COUNT, RESET_POLL_INTERVAL_MS};
    use crate::internal::phy_regs::standard::{
        PHY_ID_INVALID, anar, anlpar, bmcr, bmsr, ctrl1000, estatus, phy_reg, stat1000,
    };

    /// Read BMSR twice and check the link status bit
    ///
    /// The link bit latches low; the first read clears a stale link-down.
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        mdio.read(phy_addr, phy_reg::BMSR)?;
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Read BMSR and check AN complete bit
    pub fn is_an_complete<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::AN_COMPLETE) != 0)
    }

    /// Sweep the bus for a responding PHY
    ///
    /// Stores the first address whose identifier registers both read back
    /// something other than all ones. Addresses that fail to answer are
    /// skipped. No writes are issued.
    pub fn detect_device<M: MdioBus>(mdio: &mut M, dev: &mut PhyDevice) -> Result<()> {
        for addr in 0..PHY_ADDR_COUNT {
            let Ok(id1) = mdio.read(addr, phy_reg::PHYIDR1) else {
                continue;
            };
            let Ok(id2) = mdio.read(addr, phy_reg::PHYIDR2) else {
                continue;
            };

            if id1 != PHY_ID_INVALID && id2 != PHY_ID_INVALID {
                dev.address = addr;
                info!("PHY detected at address {}: id {:#x}:{:#x}", addr, id1, id2);
                return Ok(());
            }
        }

        warn!("no PHY responded on the MDIO bus");
        Err(Error::NotFound)
    }

    /// Perform soft reset via BMCR
    ///
    /// Polls BMCR up to `max_polls + 1` times, 1 ms apart, for the reset bit
    /// to self-clear.
    pub fn soft_reset<M: MdioBus, D: DelayNs>(
        mdio: &mut M,
        delay: &mut D,
        phy_addr: u8,
        max_polls: u32,
    ) -> Result<()> {
        mdio.write(phy_addr, phy_reg::BMCR, bmcr::RESET)?;

        for _ in 0..=max_polls {
            let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
            if (bmcr_val & bmcr::RESET) == 0 {
                return Ok(());
            }
            delay.delay_ms(RESET_POLL_INTERVAL_MS);
        }

        warn!("PHY {} soft reset timed out", phy_addr);
        Err(Error::Timeout)
    }

    /// Advertise all 10/100/1000 modes and restart auto-negotiation
    ///
    /// Fails with [`Error::Unsupported`] without touching the PHY when BMSR
    /// reports no auto-negotiation ability.
    pub fn auto_negotiate<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        if (bmsr_val & bmsr::AN_ABILITY) == 0 {
            warn!("PHY {} does not support auto-negotiation", phy_addr);
            return Err(Error::Unsupported);
        }

        let anar_val = mdio.read(phy_addr, phy_reg::ANAR)?;
        mdio.write(phy_addr, phy_reg::ANAR, anar_val | anar::ALL_10_100)?;

        let ctrl_val = mdio.read(phy_addr, phy_reg::CTRL1000)?;
        mdio.write(
            phy_addr,
            phy_reg::CTRL1000,
            ctrl_val | ctrl1000::ADV_1000_FULL | ctrl1000::ADV_1000_HALF,
        )?;

        let bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(
            phy_addr,
            phy_reg::BMCR,
            (bmcr_val | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !(bmcr::ISOLATE | bmcr::RESET),
        )?;

        Ok(())
    }

    /// Refresh `dev.current_link` from BMSR
    ///
    /// Returns immediately when the link is already known up and still up.
    /// Otherwise waits for auto-negotiation, polling every 50 ms for up to
    /// `aneg_timeout_ms`; on timeout the link is marked down and
    /// [`Error::Timeout`] returned.
    pub fn update_link<M: MdioBus, D: DelayNs>(
        mdio: &mut M,
        delay: &mut D,
        dev: &mut PhyDevice,
        aneg_timeout_ms: u32,
    ) -> Result<()> {
        let addr = dev.address;
        let bmsr_val = mdio.read(addr, phy_reg::BMSR)?;

        if dev.current_link.is_up() && (bmsr_val & bmsr::LINK_STATUS) != 0 {
            return Ok(());
        }

        if (bmsr_val & bmsr::AN_COMPLETE) == 0 {
            debug!("PHY {}: waiting for auto-negotiation", addr);

            for _ in 0..aneg_timeout_ms / ANEG_POLL_INTERVAL_MS {
                delay.delay_ms(ANEG_POLL_INTERVAL_MS);
                let bmsr_val = mdio.read(addr, phy_reg::BMSR)?;
                if (bmsr_val & bmsr::AN_COMPLETE) != 0 {
                    dev.current_link = LinkState::Up;
                    return Ok(());
                }
            }

            warn!("PHY {}: auto-negotiation timed out", addr);
            dev.current_link = LinkState::Down;
            return Err(Error::Timeout);
        }

        // Second read returns the live link state
        let bmsr_val = mdio.read(addr, phy_reg::BMSR)?;
        dev.current_link = LinkState::from_bool((bmsr_val & bmsr::LINK_STATUS) != 0);
        Ok(())
    }

    /// Force speed and duplex
    pub fn force_link<M: MdioBus>(mdio: &mut M, phy_addr: u8, status: LinkStatus) -> Result<()> {
        let mut bmcr_val = mdio.read(phy_addr, phy_reg::BMCR)?;

        // Disable auto-negotiation
        bmcr_val &= !(bmcr::AN_ENABLE | bmcr::ISOLATE | bmcr::RESET);

        // Speed select is split across bits 6 and 13
        bmcr_val &= !(bmcr::SPEED_100 | bmcr::SPEED_1000);
        match status.speed {
            Speed::Mbps1000 => bmcr_val |= bmcr::SPEED_1000,
            Speed::Mbps100 => bmcr_val |= bmcr::SPEED_100,
            Speed::Mbps10 => {}
        }

        if matches!(status.duplex, Duplex::Full) {
            bmcr_val |= bmcr::DUPLEX_FULL;
        } else {
            bmcr_val &= !bmcr::DUPLEX_FULL;
        }

        mdio.write(phy_addr, phy_reg::BMCR, bmcr_val)?;
        Ok(())
    }

    /// Read PHY ID from PHYIDR1 and PHYIDR2
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = u32::from(mdio.read(phy_addr, phy_reg::PHYIDR1)?);
        let id2 = u32::from(mdio.read(phy_addr, phy_reg::PHYIDR2)?);
        Ok((id1 << 16) | id2)
    }

    /// Read capabilities from BMSR and, when present, ESTATUS
    pub fn read_capabilities<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<PhyCapabilities> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        let estatus_val = if (bmsr_val & bmsr::ESTATUS) != 0 {
            mdio.read(phy_addr, phy_reg::ESTATUS)?
        } else {
            0
        };

        Ok(PhyCapabilities {
            speed_1000_fd: (estatus_val & estatus::T_1000_FULL) != 0,
            speed_1000_hd: (estatus_val & estatus::T_1000_HALF) != 0,
            speed_100_fd: (bmsr_val & bmsr::TX_FD_CAPABLE) != 0,
            speed_100_hd: (bmsr_val & bmsr::TX_HD_CAPABLE) != 0,
            speed_10_fd: (bmsr_val & bmsr::T10_FD_CAPABLE) != 0,
            speed_10_hd: (bmsr_val & bmsr::T10_HD_CAPABLE) != 0,
            auto_negotiation: (bmsr_val & bmsr::AN_ABILITY) != 0,
            pause: false, // Advertised in ANAR, not a BMSR capability
            pause_asymmetric: false,
        })
    }

    /// Read link partner abilities from ANLPAR and STAT1000
    pub fn read_link_partner<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<PhyCapabilities> {
        let anlpar_val = mdio.read(phy_addr, phy_reg::ANLPAR)?;
        let stat1000_val = mdio.read(phy_addr, phy_reg::STAT1000)?;

        Ok(PhyCapabilities {
            speed_1000_fd: (stat1000_val & stat1000::LP_1000_FULL) != 0,
            speed_1000_hd: (stat1000_val & stat1000::LP_1000_HALF) != 0,
            speed_100_fd: (anlpar_val & anlpar::CAN_100_FD) != 0,
            speed_100_hd: (anlpar_val & anlpar::CAN_100_HD) != 0,
            speed_10_fd: (anlpar_val & anlpar::CAN_10_FD) != 0,
            speed_10_hd: (anlpar_val & anlpar::CAN_10_HD) != 0,
            auto_negotiation: true, // If we have ANLPAR, partner supports AN
            pause: (anlpar_val & anlpar::PAUSE) != 0,
            pause_asymmetric: (anlpar_val & anlpar::PAUSE_ASYM) != 0,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
