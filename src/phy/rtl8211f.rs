//! RTL8211F PHY Driver
//!
//! Driver for the Realtek RTL8211F/RTL8211F-VD Gigabit Ethernet PHY with an
//! RGMII MAC interface.
//!
//! # Bring-up sequence
//!
//! [`PhyDriver::init`] runs discovery, a soft reset, vendor configuration and
//! auto-negotiation, failing fast on the first error:
//!
//! 1. Sweep MDIO addresses 0-31 for a responding PHY
//! 2. Soft reset through `BMCR.RESET`
//! 3. Program the RGMII clock delays (page `0xD08`)
//! 4. Program the LED mapping (page `0xD04`), CLKOUT and ALDPS if configured
//! 5. Advertise 10/100/1000 and restart auto-negotiation
//!
//! Afterwards [`Rtl8211f::poll_status`] waits for negotiation and speed
//! resolution and decodes the result.
//!
//! # Register pages
//!
//! Vendor registers are banked behind the page-select register. Every
//! routine in this module leaves page 0 selected, including on failure.
//!
//! # Example
//!
//! ```ignore
//! use ph_rtl8211::{PhyConfig, RgmiiDelay};
//! use ph_rtl8211::phy::{PhyDriver, Rtl8211f};
//!
//! let config = PhyConfig::new().with_rgmii_delay(RgmiiDelay::RgmiiId);
//! let mut phy = Rtl8211f::new(config);
//! phy.init(&mut mdio, &mut delay)?;
//!
//! if phy.poll_status(&mut mdio, &mut delay)?.is_up() {
//!     let link = phy.negotiated().unwrap();
//!     mac.set_speed(link.speed);
//! }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use super::device::PhyDevice;
use super::generic::{LinkStatus, PhyCapabilities, PhyDriver, ieee802_3};
use super::status::{link_from_status, parse_status, parse_status_rtl8211f, speed_resolved};
use crate::config::{Duplex, LinkState, PhyConfig};
use crate::error::{Error, Result};
use crate::hal::mdio::{self, MdioBus};
use crate::internal::constants::{
    ANEG_POLL_INTERVAL_MS, HW_RESET_PULSE_US, HW_RESET_RECOVERY_US, SPEED_DONE_POLL_INTERVAL_MS,
};
use crate::internal::phy_regs::rtl8211f::{delay, inter, page, phy_id, phycr, physr_a43, reg};
use crate::internal::phy_regs::standard::{bmcr, phy_reg};

// =============================================================================
// RTL8211F Driver
// =============================================================================

/// RTL8211F PHY Driver
///
/// The PHY address is found by discovery during [`PhyDriver::init`].
///
/// This variant does not include a hardware reset pin. Use
/// [`Rtl8211fWithReset`] if you need hardware reset capability.
#[derive(Debug, Clone)]
pub struct Rtl8211f {
    dev: PhyDevice,
    config: PhyConfig,
}

impl Rtl8211f {
    /// Create a new RTL8211F driver
    pub const fn new(config: PhyConfig) -> Self {
        Self {
            dev: PhyDevice::new(0),
            config,
        }
    }

    /// Device state: address, link tracking and last decoded status
    pub const fn device(&self) -> &PhyDevice {
        &self.dev
    }

    /// Active configuration
    pub const fn config(&self) -> &PhyConfig {
        &self.config
    }

    /// Speed/duplex decoded by the most recent status read
    pub const fn negotiated(&self) -> Option<LinkStatus> {
        self.dev.negotiated
    }

    /// Check the PHY identifier against known Realtek Gigabit parts
    pub fn verify_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        let id = ieee802_3::read_phy_id(mdio, self.dev.address)?;
        Ok(matches!(id, phy_id::RTL8211F | phy_id::RTL8211F_VD | phy_id::RTL8211E)
            || (id & phy_id::REALTEK_MASK) == phy_id::REALTEK_GENERIC)
    }

    /// Apply the vendor configuration and start auto-negotiation
    ///
    /// Must follow a successful soft reset. A bus failure aborts the
    /// sequence without rolling back registers already written; page 0 is
    /// still restored.
    pub fn configure<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        let addr = self.dev.address;

        // Second reset, result ignored
        let _ = mdio.write(addr, phy_reg::BMCR, bmcr::RESET);

        let mode = self.config.rgmii_delay;
        let (tx_clear, tx_set) = toggle(delay::TX_DELAY_EN, mode.tx_delay());
        let (rx_clear, rx_set) = toggle(delay::RX_DELAY_EN, mode.rx_delay());
        mdio::with_page(mdio, addr, page::RGMII_DELAY, |mdio| {
            mdio.modify(addr, reg::TX_DELAY, tx_clear, tx_set)?;
            mdio.modify(addr, reg::RX_DELAY, rx_clear, rx_set)
        })?;
        debug!("PHY {}: RGMII delay mode {:?}", addr, mode);

        if let Some(led) = self.config.led_config {
            mdio::write_paged(mdio, addr, page::LED, reg::LCR, led)?;
        }

        if let Some(enabled) = self.config.clkout {
            let (clear, set) = toggle(phycr::CLKOUT_EN, enabled);
            mdio::modify_paged(mdio, addr, page::PHY_CONTROL, reg::PHYCR2, clear, set)?;
        }

        if let Some(enabled) = self.config.aldps {
            let (clear, set) = toggle(phycr::ALDPS_ALL, enabled);
            mdio::modify_paged(mdio, addr, page::PHY_CONTROL, reg::PHYCR1, clear, set)?;
        }

        ieee802_3::auto_negotiate(mdio, addr)
    }

    /// Select page 0
    ///
    /// For callers resuming standard register access after a failed
    /// [`configure`](Self::configure).
    pub fn restore_default_page<M: MdioBus>(&self, mdio: &mut M) -> Result<()> {
        mdio::restore_default_page(mdio, self.dev.address)?;
        Ok(())
    }

    /// Wait for the PHY to resolve speed and duplex, then decode them
    ///
    /// Polls PHYSR every millisecond up to `speed_done_polls` times. When
    /// resolution had to be waited for, the link is marked up and the
    /// configured settle delay applied; otherwise the link follows the PHYSR
    /// link bit.
    pub fn wait_speed_done<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        let addr = self.dev.address;
        let mut physr_val = mdio.read(addr, reg::PHYSR)?;

        if speed_resolved(physr_val) {
            self.dev.current_link = link_from_status(physr_val);
        } else {
            debug!("PHY {}: waiting for speed resolution", addr);

            let mut polls = 0;
            while !speed_resolved(physr_val) {
                if polls >= self.config.speed_done_polls {
                    warn!("PHY {}: speed resolution timed out", addr);
                    self.dev.current_link = LinkState::Down;
                    return Err(Error::Timeout);
                }
                delay.delay_ms(SPEED_DONE_POLL_INTERVAL_MS);
                polls += 1;
                physr_val = mdio.read(addr, reg::PHYSR)?;
            }

            self.dev.current_link = LinkState::Up;
            delay.delay_ms(self.config.link_settle_ms);
        }

        let status = parse_status(physr_val);
        self.dev.negotiated = Some(status);
        info!(
            "PHY {}: {} Mbps, {} duplex",
            addr,
            status.speed.mbps(),
            duplex_str(status.duplex)
        );
        Ok(())
    }

    /// Refresh the link state and decode the negotiated parameters
    ///
    /// Timeouts while waiting for negotiation or speed resolution report
    /// [`LinkState::Down`]; bus errors are returned. The decoded speed and
    /// duplex are available from [`negotiated`](Self::negotiated).
    ///
    /// When BMSR reports the link down, PHYSR is read once and no wait is
    /// performed.
    pub fn poll_status<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<LinkState> {
        let result = ieee802_3::update_link(mdio, delay, &mut self.dev, self.config.aneg_timeout_ms)
            .and_then(|()| {
                if self.dev.current_link.is_up() {
                    self.wait_speed_done(mdio, delay)
                } else {
                    self.refresh_negotiated(mdio)
                }
            });

        match result {
            Ok(()) => Ok(self.dev.current_link),
            Err(Error::Timeout) => Ok(LinkState::Down),
            Err(e) => Err(e),
        }
    }

    // Link down: decode only what the PHY has already resolved
    fn refresh_negotiated<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        if let Some(status) = self.read_speed_indication(mdio)? {
            self.dev.negotiated = Some(status);
        }
        Ok(())
    }

    /// Read the resolved speed/duplex without waiting
    ///
    /// Returns `None` until the PHY reports speed resolution done.
    pub fn read_speed_indication<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        let physr_val = mdio.read(self.dev.address, reg::PHYSR)?;
        if !speed_resolved(physr_val) {
            return Ok(None);
        }
        Ok(Some(parse_status(physr_val)))
    }

    /// Read the real-time status from page `0xA43`
    ///
    /// Unlike [`read_speed_indication`](Self::read_speed_indication) this
    /// does not depend on SPEED_DONE; returns `None` while the link bit is
    /// clear.
    pub fn read_realtime_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        let raw = mdio::read_paged(mdio, self.dev.address, page::PHY_CONTROL, reg::PHYSR_A43)?;
        if raw & physr_a43::LINK == 0 {
            return Ok(None);
        }
        Ok(Some(parse_status_rtl8211f(raw)))
    }

    // -------------------------------------------------------------------------
    // Interrupts
    // -------------------------------------------------------------------------

    /// Raise the interrupt pin on link status changes
    pub fn enable_link_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        mdio::modify_paged(mdio, self.dev.address, page::INTERRUPT, reg::INER, 0, inter::LINK_STATUS)?;
        Ok(())
    }

    /// Mask every interrupt source
    pub fn disable_interrupts<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        mdio::write_paged(mdio, self.dev.address, page::INTERRUPT, reg::INER, 0)?;
        Ok(())
    }

    /// Read and clear the interrupt status register
    pub fn read_interrupt_status<M: MdioBus>(&self, mdio: &mut M) -> Result<u16> {
        Ok(mdio::read_paged(mdio, self.dev.address, page::PHY_CONTROL, reg::INSR)?)
    }
}

/// (clear, set) masks driving `bits` to `enabled`
const fn toggle(bits: u16, enabled: bool) -> (u16, u16) {
    if enabled { (0, bits) } else { (bits, 0) }
}

const fn duplex_str(duplex: Duplex) -> &'static str {
    match duplex {
        Duplex::Full => "full",
        Duplex::Half => "half",
    }
}

impl PhyDriver for Rtl8211f {
    fn address(&self) -> u8 {
        self.dev.address
    }

    fn init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        self.dev = PhyDevice::new(0);

        ieee802_3::detect_device(mdio, &mut self.dev)?;
        self.soft_reset(mdio, delay)?;
        self.configure(mdio)?;

        info!("PHY {}: initialized, auto-negotiation started", self.dev.address);
        Ok(())
    }

    fn soft_reset<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        ieee802_3::soft_reset(mdio, delay, self.dev.address, self.config.reset_poll_limit)
    }

    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_link_up(mdio, self.dev.address)
    }

    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        if !self.is_link_up(mdio)? {
            return Ok(None);
        }

        self.read_speed_indication(mdio)
    }

    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        // Up means link bit set and speed resolved
        let status = self.link_status(mdio)?;
        self.dev.current_link = LinkState::from_bool(status.is_some());
        if status.is_some() {
            self.dev.negotiated = status;
        }

        match self.dev.take_transition() {
            Some(LinkState::Up) => {
                info!("PHY {}: link up", self.dev.address);
                Ok(status)
            }
            Some(LinkState::Down) => {
                info!("PHY {}: link down", self.dev.address);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        ieee802_3::auto_negotiate(mdio, self.dev.address)
    }

    fn force_link<M: MdioBus>(&mut self, mdio: &mut M, status: LinkStatus) -> Result<()> {
        ieee802_3::force_link(mdio, self.dev.address, status)
    }

    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        ieee802_3::read_capabilities(mdio, self.dev.address)
    }

    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, self.dev.address)
    }

    fn is_auto_negotiation_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_an_complete(mdio, self.dev.address)
    }

    fn link_partner_abilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        ieee802_3::read_link_partner(mdio, self.dev.address)
    }
}

// =============================================================================
// RTL8211F Driver (with reset pin)
// =============================================================================

/// RTL8211F PHY Driver with Hardware Reset Pin
///
/// This variant of the RTL8211F driver includes support for hardware reset
/// via an `embedded_hal::digital::OutputPin`. The reset pin is active-low.
///
/// # Example
///
/// ```ignore
/// use ph_rtl8211::phy::{PhyDriver, Rtl8211fWithReset};
///
/// let mut phy = Rtl8211fWithReset::new(PhyConfig::new(), reset_pin);
///
/// // Perform hardware reset before initialization
/// phy.hardware_reset(&mut delay)?;
/// phy.init(&mut mdio, &mut delay)?;
/// ```
#[derive(Debug)]
pub struct Rtl8211fWithReset<RST: OutputPin> {
    /// Inner PHY driver
    inner: Rtl8211f,
    /// Reset pin (active low)
    reset_pin: RST,
}

impl<RST: OutputPin> Rtl8211fWithReset<RST> {
    /// Create a new RTL8211F driver with reset pin
    ///
    /// The pin is driven high (inactive) immediately.
    pub fn new(config: PhyConfig, mut reset_pin: RST) -> Self {
        let _ = reset_pin.set_high();
        Self {
            inner: Rtl8211f::new(config),
            reset_pin,
        }
    }

    /// Perform hardware reset of the PHY
    ///
    /// # Timing
    /// - Reset pulse: 10 ms (datasheet minimum)
    /// - Recovery time: 30 ms before MDIO access
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.assert_reset()?;
        delay.delay_us(HW_RESET_PULSE_US);

        self.deassert_reset()?;
        delay.delay_us(HW_RESET_RECOVERY_US);

        Ok(())
    }

    /// Assert reset (hold PHY in reset state)
    pub fn assert_reset(&mut self) -> Result<()> {
        self.reset_pin.set_low().map_err(|_| Error::Gpio)
    }

    /// Deassert reset (release PHY from reset)
    ///
    /// Wait at least 30 ms after this before accessing the PHY via MDIO.
    pub fn deassert_reset(&mut self) -> Result<()> {
        self.reset_pin.set_high().map_err(|_| Error::Gpio)
    }

    /// Consume the driver and return the reset pin
    pub fn into_reset_pin(self) -> RST {
        self.reset_pin
    }

    /// Access the inner driver
    pub const fn phy(&self) -> &Rtl8211f {
        &self.inner
    }

    /// Mutable access to the inner driver
    pub fn phy_mut(&mut self) -> &mut Rtl8211f {
        &mut self.inner
    }

    // Forward the inner status methods

    /// See [`Rtl8211f::poll_status`]
    pub fn poll_status<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<LinkState> {
        self.inner.poll_status(mdio, delay)
    }

    /// See [`Rtl8211f::negotiated`]
    pub const fn negotiated(&self) -> Option<LinkStatus> {
        self.inner.negotiated()
    }

    /// See [`Rtl8211f::verify_id`]
    pub fn verify_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        self.inner.verify_id(mdio)
    }
}

impl<RST: OutputPin> PhyDriver for Rtl8211fWithReset<RST> {
    fn address(&self) -> u8 {
        self.inner.address()
    }

    fn init<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        self.inner.init(mdio, delay)
    }

    fn soft_reset<M: MdioBus, D: DelayNs>(&mut self, mdio: &mut M, delay: &mut D) -> Result<()> {
        self.inner.soft_reset(mdio, delay)
    }

    fn is_link_up<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        self.inner.is_link_up(mdio)
    }

    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        self.inner.link_status(mdio)
    }

    fn poll_link<M: MdioBus>(&mut self, mdio: &mut M) -> Result<Option<LinkStatus>> {
        self.inner.poll_link(mdio)
    }

    fn enable_auto_negotiation<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        self.inner.enable_auto_negotiation(mdio)
    }

    fn force_link<M: MdioBus>(&mut self, mdio: &mut M, status: LinkStatus) -> Result<()> {
        self.inner.force_link(mdio, status)
    }

    fn capabilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        self.inner.capabilities(mdio)
    }

    fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        self.inner.phy_id(mdio)
    }

    fn is_auto_negotiation_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        self.inner.is_auto_negotiation_complete(mdio)
    }

    fn link_partner_abilities<M: MdioBus>(&self, mdio: &mut M) -> Result<PhyCapabilities> {
        self.inner.link_partner_abilities(mdio)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Poll until a new link comes up or `timeout_ms` elapses
///
/// Sleeps 50 ms between polls and polls at least once. Returns `None` on
/// timeout, including when the link was already up and reported by an
/// earlier poll.
pub fn wait_for_link<P, M, D>(
    phy: &mut P,
    mdio: &mut M,
    delay: &mut D,
    timeout_ms: u32,
) -> Result<Option<LinkStatus>>
where
    P: PhyDriver,
    M: MdioBus,
    D: DelayNs,
{
    for _ in 0..(timeout_ms / ANEG_POLL_INTERVAL_MS).max(1) {
        if let Some(link) = phy.poll_link(mdio)? {
            return Ok(Some(link));
        }
        delay.delay_ms(ANEG_POLL_INTERVAL_MS);
    }
    Ok(None)
}
