//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the PHY driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::error::{BusError, BusResult};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_regs::rtl8211f::{delay, page, phycr, physr, reg};
use crate::internal::phy_regs::standard::{anlpar, bmcr, bmsr, estatus, phy_reg, stat1000};

/// Registers at or above this address are banked by the page-select register
const FIRST_PAGED_REG: u8 = 0x10;

/// Latency value meaning "reset never clears"
const RESET_STUCK: u32 = u32::MAX;

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Models the RTL8211F register file closely enough for the driver's
/// sequences:
///
/// - registers `0x10..=0x1E` are banked by the page in `0x1F`
/// - `BMCR.RESET` self-clears after a configurable number of reads
/// - addresses with no registers configured read `0xFFFF`
/// - reads can be scripted per register and faults injected per register
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.setup_rtl8211f(3);
/// mdio.set_reset_latency(3, 2);
///
/// let mut phy = Rtl8211f::new(PhyConfig::new());
/// phy.init(&mut mdio, &mut MockDelay::new()).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, page, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u16, u8), u16>>,
    /// Currently selected page per PHY
    pages: RefCell<HashMap<u8, u16>>,
    /// Scripted values returned ahead of the register file
    read_queue: RefCell<HashMap<(u8, u16, u8), VecDeque<u16>>>,
    /// Record of reads: (phy_addr, reg_addr)
    read_log: RefCell<Vec<(u8, u8)>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Reads of BMCR that still show RESET after a reset write
    reset_latency: RefCell<HashMap<u8, u32>>,
    /// Remaining RESET-visible reads for a reset in progress
    pending_reset: RefCell<HashMap<u8, u32>>,
    /// Registers whose reads fail
    failing_reads: RefCell<HashSet<(u8, u8)>>,
    /// Registers whose writes fail
    failing_writes: RefCell<HashSet<(u8, u8)>>,
    /// Successful reads left before a register starts failing
    reads_before_failure: RefCell<HashMap<(u8, u8), u32>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus with no PHYs present
    pub fn new() -> Self {
        Self::default()
    }

    fn bank(&self, phy_addr: u8, reg_addr: u8) -> u16 {
        if reg_addr >= FIRST_PAGED_REG {
            self.current_page(phy_addr)
        } else {
            page::DEFAULT
        }
    }

    fn is_present(&self, phy_addr: u8) -> bool {
        self.registers.borrow().keys().any(|&(addr, _, _)| addr == phy_addr)
    }

    // -------------------------------------------------------------------------
    // Register file
    // -------------------------------------------------------------------------

    /// Set a page 0 register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.set_paged_register(phy_addr, page::DEFAULT, reg_addr, value);
    }

    /// Set a register value on a specific page
    pub fn set_paged_register(&self, phy_addr: u8, page: u16, reg_addr: u8, value: u16) {
        let page = if reg_addr >= FIRST_PAGED_REG { page } else { page::DEFAULT };
        self.registers.borrow_mut().insert((phy_addr, page, reg_addr), value);
    }

    /// Get the current value of a page 0 register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.get_paged_register(phy_addr, page::DEFAULT, reg_addr)
    }

    /// Get the current value of a register on a specific page
    pub fn get_paged_register(&self, phy_addr: u8, page: u16, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, page, reg_addr)).copied()
    }

    /// Currently selected page of a PHY
    pub fn current_page(&self, phy_addr: u8) -> u16 {
        self.pages.borrow().get(&phy_addr).copied().unwrap_or(page::DEFAULT)
    }

    /// Queue values returned by successive reads of a page 0 register
    ///
    /// Once the queue drains, reads fall back to the register file.
    pub fn queue_reads(&self, phy_addr: u8, reg_addr: u8, values: &[u16]) {
        self.read_queue
            .borrow_mut()
            .entry((phy_addr, page::DEFAULT, reg_addr))
            .or_default()
            .extend(values.iter().copied());
    }

    /// Number of BMCR reads that still show RESET after a reset write
    pub fn set_reset_latency(&self, phy_addr: u8, reads: u32) {
        self.reset_latency.borrow_mut().insert(phy_addr, reads);
    }

    /// Make BMCR.RESET never self-clear
    pub fn set_reset_stuck(&self, phy_addr: u8) {
        self.set_reset_latency(phy_addr, RESET_STUCK);
    }

    // -------------------------------------------------------------------------
    // Fault injection
    // -------------------------------------------------------------------------

    /// Make every read of a register fail with `NoResponse`
    pub fn fail_reads_of(&self, phy_addr: u8, reg_addr: u8) {
        self.failing_reads.borrow_mut().insert((phy_addr, reg_addr));
    }

    /// Let `reads` reads of a register succeed, then fail every later one
    pub fn fail_reads_after(&self, phy_addr: u8, reg_addr: u8, reads: u32) {
        self.reads_before_failure
            .borrow_mut()
            .insert((phy_addr, reg_addr), reads);
    }

    /// Make every write of a register fail with `NoResponse`
    pub fn fail_writes_of(&self, phy_addr: u8, reg_addr: u8) {
        self.failing_writes.borrow_mut().insert((phy_addr, reg_addr));
    }

    // -------------------------------------------------------------------------
    // Transaction logs
    // -------------------------------------------------------------------------

    /// Get all reads that have been made
    pub fn get_reads(&self) -> Vec<(u8, u8)> {
        self.read_log.borrow().clone()
    }

    /// Number of reads of one register
    pub fn read_count(&self, phy_addr: u8, reg_addr: u8) -> usize {
        self.read_log
            .borrow()
            .iter()
            .filter(|&&(addr, r)| addr == phy_addr && r == reg_addr)
            .count()
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Clear the read and write logs
    pub fn clear_logs(&self) {
        self.read_log.borrow_mut().clear();
        self.write_log.borrow_mut().clear();
    }

    // -------------------------------------------------------------------------
    // Canned PHY states
    // -------------------------------------------------------------------------

    /// Setup for an RTL8211F PHY with default register values
    pub fn setup_rtl8211f(&self, phy_addr: u8) {
        // PHY ID registers (RTL8211F)
        self.set_register(phy_addr, phy_reg::PHYIDR1, 0x001C);
        self.set_register(phy_addr, phy_reg::PHYIDR2, 0xC916);

        // BMSR: 10/100 capabilities + extended status, link down initially
        let bmsr_value = bmsr::TX_FD_CAPABLE
            | bmsr::TX_HD_CAPABLE
            | bmsr::T10_FD_CAPABLE
            | bmsr::T10_HD_CAPABLE
            | bmsr::ESTATUS
            | bmsr::MF_PREAMBLE_SUPP
            | bmsr::AN_ABILITY
            | bmsr::EXT_CAPABLE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_value);

        // BMCR: auto-neg enabled, 1000 full
        self.set_register(phy_addr, phy_reg::BMCR, 0x1140);
        self.set_register(phy_addr, phy_reg::ANAR, 0x0001);
        self.set_register(phy_addr, phy_reg::ANLPAR, 0x0000);
        self.set_register(phy_addr, phy_reg::CTRL1000, 0x0000);
        self.set_register(phy_addr, phy_reg::STAT1000, 0x0000);
        self.set_register(
            phy_addr,
            phy_reg::ESTATUS,
            estatus::T_1000_FULL | estatus::T_1000_HALF,
        );

        // Vendor status: nothing resolved
        self.set_register(phy_addr, reg::PHYSR, 0x0000);

        // Strap defaults: RX delay on, TX delay off, CLKOUT on
        self.set_paged_register(phy_addr, page::RGMII_DELAY, reg::TX_DELAY, 0x0000);
        self.set_paged_register(phy_addr, page::RGMII_DELAY, reg::RX_DELAY, delay::RX_DELAY_EN);
        self.set_paged_register(phy_addr, page::LED, reg::LCR, 0x0000);
        self.set_paged_register(phy_addr, page::PHY_CONTROL, reg::PHYCR1, 0x0000);
        self.set_paged_register(phy_addr, page::PHY_CONTROL, reg::PHYCR2, phycr::CLKOUT_EN);
        self.set_paged_register(phy_addr, page::PHY_CONTROL, reg::INSR, 0x0000);
        self.set_paged_register(phy_addr, page::INTERRUPT, reg::INER, 0x0000);
    }

    /// Simulate link coming up with 1000 Mbps Full Duplex
    pub fn simulate_link_up_1000_fd(&self, phy_addr: u8) {
        let mut bmsr_val = self.get_register(phy_addr, phy_reg::BMSR).unwrap_or(0);
        bmsr_val |= bmsr::LINK_STATUS | bmsr::AN_COMPLETE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_val);

        let anlpar_val = anlpar::SELECTOR_802_3
            | anlpar::CAN_100_FD
            | anlpar::CAN_100_HD
            | anlpar::CAN_10_FD
            | anlpar::CAN_10_HD;
        self.set_register(phy_addr, phy_reg::ANLPAR, anlpar_val);
        self.set_register(phy_addr, phy_reg::STAT1000, stat1000::LP_1000_FULL);

        self.set_register(
            phy_addr,
            reg::PHYSR,
            physr::SPEED_1000 | physr::DUPLEX | physr::SPDDONE | physr::LINK,
        );
    }

    /// Simulate link coming up with 100 Mbps Half Duplex
    pub fn simulate_link_up_100_hd(&self, phy_addr: u8) {
        let mut bmsr_val = self.get_register(phy_addr, phy_reg::BMSR).unwrap_or(0);
        bmsr_val |= bmsr::LINK_STATUS | bmsr::AN_COMPLETE;
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_val);

        let anlpar_val = anlpar::SELECTOR_802_3 | anlpar::CAN_100_HD;
        self.set_register(phy_addr, phy_reg::ANLPAR, anlpar_val);
        self.set_register(phy_addr, phy_reg::STAT1000, 0x0000);

        self.set_register(
            phy_addr,
            reg::PHYSR,
            physr::SPEED_100 | physr::SPDDONE | physr::LINK,
        );
    }

    /// Simulate link going down
    pub fn simulate_link_down(&self, phy_addr: u8) {
        let mut bmsr_val = self.get_register(phy_addr, phy_reg::BMSR).unwrap_or(0);
        bmsr_val &= !(bmsr::LINK_STATUS | bmsr::AN_COMPLETE);
        self.set_register(phy_addr, phy_reg::BMSR, bmsr_val);
        self.set_register(phy_addr, phy_reg::ANLPAR, 0x0000);
        self.set_register(phy_addr, phy_reg::STAT1000, 0x0000);
        self.set_register(phy_addr, reg::PHYSR, 0x0000);
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> BusResult<u16> {
        self.read_log.borrow_mut().push((phy_addr, reg_addr));

        if self.failing_reads.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(BusError::NoResponse);
        }
        if let Some(left) = self
            .reads_before_failure
            .borrow_mut()
            .get_mut(&(phy_addr, reg_addr))
        {
            if *left == 0 {
                return Err(BusError::NoResponse);
            }
            *left -= 1;
        }
        if !self.is_present(phy_addr) {
            // Nobody drives MDIO, the pull-up reads as all ones
            return Ok(0xFFFF);
        }
        if reg_addr == reg::PAGE_SELECT {
            return Ok(self.current_page(phy_addr));
        }

        let key = (phy_addr, self.bank(phy_addr, reg_addr), reg_addr);
        if let Some(value) = self
            .read_queue
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
        {
            return Ok(value);
        }

        let value = self.registers.borrow().get(&key).copied().unwrap_or(0);

        if reg_addr == phy_reg::BMCR {
            let mut pending = self.pending_reset.borrow_mut();
            if let Some(remaining) = pending.get_mut(&phy_addr) {
                if *remaining > 0 {
                    if *remaining != RESET_STUCK {
                        *remaining -= 1;
                    }
                    return Ok(value | bmcr::RESET);
                }
            }
        }

        Ok(value)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> BusResult<()> {
        // Log the write
        self.write_log.borrow_mut().push((phy_addr, reg_addr, value));

        if self.failing_writes.borrow().contains(&(phy_addr, reg_addr)) {
            return Err(BusError::NoResponse);
        }

        if reg_addr == reg::PAGE_SELECT {
            self.pages.borrow_mut().insert(phy_addr, value);
            return Ok(());
        }

        let mut stored = value;
        if reg_addr == phy_reg::BMCR {
            if value & bmcr::RESET != 0 {
                let latency = self.reset_latency.borrow().get(&phy_addr).copied().unwrap_or(0);
                self.pending_reset.borrow_mut().insert(phy_addr, latency);
                stored &= !bmcr::RESET;
            } else {
                self.pending_reset.borrow_mut().remove(&phy_addr);
            }
        }

        let key = (phy_addr, self.bank(phy_addr, reg_addr), reg_addr);
        self.registers.borrow_mut().insert(key, stored);

        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }

    /// Reset the delay counter
    pub fn reset(&self) {
        *self.total_ns.borrow_mut() = 0;
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

// =============================================================================
// Mock Reset Pin
// =============================================================================

/// Mock output pin recording every level driven
#[derive(Debug, Default)]
pub struct MockPin {
    /// Levels driven, `true` = high
    pub history: Vec<bool>,
    /// Fail every operation
    pub fail: bool,
}

impl MockPin {
    /// Create a working pin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pin whose every operation fails
    pub fn failing() -> Self {
        Self { history: Vec::new(), fail: true }
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.history.push(true);
        Ok(())
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($mdio:expr, $phy:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $phy && w.1 == $reg && w.2 == $value),
            "Expected write to PHY {} reg {} with value 0x{:04X}, but got: {:?}",
            $phy,
            $reg,
            $value,
            writes
        );
    };
}

/// Assert that a register was never written
#[macro_export]
macro_rules! assert_reg_not_written {
    ($mdio:expr, $phy:expr, $reg:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            !writes.iter().any(|w| w.0 == $phy && w.1 == $reg),
            "Expected no write to PHY {} reg {}, but got: {:?}",
            $phy,
            $reg,
            writes
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(0, 1, 0x0000);

        // Write updates the value
        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);

        // Write is logged
        assert_eq!(mdio.get_writes(), vec![(0, 1, 0x5678)]);
        assert_eq!(mdio.get_reads(), vec![(0, 1)]);
    }

    #[test]
    fn mock_mdio_absent_phy_reads_all_ones() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_rtl8211f(3);

        assert_eq!(mdio.read(2, phy_reg::PHYIDR1).unwrap(), 0xFFFF);
        assert_eq!(mdio.read(3, phy_reg::PHYIDR1).unwrap(), 0x001C);
    }

    #[test]
    fn mock_mdio_pages_bank_vendor_registers() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_rtl8211f(0);

        mdio.write(0, reg::PAGE_SELECT, page::RGMII_DELAY).unwrap();
        assert_eq!(mdio.read(0, reg::RX_DELAY).unwrap(), delay::RX_DELAY_EN);
        // Standard registers ignore the page
        assert_eq!(mdio.read(0, phy_reg::PHYIDR2).unwrap(), 0xC916);

        mdio.write(0, reg::PAGE_SELECT, page::DEFAULT).unwrap();
        assert_eq!(mdio.read(0, reg::RX_DELAY).unwrap(), 0x0000);
        assert_eq!(mdio.read(0, reg::PAGE_SELECT).unwrap(), 0);
    }

    #[test]
    fn mock_mdio_reset_latency() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_rtl8211f(0);
        mdio.set_reset_latency(0, 2);

        mdio.write(0, phy_reg::BMCR, bmcr::RESET | 0x1140).unwrap();

        assert_ne!(mdio.read(0, phy_reg::BMCR).unwrap() & bmcr::RESET, 0);
        assert_ne!(mdio.read(0, phy_reg::BMCR).unwrap() & bmcr::RESET, 0);
        assert_eq!(mdio.read(0, phy_reg::BMCR).unwrap(), 0x1140);
    }

    #[test]
    fn mock_mdio_queued_reads_drain_first() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(0, phy_reg::BMSR, 0x0024);
        mdio.queue_reads(0, phy_reg::BMSR, &[0x0001, 0x0002]);

        assert_eq!(mdio.read(0, phy_reg::BMSR).unwrap(), 0x0001);
        assert_eq!(mdio.read(0, phy_reg::BMSR).unwrap(), 0x0002);
        assert_eq!(mdio.read(0, phy_reg::BMSR).unwrap(), 0x0024);
        assert_eq!(mdio.read_count(0, phy_reg::BMSR), 3);
    }

    #[test]
    fn mock_mdio_fault_injection() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_rtl8211f(0);
        mdio.fail_reads_of(0, phy_reg::BMSR);
        mdio.fail_writes_of(0, phy_reg::ANAR);

        assert_eq!(mdio.read(0, phy_reg::BMSR), Err(BusError::NoResponse));
        assert_eq!(mdio.write(0, phy_reg::ANAR, 0x01E1), Err(BusError::NoResponse));
        assert_eq!(mdio.get_register(0, phy_reg::ANAR), Some(0x0001));
    }

    #[test]
    fn mock_mdio_fails_after_n_reads() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_rtl8211f(0);
        mdio.fail_reads_after(0, phy_reg::BMSR, 2);

        assert!(mdio.read(0, phy_reg::BMSR).is_ok());
        assert!(mdio.read(0, phy_reg::BMSR).is_ok());
        assert_eq!(mdio.read(0, phy_reg::BMSR), Err(BusError::NoResponse));
        assert_eq!(mdio.read(0, phy_reg::BMSR), Err(BusError::NoResponse));
        assert!(mdio.read(0, phy_reg::BMCR).is_ok());
    }

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 1000);
        embedded_hal::delay::DelayNs::delay_ns(&mut delay, 2000);

        assert_eq!(delay.total_ns(), 3000);
        assert_eq!(delay.total_ms(), 0); // Less than 1ms

        embedded_hal::delay::DelayNs::delay_ms(&mut delay, 1);
        assert_eq!(delay.total_ms(), 1);
    }

    #[test]
    fn mock_pin_history() {
        let mut pin = MockPin::new();
        pin.set_low().unwrap();
        pin.set_high().unwrap();
        assert_eq!(pin.history, vec![false, true]);

        assert_eq!(MockPin::failing().set_low(), Err(ErrorKind::Other));
    }

    #[test]
    fn mock_mdio_link_simulation() {
        let mut mdio = MockMdioBus::new();
        mdio.setup_rtl8211f(0);

        mdio.simulate_link_up_1000_fd(0);
        let bmsr_val = mdio.read(0, phy_reg::BMSR).unwrap();
        assert!(bmsr_val & bmsr::LINK_STATUS != 0);
        assert!(bmsr_val & bmsr::AN_COMPLETE != 0);
        assert_ne!(mdio.read(0, reg::PHYSR).unwrap() & physr::SPDDONE, 0);

        mdio.simulate_link_down(0);
        let bmsr_val = mdio.read(0, phy_reg::BMSR).unwrap();
        assert!(bmsr_val & bmsr::LINK_STATUS == 0);
    }
}
