//! MDIO (Management Data Input/Output) bus abstraction
//!
//! The PHY driver never touches the bus hardware directly. Every register
//! transaction flows through an [`MdioBus`] implementation supplied by the
//! caller, typically a thin wrapper around the MAC's SMI controller.
//!
//! Besides the raw trait, this module provides address validation and the
//! page-aware helpers used to reach the RTL8211F's banked vendor registers.

use crate::error::{BusError, BusResult};
use crate::internal::constants::{MAX_PHY_ADDR, MAX_REG_ADDR};
use crate::internal::phy_regs::rtl8211f::{page, reg};

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing
/// the PHY driver to work with various MDIO implementations and with
/// test doubles.
///
/// Transactions are synchronous request/response: `read` returns once the
/// PHY has answered, `write` once the frame has been clocked out.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> BusResult<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> BusResult<()>;

    /// Read-modify-write a PHY register
    ///
    /// Bits in `clear` are cleared first, then bits in `set` are set.
    fn modify(&mut self, phy_addr: u8, reg_addr: u8, clear: u16, set: u16) -> BusResult<()> {
        let value = self.read(phy_addr, reg_addr)?;
        self.write(phy_addr, reg_addr, (value & !clear) | set)
    }
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> BusResult<u16> {
        (**self).read(phy_addr, reg_addr)
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> BusResult<()> {
        (**self).write(phy_addr, reg_addr, value)
    }
}

/// Check a PHY/register address pair against the 5-bit Clause 22 fields
///
/// Bus implementations should call this before starting a transaction.
pub const fn validate_address(phy_addr: u8, reg_addr: u8) -> BusResult<()> {
    if phy_addr > MAX_PHY_ADDR {
        return Err(BusError::InvalidPhyAddress);
    }
    if reg_addr > MAX_REG_ADDR {
        return Err(BusError::InvalidRegister);
    }
    Ok(())
}

// =============================================================================
// Paged Register Access
// =============================================================================

/// Select a register page
pub fn select_page<M: MdioBus>(mdio: &mut M, phy_addr: u8, page: u16) -> BusResult<()> {
    mdio.write(phy_addr, reg::PAGE_SELECT, page)
}

/// Select page 0, the IEEE standard bank
///
/// Callers resuming standard register access after a failed vendor
/// sequence should call this to leave the PHY in a known state.
pub fn restore_default_page<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> BusResult<()> {
    select_page(mdio, phy_addr, page::DEFAULT)
}

/// Run `f` with `page` selected, then switch back to page 0
///
/// The page restore is attempted even when `f` fails; in that case the
/// error from `f` is returned and a restore failure is dropped.
pub fn with_page<M, T, F>(mdio: &mut M, phy_addr: u8, page: u16, f: F) -> BusResult<T>
where
    M: MdioBus,
    F: FnOnce(&mut M) -> BusResult<T>,
{
    select_page(mdio, phy_addr, page)?;
    let result = f(mdio);
    let restored = restore_default_page(mdio, phy_addr);
    let value = result?;
    restored?;
    Ok(value)
}

/// Read a register on a vendor page
pub fn read_paged<M: MdioBus>(mdio: &mut M, phy_addr: u8, page: u16, reg_addr: u8) -> BusResult<u16> {
    with_page(mdio, phy_addr, page, |mdio| mdio.read(phy_addr, reg_addr))
}

/// Write a register on a vendor page
pub fn write_paged<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    page: u16,
    reg_addr: u8,
    value: u16,
) -> BusResult<()> {
    with_page(mdio, phy_addr, page, |mdio| mdio.write(phy_addr, reg_addr, value))
}

/// Read-modify-write a register on a vendor page
pub fn modify_paged<M: MdioBus>(
    mdio: &mut M,
    phy_addr: u8,
    page: u16,
    reg_addr: u8,
    clear: u16,
    set: u16,
) -> BusResult<()> {
    with_page(mdio, phy_addr, page, |mdio| mdio.modify(phy_addr, reg_addr, clear, set))
}

// =============================================================================
// Unit Tests
// =============================================================================
