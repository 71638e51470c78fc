//! Centralized Constants
//!
//! This module provides a single source of truth for the timing ceilings and
//! bus limits used throughout the PHY driver.
//!
//! # Organization
//!
//! Constants are grouped by category:
//! - **Bus limits**: MDIO address space
//! - **Timing**: Reset polling, auto-negotiation and speed-resolution waits
//! - **Hardware reset**: Reset pin pulse and recovery times
//!
//! # Note
//!
//! Register addresses and bit definitions live in `phy_regs` as they are
//! specific to the register block they describe.

// =============================================================================
// Bus Limits
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Number of addresses swept during discovery
pub const PHY_ADDR_COUNT: u8 = 32;

// =============================================================================
// Timing Constants
// =============================================================================

/// Interval between BMCR reads while waiting for a soft reset (ms)
pub const RESET_POLL_INTERVAL_MS: u32 = 1;

/// Default number of BMCR re-reads before a soft reset times out
pub const RESET_POLL_LIMIT: u32 = 1_000;

/// Overall auto-negotiation timeout (ms)
pub const ANEG_TIMEOUT_MS: u32 = 4_000;

/// Interval between BMSR reads while waiting for auto-negotiation (ms)
pub const ANEG_POLL_INTERVAL_MS: u32 = 50;

/// Default number of PHYSR re-reads waiting for speed/duplex resolution
pub const SPEED_DONE_POLL_LIMIT: u32 = 5_000;

/// Interval between PHYSR reads while waiting for speed resolution (ms)
pub const SPEED_DONE_POLL_INTERVAL_MS: u32 = 1;

/// Settle time after speed resolution completes inside a wait (ms)
pub const LINK_SETTLE_MS: u32 = 500;

// =============================================================================
// Hardware Reset
// =============================================================================

/// Hardware reset pulse duration in microseconds (minimum 10 ms per datasheet)
pub const HW_RESET_PULSE_US: u32 = 10_000;

/// Hardware reset recovery time in microseconds before MDIO access
pub const HW_RESET_RECOVERY_US: u32 = 30_000;
