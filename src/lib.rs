//! RTL8211F PHY Driver
//!
//! A `no_std`, `no_alloc` management layer for the Realtek RTL8211F family of
//! Gigabit Ethernet PHYs, driven over an MDIO bus.
//!
//! The crate finds the PHY on the bus, resets it, programs the vendor
//! registers (RGMII clock delays, LED mapping), runs IEEE 802.3
//! auto-negotiation and reports the negotiated speed and duplex.
//!
//! # Architecture
//!
//! 1. **PHY Layer** ([`phy`]): [`Rtl8211f`] driver, [`PhyDriver`] trait and
//!    the shared IEEE 802.3 procedures
//! 2. **HAL Layer** ([`hal`]): [`MdioBus`] trait and paged register access
//!
//! The MDIO transport and the delay source are supplied by the caller:
//! implement [`MdioBus`] for your MAC's SMI controller and pass any
//! `embedded_hal::delay::DelayNs`.
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and logging
//! - `log`: Route driver log messages through the `log` facade
//!
//! # Example
//!
//! ```ignore
//! use ph_rtl8211::{LinkState, PhyConfig, PhyDriver, RgmiiDelay, Rtl8211f};
//!
//! let config = PhyConfig::new()
//!     .with_rgmii_delay(RgmiiDelay::RgmiiTxid)
//!     .with_aldps(false);
//!
//! let mut phy = Rtl8211f::new(config);
//! phy.init(&mut mdio, &mut delay)?;
//!
//! if phy.poll_status(&mut mdio, &mut delay)? == LinkState::Up {
//!     if let Some(link) = phy.negotiated() {
//!         mac.set_speed(link.speed);
//!         mac.set_duplex(link.duplex);
//!     }
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; Cargo.toml mirrors them.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    // Log format strings stay positional for defmt
    clippy::uninlined_format_args
)]

// Must come first: textual scope for the logging macros
#[macro_use]
mod fmt;

// =============================================================================
// Modules
// =============================================================================

pub mod config;
pub mod error;
pub mod hal;
pub mod phy;

// Internal implementation details (pub(crate) only)
mod internal;

// Test utilities (only available during testing)
#[cfg(test)]
pub(crate) mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{Duplex, LinkState, PhyConfig, RgmiiDelay, Speed};
pub use error::{BusError, BusResult, Error, Result};
pub use hal::MdioBus;
pub use phy::{LinkStatus, PhyCapabilities, PhyDevice, PhyDriver, Rtl8211f, Rtl8211fWithReset};

/// PHY register definitions.
///
/// Addresses and bit masks for the IEEE 802.3 Clause 22 registers and the
/// RTL8211F vendor pages, for callers that implement extra features on top
/// of [`MdioBus`].
pub mod registers {
    pub use crate::internal::phy_regs::standard::{
        PHY_ID_INVALID, anar, anlpar, bmcr, bmsr, ctrl1000, estatus, phy_reg, stat1000,
    };

    /// RTL8211F vendor registers
    pub mod rtl8211f {
        pub use crate::internal::phy_regs::rtl8211f::{
            delay, inter, led, page, phy_id, phycr, physr, physr_a43, reg,
        };
    }
}

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Timing
        ANEG_POLL_INTERVAL_MS,
        ANEG_TIMEOUT_MS,
        // Hardware reset
        HW_RESET_PULSE_US,
        HW_RESET_RECOVERY_US,
        LINK_SETTLE_MS,
        // Bus limits
        MAX_PHY_ADDR,
        MAX_REG_ADDR,
        PHY_ADDR_COUNT,
        RESET_POLL_INTERVAL_MS,
        RESET_POLL_LIMIT,
        SPEED_DONE_POLL_INTERVAL_MS,
        SPEED_DONE_POLL_LIMIT,
    };
}
