//! PHY Register Definitions
//!
//! This module contains register definitions for PHY devices accessed via MDIO.
//!
//! # Module Organization
//!
//! - [`standard`] - IEEE 802.3 Clause 22 standard PHY registers (0-15)
//! - [`rtl8211f`] - RTL8211F vendor-specific registers (16-31, paged)
//!
//! # Access Method
//!
//! PHY registers are accessed via the MDIO (Management Data Input/Output)
//! interface, not direct memory mapping. Vendor registers additionally depend
//! on the page currently selected in register 0x1F.

pub mod rtl8211f;
pub mod standard;
