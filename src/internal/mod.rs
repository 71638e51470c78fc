//! Internal Implementation Details
//!
//! This module contains implementation details that are not part of the public API.
//! Types in this module may change without notice between minor versions.
//!
//! # Contents
//!
//! - [`constants`]: Timing ceilings and bus limits
//! - [`phy_regs`]: IEEE 802.3 and RTL8211F register definitions
//!
//! # Stability
//!
//! **WARNING:** This module is `pub(crate)` only. Register definitions that
//! are part of the public surface are re-exported from [`crate::registers`].

pub(crate) mod constants;
pub(crate) mod phy_regs;
