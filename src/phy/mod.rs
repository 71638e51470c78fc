//! Ethernet PHY Drivers
//!
//! This module provides a generic PHY driver trait, the IEEE 802.3 procedures
//! behind it, and the RTL8211F implementation.
//!
//! # Architecture
//!
//! The PHY layer is independent of the MAC, communicating only through the
//! [`MdioBus`](crate::hal::MdioBus) trait. Bus and delay are passed into each
//! operation; the driver holds no hardware handles.
//!
//! - [`generic`]: [`PhyDriver`] trait and `ieee802_3` helpers (discovery,
//!   reset, auto-negotiation, link polling)
//! - [`device`]: [`PhyDevice`] address and link-state record
//! - [`status`]: vendor status register decoding
//! - [`rtl8211f`]: [`Rtl8211f`] and [`Rtl8211fWithReset`]
//!
//! # Example
//!
//! ```ignore
//! use ph_rtl8211::phy::{PhyDriver, Rtl8211f};
//! use ph_rtl8211::PhyConfig;
//!
//! let mut phy = Rtl8211f::new(PhyConfig::new());
//! phy.init(&mut mdio, &mut delay)?;
//!
//! loop {
//!     if let Some(link) = phy.poll_link(&mut mdio)? {
//!         println!("Link up: {}", link);
//!         break;
//!     }
//!     delay.delay_ms(50);
//! }
//! ```

pub mod device;
pub mod generic;
pub mod rtl8211f;
pub mod status;

pub use device::PhyDevice;
pub use generic::{LinkStatus, PhyCapabilities, PhyDriver, ieee802_3};
pub use rtl8211f::{Rtl8211f, Rtl8211fWithReset, wait_for_link};
pub use status::{link_from_status, parse_status, parse_status_rtl8211f};
