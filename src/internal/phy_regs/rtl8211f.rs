//! RTL8211F Vendor-Specific Register Definitions
//!
//! Register definitions for the Realtek RTL8211F/RTL8211F-VD Gigabit PHY.
//!
//! The RTL8211F banks its vendor registers behind a page-select register
//! (`0x1F`). Writing a page number there selects which physical register set
//! the vendor addresses refer to. Page 0 is the IEEE standard bank and must
//! be selected whenever the driver hands control back to its caller.
//!
//! # Module Organization
//!
//! - `phy_id`: PHY identifier constants
//! - `page`: Page numbers used by the driver
//! - `reg`: Register addresses (page-relative)
//! - `physr`: PHY Specific Status Register bits (page 0, register 0x11)
//! - `physr_a43`: PHY Specific Status Register bits (page 0xA43, register 0x1A)
//! - `delay`: RGMII delay control bits (page 0xD08)
//! - `led`: LED control values (page 0xD04)
//! - `phycr`: PHY control registers 1 and 2 (page 0xA43)
//! - `inter`: Interrupt enable/status bits
//!
//! # References
//!
//! - RTL8211F(I)/RTL8211FD(I) Datasheet
//! - IEEE 802.3 Ethernet Standard

#![allow(dead_code)]

// =============================================================================
// RTL8211F PHY Identifier
// =============================================================================

/// PHY identifier constants
pub mod phy_id {
    /// RTL8211F PHY Identifier (PHYIDR1 = 0x001C, PHYIDR2 = 0xC916)
    pub const RTL8211F: u32 = 0x001C_C916;
    /// RTL8211F-VD PHY Identifier
    pub const RTL8211F_VD: u32 = 0x001C_C878;
    /// RTL8211E PHY Identifier
    pub const RTL8211E: u32 = 0x001C_C915;
    /// Mask comparing a full identifier (model and revision)
    pub const MASK: u32 = 0xFFFF_FFFF;
    /// Generic Realtek Gigabit identifier (OUI + model family)
    pub const REALTEK_GENERIC: u32 = 0x001C_C800;
    /// Mask that keeps only the Realtek OUI and model family
    pub const REALTEK_MASK: u32 = 0xFFFF_FC00;
}

// =============================================================================
// Paging
// =============================================================================

/// Page numbers written to the page-select register
pub mod page {
    /// IEEE standard register bank
    pub const DEFAULT: u16 = 0x0000;
    /// LED configuration page
    pub const LED: u16 = 0x0D04;
    /// RGMII delay configuration page
    pub const RGMII_DELAY: u16 = 0x0D08;
    /// Interrupt enable page
    pub const INTERRUPT: u16 = 0x0A42;
    /// PHY control / status page
    pub const PHY_CONTROL: u16 = 0x0A43;
}

// =============================================================================
// RTL8211F Vendor-Specific Registers
// =============================================================================

/// RTL8211F vendor-specific register addresses
pub mod reg {
    /// LED Control Register (page 0xD04)
    pub const LCR: u8 = 0x10;
    /// PHY Specific Status Register (page 0)
    pub const PHYSR: u8 = 0x11;
    /// TX delay control register (page 0xD08)
    pub const TX_DELAY: u8 = 0x11;
    /// Interrupt Enable Register (page 0xA42)
    pub const INER: u8 = 0x12;
    /// RX delay control register (page 0xD08)
    pub const RX_DELAY: u8 = 0x15;
    /// PHY Control Register 1 (page 0xA43)
    pub const PHYCR1: u8 = 0x18;
    /// PHY Control Register 2 (page 0xA43)
    pub const PHYCR2: u8 = 0x19;
    /// PHY Specific Status Register (page 0xA43)
    pub const PHYSR_A43: u8 = 0x1A;
    /// Interrupt Status Register (page 0xA43, clear on read)
    pub const INSR: u8 = 0x1D;
    /// Page Select Register
    pub const PAGE_SELECT: u8 = 0x1F;
}

/// PHY Specific Status Register (page 0, register 0x11) bits
pub mod physr {
    /// Speed field mask (bits 15:14)
    pub const SPEED_MASK: u16 = 0xC000;
    /// Speed field value: 1000 Mbps
    pub const SPEED_1000: u16 = 0x8000;
    /// Speed field value: 100 Mbps
    pub const SPEED_100: u16 = 0x4000;
    /// Speed field value: 10 Mbps
    pub const SPEED_10: u16 = 0x0000;
    /// Full duplex
    pub const DUPLEX: u16 = 0x2000;
    /// Speed and duplex resolved
    pub const SPDDONE: u16 = 0x0800;
    /// Real-time link status
    pub const LINK: u16 = 0x0400;
}

/// PHY Specific Status Register (page 0xA43, register 0x1A) bits
pub mod physr_a43 {
    /// Speed field mask (bits 5:4)
    pub const SPEED_MASK: u16 = 0x0030;
    /// Speed field value: 1000 Mbps
    pub const SPEED_1000: u16 = 0x0020;
    /// Speed field value: 100 Mbps
    pub const SPEED_100: u16 = 0x0010;
    /// Full duplex
    pub const DUPLEX: u16 = 0x0008;
    /// Real-time link status
    pub const LINK: u16 = 0x0004;
}

/// RGMII delay control bits (page 0xD08)
pub mod delay {
    /// TX clock delay enable (register 0x11)
    pub const TX_DELAY_EN: u16 = 1 << 8;
    /// RX clock delay enable (register 0x15)
    pub const RX_DELAY_EN: u16 = 1 << 3;
}

/// LED Control Register values (page 0xD04, register 0x10)
pub mod led {
    /// LED1 (green) on link at any speed, LED2 (yellow) blinks on activity
    pub const GREEN_LINK_YELLOW_ACT: u16 = 0x617F;
}

/// PHY Control Register 1/2 bits (page 0xA43)
pub mod phycr {
    /// PHYCR1: Advanced Link Down Power Saving enable
    pub const ALDPS_ENABLE: u16 = 1 << 2;
    /// PHYCR1: PLL off while in ALDPS
    pub const ALDPS_PLL_OFF: u16 = 1 << 1;
    /// PHYCR1: crystal off while in ALDPS
    pub const ALDPS_XTAL_OFF: u16 = 1 << 12;
    /// PHYCR1: all ALDPS bits
    pub const ALDPS_ALL: u16 = ALDPS_ENABLE | ALDPS_PLL_OFF | ALDPS_XTAL_OFF;
    /// PHYCR2: 125 MHz CLKOUT enable
    pub const CLKOUT_EN: u16 = 1 << 0;
}

/// Interrupt enable (INER) and status (INSR) bits
pub mod inter {
    /// Link status change
    pub const LINK_STATUS: u16 = 1 << 4;
    /// Auto-negotiation error
    pub const AN_ERROR: u16 = 1 << 0;
}
