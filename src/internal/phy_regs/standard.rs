//! IEEE 802.3 PHY Register Definitions
//!
//! This module contains the standard PHY register addresses and bit definitions
//! as specified in IEEE 802.3 Clause 22, including the 1000BASE-T control and
//! status registers used by gigabit transceivers.
//!
//! # Overview
//!
//! The IEEE 802.3 standard defines 32 registers (addresses 0-31) for PHY
//! management. Registers 0-15 are standardized, while 16-31 are vendor-specific.
//!
//! # Standard Registers
//!
//! | Register | Name | Description |
//! |----------|------|-------------|
//! | 0 | BMCR | Basic Mode Control |
//! | 1 | BMSR | Basic Mode Status |
//! | 2 | PHYIDR1 | PHY Identifier 1 |
//! | 3 | PHYIDR2 | PHY Identifier 2 |
//! | 4 | ANAR | Auto-Negotiation Advertisement |
//! | 5 | ANLPAR | Link Partner Ability |
//! | 6 | ANER | Auto-Negotiation Expansion |
//! | 9 | CTRL1000 | 1000BASE-T Control |
//! | 10 | STAT1000 | 1000BASE-T Status |
//! | 15 | ESTATUS | Extended Status |

// Allow unused constants - these are complete register definitions for reference
#![allow(dead_code)]

// =============================================================================
// Standard PHY Register Addresses
// =============================================================================

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0x00;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 0x01;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 0x02;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 0x03;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 0x04;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 0x05;
    /// Auto-Negotiation Expansion Register
    pub const ANER: u8 = 0x06;
    /// 1000BASE-T Control Register
    pub const CTRL1000: u8 = 0x09;
    /// 1000BASE-T Status Register
    pub const STAT1000: u8 = 0x0A;
    /// MMD Access Control Register
    pub const MMD_CTRL: u8 = 0x0D;
    /// MMD Access Data Register
    pub const MMD_DATA: u8 = 0x0E;
    /// Extended Status Register
    pub const ESTATUS: u8 = 0x0F;
}

/// Value read back from an unpopulated bus address (MDIO idles high)
pub const PHY_ID_INVALID: u16 = 0xFFFF;

// =============================================================================
// BMCR - Basic Mode Control Register (Register 0)
// =============================================================================

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select LSB (100 Mbps if set and SPEED_1000 clear)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate PHY from the MAC interface
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation - self-clearing
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
    /// Collision test
    pub const COLLISION_TEST: u16 = 1 << 7;
    /// Speed select MSB (1000 Mbps if set)
    pub const SPEED_1000: u16 = 1 << 6;
}

// =============================================================================
// BMSR - Basic Mode Status Register (Register 1)
// =============================================================================

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-T4 capable
    pub const T4_CAPABLE: u16 = 1 << 15;
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Extended status register present
    pub const ESTATUS: u16 = 1 << 8;
    /// MF preamble suppression
    pub const MF_PREAMBLE_SUPP: u16 = 1 << 6;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault detected
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status (latches low until read)
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Jabber condition detected
    pub const JABBER_DETECT: u16 = 1 << 1;
    /// Extended register capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

// =============================================================================
// ANAR / ANLPAR - Auto-Negotiation Advertisement (Registers 4 and 5)
// =============================================================================

/// ANAR (Auto-Negotiation Advertisement Register) bits
pub mod anar {
    /// Next page indication
    pub const NEXT_PAGE: u16 = 1 << 15;
    /// Acknowledge
    pub const ACK: u16 = 1 << 14;
    /// Remote fault
    pub const REMOTE_FAULT: u16 = 1 << 13;
    /// Asymmetric pause
    pub const PAUSE_ASYM: u16 = 1 << 11;
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-T4 advertised
    pub const T4: u16 = 1 << 9;
    /// 100BASE-TX full duplex advertised
    pub const TX_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex advertised
    pub const TX_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex advertised
    pub const T10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex advertised
    pub const T10_HD: u16 = 1 << 5;
    /// All 10/100 half and full duplex abilities
    pub const ALL_10_100: u16 = TX_FD | TX_HD | T10_FD | T10_HD;
    /// Selector field mask
    pub const SELECTOR_MASK: u16 = 0x001F;
    /// IEEE 802.3 selector value
    pub const SELECTOR_802_3: u16 = 0x0001;
}

/// ANLPAR (Auto-Negotiation Link Partner Ability Register) bits
///
/// Same bit layout as ANAR, but represents what the link partner advertises.
pub mod anlpar {
    /// Asymmetric pause
    pub const PAUSE_ASYM: u16 = 1 << 11;
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-TX full duplex
    pub const CAN_100_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex
    pub const CAN_100_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex
    pub const CAN_10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex
    pub const CAN_10_HD: u16 = 1 << 5;
    /// IEEE 802.3 selector value
    pub const SELECTOR_802_3: u16 = 0x0001;
}

// =============================================================================
// CTRL1000 / STAT1000 - 1000BASE-T Control and Status (Registers 9 and 10)
// =============================================================================

/// CTRL1000 (1000BASE-T Control Register) bits
pub mod ctrl1000 {
    /// Manual master/slave configuration enable
    pub const MS_MANUAL: u16 = 1 << 12;
    /// Configure as master when manual configuration is enabled
    pub const MS_MASTER: u16 = 1 << 11;
    /// Advertise 1000BASE-T full duplex
    pub const ADV_1000_FULL: u16 = 1 << 9;
    /// Advertise 1000BASE-T half duplex
    pub const ADV_1000_HALF: u16 = 1 << 8;
}

/// STAT1000 (1000BASE-T Status Register) bits
pub mod stat1000 {
    /// Link partner local receiver OK
    pub const LOCAL_RX_OK: u16 = 1 << 13;
    /// Link partner remote receiver OK
    pub const REMOTE_RX_OK: u16 = 1 << 12;
    /// Link partner is 1000BASE-T full duplex capable
    pub const LP_1000_FULL: u16 = 1 << 11;
    /// Link partner is 1000BASE-T half duplex capable
    pub const LP_1000_HALF: u16 = 1 << 10;
}

// =============================================================================
// ESTATUS - Extended Status Register (Register 15)
// =============================================================================

/// ESTATUS (Extended Status Register) bits
pub mod estatus {
    /// 1000BASE-X full duplex capable
    pub const X_1000_FULL: u16 = 1 << 15;
    /// 1000BASE-X half duplex capable
    pub const X_1000_HALF: u16 = 1 << 14;
    /// 1000BASE-T full duplex capable
    pub const T_1000_FULL: u16 = 1 << 13;
    /// 1000BASE-T half duplex capable
    pub const T_1000_HALF: u16 = 1 << 12;
}
