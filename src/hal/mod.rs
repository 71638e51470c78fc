//! Hardware Abstraction Layer
//!
//! Boundary traits the driver consumes from its environment.
//!
//! # Modules
//!
//! - [`mdio`]: MDIO bus trait and paged register helpers
//!
//! # Delay Integration
//!
//! All operations that wait use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod mdio;

// Re-export commonly used types
pub use mdio::{MdioBus, validate_address};
