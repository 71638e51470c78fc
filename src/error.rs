//! Error types for the RTL8211F PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`BusError`]: MDIO transaction failures reported by the bus backend
//! - [`Error`]: Driver-level failures (discovery, timeouts, capabilities)
//!
//! Every driver operation returns [`Result`]; bus errors convert into
//! [`Error::Bus`] through `?`.

// =============================================================================
// Bus Errors
// =============================================================================

/// MDIO bus transaction errors
///
/// Returned by [`MdioBus`](crate::hal::mdio::MdioBus) implementations when a
/// register read or write cannot be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// PHY address outside 0-31
    InvalidPhyAddress,
    /// Register address outside 0-31
    InvalidRegister,
    /// The bus controller did not finish the transaction in time
    Timeout,
    /// No device acknowledged the transaction
    NoResponse,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::InvalidPhyAddress => "invalid PHY address",
            BusError::InvalidRegister => "invalid register address",
            BusError::Timeout => "MDIO transaction timed out",
            BusError::NoResponse => "no response from PHY",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// Driver error
///
/// Match on the variant for specific handling:
/// ```ignore
/// match phy.init(&mut mdio, &mut delay) {
///     Err(Error::NotFound) => { /* no PHY on the bus */ }
///     Err(Error::Timeout) => { /* reset or negotiation never finished */ }
///     Err(Error::Bus(e)) => { /* MDIO failure */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No PHY responded during the address sweep
    NotFound,
    /// A bounded wait exceeded its ceiling
    Timeout,
    /// An MDIO register transaction failed
    Bus(BusError),
    /// The PHY lacks a required capability (e.g. auto-negotiation)
    Unsupported,
    /// The hardware reset pin could not be driven
    Gpio,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
            _ => write!(f, "phy: {}", self.as_str()),
        }
    }
}

impl Error {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Error::NotFound => "no PHY found on the bus",
            Error::Timeout => "operation timed out",
            Error::Bus(e) => e.as_str(),
            Error::Unsupported => "capability not supported",
            Error::Gpio => "reset pin error",
        }
    }

    /// Returns `true` if the error came from the MDIO bus
    #[must_use]
    pub const fn is_bus_error(&self) -> bool {
        matches!(self, Error::Bus(_))
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for raw bus operations
pub type BusResult<T> = core::result::Result<T, BusError>;

// =============================================================================
// Unit Tests
// =============================================================================
