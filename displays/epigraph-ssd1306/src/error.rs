//! Driver error types

use epigraph_hal::TwiError;

/// Errors from display driver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Transport failure while rendering
    Bus(TwiError),
    /// A bring-up command failed; the display was left off
    Init(TwiError),
    /// Character code outside the glyph table
    UnsupportedGlyph(u8),
}

impl From<TwiError> for DriverError {
    fn from(e: TwiError) -> Self {
        DriverError::Bus(e)
    }
}
