//! Two-wire bus abstractions
//!
//! Provides the transaction-level trait for two-wire (I2C/TWI) master
//! operations, implemented by chip-specific peripherals or adapter
//! backends.

/// Error from two-wire bus operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TwiError {
    /// Hardware never signalled completion within the bounded wait
    Timeout,
    /// Slave did not acknowledge an address or data byte
    Nack,
    /// Transaction exceeded the backend's buffer capacity
    Overrun,
    /// Other bus fault (arbitration loss, line error)
    Bus,
}

/// Two-wire bus master
///
/// Models the bus at transaction level: a start condition opens a
/// transaction to one device, bytes are transferred one at a time, and a
/// stop condition releases the bus. The display path only ever writes, so
/// no read direction is modeled.
///
/// Implementations must bound every wait on hardware status flags and
/// return [`TwiError::Timeout`] on exhaustion rather than spinning
/// forever. A transaction that has been started must always be closed
/// with [`stop`](TwiBus::stop), including after a failed transfer.
pub trait TwiBus {
    /// Issue a start condition addressed to the given 7-bit address in
    /// write direction, blocking until the address phase completes.
    fn start(&mut self, address: u8) -> Result<(), TwiError>;

    /// Transfer one byte, blocking until the hardware acknowledges
    /// completion of the transfer.
    fn write_byte(&mut self, byte: u8) -> Result<(), TwiError>;

    /// Issue the stop condition, releasing the bus.
    fn stop(&mut self) -> Result<(), TwiError>;
}

/// Two-wire bus clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TwiConfig {
    /// Peripheral input clock in Hz
    pub system_clock_hz: u32,
    /// Target SCL frequency in Hz
    pub bus_clock_hz: u32,
}

impl Default for TwiConfig {
    fn default() -> Self {
        Self {
            // Stock megaAVR core clock (20 MHz / 6 prescaler)
            system_clock_hz: 3_333_333,
            bus_clock_hz: 100_000, // 100 kHz standard mode
        }
    }
}

impl TwiConfig {
    /// Standard mode (100 kHz)
    pub const fn standard(system_clock_hz: u32) -> Self {
        Self {
            system_clock_hz,
            bus_clock_hz: 100_000,
        }
    }

    /// Fast mode (400 kHz)
    pub const fn fast(system_clock_hz: u32) -> Self {
        Self {
            system_clock_hz,
            bus_clock_hz: 400_000,
        }
    }

    /// Divisor to program into the peripheral's baud register.
    ///
    /// `sysclk / (2 * scl) - 5`, the rise-time-compensated formula for
    /// megaAVR-class TWI peripherals.
    pub const fn baud_divisor(&self) -> u8 {
        (self.system_clock_hz / (2 * self.bus_clock_hz)).saturating_sub(5) as u8
    }
}
