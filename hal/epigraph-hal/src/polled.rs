//! Polled TWI transport
//!
//! Drives a register-level TWI master peripheral by busy-polling its
//! status flags, the execution model of single-task firmware with no
//! interrupts. Every wait is bounded; a stuck bus surfaces
//! [`TwiError::Timeout`] instead of hanging the caller, and a missing
//! acknowledge surfaces [`TwiError::Nack`].

use crate::twi::{TwiBus, TwiConfig, TwiError};

/// Upper bound on status-flag poll iterations per transfer
const POLL_LIMIT: u32 = 100_000;

/// Register model of a TWI master peripheral
///
/// Mirrors the register interface of megaAVR-class TWI hardware: a baud
/// register, an address register whose write triggers the start
/// condition, a data register whose write triggers a byte transfer, and a
/// status word carrying write-complete and acknowledge flags.
pub trait TwiHardware {
    /// Program the baud divisor and enable the peripheral
    fn enable(&mut self, baud_divisor: u8);

    /// Write the address register, triggering a start condition.
    /// Bit 0 is the R/W direction flag.
    fn write_address(&mut self, address_rw: u8);

    /// Write the data register, triggering a byte transfer
    fn write_data(&mut self, byte: u8);

    /// Whether the last address/data write has completed
    fn write_complete(&self) -> bool;

    /// Whether the slave acknowledged the last transferred byte.
    /// Only meaningful once [`write_complete`](TwiHardware::write_complete)
    /// reports true.
    fn acknowledged(&self) -> bool;

    /// Issue a stop condition
    fn issue_stop(&mut self);
}

/// Blocking TWI master over a polled peripheral
///
/// Construction consumes the peripheral handle, so the bus cannot be
/// configured twice or shared between owners.
pub struct PolledTwi<H> {
    hw: H,
}

impl<H: TwiHardware> PolledTwi<H> {
    /// Take ownership of the peripheral and configure the bus clock
    pub fn new(mut hw: H, config: TwiConfig) -> Self {
        hw.enable(config.baud_divisor());
        Self { hw }
    }

    /// Release the underlying peripheral
    pub fn release(self) -> H {
        self.hw
    }

    fn wait_write_complete(&self) -> Result<(), TwiError> {
        for _ in 0..POLL_LIMIT {
            if self.hw.write_complete() {
                return Ok(());
            }
        }
        Err(TwiError::Timeout)
    }

    fn transfer_completed(&self) -> Result<(), TwiError> {
        self.wait_write_complete()?;
        if !self.hw.acknowledged() {
            return Err(TwiError::Nack);
        }
        Ok(())
    }
}

impl<H: TwiHardware> TwiBus for PolledTwi<H> {
    fn start(&mut self, address: u8) -> Result<(), TwiError> {
        // R/W bit clear: write direction
        self.hw.write_address(address << 1);
        self.transfer_completed()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), TwiError> {
        self.hw.write_data(byte);
        self.transfer_completed()
    }

    fn stop(&mut self) -> Result<(), TwiError> {
        self.hw.issue_stop();
        Ok(())
    }
}
