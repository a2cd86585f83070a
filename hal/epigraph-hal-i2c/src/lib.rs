//! embedded-hal backend for the Epigraph transport
//!
//! Adapts any [`embedded_hal::i2c::I2c`] bus to the transaction-primitive
//! [`TwiBus`] model. embedded-hal exposes whole transactions rather than
//! raw start/byte/stop signalling, so the adapter collects the bytes of
//! the open transaction in a bounded buffer and issues a single bus write
//! when the stop condition closes it.
//!
//! Transactions larger than [`MAX_TRANSACTION`] fail with
//! [`TwiError::Overrun`] rather than being truncated.

#![no_std]
#![deny(unsafe_code)]

use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use epigraph_hal::{TwiBus, TwiError};
use heapless::Vec;

/// Largest single transaction: one control byte plus a full display page row
pub const MAX_TRANSACTION: usize = 129;

/// [`TwiBus`] over an embedded-hal I2C bus
pub struct I2cTwi<I2C> {
    i2c: I2C,
    address: u8,
    buffer: Vec<u8, MAX_TRANSACTION>,
    open: bool,
}

impl<I2C: I2c> I2cTwi<I2C> {
    /// Wrap an already-configured I2C bus
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: 0,
            buffer: Vec::new(),
            open: false,
        }
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

fn map_bus_error(kind: ErrorKind) -> TwiError {
    match kind {
        ErrorKind::NoAcknowledge(_) => TwiError::Nack,
        ErrorKind::Overrun => TwiError::Overrun,
        _ => TwiError::Bus,
    }
}

impl<I2C: I2c> TwiBus for I2cTwi<I2C> {
    fn start(&mut self, address: u8) -> Result<(), TwiError> {
        self.address = address;
        self.buffer.clear();
        self.open = true;
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), TwiError> {
        self.buffer.push(byte).map_err(|_| TwiError::Overrun)
    }

    fn stop(&mut self) -> Result<(), TwiError> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        let result = self.i2c.write(self.address, &self.buffer);
        self.buffer.clear();
        result.map_err(|e| map_bus_error(e.kind()))
    }
}
