//! Controller command channel
//!
//! Wraps a [`TwiBus`] with the SSD1306 addressing convention: every
//! transaction opens with the 7-bit device address and one control byte
//! selecting either the command or the data stream.

use epigraph_hal::{TwiBus, TwiError};

/// Default 7-bit device address (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte opening a command stream (Co = 0, D/C# = 0)
pub(crate) const CONTROL_COMMAND: u8 = 0x00;
/// Control byte opening a data stream (Co = 0, D/C# = 1)
pub(crate) const CONTROL_DATA: u8 = 0x40;

/// Command/data channel to one display controller
///
/// Commands go out one per transaction; data bytes for one glyph or page
/// row are batched inside a single transaction. Each call is atomic at
/// the bus level: the transaction runs start-to-stop before the method
/// returns.
pub struct Channel<B> {
    bus: B,
    address: u8,
}

impl<B: TwiBus> Channel<B> {
    /// Create a channel to the controller at the default address
    pub fn new(bus: B) -> Self {
        Self::with_address(bus, DEFAULT_ADDRESS)
    }

    /// Create a channel to a controller strapped to a non-default address
    /// (SA0 high)
    pub fn with_address(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// Send one command opcode in its own transaction
    pub fn send_command(&mut self, opcode: u8) -> Result<(), TwiError> {
        self.transaction(CONTROL_COMMAND, &[opcode])
    }

    /// Send a run of data bytes in a single transaction
    pub fn send_data(&mut self, bytes: &[u8]) -> Result<(), TwiError> {
        self.transaction(CONTROL_DATA, bytes)
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.bus
    }

    fn transaction(&mut self, control: u8, payload: &[u8]) -> Result<(), TwiError> {
        if let Err(e) = self.bus.start(self.address) {
            // Release the bus even when the address phase failed
            let _ = self.bus.stop();
            return Err(e);
        }

        let transfer = self.write_payload(control, payload);
        // The stop condition must go out even after a failed transfer so
        // the bus is never left held open.
        let stop = self.bus.stop();
        transfer.and(stop)
    }

    fn write_payload(&mut self, control: u8, payload: &[u8]) -> Result<(), TwiError> {
        self.bus.write_byte(control)?;
        for &byte in payload {
            self.bus.write_byte(byte)?;
        }
        Ok(())
    }
}
