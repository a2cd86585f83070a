//! Test support: a recording bus transport
//!
//! Records transaction boundaries and byte sequences so tests can assert
//! the exact wire traffic a driver operation produces.

use epigraph_hal::{TwiBus, TwiError};
use heapless::Vec;

use crate::channel::{CONTROL_COMMAND, CONTROL_DATA};

/// Upper bound on bytes one recorded transaction can hold
pub const MAX_TRANSACTION_BYTES: usize = 136;

/// One completed bus transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub address: u8,
    /// Control byte followed by the payload
    pub bytes: Vec<u8, MAX_TRANSACTION_BYTES>,
}

/// Bus transport that records every transaction for assertions
#[derive(Debug, Default)]
pub struct RecordingBus {
    /// Transactions closed by a stop condition, in order
    pub transactions: Vec<Transaction, 64>,
    /// Fail the nth byte transfer of the session with a timeout
    pub fail_byte_at: Option<usize>,
    /// Stop conditions issued, including after failed transfers
    pub stops: usize,
    open: Option<Transaction>,
    written: usize,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded transactions that opened a data stream
    pub fn data_transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.bytes.first() == Some(&CONTROL_DATA))
    }

    /// Opcode of every single-command transaction, in emission order
    pub fn command_opcodes(&self) -> Vec<u8, 64> {
        self.transactions
            .iter()
            .filter(|t| t.bytes.first() == Some(&CONTROL_COMMAND) && t.bytes.len() == 2)
            .map(|t| t.bytes[1])
            .collect()
    }
}

impl TwiBus for RecordingBus {
    fn start(&mut self, address: u8) -> Result<(), TwiError> {
        self.open = Some(Transaction {
            address,
            bytes: Vec::new(),
        });
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), TwiError> {
        if self.fail_byte_at == Some(self.written) {
            return Err(TwiError::Timeout);
        }
        self.written += 1;
        let open = self.open.as_mut().ok_or(TwiError::Bus)?;
        open.bytes.push(byte).map_err(|_| TwiError::Overrun)
    }

    fn stop(&mut self) -> Result<(), TwiError> {
        self.stops += 1;
        if let Some(transaction) = self.open.take() {
            self.transactions
                .push(transaction)
                .map_err(|_| TwiError::Bus)?;
        }
        Ok(())
    }
}
