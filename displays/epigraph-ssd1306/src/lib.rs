//! Text-mode driver for SSD1306-class OLED displays
//!
//! Renders ASCII text onto a monochrome 128-column dot-matrix panel over
//! a two-wire bus. The controller's page-mode addressing does the pixel
//! bookkeeping: the driver keeps no frame buffer, and every character is
//! a direct one-shot bus transaction of glyph columns.
//!
//! # Architecture
//!
//! ```text
//! caller
//!   │  set_cursor / write_str
//!   ▼
//! Ssd1306 (init sequence, cursor addressing, glyph streaming)
//!   │  send_command / send_data
//!   ▼
//! Channel (device address, command/data control bytes)
//!   │  start / write_byte / stop
//!   ▼
//! TwiBus implementation (epigraph-hal)
//! ```
//!
//! Initialization runs once, synchronously, before any rendering. All bus
//! operations block until the transport reports completion or a bounded
//! wait expires.

#![no_std]
#![deny(unsafe_code)]

pub mod channel;
pub mod command;
pub mod driver;
pub mod error;
pub mod font;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export key types at crate root for convenience
pub use channel::{Channel, DEFAULT_ADDRESS};
pub use driver::{DisplaySize, Ssd1306, CHAR_COLUMNS, WIDTH};
pub use error::DriverError;
pub use font::{glyph, GLYPH_COLUMNS};
