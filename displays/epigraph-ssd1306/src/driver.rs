//! SSD1306 text-mode driver
//!
//! Owns the command channel and drives the controller through bring-up,
//! cursor addressing, and glyph streaming. Display memory lives entirely
//! in the controller: the driver holds no local copy of the panel
//! contents.

use epigraph_hal::TwiBus;

use crate::channel::Channel;
use crate::command as cmd;
use crate::error::DriverError;
use crate::font::{self, GLYPH_COLUMNS};

/// Panel width in pixel columns
pub const WIDTH: u8 = 128;

/// Physical columns occupied by one character cell (glyph plus blank
/// separator column)
pub const CHAR_COLUMNS: u8 = GLYPH_COLUMNS as u8 + 1;

/// Supported panel geometries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplaySize {
    /// 128x64 panel, 8 pages
    W128H64,
    /// 128x32 panel, 4 pages
    W128H32,
}

impl DisplaySize {
    /// Panel height in pixel rows
    pub const fn height(self) -> u8 {
        match self {
            DisplaySize::W128H64 => 64,
            DisplaySize::W128H32 => 32,
        }
    }

    /// Number of 8-row pages
    pub const fn pages(self) -> u8 {
        self.height() / 8
    }

    /// Multiplex ratio parameter byte (height - 1)
    const fn multiplex(self) -> u8 {
        self.height() - 1
    }
}

/// SSD1306 driver over a command channel
pub struct Ssd1306<B> {
    channel: Channel<B>,
    size: DisplaySize,
}

impl<B: TwiBus> Ssd1306<B> {
    /// Create a driver for a panel at the default device address
    pub fn new(bus: B, size: DisplaySize) -> Self {
        Self {
            channel: Channel::new(bus),
            size,
        }
    }

    /// Create a driver over an existing channel
    pub fn with_channel(channel: Channel<B>, size: DisplaySize) -> Self {
        Self { channel, size }
    }

    /// Bring the controller from power-on state to a ready,
    /// normal-polarity, page-addressed display.
    ///
    /// Must run once, before any rendering. The command order and
    /// parameter bytes are a controller contract: reordering or omitting
    /// steps yields an uninitialized or visually corrupted panel. If any
    /// transaction fails the sequence aborts with [`DriverError::Init`]
    /// and the display stays off.
    pub fn init(&mut self) -> Result<(), DriverError> {
        let sequence: [u8; 23] = [
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // suggested ratio
            cmd::SET_MULTIPLEX,
            self.size.multiplex(),
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE, // line 0
            cmd::CHARGE_PUMP,
            0x14, // internal charge pump on
            cmd::MEMORY_MODE,
            0x00, // page addressing
            cmd::SEG_REMAP,
            cmd::COM_SCAN_DEC,
            cmd::SET_CONTRAST,
            0x8F,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::DISPLAY_ALL_ON_RESUME,
            cmd::NORMAL_DISPLAY,
            cmd::DISPLAY_ON,
        ];

        for byte in sequence {
            self.channel.send_command(byte).map_err(DriverError::Init)?;
        }
        Ok(())
    }

    /// Position the cursor at a pixel column and page row.
    ///
    /// Issues the three page-mode addressing commands. Must be called
    /// before writing to a new row or after any operation that leaves the
    /// cursor undefined. Columns past the panel edge and pages past the
    /// configured geometry are the caller's responsibility.
    pub fn set_cursor(&mut self, column: u8, page: u8) -> Result<(), DriverError> {
        self.channel.send_command(cmd::page_address(page))?;
        self.channel.send_command(cmd::column_low(column))?;
        self.channel.send_command(cmd::column_high(column))?;
        Ok(())
    }

    /// Write one character at the current cursor position.
    ///
    /// Emits the five glyph columns plus a one-column blank separator as
    /// a single data transaction, so each character occupies six physical
    /// columns. The controller's auto-increment advances the cursor; no
    /// wrap check is made at the 128-column row edge.
    ///
    /// Codes without a glyph fail with [`DriverError::UnsupportedGlyph`]
    /// before any bus traffic.
    pub fn write_char(&mut self, code: u8) -> Result<(), DriverError> {
        let glyph = font::glyph(code)?;
        let mut cell = [0u8; CHAR_COLUMNS as usize];
        cell[..GLYPH_COLUMNS].copy_from_slice(glyph);
        self.channel.send_data(&cell)?;
        Ok(())
    }

    /// Write a string at the current cursor position, no line wrapping.
    ///
    /// Characters without a glyph are skipped and rendering continues;
    /// transport errors abort the remainder of the string.
    pub fn write_str(&mut self, text: &str) -> Result<(), DriverError> {
        for &code in text.as_bytes() {
            match self.write_char(code) {
                Ok(()) | Err(DriverError::UnsupportedGlyph(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Blank the whole panel, one page row per data transaction
    pub fn clear(&mut self) -> Result<(), DriverError> {
        const BLANK_PAGE: [u8; WIDTH as usize] = [0; WIDTH as usize];
        for page in 0..self.size.pages() {
            self.set_cursor(0, page)?;
            self.channel.send_data(&BLANK_PAGE)?;
        }
        Ok(())
    }

    /// Set the display contrast
    pub fn set_contrast(&mut self, value: u8) -> Result<(), DriverError> {
        self.channel.send_command(cmd::SET_CONTRAST)?;
        self.channel.send_command(value)?;
        Ok(())
    }

    /// Turn the panel on or off. Display memory is retained while off.
    pub fn display_on(&mut self, on: bool) -> Result<(), DriverError> {
        let opcode = if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF };
        self.channel.send_command(opcode)?;
        Ok(())
    }

    /// Configured panel geometry
    pub fn size(&self) -> DisplaySize {
        self.size
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.channel.release()
    }
}
