//! Epigraph Hardware Abstraction Layer
//!
//! This crate defines the two-wire bus transport used by the display
//! driver, so the same driver code can run against a real TWI peripheral,
//! a generic embedded-hal I2C bus, or a test mock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Display driver (epigraph-ssd1306)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  epigraph-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  PolledTwi    │       │ epigraph-hal- │
//! │ (this crate)  │       │     i2c       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`twi::TwiBus`] - transaction-level bus master operations
//! - [`polled::TwiHardware`] - register model for polled TWI peripherals

#![no_std]
#![deny(unsafe_code)]

pub mod polled;
pub mod twi;

// Re-export key types at crate root for convenience
pub use polled::{PolledTwi, TwiHardware};
pub use twi::{TwiBus, TwiConfig, TwiError};
