//! This crate provides an interface for controlling the BK Precision 9151
//! single-channel programmable DC power supply over its serial SCPI port.
//!
//! Commands are plain ASCII lines; responses are decoded into typed values
//! (floats, integers, `ON`/`OFF` booleans, null sentinels, strings and
//! comma-separated tuples) by [response::decode]. The driver itself is
//! generic over any [embedded_io::Read] + [embedded_io::Write] interface;
//! with the default `serial` feature, [serial::connect] opens a real port.
//!
//! The serial port should be configured like so:
//! * Baud rate: as selected on the front panel (factory default 9600)
//! * Data bits: 8
//! * Stop bits: 1
//! * Parity: None
//! * A read timeout; the driver does no waiting of its own
//!
//! ```no_run
//! use std::time::Duration;
//! use bkp9151::types::State;
//!
//! let mut psu = bkp9151::serial::connect("/dev/ttyUSB0", 9600, Duration::from_millis(300))?;
//! println!("{}", psu.identification()?);
//! psu.set_remote()?;
//! psu.set_voltage_mv(5_000)?;
//! psu.set_current_ma(100)?;
//! psu.set_output_state(State::On)?;
//! println!("measured {} V", psu.read_voltage_v()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod psu;
pub mod response;
pub mod scpi;
pub mod status;
pub mod types;

#[cfg(feature = "serial")]
pub mod serial;

#[cfg(test)]
mod mock_serial;
