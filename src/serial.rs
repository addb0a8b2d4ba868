//! serialport-backed transport and the crate's connection entry point.

use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::psu::Bkp9151;

/// Factory default baud rate of the 9151's serial interface.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// The port could not be opened; fatal to construction.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("cannot open serial port: {0}")]
    Open(#[from] serialport::Error),
}

/// A platform serial port usable as the driver's interface.
///
/// serialport hands out [std::io] traits; this wrapper exposes them through
/// [embedded_io], whose `std` feature covers the error conversion.
pub struct SerialTransport(Box<dyn serialport::SerialPort>);

impl embedded_io::ErrorType for SerialTransport {
    type Error = io::Error;
}

impl embedded_io::Read for SerialTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        io::Read::read(&mut self.0, buf)
    }
}

impl embedded_io::Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        io::Write::write(&mut self.0, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        io::Write::flush(&mut self.0)
    }
}

/// Open `device` at `baud_rate` and bind a driver to it.
///
/// The 9151 uses 8 data bits, 1 stop bit and no parity, which are
/// serialport's defaults. `read_timeout` bounds every query; the supply can
/// take a while to answer, so a few hundred milliseconds is a reasonable
/// floor.
pub fn connect(
    device: &str,
    baud_rate: u32,
    read_timeout: Duration,
) -> Result<Bkp9151<SerialTransport>, ConnectError> {
    let port = serialport::new(device, baud_rate)
        .timeout(read_timeout)
        .open()?;
    Ok(Bkp9151::new(SerialTransport(port)))
}
