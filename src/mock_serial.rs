//! Mock serial port used by the unit tests.
//!
//! Reads are scripted: the test queues the response line(s) up front and the
//! mock hands the bytes out, then reports a timeout once they are exhausted,
//! which is how a real port with a read timeout behaves between responses.

/// Scripted stand-in for a serial port.
pub struct MockSerial {
    /// Everything the driver wrote, in order.
    write_buffer: heapless::Vec<u8, 256>,
    /// Pre-queued response bytes.
    read_buffer: heapless::Vec<u8, 256>,
    read_position: usize,
    fail_writes: bool,
    fail_reads: bool,
}

#[derive(Debug)]
pub enum MockSerialError {
    /// No more scripted data; emulates the port's read timeout.
    Timeout,
    /// A scripted buffer overflowed.
    BufferOverflow,
    /// Injected fault.
    SimulatedError,
}

impl core::fmt::Display for MockSerialError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MockSerialError::Timeout => write!(f, "timeout"),
            MockSerialError::BufferOverflow => write!(f, "buffer overflow"),
            MockSerialError::SimulatedError => write!(f, "simulated error"),
        }
    }
}

impl core::error::Error for MockSerialError {}

impl embedded_io::Error for MockSerialError {
    fn kind(&self) -> embedded_io::ErrorKind {
        match self {
            MockSerialError::Timeout => embedded_io::ErrorKind::TimedOut,
            MockSerialError::BufferOverflow => embedded_io::ErrorKind::OutOfMemory,
            MockSerialError::SimulatedError => embedded_io::ErrorKind::Other,
        }
    }
}

impl embedded_io::ErrorType for MockSerial {
    type Error = MockSerialError;
}

impl embedded_io::Write for MockSerial {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_writes {
            return Err(MockSerialError::SimulatedError);
        }
        self.write_buffer
            .extend_from_slice(buf)
            .map_err(|_| MockSerialError::BufferOverflow)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockSerialError::SimulatedError);
        }
        Ok(())
    }
}

impl embedded_io::Read for MockSerial {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_reads {
            return Err(MockSerialError::SimulatedError);
        }
        if self.read_position >= self.read_buffer.len() {
            return Err(MockSerialError::Timeout);
        }
        let available = self.read_buffer.len() - self.read_position;
        let count = core::cmp::min(buf.len(), available);
        buf[..count]
            .copy_from_slice(&self.read_buffer[self.read_position..self.read_position + count]);
        self.read_position += count;
        Ok(count)
    }
}

impl MockSerial {
    pub fn new() -> Self {
        Self {
            write_buffer: heapless::Vec::new(),
            read_buffer: heapless::Vec::new(),
            read_position: 0,
            fail_writes: false,
            fail_reads: false,
        }
    }

    /// Queue a raw response, terminator included by the caller.
    pub fn set_read_data(&mut self, data: &[u8]) -> Result<(), MockSerialError> {
        self.read_buffer.clear();
        self.read_position = 0;
        self.read_buffer
            .extend_from_slice(data)
            .map_err(|_| MockSerialError::BufferOverflow)
    }

    /// Queue a response line; the `\n` terminator is appended.
    pub fn set_response(&mut self, line: &str) {
        self.read_buffer.clear();
        self.read_position = 0;
        self.read_buffer
            .extend_from_slice(line.as_bytes())
            .expect("scripted response does not fit the mock buffer");
        self.read_buffer
            .push(b'\n')
            .expect("scripted response does not fit the mock buffer");
    }

    pub fn written_data(&self) -> &[u8] {
        &self.write_buffer
    }

    /// The captured command traffic as text.
    pub fn written_str(&self) -> &str {
        core::str::from_utf8(&self.write_buffer).unwrap_or("<non-utf8>")
    }

    pub fn clear_written_data(&mut self) {
        self.write_buffer.clear();
    }

    pub fn set_write_error(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn set_read_error(&mut self, fail: bool) {
        self.fail_reads = fail;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{Read, Write};

    #[test]
    fn captures_writes_in_order() {
        let mut mock = MockSerial::new();
        mock.write(b"VOLT ").unwrap();
        mock.write(b"5000mV\n").unwrap();
        assert_eq!(mock.written_data(), b"VOLT 5000mV\n");
        assert_eq!(mock.written_str(), "VOLT 5000mV\n");
    }

    #[test]
    fn scripted_response_is_readable() {
        let mut mock = MockSerial::new();
        mock.set_response("1.230E+01");

        let mut buf = [0u8; 32];
        let n = mock.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"1.230E+01\n");
    }

    #[test]
    fn exhausted_data_times_out() {
        let mut mock = MockSerial::new();
        mock.set_response("OK");

        let mut buf = [0u8; 32];
        mock.read(&mut buf).unwrap();
        assert!(matches!(
            mock.read(&mut buf),
            Err(MockSerialError::Timeout)
        ));
    }

    #[test]
    fn injected_faults() {
        let mut mock = MockSerial::new();
        mock.set_write_error(true);
        assert!(mock.write(b"x").is_err());

        mock.set_write_error(false);
        mock.set_response("data");
        mock.set_read_error(true);
        let mut buf = [0u8; 4];
        assert!(matches!(
            mock.read(&mut buf),
            Err(MockSerialError::SimulatedError)
        ));
    }
}
