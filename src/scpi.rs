//! SCPI command string construction.

use core::fmt;

/// Line terminator the 9151 expects after every command.
pub const TERMINATOR: u8 = b'\n';

/// A SCPI command line under construction.
///
/// Built from a fixed mnemonic, optionally marked as a query, with arguments
/// appended in instrument syntax: the first separated by a space, the rest by
/// commas (`LIST:CURR 3,500mA`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    line: String,
    has_args: bool,
}

impl Command {
    pub fn new(mnemonic: &str) -> Self {
        Self {
            line: mnemonic.to_owned(),
            has_args: false,
        }
    }

    /// Append the `?` query marker.
    pub fn query(mut self) -> Self {
        self.line.push('?');
        self
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl fmt::Display) -> Self {
        self.line.push(if self.has_args { ',' } else { ' ' });
        self.line.push_str(&arg.to_string());
        self.has_args = true;
        self
    }

    /// Whether the instrument will answer this command with a response line.
    pub fn is_query(&self) -> bool {
        self.line.contains('?')
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// The full wire form, terminator included.
    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = self.line.into_bytes();
        bytes.push(TERMINATOR);
        bytes
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
