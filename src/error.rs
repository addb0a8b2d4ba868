//! Error types for 9151 communications.

use thiserror::Error;

pub type Result<T, I> = core::result::Result<T, Error<I>>;

/// Errors surfaced by façade operations.
///
/// Every error propagates straight to the caller; there is no internal retry
/// and a failed set command leaves the instrument in whatever state it
/// reached.
#[derive(Error, Debug)]
pub enum Error<I: embedded_io::Error> {
    /// The transport failed while writing the command or reading the reply.
    #[error("serial communication error")]
    Serial(I),
    /// No response arrived before the transport's configured read timeout.
    #[error("communication timeout")]
    Timeout,
    /// The response line did not fit the receive buffer.
    #[error("response exceeded the receive buffer")]
    Overflow,
    /// The response bytes were not valid UTF-8.
    #[error("response is not valid text: {0}")]
    Decode(#[from] core::str::Utf8Error),
    /// A parameter was outside the range the instrument documents.
    #[error("parameter out of the instrument's documented range")]
    InvalidRange,
    /// A query answered with something the typed operation cannot interpret.
    #[error("unexpected response: {0:?}")]
    UnexpectedResponse(String),
}
