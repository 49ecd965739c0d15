//! # Transport Abstraction
//!
//! A minimal, async interface for moving request bytes to a node and reply
//! bytes back.
//!
//! ## Philosophy
//!
//! - **Byte-Oriented**: The transport knows nothing about records or JSON.
//!   It moves opaque protobuf buffers, addressed by service and method.
//! - **Request-Response**: Every call is "send bytes, await bytes". Streams
//!   and subscriptions are not part of this interface.

use std::fmt;

/// Errors that occur at the network/transport layer.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// The node is unreachable or the connection was dropped.
    ConnectionLost(String),
    /// The operation timed out before a response was received.
    Timeout,
    /// Nothing serves this service and method.
    Unimplemented { service: String, method: String },
    /// Generic I/O error or internal transport failure.
    Io(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionLost(msg) => write!(f, "Connection lost: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
            Self::Unimplemented { service, method } => {
                write!(f, "Unimplemented: {}/{}", service, method)
            }
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

pub type Result<T> = std::result::Result<T, TransportError>;

/// A mechanism to send an encoded request and receive the encoded reply.
///
/// This trait is designed to be object-safe (`Arc<dyn Transport>`).
#[async_trait::async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Sends `data` to `service`/`method` and waits for the reply.
    ///
    /// # invariants
    /// - `service` is fully qualified, e.g. `cosmos.bank.v1beta1.Query`.
    /// - `method` is the bare RPC name, e.g. `AllBalances`.
    /// - Must return `Ok(vec)` with the raw reply bytes on success.
    /// - Should not interpret the payload content.
    async fn request(&self, service: &str, method: &str, data: &[u8]) -> Result<Vec<u8>>;
}
