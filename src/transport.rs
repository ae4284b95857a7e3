mod error;
#[cfg(test)]
pub(crate) mod fake;
mod http;


pub use error::{Result, TransportError};
pub use http::{HttpReply, Transport, UreqTransport};
