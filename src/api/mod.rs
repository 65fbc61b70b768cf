//! Backend Access
//!
//! Browser-side implementation of the cards HTTP transport.

mod transport;

pub use transport::GlooTransport;
