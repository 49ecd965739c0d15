//! IBC core records.

pub mod channel;
pub mod client;
