//! # Seitypes
//!
//! Record definitions for the modules a Sei client talks to, grouped the way
//! their protobuf packages are:
//!
//! - `cosmos`: bank, slashing, tendermint info, tx plumbing and shared base types.
//! - `tendermint`: blocks, peers and ABCI events.
//! - `ibc`: channel handshakes and packets.
//! - `cosmwasm`: contract code and instances.
//!
//! Every record implements [`wirepack::Message`]. Messages that travel
//! inside a transaction also implement [`wirepack::Name`], so they can be
//! packed with [`wirepack::Any::pack`].

pub mod cosmos;
pub mod cosmwasm;
pub mod ibc;
pub mod tendermint;

pub use wirepack::{Any, Duration, Message, Name, Timestamp};
