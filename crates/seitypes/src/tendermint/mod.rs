//! Records from Tendermint's own protobuf packages.

pub mod abci;
pub mod p2p;
pub mod types;
pub mod version;
