//! Cosmos SDK records.

pub mod bank;
pub mod base;
pub mod crypto;
pub mod slashing;
pub mod tendermint;
pub mod tx;
