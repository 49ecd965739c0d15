//! One stub per node service. Each stub owns a [`Client`](crate::Client)
//! and exposes one async method per RPC.

pub mod bank;
pub mod ibc;
pub mod slashing;
pub mod tendermint;
pub mod tx;
pub mod wasm;
