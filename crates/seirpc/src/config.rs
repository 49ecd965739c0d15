//! Transaction client configuration.

use seitypes::cosmos::tx::BroadcastMode;
use serde::{Deserialize, Serialize};

/// Default chain id.
pub const DEFAULT_CHAIN_ID: &str = "sei-chain";

/// Default gas limit attached to every transaction.
pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

/// Default multiplier applied to simulated gas.
pub const DEFAULT_GAS_ADJUSTMENT: f64 = 1.0;

/// How long `BroadcastTx` waits before replying.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Broadcast {
    /// Return after `CheckTx`.
    #[default]
    Sync,
    /// Return immediately.
    Async,
    /// Return once the transaction is in a block.
    Block,
}

impl From<Broadcast> for BroadcastMode {
    fn from(mode: Broadcast) -> Self {
        match mode {
            Broadcast::Sync => BroadcastMode::Sync,
            Broadcast::Async => BroadcastMode::Async,
            Broadcast::Block => BroadcastMode::Block,
        }
    }
}

/// Transaction client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Chain id signed into every `SignDoc`.
    #[serde(default = "default_chain_id")]
    pub chain_id: String,

    /// Gas limit used when `auto_gas` is off.
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,

    #[serde(default)]
    pub broadcast_mode: Broadcast,

    /// Multiplier applied to the simulated gas when `auto_gas` is on.
    #[serde(default = "default_gas_adjustment")]
    pub gas_adjustment: f64,

    /// Simulate each transaction first and derive its gas limit.
    #[serde(default)]
    pub auto_gas: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            gas_limit: DEFAULT_GAS_LIMIT,
            broadcast_mode: Broadcast::default(),
            gas_adjustment: DEFAULT_GAS_ADJUSTMENT,
            auto_gas: false,
        }
    }
}

impl ClientConfig {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// The gas limit for a transaction that simulated to `gas_used`.
    pub fn adjusted_gas(&self, gas_used: u64) -> u64 {
        (gas_used as f64 * self.gas_adjustment).ceil() as u64
    }
}

fn default_chain_id() -> String {
    DEFAULT_CHAIN_ID.to_string()
}

fn default_gas_limit() -> u64 {
    DEFAULT_GAS_LIMIT
}

fn default_gas_adjustment() -> f64 {
    DEFAULT_GAS_ADJUSTMENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config() {
        let config = ClientConfig::default();
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(config.gas_limit, 200_000);
        assert_eq!(config.broadcast_mode, Broadcast::Sync);
        assert_eq!(config.gas_adjustment, 1.0);
        assert!(!config.auto_gas);
    }

    #[test]
    fn test_client_config_serde_roundtrip() {
        let config = ClientConfig {
            chain_id: "atlantic-2".to_string(),
            gas_limit: 350_000,
            broadcast_mode: Broadcast::Block,
            gas_adjustment: 1.5,
            auto_gas: true,
        };
        let serialized = serde_json::to_string(&config).expect("serialize");
        let deserialized = ClientConfig::from_json_str(&serialized).expect("deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_client_config_serde_defaults() {
        let config = ClientConfig::from_json_str("{}").expect("deserialize");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_client_config_partial_defaults() {
        let config = ClientConfig::from_json_str(r#"{"broadcast_mode": "async"}"#).expect("deserialize");
        assert_eq!(config.broadcast_mode, Broadcast::Async);
        assert_eq!(config.gas_limit, DEFAULT_GAS_LIMIT);
        assert_eq!(config.chain_id, DEFAULT_CHAIN_ID);

        assert!(ClientConfig::from_json_str(r#"{"broadcast_mode": "eventually"}"#).is_err());
    }

    #[test]
    fn test_broadcast_mode_conversion() {
        assert_eq!(BroadcastMode::from(Broadcast::Sync), BroadcastMode::Sync);
        assert_eq!(BroadcastMode::from(Broadcast::Block), BroadcastMode::Block);
    }

    #[test]
    fn test_adjusted_gas() {
        let config = ClientConfig { gas_adjustment: 1.5, ..Default::default() };
        assert_eq!(config.adjusted_gas(100_001), 150_002);
        assert_eq!(ClientConfig::default().adjusted_gas(81_234), 81_234);
    }
}
