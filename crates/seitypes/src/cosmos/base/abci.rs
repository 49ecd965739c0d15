//! `cosmos.base.abci.v1beta1`: execution results as reported by the node.

use wirepack::Any;

use crate::tendermint::abci::Event;

wirepack::message! {
    /// The outcome of a broadcast or indexed transaction.
    pub struct TxResponse {
        int64 height: i64 = 1,
        string txhash: String = 2,
        string codespace: String = 3,
        /// Zero on success.
        uint32 code: u32 = 4,
        /// Hex encoded result data.
        string data: String = 5,
        string raw_log: String = 6,
        repeated_message logs: Vec<AbciMessageLog> = 7,
        string info: String = 8,
        int64 gas_wanted: i64 = 9,
        int64 gas_used: i64 = 10,
        message tx: Option<Any> = 11,
        string timestamp: String = 12,
        repeated_message events: Vec<Event> = 13,
    }

    pub struct AbciMessageLog {
        uint32 msg_index: u32 = 1,
        string log: String = 2,
        repeated_message events: Vec<StringEvent> = 3,
    }

    pub struct StringEvent {
        string r#type: String = 1,
        repeated_message attributes: Vec<Attribute> = 2,
    }

    pub struct Attribute {
        string key: String = 1,
        string value: String = 2,
    }

    pub struct GasInfo {
        uint64 gas_wanted: u64 = 1,
        uint64 gas_used: u64 = 2,
    }

    /// The result of running a transaction's messages.
    pub struct Result {
        bytes data: Vec<u8> = 1,
        string log: String = 2,
        repeated_message events: Vec<Event> = 3,
    }
}

impl TxResponse {
    /// True if the transaction passed `CheckTx` (or `DeliverTx` when the
    /// response comes from a block).
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}
