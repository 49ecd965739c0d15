//! `cosmos.tx.v1beta1` and `cosmos.tx.signing.v1beta1`: transaction
//! envelopes, signing documents and the tx service.

use wirepack::json::{self, Map, Mode, Value};
use wirepack::{Any, Decoder, Encoder, Message, Result, WireType, field};

use super::base::abci::{GasInfo, Result as ExecResult, TxResponse};
use super::base::{Coin, PageRequest, PageResponse};

wirepack::enumeration! {
    pub enum SignMode {
        Unspecified = 0 => "SIGN_MODE_UNSPECIFIED",
        /// Sign over the protobuf encoded `SignDoc`.
        Direct = 1 => "SIGN_MODE_DIRECT",
        Textual = 2 => "SIGN_MODE_TEXTUAL",
        LegacyAminoJson = 127 => "SIGN_MODE_LEGACY_AMINO_JSON",
        Eip191 = 191 => "SIGN_MODE_EIP_191",
    }

    pub enum BroadcastMode {
        Unspecified = 0 => "BROADCAST_MODE_UNSPECIFIED",
        /// Wait for the transaction to be committed.
        Block = 1 => "BROADCAST_MODE_BLOCK",
        /// Wait for `CheckTx` only.
        Sync = 2 => "BROADCAST_MODE_SYNC",
        Async = 3 => "BROADCAST_MODE_ASYNC",
    }

    pub enum OrderBy {
        Unspecified = 0 => "ORDER_BY_UNSPECIFIED",
        Asc = 1 => "ORDER_BY_ASC",
        Desc = 2 => "ORDER_BY_DESC",
    }
}

wirepack::message! {
    pub struct Tx {
        message body: Option<TxBody> = 1,
        message auth_info: Option<AuthInfo> = 2,
        repeated_bytes signatures: Vec<Vec<u8>> = 3,
    }

    /// A transaction with its body and auth info kept as the exact bytes
    /// that were signed.
    pub struct TxRaw {
        bytes body_bytes: Vec<u8> = 1,
        bytes auth_info_bytes: Vec<u8> = 2,
        repeated_bytes signatures: Vec<Vec<u8>> = 3,
    }

    /// The document signed under `SIGN_MODE_DIRECT`.
    pub struct SignDoc {
        bytes body_bytes: Vec<u8> = 1,
        bytes auth_info_bytes: Vec<u8> = 2,
        string chain_id: String = 3,
        uint64 account_number: u64 = 4,
    }

    pub struct TxBody {
        repeated_message messages: Vec<Any> = 1,
        string memo: String = 2,
        /// Block height after which the transaction is no longer valid.
        uint64 timeout_height: u64 = 3,
        repeated_message extension_options: Vec<Any> = 1023,
        repeated_message non_critical_extension_options: Vec<Any> = 2047,
    }

    pub struct AuthInfo {
        repeated_message signer_infos: Vec<SignerInfo> = 1,
        message fee: Option<Fee> = 2,
    }

    pub struct SignerInfo {
        message public_key: Option<Any> = 1,
        message mode_info: Option<ModeInfo> = 2,
        uint64 sequence: u64 = 3,
    }

    pub struct Fee {
        repeated_message amount: Vec<Coin> = 1,
        uint64 gas_limit: u64 = 2,
        string payer: String = 3,
        string granter: String = 4,
    }

    /// A bit array whose length need not be a multiple of eight.
    pub struct CompactBitArray {
        uint32 extra_bits_stored: u32 = 1,
        bytes elems: Vec<u8> = 2,
    }
}

/// How a signer signed. Exactly one of `single` and `multi` is set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModeInfo {
    pub sum: Option<mode_info::Sum>,
}

pub mod mode_info {
    use super::{CompactBitArray, ModeInfo, SignMode};

    wirepack::message! {
        pub struct Single {
            enumeration mode: SignMode = 1,
        }

        pub struct Multi {
            message bitarray: Option<CompactBitArray> = 1,
            repeated_message mode_infos: Vec<ModeInfo> = 2,
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Sum {
        Single(Single),
        Multi(Multi),
    }
}

impl ModeInfo {
    pub fn single(mode: SignMode) -> Self {
        ModeInfo { sum: Some(mode_info::Sum::Single(mode_info::Single { mode })) }
    }
}

impl Message for ModeInfo {
    fn encode_fields(&self, enc: &mut Encoder) -> Result<()> {
        match &self.sum {
            Some(mode_info::Sum::Single(single)) => field::message::encode_one(1, single, enc),
            Some(mode_info::Sum::Multi(multi)) => field::message::encode_one(2, multi, enc),
            None => Ok(()),
        }
    }

    fn merge_field(&mut self, tag: u32, wire_type: WireType, dec: &mut Decoder<'_>, depth: usize) -> Result<()> {
        match tag {
            1 => {
                let single = field::message::decode_one(wire_type, dec, depth).map_err(|e| e.at("single"))?;
                self.sum = Some(mode_info::Sum::Single(single));
                Ok(())
            }
            2 => {
                let multi = field::message::decode_one(wire_type, dec, depth).map_err(|e| e.at("multi"))?;
                self.sum = Some(mode_info::Sum::Multi(multi));
                Ok(())
            }
            _ => dec.skip_field(tag, wire_type),
        }
    }

    fn json_fields(&self, obj: &mut Map) {
        let (single, multi) = match &self.sum {
            Some(mode_info::Sum::Single(s)) => (s.to_json(), Value::Null),
            Some(mode_info::Sum::Multi(m)) => (Value::Null, m.to_json()),
            None => (Value::Null, Value::Null),
        };
        obj.insert("single".to_owned(), single);
        obj.insert("multi".to_owned(), multi);
    }

    fn merge_json(&mut self, obj: &Map, mode: Mode, depth: usize) -> Result<()> {
        if let Some(v) = json::lookup(obj, "single") {
            let single = mode_info::Single::from_json_mode(v, mode, depth + 1).map_err(|e| e.at("single"))?;
            self.sum = Some(mode_info::Sum::Single(single));
        } else if let Some(v) = json::lookup(obj, "multi") {
            let multi = mode_info::Multi::from_json_mode(v, mode, depth + 1).map_err(|e| e.at("multi"))?;
            self.sum = Some(mode_info::Sum::Multi(multi));
        }
        Ok(())
    }
}

wirepack::message! {
    pub struct SimulateRequest {
        /// Deprecated in favour of `tx_bytes`.
        message tx: Option<Tx> = 1,
        bytes tx_bytes: Vec<u8> = 2,
    }

    pub struct SimulateResponse {
        message gas_info: Option<GasInfo> = 1,
        message result: Option<ExecResult> = 2,
    }

    pub struct GetTxRequest {
        /// Hex encoded transaction hash.
        string hash: String = 1,
    }

    pub struct GetTxResponse {
        message tx: Option<Tx> = 1,
        message tx_response: Option<TxResponse> = 2,
    }

    pub struct BroadcastTxRequest {
        bytes tx_bytes: Vec<u8> = 1,
        enumeration mode: BroadcastMode = 2,
    }

    pub struct BroadcastTxResponse {
        message tx_response: Option<TxResponse> = 1,
    }

    pub struct GetTxsEventRequest {
        /// Event queries such as `message.action='/cosmos.bank.v1beta1.MsgSend'`.
        repeated_string events: Vec<String> = 1,
        message pagination: Option<PageRequest> = 2,
        enumeration order_by: OrderBy = 3,
    }

    pub struct GetTxsEventResponse {
        repeated_message txs: Vec<Tx> = 1,
        repeated_message tx_responses: Vec<TxResponse> = 2,
        message pagination: Option<PageResponse> = 3,
    }
}

wirepack::names!("cosmos.tx.v1beta1" => Tx, TxRaw, SignDoc, TxBody, AuthInfo);
