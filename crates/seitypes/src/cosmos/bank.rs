//! `cosmos.bank.v1beta1`: balances, supply and denomination metadata.

use super::base::{Coin, PageRequest, PageResponse};

wirepack::message! {
    pub struct Params {
        repeated_message send_enabled: Vec<SendEnabled> = 1,
        boolean default_send_enabled: bool = 2,
    }

    /// Overrides `default_send_enabled` for one denomination.
    pub struct SendEnabled {
        string denom: String = 1,
        boolean enabled: bool = 2,
    }

    pub struct Input {
        string address: String = 1,
        repeated_message coins: Vec<Coin> = 2,
    }

    pub struct Output {
        string address: String = 1,
        repeated_message coins: Vec<Coin> = 2,
    }

    pub struct Supply {
        repeated_message total: Vec<Coin> = 1,
    }

    pub struct DenomUnit {
        string denom: String = 1,
        /// Power of ten relative to the base denomination.
        uint32 exponent: u32 = 2,
        repeated_string aliases: Vec<String> = 3,
    }

    pub struct Metadata {
        string description: String = 1,
        repeated_message denom_units: Vec<DenomUnit> = 2,
        string base: String = 3,
        string display: String = 4,
        string name: String = 5,
        string symbol: String = 6,
    }

    pub struct Balance {
        string address: String = 1,
        repeated_message coins: Vec<Coin> = 2,
    }
}

wirepack::message! {
    pub struct QueryBalanceRequest {
        string address: String = 1,
        string denom: String = 2,
    }

    pub struct QueryBalanceResponse {
        message balance: Option<Coin> = 1,
    }

    pub struct QueryAllBalancesRequest {
        string address: String = 1,
        message pagination: Option<PageRequest> = 2,
    }

    pub struct QueryAllBalancesResponse {
        repeated_message balances: Vec<Coin> = 1,
        message pagination: Option<PageResponse> = 2,
    }

    pub struct QuerySpendableBalancesRequest {
        string address: String = 1,
        message pagination: Option<PageRequest> = 2,
    }

    pub struct QuerySpendableBalancesResponse {
        repeated_message balances: Vec<Coin> = 1,
        message pagination: Option<PageResponse> = 2,
    }

    pub struct QueryTotalSupplyRequest {
        message pagination: Option<PageRequest> = 1,
    }

    pub struct QueryTotalSupplyResponse {
        repeated_message supply: Vec<Coin> = 1,
        message pagination: Option<PageResponse> = 2,
    }

    pub struct QuerySupplyOfRequest {
        string denom: String = 1,
    }

    pub struct QuerySupplyOfResponse {
        message amount: Option<Coin> = 1,
    }

    pub struct QueryParamsRequest {}

    pub struct QueryParamsResponse {
        message params: Option<Params> = 1,
    }

    pub struct QueryDenomMetadataRequest {
        string denom: String = 1,
    }

    pub struct QueryDenomMetadataResponse {
        message metadata: Option<Metadata> = 1,
    }

    pub struct QueryDenomsMetadataRequest {
        message pagination: Option<PageRequest> = 1,
    }

    pub struct QueryDenomsMetadataResponse {
        repeated_message metadatas: Vec<Metadata> = 1,
        message pagination: Option<PageResponse> = 2,
    }
}

wirepack::message! {
    /// Moves coins from one account to another.
    pub struct MsgSend {
        string from_address: String = 1,
        string to_address: String = 2,
        repeated_message amount: Vec<Coin> = 3,
    }

    pub struct MsgSendResponse {}

    /// Moves coins between many accounts. Inputs and outputs must balance.
    pub struct MsgMultiSend {
        repeated_message inputs: Vec<Input> = 1,
        repeated_message outputs: Vec<Output> = 2,
    }

    pub struct MsgMultiSendResponse {}
}

wirepack::names!("cosmos.bank.v1beta1" => MsgSend, MsgMultiSend, Params, Metadata);
