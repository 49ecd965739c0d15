//! `cosmwasm.wasm.v1`: contract code, instances and their state.

use wirepack::Any;

use crate::cosmos::base::{Coin, PageRequest, PageResponse};

wirepack::enumeration! {
    /// Who may instantiate a code or upload new code.
    pub enum AccessType {
        Unspecified = 0 => "ACCESS_TYPE_UNSPECIFIED",
        Nobody = 1 => "ACCESS_TYPE_NOBODY",
        OnlyAddress = 2 => "ACCESS_TYPE_ONLY_ADDRESS",
        Everybody = 3 => "ACCESS_TYPE_EVERYBODY",
    }

    pub enum ContractCodeHistoryOperationType {
        Unspecified = 0 => "CONTRACT_CODE_HISTORY_OPERATION_TYPE_UNSPECIFIED",
        Init = 1 => "CONTRACT_CODE_HISTORY_OPERATION_TYPE_INIT",
        Migrate = 2 => "CONTRACT_CODE_HISTORY_OPERATION_TYPE_MIGRATE",
        Genesis = 3 => "CONTRACT_CODE_HISTORY_OPERATION_TYPE_GENESIS",
    }
}

wirepack::message! {
    pub struct AccessConfig {
        enumeration permission: AccessType = 1,
        /// Only meaningful with `ACCESS_TYPE_ONLY_ADDRESS`.
        string address: String = 2,
    }

    pub struct Params {
        message code_upload_access: Option<AccessConfig> = 1,
        enumeration instantiate_default_permission: AccessType = 2,
    }

    pub struct CodeInfo {
        bytes code_hash: Vec<u8> = 1,
        string creator: String = 2,
        message instantiate_config: Option<AccessConfig> = 5,
    }

    pub struct ContractInfo {
        uint64 code_id: u64 = 1,
        string creator: String = 2,
        string admin: String = 3,
        string label: String = 4,
        message created: Option<AbsoluteTxPosition> = 5,
        string ibc_port_id: String = 6,
        /// Chain specific metadata.
        message extension: Option<Any> = 7,
    }

    pub struct ContractCodeHistoryEntry {
        enumeration operation: ContractCodeHistoryOperationType = 1,
        uint64 code_id: u64 = 2,
        message updated: Option<AbsoluteTxPosition> = 3,
        /// The JSON message the contract was instantiated or migrated with.
        bytes msg: Vec<u8> = 4,
    }

    /// Where a contract was created: block height, then position in block.
    pub struct AbsoluteTxPosition {
        uint64 block_height: u64 = 1,
        uint64 tx_index: u64 = 2,
    }

    /// One raw key/value pair of contract storage.
    pub struct Model {
        bytes key: Vec<u8> = 1,
        bytes value: Vec<u8> = 2,
    }
}

wirepack::message! {
    pub struct MsgStoreCode {
        string sender: String = 1,
        /// Raw or gzip compressed wasm.
        bytes wasm_byte_code: Vec<u8> = 2,
        message instantiate_permission: Option<AccessConfig> = 5,
    }

    pub struct MsgStoreCodeResponse {
        uint64 code_id: u64 = 1,
    }

    pub struct MsgInstantiateContract {
        string sender: String = 1,
        string admin: String = 2,
        uint64 code_id: u64 = 3,
        string label: String = 4,
        /// JSON encoded instantiate message.
        bytes msg: Vec<u8> = 5,
        repeated_message funds: Vec<Coin> = 6,
    }

    pub struct MsgInstantiateContractResponse {
        string address: String = 1,
        bytes data: Vec<u8> = 2,
    }

    pub struct MsgExecuteContract {
        string sender: String = 1,
        string contract: String = 2,
        /// JSON encoded execute message.
        bytes msg: Vec<u8> = 3,
        repeated_message funds: Vec<Coin> = 5,
    }

    pub struct MsgExecuteContractResponse {
        bytes data: Vec<u8> = 1,
    }

    pub struct MsgMigrateContract {
        string sender: String = 1,
        string contract: String = 2,
        uint64 code_id: u64 = 3,
        bytes msg: Vec<u8> = 4,
    }

    pub struct MsgMigrateContractResponse {
        bytes data: Vec<u8> = 1,
    }

    pub struct MsgUpdateAdmin {
        string sender: String = 1,
        string new_admin: String = 2,
        string contract: String = 3,
    }

    pub struct MsgUpdateAdminResponse {}

    pub struct MsgClearAdmin {
        string sender: String = 1,
        string contract: String = 3,
    }

    pub struct MsgClearAdminResponse {}
}

wirepack::message! {
    pub struct QueryContractInfoRequest {
        string address: String = 1,
    }

    pub struct QueryContractInfoResponse {
        string address: String = 1,
        message contract_info: Option<ContractInfo> = 2,
    }

    pub struct QueryContractHistoryRequest {
        string address: String = 1,
        message pagination: Option<PageRequest> = 2,
    }

    pub struct QueryContractHistoryResponse {
        repeated_message entries: Vec<ContractCodeHistoryEntry> = 1,
        message pagination: Option<PageResponse> = 2,
    }

    pub struct QueryContractsByCodeRequest {
        uint64 code_id: u64 = 1,
        message pagination: Option<PageRequest> = 2,
    }

    pub struct QueryContractsByCodeResponse {
        repeated_string contracts: Vec<String> = 1,
        message pagination: Option<PageResponse> = 2,
    }

    pub struct QueryAllContractStateRequest {
        string address: String = 1,
        message pagination: Option<PageRequest> = 2,
    }

    pub struct QueryAllContractStateResponse {
        repeated_message models: Vec<Model> = 1,
        message pagination: Option<PageResponse> = 2,
    }

    pub struct QueryRawContractStateRequest {
        string address: String = 1,
        bytes query_data: Vec<u8> = 2,
    }

    pub struct QueryRawContractStateResponse {
        bytes data: Vec<u8> = 1,
    }

    pub struct QuerySmartContractStateRequest {
        string address: String = 1,
        /// JSON encoded query message.
        bytes query_data: Vec<u8> = 2,
    }

    pub struct QuerySmartContractStateResponse {
        bytes data: Vec<u8> = 1,
    }

    pub struct QueryCodeRequest {
        uint64 code_id: u64 = 1,
    }

    pub struct CodeInfoResponse {
        uint64 code_id: u64 = 1,
        string creator: String = 2,
        bytes data_hash: Vec<u8> = 3,
        message instantiate_permission: Option<AccessConfig> = 6,
    }

    pub struct QueryCodeResponse {
        message code_info: Option<CodeInfoResponse> = 1,
        /// The wasm byte code.
        bytes data: Vec<u8> = 2,
    }

    pub struct QueryCodesRequest {
        message pagination: Option<PageRequest> = 1,
    }

    pub struct QueryCodesResponse {
        repeated_message code_infos: Vec<CodeInfoResponse> = 1,
        message pagination: Option<PageResponse> = 2,
    }

    pub struct QueryPinnedCodesRequest {
        message pagination: Option<PageRequest> = 2,
    }

    pub struct QueryPinnedCodesResponse {
        repeated_uint64 code_ids: Vec<u64> = 1,
        message pagination: Option<PageResponse> = 2,
    }
}

wirepack::names!(
    "cosmwasm.wasm.v1" =>
    MsgStoreCode,
    MsgInstantiateContract,
    MsgExecuteContract,
    MsgMigrateContract,
    MsgUpdateAdmin,
    MsgClearAdmin,
    ContractInfo,
);
