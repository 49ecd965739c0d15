//! `cosmos.base.tendermint.v1beta1`: node and chain information served by
//! the application.

use wirepack::Any;

use super::base::{PageRequest, PageResponse};
use crate::tendermint::p2p::DefaultNodeInfo;
use crate::tendermint::types::{Block, BlockId};

wirepack::message! {
    pub struct Validator {
        string address: String = 1,
        message pub_key: Option<Any> = 2,
        int64 voting_power: i64 = 3,
        int64 proposer_priority: i64 = 4,
    }

    pub struct VersionInfo {
        string name: String = 1,
        string app_name: String = 2,
        string version: String = 3,
        string git_commit: String = 4,
        string build_tags: String = 5,
        string go_version: String = 6,
        repeated_message build_deps: Vec<Module> = 7,
        string cosmos_sdk_version: String = 8,
    }

    /// A build dependency of the node binary.
    pub struct Module {
        string path: String = 1,
        string version: String = 2,
        /// Checksum.
        string sum: String = 3,
    }

    pub struct GetValidatorSetByHeightRequest {
        int64 height: i64 = 1,
        message pagination: Option<PageRequest> = 2,
    }

    pub struct GetValidatorSetByHeightResponse {
        int64 block_height: i64 = 1,
        repeated_message validators: Vec<Validator> = 2,
        message pagination: Option<PageResponse> = 3,
    }

    pub struct GetLatestValidatorSetRequest {
        message pagination: Option<PageRequest> = 1,
    }

    pub struct GetLatestValidatorSetResponse {
        int64 block_height: i64 = 1,
        repeated_message validators: Vec<Validator> = 2,
        message pagination: Option<PageResponse> = 3,
    }

    pub struct GetBlockByHeightRequest {
        int64 height: i64 = 1,
    }

    pub struct GetBlockByHeightResponse {
        message block_id: Option<BlockId> = 1,
        message block: Option<Block> = 2,
    }

    pub struct GetLatestBlockRequest {}

    pub struct GetLatestBlockResponse {
        message block_id: Option<BlockId> = 1,
        message block: Option<Block> = 2,
    }

    pub struct GetSyncingRequest {}

    pub struct GetSyncingResponse {
        boolean syncing: bool = 1,
    }

    pub struct GetNodeInfoRequest {}

    pub struct GetNodeInfoResponse {
        message default_node_info: Option<DefaultNodeInfo> = 1,
        message application_version: Option<VersionInfo> = 2,
    }
}
