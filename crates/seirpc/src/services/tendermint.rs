//! `cosmos.base.tendermint.v1beta1`
use seitypes::cosmos::tendermint::*;

service! {
    /// Node, block and validator set introspection.
    pub struct ServiceClient = "cosmos.base.tendermint.v1beta1.Service" {
        fn get_node_info = "GetNodeInfo" (GetNodeInfoRequest) -> GetNodeInfoResponse;
        fn get_syncing = "GetSyncing" (GetSyncingRequest) -> GetSyncingResponse;
        fn get_latest_block = "GetLatestBlock" (GetLatestBlockRequest) -> GetLatestBlockResponse;
        fn get_block_by_height = "GetBlockByHeight" (GetBlockByHeightRequest) -> GetBlockByHeightResponse;
        fn get_latest_validator_set = "GetLatestValidatorSet" (GetLatestValidatorSetRequest) -> GetLatestValidatorSetResponse;
        fn get_validator_set_by_height = "GetValidatorSetByHeight" (GetValidatorSetByHeightRequest) -> GetValidatorSetByHeightResponse;
    }
}
