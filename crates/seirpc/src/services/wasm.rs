//! `cosmwasm.wasm.v1`
use seitypes::cosmwasm::wasm::*;

service! {
    pub struct QueryClient = "cosmwasm.wasm.v1.Query" {
        fn contract_info = "ContractInfo" (QueryContractInfoRequest) -> QueryContractInfoResponse;
        fn contract_history = "ContractHistory" (QueryContractHistoryRequest) -> QueryContractHistoryResponse;
        fn contracts_by_code = "ContractsByCode" (QueryContractsByCodeRequest) -> QueryContractsByCodeResponse;
        fn all_contract_state = "AllContractState" (QueryAllContractStateRequest) -> QueryAllContractStateResponse;
        fn raw_contract_state = "RawContractState" (QueryRawContractStateRequest) -> QueryRawContractStateResponse;
        /// Runs a read-only JSON query against the contract.
        fn smart_contract_state = "SmartContractState" (QuerySmartContractStateRequest) -> QuerySmartContractStateResponse;
        fn code = "Code" (QueryCodeRequest) -> QueryCodeResponse;
        fn codes = "Codes" (QueryCodesRequest) -> QueryCodesResponse;
        fn pinned_codes = "PinnedCodes" (QueryPinnedCodesRequest) -> QueryPinnedCodesResponse;
    }
}

service! {
    pub struct MsgClient = "cosmwasm.wasm.v1.Msg" {
        fn store_code = "StoreCode" (MsgStoreCode) -> MsgStoreCodeResponse;
        fn instantiate_contract = "InstantiateContract" (MsgInstantiateContract) -> MsgInstantiateContractResponse;
        fn execute_contract = "ExecuteContract" (MsgExecuteContract) -> MsgExecuteContractResponse;
        fn migrate_contract = "MigrateContract" (MsgMigrateContract) -> MsgMigrateContractResponse;
        fn update_admin = "UpdateAdmin" (MsgUpdateAdmin) -> MsgUpdateAdminResponse;
        fn clear_admin = "ClearAdmin" (MsgClearAdmin) -> MsgClearAdminResponse;
    }
}
