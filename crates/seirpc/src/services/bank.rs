//! `cosmos.bank.v1beta1`
use seitypes::cosmos::bank::*;

service! {
    /// Balances, supply and denomination metadata.
    pub struct QueryClient = "cosmos.bank.v1beta1.Query" {
        fn balance = "Balance" (QueryBalanceRequest) -> QueryBalanceResponse;
        fn all_balances = "AllBalances" (QueryAllBalancesRequest) -> QueryAllBalancesResponse;
        /// Balances minus the locked portion of vesting accounts.
        fn spendable_balances = "SpendableBalances" (QuerySpendableBalancesRequest) -> QuerySpendableBalancesResponse;
        fn total_supply = "TotalSupply" (QueryTotalSupplyRequest) -> QueryTotalSupplyResponse;
        fn supply_of = "SupplyOf" (QuerySupplyOfRequest) -> QuerySupplyOfResponse;
        fn params = "Params" (QueryParamsRequest) -> QueryParamsResponse;
        fn denom_metadata = "DenomMetadata" (QueryDenomMetadataRequest) -> QueryDenomMetadataResponse;
        fn denoms_metadata = "DenomsMetadata" (QueryDenomsMetadataRequest) -> QueryDenomsMetadataResponse;
    }
}

service! {
    pub struct MsgClient = "cosmos.bank.v1beta1.Msg" {
        fn send = "Send" (MsgSend) -> MsgSendResponse;
        fn multi_send = "MultiSend" (MsgMultiSend) -> MsgMultiSendResponse;
    }
}
