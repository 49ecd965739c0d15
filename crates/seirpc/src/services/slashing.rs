//! `cosmos.slashing.v1beta1`
use seitypes::cosmos::slashing::*;

service! {
    pub struct QueryClient = "cosmos.slashing.v1beta1.Query" {
        fn params = "Params" (QueryParamsRequest) -> QueryParamsResponse;
        fn signing_info = "SigningInfo" (QuerySigningInfoRequest) -> QuerySigningInfoResponse;
        fn signing_infos = "SigningInfos" (QuerySigningInfosRequest) -> QuerySigningInfosResponse;
    }
}

service! {
    pub struct MsgClient = "cosmos.slashing.v1beta1.Msg" {
        fn unjail = "Unjail" (MsgUnjail) -> MsgUnjailResponse;
    }
}
