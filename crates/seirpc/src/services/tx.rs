//! `cosmos.tx.v1beta1`
use seitypes::cosmos::tx::*;

service! {
    pub struct ServiceClient = "cosmos.tx.v1beta1.Service" {
        /// Runs a transaction without committing it, reporting gas use.
        fn simulate = "Simulate" (SimulateRequest) -> SimulateResponse;
        fn get_tx = "GetTx" (GetTxRequest) -> GetTxResponse;
        fn broadcast_tx = "BroadcastTx" (BroadcastTxRequest) -> BroadcastTxResponse;
        fn get_txs_event = "GetTxsEvent" (GetTxsEventRequest) -> GetTxsEventResponse;
    }
}
