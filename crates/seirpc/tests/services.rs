//! Every stub addresses its RPC by the verbatim service and method name.

use std::sync::Arc;
use std::sync::Mutex;

use seirpc::services::{bank, ibc, slashing, tendermint, tx, wasm};
use seirpc::transport;
use seirpc::Transport;

/// Records each request and replies with an empty (all default) record.
#[derive(Default)]
struct RecordingTransport {
    calls: Mutex<Vec<String>>,
}

impl RecordingTransport {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn request(&self, service: &str, method: &str, _data: &[u8]) -> transport::Result<Vec<u8>> {
        self.calls.lock().unwrap().push(format!("{}/{}", service, method));
        Ok(Vec::new())
    }
}

fn expected(service: &str, methods: &[&str]) -> Vec<String> {
    methods.iter().map(|m| format!("{}/{}", service, m)).collect()
}

#[tokio::test]
async fn test_bank_names() -> seirpc::Result<()> {
    let recorder = Arc::new(RecordingTransport::default());

    let query = bank::QueryClient::new(recorder.clone());
    query.balance(Default::default()).await?;
    query.all_balances(Default::default()).await?;
    query.spendable_balances(Default::default()).await?;
    query.total_supply(Default::default()).await?;
    query.supply_of(Default::default()).await?;
    query.params(Default::default()).await?;
    query.denom_metadata(Default::default()).await?;
    query.denoms_metadata(Default::default()).await?;
    assert_eq!(
        recorder.take(),
        expected(
            "cosmos.bank.v1beta1.Query",
            &[
                "Balance",
                "AllBalances",
                "SpendableBalances",
                "TotalSupply",
                "SupplyOf",
                "Params",
                "DenomMetadata",
                "DenomsMetadata",
            ]
        )
    );

    let msg = bank::MsgClient::new(recorder.clone());
    msg.send(Default::default()).await?;
    msg.multi_send(Default::default()).await?;
    assert_eq!(recorder.take(), expected("cosmos.bank.v1beta1.Msg", &["Send", "MultiSend"]));
    Ok(())
}

#[tokio::test]
async fn test_slashing_names() -> seirpc::Result<()> {
    let recorder = Arc::new(RecordingTransport::default());

    let query = slashing::QueryClient::new(recorder.clone());
    query.params(Default::default()).await?;
    query.signing_info(Default::default()).await?;
    query.signing_infos(Default::default()).await?;
    assert_eq!(
        recorder.take(),
        expected("cosmos.slashing.v1beta1.Query", &["Params", "SigningInfo", "SigningInfos"])
    );

    slashing::MsgClient::new(recorder.clone()).unjail(Default::default()).await?;
    assert_eq!(recorder.take(), expected("cosmos.slashing.v1beta1.Msg", &["Unjail"]));
    Ok(())
}

#[tokio::test]
async fn test_tendermint_and_tx_names() -> seirpc::Result<()> {
    let recorder = Arc::new(RecordingTransport::default());

    let service = tendermint::ServiceClient::new(recorder.clone());
    service.get_node_info(Default::default()).await?;
    service.get_syncing(Default::default()).await?;
    service.get_latest_block(Default::default()).await?;
    service.get_block_by_height(Default::default()).await?;
    service.get_latest_validator_set(Default::default()).await?;
    service.get_validator_set_by_height(Default::default()).await?;
    assert_eq!(
        recorder.take(),
        expected(
            "cosmos.base.tendermint.v1beta1.Service",
            &[
                "GetNodeInfo",
                "GetSyncing",
                "GetLatestBlock",
                "GetBlockByHeight",
                "GetLatestValidatorSet",
                "GetValidatorSetByHeight",
            ]
        )
    );

    let service = tx::ServiceClient::new(recorder.clone());
    service.simulate(Default::default()).await?;
    service.get_tx(Default::default()).await?;
    service.broadcast_tx(Default::default()).await?;
    service.get_txs_event(Default::default()).await?;
    assert_eq!(
        recorder.take(),
        expected("cosmos.tx.v1beta1.Service", &["Simulate", "GetTx", "BroadcastTx", "GetTxsEvent"])
    );
    Ok(())
}

#[tokio::test]
async fn test_ibc_channel_names() -> seirpc::Result<()> {
    let recorder = Arc::new(RecordingTransport::default());

    let query = ibc::QueryClient::new(recorder.clone());
    query.channel(Default::default()).await?;
    query.channels(Default::default()).await?;
    query.connection_channels(Default::default()).await?;
    query.channel_client_state(Default::default()).await?;
    query.channel_consensus_state(Default::default()).await?;
    query.packet_commitment(Default::default()).await?;
    query.packet_commitments(Default::default()).await?;
    query.packet_receipt(Default::default()).await?;
    query.packet_acknowledgement(Default::default()).await?;
    query.packet_acknowledgements(Default::default()).await?;
    query.unreceived_packets(Default::default()).await?;
    query.unreceived_acks(Default::default()).await?;
    query.next_sequence_receive(Default::default()).await?;
    assert_eq!(
        recorder.take(),
        expected(
            "ibc.core.channel.v1.Query",
            &[
                "Channel",
                "Channels",
                "ConnectionChannels",
                "ChannelClientState",
                "ChannelConsensusState",
                "PacketCommitment",
                "PacketCommitments",
                "PacketReceipt",
                "PacketAcknowledgement",
                "PacketAcknowledgements",
                "UnreceivedPackets",
                "UnreceivedAcks",
                "NextSequenceReceive",
            ]
        )
    );

    let msg = ibc::MsgClient::new(recorder.clone());
    msg.channel_open_init(Default::default()).await?;
    msg.channel_open_try(Default::default()).await?;
    msg.channel_open_ack(Default::default()).await?;
    msg.channel_open_confirm(Default::default()).await?;
    msg.channel_close_init(Default::default()).await?;
    msg.channel_close_confirm(Default::default()).await?;
    msg.recv_packet(Default::default()).await?;
    msg.timeout(Default::default()).await?;
    msg.timeout_on_close(Default::default()).await?;
    msg.acknowledgement(Default::default()).await?;
    assert_eq!(
        recorder.take(),
        expected(
            "ibc.core.channel.v1.Msg",
            &[
                "ChannelOpenInit",
                "ChannelOpenTry",
                "ChannelOpenAck",
                "ChannelOpenConfirm",
                "ChannelCloseInit",
                "ChannelCloseConfirm",
                "RecvPacket",
                "Timeout",
                "TimeoutOnClose",
                "Acknowledgement",
            ]
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_wasm_names() -> seirpc::Result<()> {
    let recorder = Arc::new(RecordingTransport::default());

    let query = wasm::QueryClient::new(recorder.clone());
    query.contract_info(Default::default()).await?;
    query.contract_history(Default::default()).await?;
    query.contracts_by_code(Default::default()).await?;
    query.all_contract_state(Default::default()).await?;
    query.raw_contract_state(Default::default()).await?;
    query.smart_contract_state(Default::default()).await?;
    query.code(Default::default()).await?;
    query.codes(Default::default()).await?;
    query.pinned_codes(Default::default()).await?;
    assert_eq!(
        recorder.take(),
        expected(
            "cosmwasm.wasm.v1.Query",
            &[
                "ContractInfo",
                "ContractHistory",
                "ContractsByCode",
                "AllContractState",
                "RawContractState",
                "SmartContractState",
                "Code",
                "Codes",
                "PinnedCodes",
            ]
        )
    );

    let msg = wasm::MsgClient::new(recorder.clone());
    msg.store_code(Default::default()).await?;
    msg.instantiate_contract(Default::default()).await?;
    msg.execute_contract(Default::default()).await?;
    msg.migrate_contract(Default::default()).await?;
    msg.update_admin(Default::default()).await?;
    msg.clear_admin(Default::default()).await?;
    assert_eq!(
        recorder.take(),
        expected(
            "cosmwasm.wasm.v1.Msg",
            &[
                "StoreCode",
                "InstantiateContract",
                "ExecuteContract",
                "MigrateContract",
                "UpdateAdmin",
                "ClearAdmin",
            ]
        )
    );
    Ok(())
}
