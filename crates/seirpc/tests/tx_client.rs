//! Signing and broadcasting through a mocked node.

use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use seirpc::msgs;
use seirpc::services::tx::ServiceClient;
use seirpc::{ClientConfig, Router, Signer, SignerAccount, TransportError, TxClient, TxError};
use seitypes::cosmos::bank::MsgSend;
use seitypes::cosmos::base::Coin;
use seitypes::cosmos::base::abci::{GasInfo, TxResponse};
use seitypes::cosmos::crypto::secp256k1;
use seitypes::cosmos::tx::{
    AuthInfo, BroadcastMode, BroadcastTxRequest, BroadcastTxResponse, ModeInfo, SignDoc, SignMode,
    SimulateRequest, SimulateResponse, TxBody, TxRaw,
};
use seitypes::cosmwasm::wasm::MsgExecuteContract;
use tracing_subscriber::EnvFilter;
use wirepack::{Any, Message};

const SIGNATURE_LEN: usize = 64;

/// `RUST_LOG=seirpc=debug cargo test` shows the rpc and tx logs.
fn init_logger() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Signs by echoing a fixed-width digest of the document, and keeps every
/// document it was asked to sign.
struct MockSigner {
    signed: Mutex<Vec<Vec<u8>>>,
}

impl MockSigner {
    fn new() -> Arc<Self> {
        Arc::new(Self { signed: Mutex::new(Vec::new()) })
    }

    fn public_key() -> Any {
        Any::pack(&secp256k1::PubKey { key: vec![2; 33] }).unwrap()
    }
}

#[async_trait::async_trait]
impl Signer for MockSigner {
    async fn account(&self) -> anyhow::Result<SignerAccount> {
        Ok(SignerAccount {
            address: "sei1sender".into(),
            public_key: Self::public_key(),
            account_number: 7,
            sequence: 3,
        })
    }

    async fn sign_direct(&self, sign_doc: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.signed.lock().unwrap().push(sign_doc.to_vec());
        Ok(vec![sign_doc.len() as u8; SIGNATURE_LEN])
    }
}

struct LockedSigner;

#[async_trait::async_trait]
impl Signer for LockedSigner {
    async fn account(&self) -> anyhow::Result<SignerAccount> {
        anyhow::bail!("keyring is locked")
    }

    async fn sign_direct(&self, _sign_doc: &[u8]) -> anyhow::Result<Vec<u8>> {
        anyhow::bail!("keyring is locked")
    }
}

fn send(amount: u64) -> Any {
    msgs::msg_send(MsgSend {
        from_address: "sei1sender".into(),
        to_address: "sei1receiver".into(),
        amount: vec![Coin::new(amount, "usei")],
    })
    .unwrap()
}

/// A node that records broadcast requests and answers with `code`.
fn node(code: u32, broadcasts: Arc<Mutex<Vec<BroadcastTxRequest>>>) -> Router {
    let router = Router::new();
    router.route_typed(ServiceClient::SERVICE, "BroadcastTx", move |req: BroadcastTxRequest| {
        broadcasts.lock().unwrap().push(req);
        async move {
            Ok(BroadcastTxResponse {
                tx_response: Some(TxResponse { txhash: "ABCDEF".into(), code, ..Default::default() }),
            })
        }
    });
    router.route_typed(ServiceClient::SERVICE, "Simulate", |req: SimulateRequest| async move {
        let raw = TxRaw::decode(&req.tx_bytes).map_err(|e| TransportError::Io(e.to_string()))?;
        let body = TxBody::decode(&raw.body_bytes).map_err(|e| TransportError::Io(e.to_string()))?;
        let used = 50_000 * body.messages.len() as u64;
        Ok::<_, TransportError>(SimulateResponse {
            gas_info: Some(GasInfo { gas_wanted: 0, gas_used: used }),
            result: None,
        })
    });
    router
}

// ============================================================================
//  MISSING SIGNER
// ============================================================================

#[tokio::test]
async fn test_missing_signer() {
    let client = TxClient::new(Arc::new(Router::new()), ClientConfig::default());

    let err = client.sign_and_broadcast(vec![send(1)], vec![], "").await.unwrap_err();
    assert!(matches!(err, TxError::MissingSigner));
    assert_eq!(err.to_string(), "Could not initialize signing client: a signer is required");

    let err = client.simulate(vec![send(1)], "").await.unwrap_err();
    assert!(matches!(err, TxError::MissingSigner));
}

#[tokio::test]
async fn test_signer_failure_is_reported() {
    let client = TxClient::new(Arc::new(Router::new()), ClientConfig::default())
        .with_signer(Arc::new(LockedSigner));
    let err = client.sign_and_broadcast(vec![send(1)], vec![], "").await.unwrap_err();
    assert!(matches!(err, TxError::Signing(_)));
    assert!(err.to_string().contains("keyring is locked"));
}

// ============================================================================
//  BROADCAST
// ============================================================================

#[tokio::test]
async fn test_sign_and_broadcast() -> Result<()> {
    init_logger();
    let broadcasts = Arc::new(Mutex::new(Vec::new()));
    let signer = MockSigner::new();
    let config = ClientConfig { chain_id: "atlantic-2".into(), ..Default::default() };
    let client = TxClient::new(Arc::new(node(0, broadcasts.clone())), config).with_signer(signer.clone());

    let fee = vec![Coin::new(2000, "usei")];
    let response = client.sign_and_broadcast(vec![send(5)], fee.clone(), "hello").await?;
    assert_eq!(response.txhash, "ABCDEF");
    assert!(response.is_ok());

    let sent = broadcasts.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].mode, BroadcastMode::Sync);

    let raw = TxRaw::decode(&sent[0].tx_bytes)?;
    assert_eq!(raw.signatures.len(), 1);
    assert_eq!(raw.signatures[0].len(), SIGNATURE_LEN);

    let body = TxBody::decode(&raw.body_bytes)?;
    assert_eq!(body.memo, "hello");
    assert_eq!(body.messages, vec![send(5)]);
    assert_eq!(body.messages[0].type_url, "/cosmos.bank.v1beta1.MsgSend");

    let auth = AuthInfo::decode(&raw.auth_info_bytes)?;
    let fee_info = auth.fee.clone().unwrap_or_default();
    assert_eq!(fee_info.gas_limit, 200_000);
    assert_eq!(fee_info.amount, fee);
    assert_eq!(auth.signer_infos.len(), 1);
    assert_eq!(auth.signer_infos[0].sequence, 3);
    assert_eq!(auth.signer_infos[0].mode_info, Some(ModeInfo::single(SignMode::Direct)));
    assert_eq!(auth.signer_infos[0].public_key, Some(MockSigner::public_key()));

    // the signer saw exactly the sign doc over the broadcast bytes
    let signed = signer.signed.lock().unwrap().clone();
    assert_eq!(signed.len(), 1);
    let doc = SignDoc::decode(&signed[0])?;
    assert_eq!(doc.chain_id, "atlantic-2");
    assert_eq!(doc.account_number, 7);
    assert_eq!(doc.body_bytes, raw.body_bytes);
    assert_eq!(doc.auth_info_bytes, raw.auth_info_bytes);
    Ok(())
}

#[tokio::test]
async fn test_rejected_tx_is_returned() -> Result<()> {
    init_logger();
    let broadcasts = Arc::new(Mutex::new(Vec::new()));
    let config = ClientConfig::from_json_str(r#"{"broadcast_mode": "block"}"#)?;
    let client = TxClient::new(Arc::new(node(5, broadcasts.clone())), config).with_signer(MockSigner::new());

    let response = client.sign_and_broadcast(vec![send(1)], vec![], "").await?;
    assert_eq!(response.code, 5);
    assert!(!response.is_ok());
    assert_eq!(broadcasts.lock().unwrap()[0].mode, BroadcastMode::Block);
    Ok(())
}

#[tokio::test]
async fn test_broadcast_failure_names_the_messages() -> Result<()> {
    init_logger();
    let router = Router::new();
    router.route(ServiceClient::SERVICE, "BroadcastTx", |_| async {
        Err(TransportError::ConnectionLost("reset by peer".into()))
    });
    let client = TxClient::new(Arc::new(router), ClientConfig::default()).with_signer(MockSigner::new());

    let exec = msgs::msg_execute_contract(MsgExecuteContract {
        sender: "sei1sender".into(),
        contract: "sei1contract".into(),
        msg: msgs::contract_msg(&serde_json::json!({ "increment": {} }))?,
        funds: vec![],
    })?;
    let err = client.sign_and_broadcast(vec![send(1), exec], vec![], "").await.unwrap_err();

    let TxError::Broadcast { msg, source } = &err else {
        panic!("expected a broadcast error, got {:?}", err);
    };
    assert_eq!(msg, "/cosmos.bank.v1beta1.MsgSend,/cosmwasm.wasm.v1.MsgExecuteContract");
    assert_eq!(
        source.root(),
        &seirpc::Error::Transport(TransportError::ConnectionLost("reset by peer".into()))
    );
    assert!(err.to_string().starts_with("Could not broadcast /cosmos.bank.v1beta1.MsgSend"));
    Ok(())
}

#[tokio::test]
async fn test_missing_tx_response() {
    let router = Router::new();
    router.route(ServiceClient::SERVICE, "BroadcastTx", |_| async { Ok(Vec::new()) });
    let client = TxClient::new(Arc::new(router), ClientConfig::default()).with_signer(MockSigner::new());

    let err = client.sign_and_broadcast(vec![send(1)], vec![], "").await.unwrap_err();
    assert!(matches!(err, TxError::MissingResponse));
}

// ============================================================================
//  SIMULATION
// ============================================================================

#[tokio::test]
async fn test_simulate() -> Result<()> {
    let client = TxClient::new(Arc::new(node(0, Default::default())), ClientConfig::default())
        .with_signer(MockSigner::new());
    let gas = client.simulate(vec![send(1), send(2)], "").await?;
    assert_eq!(gas.gas_used, 100_000);
    Ok(())
}

#[tokio::test]
async fn test_auto_gas_uses_adjusted_simulation() -> Result<()> {
    init_logger();
    let broadcasts = Arc::new(Mutex::new(Vec::new()));
    let config = ClientConfig { auto_gas: true, gas_adjustment: 1.5, ..Default::default() };
    let signer = MockSigner::new();
    let client = TxClient::new(Arc::new(node(0, broadcasts.clone())), config).with_signer(signer.clone());

    client.sign_and_broadcast(vec![send(1)], vec![], "").await?;

    let sent = broadcasts.lock().unwrap().clone();
    let raw = TxRaw::decode(&sent[0].tx_bytes)?;
    let auth = AuthInfo::decode(&raw.auth_info_bytes)?;
    assert_eq!(auth.fee.map(|f| f.gas_limit), Some(75_000));
    // simulation is not signed
    assert_eq!(signer.signed.lock().unwrap().len(), 1);
    Ok(())
}
