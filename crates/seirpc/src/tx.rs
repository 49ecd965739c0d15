//! # Transaction Client
//!
//! Builds, signs and broadcasts transactions. Signing is delegated to an
//! injected [`Signer`]; the client only assembles the documents it signs:
//!
//! 1. `TxBody` from the packed messages and memo.
//! 2. `AuthInfo` for a single `SIGN_MODE_DIRECT` signer, with the fee and
//!    a gas limit from config (or from simulation when `auto_gas` is set).
//! 3. `SignDoc` over both, signed and wrapped as a `TxRaw`.

use std::fmt;
use std::sync::Arc;

use seitypes::cosmos::base::Coin;
use seitypes::cosmos::base::abci::{GasInfo, TxResponse};
use seitypes::cosmos::tx::{
    AuthInfo, BroadcastTxRequest, Fee, ModeInfo, SignDoc, SignMode, SignerInfo, SimulateRequest,
    TxBody, TxRaw,
};
use tracing::{debug, warn};
use wirepack::{Any, Message};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::services::tx::ServiceClient;
use crate::transport::Transport;

/// The on-chain state of the signing account.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignerAccount {
    pub address: String,
    /// Packed public key, e.g. a `/cosmos.crypto.secp256k1.PubKey`.
    pub public_key: Any,
    pub account_number: u64,
    pub sequence: u64,
}

/// Holds the keys. Implementations may be a local keyring or a wallet.
#[async_trait::async_trait]
pub trait Signer: Send + Sync + 'static {
    async fn account(&self) -> anyhow::Result<SignerAccount>;

    /// Signs the encoded `SignDoc`, returning the raw signature.
    async fn sign_direct(&self, sign_doc: &[u8]) -> anyhow::Result<Vec<u8>>;
}

#[derive(Debug)]
pub enum TxError {
    /// No signer was configured.
    MissingSigner,
    /// The signer failed to report its account or to sign.
    Signing(anyhow::Error),
    /// Broadcasting `msg` failed.
    Broadcast { msg: String, source: Error },
    Rpc(Error),
    /// The node replied without a result.
    MissingResponse,
}

impl fmt::Display for TxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSigner => write!(f, "Could not initialize signing client: a signer is required"),
            Self::Signing(e) => write!(f, "Signing failed: {}", e),
            Self::Broadcast { msg, source } => write!(f, "Could not broadcast {}: {}", msg, source),
            Self::Rpc(e) => write!(f, "{}", e),
            Self::MissingResponse => write!(f, "Node returned an empty response"),
        }
    }
}

impl std::error::Error for TxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Signing(e) => Some(&**e),
            Self::Broadcast { source, .. } => Some(source),
            Self::Rpc(e) => Some(e),
            Self::MissingSigner | Self::MissingResponse => None,
        }
    }
}

impl From<Error> for TxError {
    fn from(e: Error) -> Self {
        Self::Rpc(e)
    }
}

impl From<wirepack::Error> for TxError {
    fn from(e: wirepack::Error) -> Self {
        Self::Rpc(Error::Codec(e))
    }
}

pub type Result<T> = std::result::Result<T, TxError>;

#[derive(Clone)]
pub struct TxClient {
    service: ServiceClient,
    config: ClientConfig,
    signer: Option<Arc<dyn Signer>>,
}

impl TxClient {
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { service: ServiceClient::new(transport), config, signer: None }
    }

    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Signs `msgs` into one transaction and broadcasts it with the
    /// configured mode.
    ///
    /// A response with a non-zero code is returned as is: the node accepted
    /// the request but rejected the transaction.
    pub async fn sign_and_broadcast(
        &self,
        msgs: Vec<Any>,
        fee: Vec<Coin>,
        memo: impl Into<String>,
    ) -> Result<TxResponse> {
        let signer = self.signer()?;
        let account = signer.account().await.map_err(TxError::Signing)?;
        let label = describe(&msgs);

        let body = TxBody { messages: msgs, memo: memo.into(), ..Default::default() };
        let gas_limit = if self.config.auto_gas {
            let gas = self.simulate_body(&body, &account).await?;
            self.config.adjusted_gas(gas.gas_used)
        } else {
            self.config.gas_limit
        };

        let auth_info = auth_info(&account, fee, gas_limit);
        let raw = self.sign(signer.as_ref(), &account, &body, &auth_info).await?;
        debug!(msgs = %label, gas_limit, sequence = account.sequence, "broadcasting tx");

        let request = BroadcastTxRequest {
            tx_bytes: raw.encode_to_vec()?,
            mode: self.config.broadcast_mode.into(),
        };
        let response = self
            .service
            .broadcast_tx(request)
            .await
            .map_err(|source| TxError::Broadcast { msg: label.clone(), source })?;

        let tx_response = response.tx_response.ok_or(TxError::MissingResponse)?;
        if !tx_response.is_ok() {
            warn!(
                msgs = %label,
                code = tx_response.code,
                codespace = %tx_response.codespace,
                raw_log = %tx_response.raw_log,
                "transaction rejected"
            );
        }
        Ok(tx_response)
    }

    /// Estimates the gas `msgs` would use, without signing them.
    pub async fn simulate(&self, msgs: Vec<Any>, memo: impl Into<String>) -> Result<GasInfo> {
        let signer = self.signer()?;
        let account = signer.account().await.map_err(TxError::Signing)?;
        let body = TxBody { messages: msgs, memo: memo.into(), ..Default::default() };
        self.simulate_body(&body, &account).await
    }

    async fn simulate_body(&self, body: &TxBody, account: &SignerAccount) -> Result<GasInfo> {
        let auth_info = auth_info(account, Vec::new(), self.config.gas_limit);

        // the node checks the signature count, not the signatures
        let raw = TxRaw {
            body_bytes: body.encode_to_vec()?,
            auth_info_bytes: auth_info.encode_to_vec()?,
            signatures: vec![Vec::new()],
        };

        let request = SimulateRequest { tx_bytes: raw.encode_to_vec()?, ..Default::default() };
        let response = self.service.simulate(request).await?;
        let gas = response.gas_info.ok_or(TxError::MissingResponse)?;
        debug!(gas_wanted = gas.gas_wanted, gas_used = gas.gas_used, "simulated tx");
        Ok(gas)
    }

    async fn sign(
        &self,
        signer: &dyn Signer,
        account: &SignerAccount,
        body: &TxBody,
        auth_info: &AuthInfo,
    ) -> Result<TxRaw> {
        let body_bytes = body.encode_to_vec()?;
        let auth_info_bytes = auth_info.encode_to_vec()?;
        let doc = SignDoc {
            body_bytes: body_bytes.clone(),
            auth_info_bytes: auth_info_bytes.clone(),
            chain_id: self.config.chain_id.clone(),
            account_number: account.account_number,
        };

        let signature = signer.sign_direct(&doc.encode_to_vec()?).await.map_err(TxError::Signing)?;
        Ok(TxRaw { body_bytes, auth_info_bytes, signatures: vec![signature] })
    }

    fn signer(&self) -> Result<Arc<dyn Signer>> {
        self.signer.clone().ok_or(TxError::MissingSigner)
    }
}

fn auth_info(account: &SignerAccount, fee: Vec<Coin>, gas_limit: u64) -> AuthInfo {
    AuthInfo {
        signer_infos: vec![SignerInfo {
            public_key: Some(account.public_key.clone()),
            mode_info: Some(ModeInfo::single(SignMode::Direct)),
            sequence: account.sequence,
        }],
        fee: Some(Fee { amount: fee, gas_limit, ..Default::default() }),
    }
}

/// `/cosmos.bank.v1beta1.MsgSend,/cosmwasm.wasm.v1.MsgExecuteContract`
fn describe(msgs: &[Any]) -> String {
    msgs.iter().map(|m| m.type_url.as_str()).collect::<Vec<_>>().join(",")
}
