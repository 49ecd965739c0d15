//! # RPC Client
//!
//! `Client` encapsulates one unary call: encode the request record, hand
//! the bytes to the transport, decode the reply record.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use wirepack::Message;

use crate::error::{Error, Result};
use crate::transport::{Transport, TransportError};

/// RPC client for making unary calls over a transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    timeout: Option<Duration>,
}

impl Client {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport, timeout: None }
    }

    /// Fails calls that take longer than `timeout` with
    /// [`TransportError::Timeout`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Calls `service`/`method` with `req` and decodes the reply as `Resp`.
    ///
    /// Any failure is wrapped in [`Error::Call`] naming the RPC.
    pub async fn unary<Req, Resp>(&self, service: &str, method: &str, req: &Req) -> Result<Resp>
    where
        Req: Message,
        Resp: Message,
    {
        self.call(service, method, req).await.map_err(|e| {
            warn!(service, method, error = %e, "rpc failed");
            Error::call(service, method, e)
        })
    }

    async fn call<Req: Message, Resp: Message>(
        &self,
        service: &str,
        method: &str,
        req: &Req,
    ) -> Result<Resp> {
        // prepare the request
        let payload = req.encode_to_vec()?;
        debug!(service, method, len = payload.len(), "sending request");

        // await a response
        let pending = self.transport.request(service, method, &payload);
        let reply = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, pending)
                .await
                .map_err(|_| TransportError::Timeout)??,
            None => pending.await?,
        };
        debug!(service, method, len = reply.len(), "received reply");

        Ok(Resp::decode(&reply)?)
    }
}
