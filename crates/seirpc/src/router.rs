//! # In-Process Router
//!
//! A [`Transport`] that serves requests from handlers registered in the
//! same process, keyed by service and method. Used to stand in for a node
//! in tests and local tooling.

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;
use wirepack::Message;

use crate::transport::{self, Transport, TransportError};

type Handler = Arc<dyn Fn(Vec<u8>) -> BoxFuture<'static, transport::Result<Vec<u8>>> + Send + Sync>;

/// Dispatches `(service, method)` to a registered async handler.
#[derive(Default, Clone)]
pub struct Router {
    routes: Arc<DashMap<(String, String), Handler>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler over raw request bytes, replacing any previous
    /// handler for the same route.
    pub fn route<F, Fut>(&self, service: &str, method: &str, handler: F) -> &Self
    where
        F: Fn(Vec<u8>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = transport::Result<Vec<u8>>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |data| handler(data).boxed());
        self.routes.insert((service.to_owned(), method.to_owned()), handler);
        self
    }

    /// Registers a handler over decoded records. Requests that fail to
    /// decode and replies that fail to encode surface as
    /// [`TransportError::Io`].
    pub fn route_typed<Req, Resp, F, Fut>(&self, service: &str, method: &str, handler: F) -> &Self
    where
        Req: Message,
        Resp: Message,
        F: Fn(Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = transport::Result<Resp>> + Send + 'static,
    {
        let handler = Arc::new(handler);
        self.route(service, method, move |data| {
            let handler = handler.clone();
            async move {
                let req = Req::decode(&data)
                    .map_err(|e| TransportError::Io(format!("Failed to decode request: {}", e)))?;
                let resp = handler(req).await?;
                resp.encode_to_vec()
                    .map_err(|e| TransportError::Io(format!("Failed to encode reply: {}", e)))
            }
        })
    }

    pub fn contains(&self, service: &str, method: &str) -> bool {
        self.routes.contains_key(&(service.to_owned(), method.to_owned()))
    }
}

#[async_trait::async_trait]
impl Transport for Router {
    async fn request(&self, service: &str, method: &str, data: &[u8]) -> transport::Result<Vec<u8>> {
        // clone out of the map so no shard lock is held across the await
        let handler = self
            .routes
            .get(&(service.to_owned(), method.to_owned()))
            .map(|entry| entry.value().clone());

        let Some(handler) = handler else {
            debug!(service, method, "no route");
            return Err(TransportError::Unimplemented {
                service: service.to_owned(),
                method: method.to_owned(),
            });
        };

        handler(data.to_vec()).await
    }
}
