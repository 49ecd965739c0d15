//! # Seirpc
//!
//! Typed access to a Sei node over an injected [`Transport`].
//!
//! - [`services`]: one stub per node service, one async method per RPC.
//! - [`paginate`]: follow continuation keys and merge the pages.
//! - [`TxClient`]: build, sign and broadcast transactions.
//! - [`Router`]: an in-process transport serving registered handlers.
//!
//! ```no_run
//! # async fn demo(transport: std::sync::Arc<dyn seirpc::Transport>) -> seirpc::Result<()> {
//! use seirpc::services::bank::QueryClient;
//! use seitypes::cosmos::bank::QueryAllBalancesRequest;
//!
//! let bank = QueryClient::new(transport);
//! let request = QueryAllBalancesRequest { address: "sei1...".into(), ..Default::default() };
//! let balances = seirpc::fetch_all(request, |req| bank.all_balances(req)).await?;
//! println!("{} denominations", balances.balances.len());
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

pub mod client;
pub mod config;
pub mod error;
pub mod msgs;
pub mod paginate;
pub mod router;
pub mod services;
pub mod transport;
pub mod tx;

pub use client::Client;
pub use config::{Broadcast, ClientConfig};
pub use error::{Error, Result};
pub use paginate::{PageKeyed, Paginated, fetch_all};
pub use router::Router;
pub use transport::{Transport, TransportError};
pub use tx::{Signer, SignerAccount, TxClient, TxError};

#[cfg(test)]
mod tests;
