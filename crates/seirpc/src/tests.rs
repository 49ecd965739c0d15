//! Tests for the client, router and pagination over in-process transports.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use seitypes::cosmos::bank::{
    QueryAllBalancesRequest, QueryAllBalancesResponse, QueryBalanceRequest, QueryBalanceResponse,
};
use seitypes::cosmos::base::{Coin, PageRequest, PageResponse};
use seitypes::cosmos::tx::{GetTxsEventResponse, Tx};
use seitypes::cosmos::base::abci::TxResponse;
use wirepack::Message;

use crate::error::Error;
use crate::paginate::{PageKeyed, Paginated};
use crate::router::Router;
use crate::transport::{self, Transport, TransportError};
use crate::client::Client;

const BANK: &str = "cosmos.bank.v1beta1.Query";

/// Never replies.
struct StalledTransport;

#[async_trait::async_trait]
impl Transport for StalledTransport {
    async fn request(&self, _service: &str, _method: &str, _data: &[u8]) -> transport::Result<Vec<u8>> {
        futures::future::pending().await
    }
}

fn balance_router() -> Router {
    let router = Router::new();
    router.route_typed(BANK, "Balance", |req: QueryBalanceRequest| async move {
        Ok(QueryBalanceResponse { balance: Some(Coin::new(req.address.len(), req.denom)) })
    });
    router
}

// ============================================================================
//  CLIENT / ROUTER
// ============================================================================

#[tokio::test]
async fn test_unary_roundtrip() -> Result<()> {
    let client = Client::new(Arc::new(balance_router()));
    let req = QueryBalanceRequest { address: "sei1abc".into(), denom: "usei".into() };
    let resp: QueryBalanceResponse = client.unary(BANK, "Balance", &req).await?;
    assert_eq!(resp.balance, Some(Coin::new(7, "usei")));
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_unimplemented() {
    let client = Client::new(Arc::new(balance_router()));
    let err = client
        .unary::<_, QueryBalanceResponse>(BANK, "Balances", &QueryBalanceRequest::default())
        .await
        .unwrap_err();

    assert_eq!(
        err.root(),
        &Error::Transport(TransportError::Unimplemented {
            service: BANK.into(),
            method: "Balances".into(),
        })
    );
    assert_eq!(
        err.to_string(),
        "cosmos.bank.v1beta1.Query/Balances failed: Transport error: Unimplemented: cosmos.bank.v1beta1.Query/Balances"
    );
}

#[tokio::test]
async fn test_malformed_reply_is_codec_error() {
    let router = Router::new();
    // a lone key with no value
    router.route(BANK, "Balance", |_| async { Ok(vec![0x0a]) });

    let client = Client::new(Arc::new(router));
    let err = client
        .unary::<_, QueryBalanceResponse>(BANK, "Balance", &QueryBalanceRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err.root(), Error::Codec(_)));
}

#[tokio::test]
async fn test_handler_rejects_malformed_request() {
    let router = balance_router();
    let err = router.request(BANK, "Balance", &[0xff]).await.unwrap_err();
    assert!(matches!(err, TransportError::Io(_)));
}

#[tokio::test]
async fn test_timeout() {
    let client = Client::new(Arc::new(StalledTransport)).with_timeout(Duration::from_millis(20));
    let err = client
        .unary::<_, QueryBalanceResponse>(BANK, "Balance", &QueryBalanceRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.root(), &Error::Transport(TransportError::Timeout));
}

#[tokio::test]
async fn test_route_replacement() -> Result<()> {
    let router = Router::new();
    router.route(BANK, "Params", |_| async { Err(TransportError::Io("first".into())) });
    router.route(BANK, "Params", |_| async { Ok(Vec::new()) });
    assert!(router.contains(BANK, "Params"));
    assert!(router.request(BANK, "Params", &[]).await?.is_empty());
    Ok(())
}

// ============================================================================
//  PAGINATION
// ============================================================================

#[test]
fn test_with_page_key_creates_request() {
    let req = QueryAllBalancesRequest { address: "sei1abc".into(), ..Default::default() };
    let keyed = req.clone().with_page_key(vec![9]);
    assert_eq!(keyed.pagination, Some(PageRequest::after(vec![9])));
    assert_eq!(keyed.address, req.address);

    // other page settings survive
    let limited = QueryAllBalancesRequest {
        pagination: Some(PageRequest { limit: 50, ..Default::default() }),
        ..Default::default()
    };
    let keyed = limited.with_page_key(vec![1, 2]);
    assert_eq!(keyed.pagination, Some(PageRequest { key: vec![1, 2], limit: 50, ..Default::default() }));
}

#[test]
fn test_next_key_ignores_empty() {
    let mut resp = QueryAllBalancesResponse::default();
    assert_eq!(resp.next_key(), None);

    resp.pagination = Some(PageResponse::default());
    assert_eq!(resp.next_key(), None);

    resp.pagination = Some(PageResponse { next_key: vec![4], total: 0 });
    assert_eq!(resp.next_key(), Some(&[4u8][..]));
}

#[test]
fn test_merge_page_concatenates_every_repeated_field() {
    let tx = |memo: &str| Tx {
        body: Some(seitypes::cosmos::tx::TxBody { memo: memo.into(), ..Default::default() }),
        ..Default::default()
    };
    let hash = |h: &str| TxResponse { txhash: h.into(), ..Default::default() };

    let mut first = GetTxsEventResponse {
        txs: vec![tx("a")],
        tx_responses: vec![hash("A")],
        pagination: Some(PageResponse { next_key: vec![1], total: 3 }),
    };
    let second = GetTxsEventResponse {
        txs: vec![tx("b"), tx("c")],
        tx_responses: vec![hash("B"), hash("C")],
        pagination: Some(PageResponse { next_key: vec![], total: 3 }),
    };

    first.merge_page(second);
    assert_eq!(first.txs, vec![tx("a"), tx("b"), tx("c")]);
    assert_eq!(first.tx_responses, vec![hash("A"), hash("B"), hash("C")]);
    assert_eq!(first.next_key(), None);
    assert_eq!(first.pagination.map(|p| p.total), Some(3));
}

#[tokio::test]
async fn test_fetch_all_propagates_errors() -> Result<()> {
    let router = Router::new();
    router.route_typed(BANK, "AllBalances", |req: QueryAllBalancesRequest| async move {
        if req.pagination.is_some() {
            return Err(TransportError::ConnectionLost("node went away".into()));
        }
        Ok(QueryAllBalancesResponse {
            balances: vec![Coin::new(1, "usei")],
            pagination: Some(PageResponse { next_key: vec![1], total: 0 }),
        })
    });

    let client = Client::new(Arc::new(router));
    let result = crate::fetch_all(QueryAllBalancesRequest::default(), |req| {
        let client = client.clone();
        async move { client.unary::<_, QueryAllBalancesResponse>(BANK, "AllBalances", &req).await }
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(
        err.root(),
        &Error::Transport(TransportError::ConnectionLost("node went away".into()))
    );
    Ok(())
}

#[test]
fn test_paged_response_bytes_survive_merge() -> Result<()> {
    let mut merged = QueryAllBalancesResponse {
        balances: vec![Coin::new(1, "a")],
        pagination: Some(PageResponse { next_key: vec![1], total: 0 }),
    };
    merged.merge_page(QueryAllBalancesResponse { balances: vec![Coin::new(2, "b")], pagination: None });
    let decoded = QueryAllBalancesResponse::decode(&merged.encode_to_vec()?)?;
    assert_eq!(decoded.balances.len(), 2);
    assert_eq!(decoded.pagination, None);
    Ok(())
}
