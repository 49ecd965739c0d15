//! Walking paged queries end to end over the in-process router.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use seirpc::services::{bank, wasm};
use seirpc::{Router, fetch_all};
use seitypes::cosmos::bank::{QueryAllBalancesRequest, QueryAllBalancesResponse};
use seitypes::cosmos::base::{Coin, PageResponse};
use seitypes::cosmwasm::wasm::{QueryPinnedCodesRequest, QueryPinnedCodesResponse};

#[tokio::test]
async fn test_two_pages_concatenate() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new();
    {
        let calls = calls.clone();
        router.route_typed(
            bank::QueryClient::SERVICE,
            "AllBalances",
            move |req: QueryAllBalancesRequest| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    assert_eq!(req.address, "sei1holder");
                    let key = req.pagination.map(|p| p.key).unwrap_or_default();
                    let page = match key.as_slice() {
                        [] => QueryAllBalancesResponse {
                            balances: vec![Coin::new(10, "uatom"), Coin::new(20, "usei")],
                            pagination: Some(PageResponse { next_key: b"usei".to_vec(), total: 3 }),
                        },
                        b"usei" => QueryAllBalancesResponse {
                            balances: vec![Coin::new(30, "uusdc")],
                            pagination: Some(PageResponse { next_key: Vec::new(), total: 0 }),
                        },
                        other => panic!("unexpected key {:?}", other),
                    };
                    Ok(page)
                }
            },
        );
    }

    let client = bank::QueryClient::new(Arc::new(router));
    let request = QueryAllBalancesRequest { address: "sei1holder".into(), ..Default::default() };
    let all = fetch_all(request, |req| client.all_balances(req)).await?;

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        all.balances,
        vec![Coin::new(10, "uatom"), Coin::new(20, "usei"), Coin::new(30, "uusdc")]
    );
    // singular fields come from the last page
    assert_eq!(all.pagination, Some(PageResponse { next_key: Vec::new(), total: 0 }));
    Ok(())
}

#[tokio::test]
async fn test_single_page_makes_one_call() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new();
    {
        let calls = calls.clone();
        router.route_typed(wasm::QueryClient::SERVICE, "PinnedCodes", move |_: QueryPinnedCodesRequest| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(QueryPinnedCodesResponse { code_ids: vec![1, 2, 3], pagination: None }) }
        });
    }

    let client = wasm::QueryClient::new(Arc::new(router));
    let all = fetch_all(QueryPinnedCodesRequest::default(), |req| client.pinned_codes(req)).await?;
    assert_eq!(all.code_ids, vec![1, 2, 3]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn test_packed_ids_across_pages() -> Result<()> {
    let router = Router::new();
    router.route_typed(wasm::QueryClient::SERVICE, "PinnedCodes", |req: QueryPinnedCodesRequest| async move {
        let resp = match req.pagination {
            None => QueryPinnedCodesResponse {
                code_ids: (1..=100).collect(),
                pagination: Some(PageResponse { next_key: vec![0x64], total: 0 }),
            },
            Some(_) => QueryPinnedCodesResponse { code_ids: vec![101], pagination: None },
        };
        Ok(resp)
    });

    let client = wasm::QueryClient::new(Arc::new(router));
    let all = fetch_all(QueryPinnedCodesRequest::default(), |req| client.pinned_codes(req)).await?;
    assert_eq!(all.code_ids, (1..=101).collect::<Vec<u64>>());
    Ok(())
}

#[tokio::test]
async fn test_repeated_next_key_stops_the_walk() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new();
    {
        let calls = calls.clone();
        router.route_typed(
            bank::QueryClient::SERVICE,
            "AllBalances",
            move |_: QueryAllBalancesRequest| {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    Ok(QueryAllBalancesResponse {
                        balances: vec![Coin::new(1, "usei")],
                        pagination: Some(PageResponse { next_key: b"stuck".to_vec(), total: 0 }),
                    })
                }
            },
        );
    }

    let client = bank::QueryClient::new(Arc::new(router));
    let err = fetch_all(QueryAllBalancesRequest::default(), |req| client.all_balances(req))
        .await
        .unwrap_err();

    assert_eq!(err, seirpc::Error::RepeatedPageKey(b"stuck".to_vec()));
    // the first page, then the page after "stuck" which names "stuck" again
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}
