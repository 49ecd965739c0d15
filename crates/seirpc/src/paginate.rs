//! # Pagination
//!
//! List queries return one page at a time plus a continuation key. The
//! traits here let [`fetch_all`] walk those keys generically:
//!
//! - [`PageKeyed`] requests can be pointed at the page after a key.
//! - [`Paginated`] responses expose the next key and merge with the page
//!   that follows them. Repeated fields are concatenated in page order and
//!   every other field takes the later page's value.

use std::future::Future;

use seitypes::cosmos::base::{PageRequest, PageResponse};
use tracing::{debug, warn};
use wirepack::Message;

use crate::error::{Error, Result};

/// A request carrying an optional [`PageRequest`].
pub trait PageKeyed: Message {
    fn pagination_mut(&mut self) -> &mut Option<PageRequest>;

    /// Sets `pagination.key`, creating the page request if absent.
    fn with_page_key(mut self, key: Vec<u8>) -> Self {
        self.pagination_mut().get_or_insert_with(PageRequest::default).key = key;
        self
    }
}

/// A response carrying an optional [`PageResponse`].
pub trait Paginated: Message {
    fn pagination(&self) -> Option<&PageResponse>;

    /// Folds `next` into `self`.
    fn merge_page(&mut self, next: Self);

    /// The key of the following page, if there is one.
    fn next_key(&self) -> Option<&[u8]> {
        self.pagination()
            .map(|p| p.next_key.as_slice())
            .filter(|key| !key.is_empty())
    }
}

/// Awaits `query` once per page, starting from `request` and following
/// continuation keys until the last page. Pages are requested one after the
/// other; the first error aborts the walk, as does a page whose next key is
/// the one it was requested with.
pub async fn fetch_all<Req, Resp, F, Fut>(request: Req, mut query: F) -> Result<Resp>
where
    Req: PageKeyed,
    Resp: Paginated,
    F: FnMut(Req) -> Fut,
    Fut: Future<Output = Result<Resp>>,
{
    let mut merged = query(request.clone()).await?;
    let mut pages = 1usize;
    let mut previous: Option<Vec<u8>> = None;

    while let Some(key) = merged.next_key().map(<[u8]>::to_vec) {
        if previous.as_deref() == Some(key.as_slice()) {
            warn!(pages, "node repeated its continuation key");
            return Err(Error::RepeatedPageKey(key));
        }
        debug!(page = pages + 1, key_len = key.len(), "fetching next page");
        let next = query(request.clone().with_page_key(key.clone())).await?;
        merged.merge_page(next);
        previous = Some(key);
        pages += 1;
    }

    debug!(pages, "pagination complete");
    Ok(merged)
}

/// Implements [`PageKeyed`] for requests with a `pagination` field.
macro_rules! page_keyed {
    ($($ty:path),* $(,)?) => {$(
        impl PageKeyed for $ty {
            fn pagination_mut(&mut self) -> &mut Option<PageRequest> {
                &mut self.pagination
            }
        }
    )*};
}

/// Implements [`Paginated`] for responses, naming the repeated fields that
/// accumulate across pages.
macro_rules! paginated {
    ($($ty:path { $($field:ident),* $(,)? }),* $(,)?) => {$(
        impl Paginated for $ty {
            fn pagination(&self) -> Option<&PageResponse> {
                self.pagination.as_ref()
            }

            fn merge_page(&mut self, mut next: Self) {
                $(
                    let mut $field = std::mem::take(&mut self.$field);
                    $field.append(&mut next.$field);
                    next.$field = $field;
                )*
                *self = next;
            }
        }
    )*};
}

mod impls {
    use seitypes::cosmos::{bank, slashing, tendermint, tx};
    use seitypes::cosmwasm::wasm;
    use seitypes::ibc::channel;

    use super::*;

    page_keyed!(
        bank::QueryAllBalancesRequest,
        bank::QuerySpendableBalancesRequest,
        bank::QueryTotalSupplyRequest,
        bank::QueryDenomsMetadataRequest,
        slashing::QuerySigningInfosRequest,
        tendermint::GetLatestValidatorSetRequest,
        tendermint::GetValidatorSetByHeightRequest,
        tx::GetTxsEventRequest,
        channel::QueryChannelsRequest,
        channel::QueryConnectionChannelsRequest,
        channel::QueryPacketCommitmentsRequest,
        channel::QueryPacketAcknowledgementsRequest,
        wasm::QueryContractHistoryRequest,
        wasm::QueryContractsByCodeRequest,
        wasm::QueryAllContractStateRequest,
        wasm::QueryCodesRequest,
        wasm::QueryPinnedCodesRequest,
    );

    paginated!(
        bank::QueryAllBalancesResponse { balances },
        bank::QuerySpendableBalancesResponse { balances },
        bank::QueryTotalSupplyResponse { supply },
        bank::QueryDenomsMetadataResponse { metadatas },
        slashing::QuerySigningInfosResponse { info },
        tendermint::GetLatestValidatorSetResponse { validators },
        tendermint::GetValidatorSetByHeightResponse { validators },
        tx::GetTxsEventResponse { txs, tx_responses },
        channel::QueryChannelsResponse { channels },
        channel::QueryConnectionChannelsResponse { channels },
        channel::QueryPacketCommitmentsResponse { commitments },
        channel::QueryPacketAcknowledgementsResponse { acknowledgements },
        wasm::QueryContractHistoryResponse { entries },
        wasm::QueryContractsByCodeResponse { contracts },
        wasm::QueryAllContractStateResponse { models },
        wasm::QueryCodesResponse { code_infos },
        wasm::QueryPinnedCodesResponse { code_ids },
    );
}
