//! `cosmos.base.v1beta1` and `cosmos.base.query.v1beta1`.

pub mod abci;

wirepack::message! {
    /// An amount of a single denomination. The amount is a decimal string
    /// since balances routinely exceed 64 bits.
    pub struct Coin {
        string denom: String = 1,
        string amount: String = 2,
    }

    /// Page selector attached to list queries.
    pub struct PageRequest {
        /// Continuation key from the previous page's `next_key`. Takes
        /// precedence over `offset`.
        bytes key: Vec<u8> = 1,
        uint64 offset: u64 = 2,
        uint64 limit: u64 = 3,
        boolean count_total: bool = 4,
        boolean reverse: bool = 5,
    }

    pub struct PageResponse {
        /// Empty on the last page.
        bytes next_key: Vec<u8> = 1,
        uint64 total: u64 = 2,
    }
}

impl Coin {
    pub fn new(amount: impl ToString, denom: impl Into<String>) -> Self {
        Coin { denom: denom.into(), amount: amount.to_string() }
    }
}

impl PageRequest {
    /// A request for the page following `key`.
    pub fn after(key: Vec<u8>) -> Self {
        PageRequest { key, ..Default::default() }
    }
}
