//! `cosmos.slashing.v1beta1`: validator liveness tracking and jailing.

use wirepack::{Duration, Timestamp};

use super::base::{PageRequest, PageResponse};

wirepack::message! {
    pub struct ValidatorSigningInfo {
        string address: String = 1,
        /// Height at which the validator was first a candidate or was unjailed.
        int64 start_height: i64 = 2,
        /// Index into the missed-blocks bit array.
        int64 index_offset: i64 = 3,
        message jailed_until: Option<Timestamp> = 4,
        boolean tombstoned: bool = 5,
        int64 missed_blocks_counter: i64 = 6,
    }

    /// Slashing parameters. Fractions are `sdk.Dec` values carried as bytes.
    pub struct Params {
        int64 signed_blocks_window: i64 = 1,
        bytes min_signed_per_window: Vec<u8> = 2,
        message downtime_jail_duration: Option<Duration> = 3,
        bytes slash_fraction_double_sign: Vec<u8> = 4,
        bytes slash_fraction_downtime: Vec<u8> = 5,
    }

    pub struct QueryParamsRequest {}

    pub struct QueryParamsResponse {
        message params: Option<Params> = 1,
    }

    pub struct QuerySigningInfoRequest {
        string cons_address: String = 1,
    }

    pub struct QuerySigningInfoResponse {
        message val_signing_info: Option<ValidatorSigningInfo> = 1,
    }

    pub struct QuerySigningInfosRequest {
        message pagination: Option<PageRequest> = 1,
    }

    pub struct QuerySigningInfosResponse {
        repeated_message info: Vec<ValidatorSigningInfo> = 1,
        message pagination: Option<PageResponse> = 2,
    }

    /// Releases a jailed validator once its jail time has passed.
    pub struct MsgUnjail {
        string validator_addr: String = 1,
    }

    pub struct MsgUnjailResponse {}
}

wirepack::names!("cosmos.slashing.v1beta1" => MsgUnjail, Params);
