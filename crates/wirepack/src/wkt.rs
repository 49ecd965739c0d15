//! # Well-Known Types
//!
//! `google.protobuf.Any`, `Timestamp` and `Duration`, the only records from
//! outside the chain's own packages that its schemas reference.

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::{Error, Result};
use crate::field;
use crate::json::{self, Map, Mode, Value};
use crate::message::{Message, Name};
use crate::wire::{Decoder, Encoder, MAX_RECURSION_DEPTH, WireType};

crate::message! {
    /// A record of any type, identified by its type URL.
    pub struct Any {
        /// `/` followed by the fully qualified record name.
        string type_url: String = 1,
        bytes value: Vec<u8> = 2,
    }

    /// A signed span of time at nanosecond resolution.
    pub struct Duration {
        int64 seconds: i64 = 1,
        int32 nanos: i32 = 2,
    }
}

crate::names!("google.protobuf" => Any, Duration, Timestamp);

impl Any {
    /// Encodes `msg` and tags it with its type URL.
    pub fn pack<M: Name>(msg: &M) -> Result<Self> {
        Ok(Any { type_url: M::type_url(), value: msg.encode_to_vec()? })
    }

    /// Decodes the payload as `M`, failing if the type URL names another type.
    pub fn unpack<M: Name>(&self) -> Result<M> {
        if !self.is::<M>() {
            return Err(Error::TypeUrlMismatch { expected: M::type_url(), actual: self.type_url.clone() });
        }
        M::decode(&self.value)
    }

    /// True if the payload claims to be an `M`.
    pub fn is<M: Name>(&self) -> bool {
        self.type_url == M::type_url()
    }
}

/// A point in time, as seconds and nanoseconds since the Unix epoch.
///
/// The JSON form is an RFC 3339 string such as `"2022-03-01T12:00:00Z"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    pub fn to_datetime(&self) -> Result<OffsetDateTime> {
        let total = self.seconds as i128 * 1_000_000_000 + self.nanos as i128;
        OffsetDateTime::from_unix_timestamp_nanos(total)
            .map_err(|e| Error::Json(format!("timestamp out of range: {}", e)))
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self> {
        let dt = OffsetDateTime::parse(s, &Rfc3339)
            .map_err(|e| Error::Json(format!("invalid RFC 3339 timestamp {:?}: {}", s, e)))?;
        Ok(dt.into())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(dt: OffsetDateTime) -> Self {
        Timestamp { seconds: dt.unix_timestamp(), nanos: dt.nanosecond() as i32 }
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = Error;

    fn try_from(ts: Timestamp) -> Result<Self> {
        ts.to_datetime()
    }
}

impl Message for Timestamp {
    fn encode_fields(&self, enc: &mut Encoder) -> Result<()> {
        field::int64::encode(1, &self.seconds, enc)?;
        field::int32::encode(2, &self.nanos, enc)
    }

    fn merge_field(&mut self, tag: u32, wire_type: WireType, dec: &mut Decoder<'_>, depth: usize) -> Result<()> {
        match tag {
            1 => field::int64::merge(wire_type, &mut self.seconds, dec, depth).map_err(|e| e.at("seconds")),
            2 => field::int32::merge(wire_type, &mut self.nanos, dec, depth).map_err(|e| e.at("nanos")),
            _ => dec.skip_field(tag, wire_type),
        }
    }

    fn json_fields(&self, obj: &mut Map) {
        obj.insert("seconds".to_owned(), field::int64::to_json(&self.seconds));
        obj.insert("nanos".to_owned(), field::int32::to_json(&self.nanos));
    }

    fn merge_json(&mut self, obj: &Map, mode: Mode, depth: usize) -> Result<()> {
        if let Some(v) = json::lookup(obj, "seconds") {
            self.seconds = field::int64::from_json(v, mode, depth).map_err(|e| e.at("seconds"))?;
        }
        if let Some(v) = json::lookup(obj, "nanos") {
            self.nanos = field::int32::from_json(v, mode, depth).map_err(|e| e.at("nanos"))?;
        }
        Ok(())
    }

    /// RFC 3339 when representable, the raw fields otherwise.
    fn to_json(&self) -> Value {
        match self.to_datetime().and_then(|dt| {
            dt.format(&Rfc3339).map_err(|e| Error::Json(e.to_string()))
        }) {
            Ok(s) => Value::String(s),
            Err(_) => {
                let mut obj = Map::new();
                self.json_fields(&mut obj);
                Value::Object(obj)
            }
        }
    }

    fn from_json_mode(v: &Value, mode: Mode, depth: usize) -> Result<Self> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(Error::RecursionLimitExceeded);
        }

        match v {
            Value::Null => Ok(Timestamp::default()),
            Value::String(s) => Timestamp::parse_rfc3339(s),
            other => {
                let mut ts = Timestamp::default();
                ts.merge_json(json::object(other)?, mode, depth)?;
                Ok(ts)
            }
        }
    }
}
