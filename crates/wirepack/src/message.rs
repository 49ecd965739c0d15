//! # Record Traits
//!
//! `Message` is implemented by every record, usually through
//! [`message!`](crate::message). Implementors provide four per-field hooks
//! and get whole-record encoding, decoding and JSON conversion for free.

use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::json::{self, Map, Mode, Value};
use crate::wire::{Decoder, Encoder, MAX_RECURSION_DEPTH, WireType};

/// A protobuf record with a binary and a JSON form.
pub trait Message: Default + Clone + PartialEq + Debug + Send + Sync + 'static {
    /// Writes every non-zero field in ascending field order.
    fn encode_fields(&self, enc: &mut Encoder) -> Result<()>;

    /// Reads the value of one field whose key has already been consumed.
    /// Unknown fields must be skipped.
    fn merge_field(
        &mut self,
        field: u32,
        wire_type: WireType,
        dec: &mut Decoder<'_>,
        depth: usize,
    ) -> Result<()>;

    /// Inserts every field, zero or not, under its declared key.
    fn json_fields(&self, obj: &mut Map);

    /// Overwrites the fields present in `obj`.
    fn merge_json(&mut self, obj: &Map, mode: Mode, depth: usize) -> Result<()>;

    /// Appends the record body (without a length prefix) to the encoder.
    fn encode(&self, enc: &mut Encoder) -> Result<()> {
        self.encode_fields(enc)
    }

    /// Encodes the record into a fresh buffer.
    fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let mut enc = Encoder::new();
        self.encode(&mut enc)?;
        enc.into_bytes()
    }

    /// Decodes a record occupying the whole buffer.
    fn decode(buf: &[u8]) -> Result<Self> {
        let mut dec = Decoder::new(buf);
        Self::decode_from(&mut dec, 0)
    }

    /// Decodes fields until the decoder is exhausted, starting from the zero
    /// record. A field seen twice keeps the last value.
    fn decode_from(dec: &mut Decoder<'_>, depth: usize) -> Result<Self> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(Error::RecursionLimitExceeded);
        }

        let mut msg = Self::default();
        while !dec.is_empty() {
            let (field, wire_type) = dec.key()?;
            msg.merge_field(field, wire_type, dec, depth)?;
        }
        Ok(msg)
    }

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        self.json_fields(&mut obj);
        Value::Object(obj)
    }

    /// Builds a record from JSON, coercing loosely typed values.
    fn from_json(v: &Value) -> Result<Self> {
        Self::from_json_mode(v, Mode::Lenient, 0)
    }

    /// Builds a record from a partial JSON object without type coercion.
    fn from_partial(v: &Value) -> Result<Self> {
        Self::from_json_mode(v, Mode::Strict, 0)
    }

    fn from_json_mode(v: &Value, mode: Mode, depth: usize) -> Result<Self> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(Error::RecursionLimitExceeded);
        }

        let mut msg = Self::default();
        if !v.is_null() {
            msg.merge_json(json::object(v)?, mode, depth)?;
        }
        Ok(msg)
    }
}

/// A closed protobuf enum with an escape hatch for values it does not name.
pub trait Enumeration: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// Maps a wire value, keeping unknown values as `Unrecognized`.
    fn from_i32(v: i32) -> Self;
    fn to_i32(self) -> i32;
    /// The symbolic name, or `"UNKNOWN"` for unrecognized values.
    ///
    /// An unrecognized value therefore does not survive the JSON mirror: it
    /// prints as `"UNKNOWN"` and reads back as `Unrecognized(-1)`. The wire
    /// form keeps the number.
    fn as_str_name(self) -> &'static str;
    fn from_str_name(name: &str) -> Option<Self>;
}

/// Associates a record with its fully qualified protobuf name.
pub trait Name: Message {
    const PACKAGE: &'static str;
    const NAME: &'static str;

    /// `cosmos.bank.v1beta1.MsgSend`
    fn full_name() -> String {
        format!("{}.{}", Self::PACKAGE, Self::NAME)
    }

    /// `/cosmos.bank.v1beta1.MsgSend`
    fn type_url() -> String {
        format!("/{}", Self::full_name())
    }
}
