//! # Field Kinds
//!
//! One module per protobuf field kind. Each exposes the same four functions,
//! which is what lets [`message!`](crate::message) stay a thin dispatcher:
//!
//! - `encode(tag, &value, enc)`: writes the field unless it holds its zero value.
//! - `merge(wire_type, &mut value, dec, depth)`: reads one occurrence.
//! - `to_json(&value)`: the JSON form.
//! - `from_json(json, mode, depth)`: parses the JSON form.

use crate::error::{Error, Result};
use crate::json::{self, Mode, Value};
use crate::message::{Enumeration, Message};
use crate::wire::{self, Decoder, Encoder, WireType, check_wire_type};

macro_rules! varint_kind {
    ($kind:ident, $ty:ty, $write:ident, $read:ident, safe = $safe:literal) => {
        pub mod $kind {
            use super::*;

            pub fn encode(tag: u32, v: &$ty, enc: &mut Encoder) -> Result<()> {
                if *v != 0 {
                    enc.key(tag, WireType::Varint);
                    enc.$write(*v);
                }
                Ok(())
            }

            pub fn merge(wire_type: WireType, v: &mut $ty, dec: &mut Decoder<'_>, _depth: usize) -> Result<()> {
                check_wire_type(WireType::Varint, wire_type)?;
                let value = dec.$read()?;
                if $safe {
                    wire::check_safe(value as i128)?;
                }
                *v = value;
                Ok(())
            }

            pub fn to_json(v: &$ty) -> Value {
                Value::from(*v)
            }

            pub fn from_json(v: &Value, mode: Mode, _depth: usize) -> Result<$ty> {
                let n = json::integer(v, mode)?;
                if $safe {
                    wire::check_safe(n)?;
                }
                <$ty>::try_from(n)
                    .map_err(|_| Error::Json(format!("{} is out of range for {}", n, stringify!($ty))))
            }
        }
    };
}

varint_kind!(int32, i32, int32, int32, safe = false);
varint_kind!(uint32, u32, uint32, uint32, safe = false);
varint_kind!(int64, i64, int64, int64, safe = true);
varint_kind!(uint64, u64, uint64, uint64, safe = true);

pub mod boolean {
    use super::*;

    pub fn encode(tag: u32, v: &bool, enc: &mut Encoder) -> Result<()> {
        if *v {
            enc.key(tag, WireType::Varint);
            enc.bool(true);
        }
        Ok(())
    }

    pub fn merge(wire_type: WireType, v: &mut bool, dec: &mut Decoder<'_>, _depth: usize) -> Result<()> {
        check_wire_type(WireType::Varint, wire_type)?;
        *v = dec.bool()?;
        Ok(())
    }

    pub fn to_json(v: &bool) -> Value {
        Value::Bool(*v)
    }

    pub fn from_json(v: &Value, mode: Mode, _depth: usize) -> Result<bool> {
        json::boolean(v, mode)
    }
}

pub mod string {
    use super::*;

    pub fn encode(tag: u32, v: &str, enc: &mut Encoder) -> Result<()> {
        if !v.is_empty() {
            enc.key(tag, WireType::LengthDelimited);
            enc.string(v);
        }
        Ok(())
    }

    pub fn merge(wire_type: WireType, v: &mut String, dec: &mut Decoder<'_>, _depth: usize) -> Result<()> {
        check_wire_type(WireType::LengthDelimited, wire_type)?;
        *v = dec.str()?.to_owned();
        Ok(())
    }

    pub fn to_json(v: &str) -> Value {
        Value::String(v.to_owned())
    }

    pub fn from_json(v: &Value, mode: Mode, _depth: usize) -> Result<String> {
        json::string(v, mode)
    }
}

pub mod bytes {
    use super::*;

    pub fn encode(tag: u32, v: &[u8], enc: &mut Encoder) -> Result<()> {
        if !v.is_empty() {
            enc.key(tag, WireType::LengthDelimited);
            enc.bytes(v);
        }
        Ok(())
    }

    pub fn merge(wire_type: WireType, v: &mut Vec<u8>, dec: &mut Decoder<'_>, _depth: usize) -> Result<()> {
        check_wire_type(WireType::LengthDelimited, wire_type)?;
        *v = dec.bytes()?.to_vec();
        Ok(())
    }

    pub fn to_json(v: &[u8]) -> Value {
        json::base64_encode(v)
    }

    pub fn from_json(v: &Value, _mode: Mode, _depth: usize) -> Result<Vec<u8>> {
        json::base64_decode(v)
    }
}

pub mod enumeration {
    use super::*;

    pub fn encode<E: Enumeration>(tag: u32, v: &E, enc: &mut Encoder) -> Result<()> {
        let n = v.to_i32();
        if n != 0 {
            enc.key(tag, WireType::Varint);
            enc.int32(n);
        }
        Ok(())
    }

    pub fn merge<E: Enumeration>(wire_type: WireType, v: &mut E, dec: &mut Decoder<'_>, _depth: usize) -> Result<()> {
        check_wire_type(WireType::Varint, wire_type)?;
        *v = E::from_i32(dec.int32()?);
        Ok(())
    }

    pub fn to_json<E: Enumeration>(v: &E) -> Value {
        Value::String(v.as_str_name().to_owned())
    }

    /// Accepts the symbolic name or the integer value. Names this enum does
    /// not know become `Unrecognized(-1)`.
    pub fn from_json<E: Enumeration>(v: &Value, mode: Mode, _depth: usize) -> Result<E> {
        match (v, mode) {
            (Value::String(name), _) => Ok(E::from_str_name(name).unwrap_or_else(|| E::from_i32(-1))),
            (Value::Number(_), _) => {
                let n = json::integer(v, mode)?;
                Ok(E::from_i32(i32::try_from(n).unwrap_or(-1)))
            }
            (_, Mode::Lenient) => Ok(E::from_i32(-1)),
            (other, Mode::Strict) => Err(Error::Json(format!("expected enum name or number, found {}", other))),
        }
    }
}

/// A singular nested record. `None` is absent and is never written.
pub mod message {
    use super::*;

    pub fn encode<M: Message>(tag: u32, v: &Option<M>, enc: &mut Encoder) -> Result<()> {
        match v {
            Some(msg) => encode_one(tag, msg, enc),
            None => Ok(()),
        }
    }

    /// Writes a record that is known to be present, as oneof members are.
    pub fn encode_one<M: Message>(tag: u32, msg: &M, enc: &mut Encoder) -> Result<()> {
        enc.key(tag, WireType::LengthDelimited);
        enc.begin_nested();
        msg.encode(enc)?;
        enc.end_nested()
    }

    /// A second occurrence replaces the first rather than merging into it.
    pub fn merge<M: Message>(wire_type: WireType, v: &mut Option<M>, dec: &mut Decoder<'_>, depth: usize) -> Result<()> {
        *v = Some(decode_one(wire_type, dec, depth)?);
        Ok(())
    }

    /// Reads one length-delimited record body.
    pub fn decode_one<M: Message>(wire_type: WireType, dec: &mut Decoder<'_>, depth: usize) -> Result<M> {
        check_wire_type(WireType::LengthDelimited, wire_type)?;
        let mut sub = dec.nested()?;
        M::decode_from(&mut sub, depth + 1)
    }

    pub fn to_json<M: Message>(v: &Option<M>) -> Value {
        v.as_ref().map_or(Value::Null, Message::to_json)
    }

    pub fn from_json<M: Message>(v: &Value, mode: Mode, depth: usize) -> Result<Option<M>> {
        if v.is_null() {
            return Ok(None);
        }
        Ok(Some(M::from_json_mode(v, mode, depth + 1)?))
    }
}

pub mod repeated_message {
    use super::*;

    pub fn encode<M: Message>(tag: u32, v: &[M], enc: &mut Encoder) -> Result<()> {
        for msg in v {
            message::encode_one(tag, msg, enc)?;
        }
        Ok(())
    }

    pub fn merge<M: Message>(wire_type: WireType, v: &mut Vec<M>, dec: &mut Decoder<'_>, depth: usize) -> Result<()> {
        v.push(message::decode_one(wire_type, dec, depth)?);
        Ok(())
    }

    pub fn to_json<M: Message>(v: &[M]) -> Value {
        Value::Array(v.iter().map(Message::to_json).collect())
    }

    pub fn from_json<M: Message>(v: &Value, mode: Mode, depth: usize) -> Result<Vec<M>> {
        json::array(v)?
            .iter()
            .map(|item| M::from_json_mode(item, mode, depth + 1))
            .collect()
    }
}

pub mod repeated_string {
    use super::*;

    pub fn encode(tag: u32, v: &[String], enc: &mut Encoder) -> Result<()> {
        for s in v {
            enc.key(tag, WireType::LengthDelimited);
            enc.string(s);
        }
        Ok(())
    }

    pub fn merge(wire_type: WireType, v: &mut Vec<String>, dec: &mut Decoder<'_>, _depth: usize) -> Result<()> {
        check_wire_type(WireType::LengthDelimited, wire_type)?;
        v.push(dec.str()?.to_owned());
        Ok(())
    }

    pub fn to_json(v: &[String]) -> Value {
        Value::Array(v.iter().cloned().map(Value::String).collect())
    }

    pub fn from_json(v: &Value, mode: Mode, _depth: usize) -> Result<Vec<String>> {
        json::array(v)?.iter().map(|item| json::string(item, mode)).collect()
    }
}

pub mod repeated_bytes {
    use super::*;

    pub fn encode(tag: u32, v: &[Vec<u8>], enc: &mut Encoder) -> Result<()> {
        for b in v {
            enc.key(tag, WireType::LengthDelimited);
            enc.bytes(b);
        }
        Ok(())
    }

    pub fn merge(wire_type: WireType, v: &mut Vec<Vec<u8>>, dec: &mut Decoder<'_>, _depth: usize) -> Result<()> {
        check_wire_type(WireType::LengthDelimited, wire_type)?;
        v.push(dec.bytes()?.to_vec());
        Ok(())
    }

    pub fn to_json(v: &[Vec<u8>]) -> Value {
        Value::Array(v.iter().map(|b| json::base64_encode(b)).collect())
    }

    pub fn from_json(v: &Value, _mode: Mode, _depth: usize) -> Result<Vec<Vec<u8>>> {
        json::array(v)?.iter().map(json::base64_decode).collect()
    }
}

/// Repeated `uint64`, written packed. Unpacked input is also accepted.
pub mod repeated_uint64 {
    use super::*;

    pub fn encode(tag: u32, v: &[u64], enc: &mut Encoder) -> Result<()> {
        if v.is_empty() {
            return Ok(());
        }
        enc.key(tag, WireType::LengthDelimited);
        enc.begin_nested();
        for n in v {
            enc.uint64(*n);
        }
        enc.end_nested()
    }

    pub fn merge(wire_type: WireType, v: &mut Vec<u64>, dec: &mut Decoder<'_>, _depth: usize) -> Result<()> {
        match wire_type {
            WireType::LengthDelimited => {
                let mut packed = dec.nested()?;
                while !packed.is_empty() {
                    let n = packed.uint64()?;
                    wire::check_safe(n as i128)?;
                    v.push(n);
                }
            }
            WireType::Varint => {
                let n = dec.uint64()?;
                wire::check_safe(n as i128)?;
                v.push(n);
            }
            other => return Err(Error::WireTypeMismatch { expected: WireType::LengthDelimited, actual: other }),
        }
        Ok(())
    }

    pub fn to_json(v: &[u64]) -> Value {
        Value::Array(v.iter().map(|n| Value::from(*n)).collect())
    }

    pub fn from_json(v: &Value, mode: Mode, depth: usize) -> Result<Vec<u64>> {
        json::array(v)?.iter().map(|item| uint64::from_json(item, mode, depth)).collect()
    }
}
