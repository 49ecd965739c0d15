//! # Wire Framing
//!
//! The protobuf binary framing: every field is `[Key: varint][Value]`, where
//! the key packs the field number and a three bit wire type.
//!
//! - **Varint**: integers and booleans, seven bits per byte, little end first.
//! - **Length-delimited**: `[Len: varint][Body: Len]` for strings, bytes,
//!   nested records and packed repeated scalars.
//! - **Fixed**: four or eight raw little-endian bytes. Never written here,
//!   only skipped.

use crate::error::Error;
use crate::error::Result;

/// The maximum nesting depth for records and groups before bailing.
pub const MAX_RECURSION_DEPTH: usize = 100;

/// The largest integer an IEEE double holds exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Fails with `IntegerOutOfRange` once a 64-bit value leaves the safe range.
pub fn check_safe(v: i128) -> Result<()> {
    if v.unsigned_abs() > MAX_SAFE_INTEGER as u128 {
        return Err(Error::IntegerOutOfRange(v));
    }
    Ok(())
}

/// Identifies how the value following a key is framed.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireType {
    Varint = 0,
    Fixed64 = 1,
    LengthDelimited = 2,
    StartGroup = 3,
    EndGroup = 4,
    Fixed32 = 5,
}

impl WireType {
    /// Returns the WireType for the low bits of a key, or `None` if invalid.
    pub fn from_u8(b: u8) -> Option<Self> {
        match b {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            3 => Some(WireType::StartGroup),
            4 => Some(WireType::EndGroup),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }
}

/// Fails unless `actual` is the wire type the field kind reads.
pub fn check_wire_type(expected: WireType, actual: WireType) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::WireTypeMismatch { expected, actual })
    }
}

/// An open nested record on the `Encoder` stack.
struct Frame {
    /// Offset of the one byte length placeholder.
    len_pos: usize,
}

/// A growable encoder with a stack of open nested scopes.
///
/// Nested records are written in place. `begin_nested` reserves a single
/// byte for the length prefix and `end_nested` back-patches it, shifting the
/// body only when the length needs more than one varint byte.
///
/// # Structural Invariants
///
/// 1.  Every `begin_nested` must be closed by exactly one `end_nested`.
/// 2.  The encoder must have no open scopes to finalize bytes.
pub struct Encoder {
    buf: Vec<u8>,
    stack: Vec<Frame>,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates a new encoder with default capacity.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(256),
            stack: Vec::with_capacity(8),
        }
    }

    /// Consumes the encoder and returns the final byte vector.
    ///
    /// # Errors
    /// Returns `Error::ScopeStillOpen` if a nested scope is open.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        if !self.stack.is_empty() {
            return Err(Error::ScopeStillOpen);
        }
        Ok(self.buf)
    }

    /// Returns a view of the current buffer.
    ///
    /// # Errors
    /// Returns `Error::ScopeStillOpen` if a nested scope is open.
    pub fn as_bytes(&self) -> Result<&[u8]> {
        if !self.stack.is_empty() {
            return Err(Error::ScopeStillOpen);
        }
        Ok(&self.buf)
    }

    /// Writes a field key: `(field << 3) | wire_type`.
    pub fn key(&mut self, field: u32, wire_type: WireType) {
        self.varint(((field as u64) << 3) | wire_type as u64);
    }

    /// Encodes a raw base-128 varint.
    pub fn varint(&mut self, mut v: u64) {
        while v >= 0x80 {
            self.buf.push((v as u8) | 0x80);
            v >>= 7;
        }
        self.buf.push(v as u8);
    }

    /// Encodes an `int32`. Negative values are sign-extended to ten bytes.
    pub fn int32(&mut self, v: i32) { self.varint(v as i64 as u64) }
    /// Encodes a `uint32`.
    pub fn uint32(&mut self, v: u32) { self.varint(v as u64) }
    /// Encodes an `int64`.
    pub fn int64(&mut self, v: i64) { self.varint(v as u64) }
    /// Encodes a `uint64`.
    pub fn uint64(&mut self, v: u64) { self.varint(v) }
    /// Encodes a boolean as a one byte varint.
    pub fn bool(&mut self, v: bool) { self.buf.push(v as u8) }

    /// Encodes a length-prefixed UTF-8 string.
    pub fn string(&mut self, v: &str) {
        self.bytes(v.as_bytes());
    }

    /// Encodes a length-prefixed byte blob.
    pub fn bytes(&mut self, v: &[u8]) {
        self.varint(v.len() as u64);
        self.buf.extend_from_slice(v);
    }

    /// Begins a length-delimited scope (nested record or packed list).
    ///
    /// # Invariants
    /// - Must be closed via `end_nested()`.
    pub fn begin_nested(&mut self) {
        self.stack.push(Frame { len_pos: self.buf.len() });
        self.buf.push(0); // Length placeholder
    }

    /// Ends the innermost length-delimited scope and patches its length.
    pub fn end_nested(&mut self) -> Result<()> {
        let frame = self.stack.pop().ok_or(Error::ScopeUnderflow)?;
        let body_start = frame.len_pos + 1;
        let body_len = (self.buf.len() - body_start) as u64;

        if body_len < 0x80 {
            self.buf[frame.len_pos] = body_len as u8;
            return Ok(());
        }

        let mut prefix = Vec::with_capacity(10);
        let mut v = body_len;
        while v >= 0x80 {
            prefix.push((v as u8) | 0x80);
            v >>= 7;
        }
        prefix.push(v as u8);
        self.buf.splice(frame.len_pos..body_start, prefix);
        Ok(())
    }
}

/// A zero-copy, bounds-checked cursor over a byte slice.
///
/// Reading advances the view. Nested records are read through a new
/// `Decoder` restricted to the declared length.
///
/// # Errors
/// All read operations return `Error::UnexpectedEnd` if the buffer is exhausted.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over the slice.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Returns the remaining bytes in the view.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    /// True once every byte of the view has been consumed.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn consume(&mut self, n: usize) -> Result<()> {
        if n > self.buf.len() { return Err(Error::UnexpectedEnd); }
        self.buf = &self.buf[n..];
        Ok(())
    }

    fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.buf.len() { return Err(Error::UnexpectedEnd); }
        let (head, tail) = self.buf.split_at(n);
        self.buf = tail;
        Ok(head)
    }

    /// Decodes a raw base-128 varint.
    pub fn varint(&mut self) -> Result<u64> {
        let mut value = 0u64;
        for i in 0..10 {
            let Some((&byte, tail)) = self.buf.split_first() else {
                return Err(Error::UnexpectedEnd);
            };
            self.buf = tail;
            if i == 9 && byte > 1 {
                return Err(Error::VarintOverflow);
            }
            value |= ((byte & 0x7f) as u64) << (7 * i);
            if byte < 0x80 {
                return Ok(value);
            }
        }
        Err(Error::VarintOverflow)
    }

    /// Decodes a field key into `(field_number, wire_type)`.
    pub fn key(&mut self) -> Result<(u32, WireType)> {
        let key = self.varint()?;
        let wire = (key & 0x7) as u8;
        let wire_type = WireType::from_u8(wire).ok_or(Error::InvalidWireType(wire))?;
        let field = key >> 3;
        if field == 0 || field > (u32::MAX >> 3) as u64 {
            return Err(Error::InvalidFieldNumber(field));
        }
        Ok((field as u32, wire_type))
    }

    /// Decodes an `int32`, truncating like every other protobuf runtime.
    pub fn int32(&mut self) -> Result<i32> { Ok(self.varint()? as i32) }
    /// Decodes a `uint32`.
    pub fn uint32(&mut self) -> Result<u32> { Ok(self.varint()? as u32) }
    /// Decodes an `int64`.
    pub fn int64(&mut self) -> Result<i64> { Ok(self.varint()? as i64) }
    /// Decodes a `uint64`.
    pub fn uint64(&mut self) -> Result<u64> { self.varint() }
    /// Decodes a boolean; any non-zero varint is true.
    pub fn bool(&mut self) -> Result<bool> { Ok(self.varint()? != 0) }

    /// Decodes a length-prefixed byte slice.
    pub fn bytes(&mut self) -> Result<&'a [u8]> {
        let len = self.varint()?;
        let len = usize::try_from(len).map_err(|_| Error::UnexpectedEnd)?;
        self.read_bytes(len)
    }

    /// Decodes a length-prefixed string slice (UTF-8).
    pub fn str(&mut self) -> Result<&'a str> {
        let bytes = self.bytes()?;
        std::str::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)
    }

    /// Returns a decoder restricted to the next length-delimited body.
    pub fn nested(&mut self) -> Result<Decoder<'a>> {
        Ok(Decoder::new(self.bytes()?))
    }

    /// Skips the value of `field`, whose key has already been read. A group
    /// must close with an end marker carrying the same field number.
    pub fn skip(&mut self, field: u32, wire_type: WireType) -> Result<()> {
        self.skip_impl(field, wire_type, 0)
    }

    fn skip_impl(&mut self, field: u32, wire_type: WireType, depth: usize) -> Result<()> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(Error::RecursionLimitExceeded);
        }

        match wire_type {
            WireType::Varint => { self.varint()?; },
            WireType::Fixed64 => { self.consume(8)?; },
            WireType::Fixed32 => { self.consume(4)?; },
            WireType::LengthDelimited => { self.bytes()?; },
            WireType::StartGroup => {
                loop {
                    let (inner_field, inner) = self.key()?;
                    if inner == WireType::EndGroup {
                        if inner_field != field {
                            return Err(Error::UnbalancedGroup);
                        }
                        break;
                    }
                    self.skip_impl(inner_field, inner, depth + 1)?;
                }
            },
            WireType::EndGroup => return Err(Error::UnbalancedGroup),
        }
        Ok(())
    }

    /// Skips an unrecognized field, leaving a trace for diagnostics.
    pub fn skip_field(&mut self, field: u32, wire_type: WireType) -> Result<()> {
        tracing::trace!(field, ?wire_type, "skipping unknown field");
        self.skip(field, wire_type)
    }
}
