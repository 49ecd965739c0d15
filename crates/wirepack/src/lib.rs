//! # Wirepack
//!
//! A protobuf codec for schema-declared records, with a JSON mirror.
//!
//! Records are plain structs declared through [`message!`]. Encoding walks
//! fields in ascending order and omits zero values; decoding starts from the
//! zero record, dispatches on field number and skips anything it does not
//! know. 64-bit integers are checked against the range an IEEE double holds
//! exactly, since JSON peers cannot represent more.
//!
//! ```
//! use wirepack::Message;
//!
//! wirepack::message! {
//!     pub struct Height {
//!         uint64 revision_number: u64 = 1,
//!         uint64 revision_height: u64 = 2,
//!     }
//! }
//!
//! let height = Height { revision_number: 1, revision_height: 300 };
//! let bytes = height.encode_to_vec().unwrap();
//! assert_eq!(bytes, [0x08, 0x01, 0x10, 0xac, 0x02]);
//! assert_eq!(Height::decode(&bytes).unwrap(), height);
//! ```

pub mod error;
pub mod field;
pub mod json;
mod macros;
pub mod message;
pub mod wire;
pub mod wkt;

pub use error::{Error, Result};
pub use json::{Map, Mode, Value};
pub use message::{Enumeration, Message, Name};
pub use wire::{Decoder, Encoder, MAX_RECURSION_DEPTH, MAX_SAFE_INTEGER, WireType};
pub use wkt::{Any, Duration, Timestamp};
