//! # Declarative Generators
//!
//! `message!` and `enumeration!` turn a schema-shaped declaration into a
//! Rust type plus its codec. Each field names its kind first, then the Rust
//! name, type and field number, mirroring a `.proto` line:
//!
//! ```
//! wirepack::message! {
//!     /// Amount of a single denomination.
//!     pub struct Coin {
//!         string denom: String = 1,
//!         string amount: String = 2,
//!     }
//! }
//! ```
//!
//! The kind is the name of a module under [`field`](crate::field).

/// Declares one or more records and implements [`Message`](crate::Message).
#[macro_export]
macro_rules! message {
    ($(
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $kind:ident $field:ident : $ty:ty = $tag:literal
            ),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        #[allow(unused_variables)]
        impl $crate::Message for $name {
            fn encode_fields(&self, enc: &mut $crate::Encoder) -> $crate::Result<()> {
                $( $crate::field::$kind::encode($tag, &self.$field, enc)?; )*
                Ok(())
            }

            fn merge_field(
                &mut self,
                field: u32,
                wire_type: $crate::WireType,
                dec: &mut $crate::Decoder<'_>,
                depth: usize,
            ) -> $crate::Result<()> {
                match field {
                    $(
                        $tag => $crate::field::$kind::merge(wire_type, &mut self.$field, dec, depth)
                            .map_err(|e| e.at(stringify!($field))),
                    )*
                    _ => dec.skip_field(field, wire_type),
                }
            }

            fn json_fields(&self, obj: &mut $crate::json::Map) {
                $(
                    obj.insert(
                        $crate::json::key_name(stringify!($field)).to_owned(),
                        $crate::field::$kind::to_json(&self.$field),
                    );
                )*
            }

            fn merge_json(
                &mut self,
                obj: &$crate::json::Map,
                mode: $crate::json::Mode,
                depth: usize,
            ) -> $crate::Result<()> {
                $(
                    if let Some(v) = $crate::json::lookup(obj, stringify!($field)) {
                        self.$field = $crate::field::$kind::from_json(v, mode, depth)
                            .map_err(|e| e.at(stringify!($field)))?;
                    }
                )*
                Ok(())
            }
        }
    )*};
}

/// Declares a protobuf enum with an `Unrecognized(i32)` fallback variant.
///
/// ```
/// wirepack::enumeration! {
///     pub enum Order {
///         NoneUnspecified = 0 => "ORDER_NONE_UNSPECIFIED",
///         Unordered = 1 => "ORDER_UNORDERED",
///         Ordered = 2 => "ORDER_ORDERED",
///     }
/// }
/// ```
#[macro_export]
macro_rules! enumeration {
    ($(
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $str:literal
            ),* $(,)?
        }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// A value outside the schema, kept so it re-encodes unchanged.
            Unrecognized(i32),
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as $crate::Enumeration>::from_i32(0)
            }
        }

        impl $crate::Enumeration for $name {
            fn from_i32(v: i32) -> Self {
                match v {
                    $( $value => $name::$variant, )*
                    other => $name::Unrecognized(other),
                }
            }

            fn to_i32(self) -> i32 {
                match self {
                    $( $name::$variant => $value, )*
                    $name::Unrecognized(v) => v,
                }
            }

            fn as_str_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $str, )*
                    $name::Unrecognized(_) => "UNKNOWN",
                }
            }

            fn from_str_name(name: &str) -> Option<Self> {
                match name {
                    $( $str => Some($name::$variant), )*
                    _ => None,
                }
            }
        }
    )*};
}

/// Implements [`Name`](crate::Name) for records of one protobuf package.
///
/// ```ignore
/// wirepack::names!("cosmos.bank.v1beta1" => MsgSend, MsgMultiSend);
/// ```
#[macro_export]
macro_rules! names {
    ($package:literal => $($name:ident),* $(,)?) => {$(
        impl $crate::Name for $name {
            const PACKAGE: &'static str = $package;
            const NAME: &'static str = stringify!($name);
        }
    )*};
}
