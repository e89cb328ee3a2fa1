//! Surface shared by every identifier newtype over [`FixedBytes`].
//!
//! [`FixedBytes`]: crate::types::fixed_bytes::FixedBytes

/// Implements construction, hex/JSON conversion, integer view and the
/// standard traits for `$name(pub FixedBytes<$len>)`.
///
/// `$json` is the [`HexCodec`](crate::types::hex_codec::HexCodec) used by
/// `from_json_bytes`/`set_from_json`/`to_json`. `FromStr` and serde always
/// use the unquoted strict codec, since their input has no JSON quotes left.
macro_rules! impl_identifier {
    ($name:ident, $len:expr, $json:expr) => {
        impl $name {
            /// Width in bytes.
            pub const LEN: usize = $len;

            /// Codec used by the JSON entry points.
            pub const JSON_CODEC: $crate::types::hex_codec::HexCodec = $json;

            /// All-zero identifier.
            pub const fn zero() -> Self {
                Self($crate::types::fixed_bytes::FixedBytes::zero())
            }

            /// Right-aligns short input, keeps the trailing bytes of long input.
            pub fn from_bytes(input: &[u8]) -> Self {
                Self($crate::types::fixed_bytes::FixedBytes::from_bytes(input))
            }

            /// Rejects input longer than the identifier instead of truncating.
            pub fn try_from_bytes(
                input: &[u8],
            ) -> Result<Self, $crate::types::errors::TruncationError> {
                $crate::types::fixed_bytes::FixedBytes::try_from_bytes(input).map(Self)
            }

            /// Lenient conversion from loosely formatted hex text.
            ///
            /// Accepts an optional `0x`/`0X` prefix and odd digit counts; stops
            /// at the first invalid pair. Never fails.
            pub fn from_hex(text: &str) -> Self {
                Self::from_bytes(&$crate::types::hex_codec::decode_loose(text))
            }

            /// Builds the identifier from the big-endian bytes of `value`.
            pub fn from_big(value: &num_bigint::BigUint) -> Self {
                Self($crate::types::big_int::from_biguint(value))
            }

            /// Decodes the JSON text form.
            pub fn from_json_bytes(input: &[u8]) -> Result<Self, $crate::types::errors::HexError> {
                Self::JSON_CODEC.decode(input).map(Self)
            }

            /// Decodes the JSON text form into `self`, leaving it unchanged on error.
            pub fn set_from_json(
                &mut self,
                input: &[u8],
            ) -> Result<(), $crate::types::errors::HexError> {
                Self::JSON_CODEC.decode_into(input, &mut self.0)
            }

            /// Replaces the contents using the `from_bytes` rule.
            pub fn set_bytes(&mut self, input: &[u8]) {
                self.0.set_bytes(input);
            }

            /// Returns the identifier as a byte slice.
            pub fn as_slice(&self) -> &[u8] {
                self.0.as_slice()
            }

            /// Returns the underlying array.
            pub const fn as_bytes(&self) -> &[u8; $len] {
                self.0.as_bytes()
            }

            pub fn to_vec(&self) -> Vec<u8> {
                self.0.to_vec()
            }

            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            /// Big-endian unsigned integer value.
            pub fn to_big(&self) -> num_bigint::BigUint {
                $crate::types::big_int::to_biguint(&self.0)
            }

            /// Canonical `0x`-prefixed lowercase hex.
            pub fn to_hex(&self) -> String {
                self.0.to_hex()
            }

            /// Canonical form in the shape of [`Self::JSON_CODEC`].
            pub fn to_json(&self) -> String {
                Self::JSON_CODEC.encode(&self.0)
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self($crate::types::fixed_bytes::FixedBytes::new(bytes))
            }
        }

        impl From<$crate::types::fixed_bytes::FixedBytes<{ $len }>> for $name {
            fn from(buf: $crate::types::fixed_bytes::FixedBytes<{ $len }>) -> Self {
                Self(buf)
            }
        }

        impl TryFrom<&[u8]> for $name {
            type Error = $crate::types::errors::TruncationError;

            fn try_from(input: &[u8]) -> Result<Self, Self::Error> {
                Self::try_from_bytes(input)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                self.0.as_slice()
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::types::errors::HexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $crate::types::hex_codec::HexCodec::RAW
                    .decode(s.as_bytes())
                    .map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::fmt::LowerHex for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct Visitor;

                impl serde::de::Visitor<'_> for Visitor {
                    type Value = $name;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        write!(f, "a 0x-prefixed hex string of {} bytes", $len)
                    }

                    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<$name, E> {
                        v.parse::<$name>().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }
    };
}

pub(crate) use impl_identifier;
