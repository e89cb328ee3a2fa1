//! 32-byte digest identifier.

use crate::types::fixed_bytes::FixedBytes;
use crate::types::hex_codec::HexCodec;
use crate::types::identifier::impl_identifier;
use rand_core::{OsRng, RngCore};

/// Digest length in bytes.
pub const HASH_LEN: usize = 32;

/// Fixed-size 32-byte digest, typically the output of a hash function.
///
/// This type is `Copy`: digests are passed around constantly and live on the
/// stack. Hashing itself happens elsewhere; this type only carries the bytes.
///
/// The JSON path (`from_json_bytes`) takes the unquoted `0x…` payload and
/// only checks length and prefix (see [`ContentCheck::Deferred`]).
///
/// [`ContentCheck::Deferred`]: crate::types::hex_codec::ContentCheck::Deferred
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash, Ord, PartialOrd)]
pub struct Hash(pub FixedBytes<HASH_LEN>);

impl_identifier!(Hash, HASH_LEN, HexCodec::RAW_DEFERRED);

impl Hash {
    /// Generates a digest from OS randomness.
    pub fn random() -> Hash {
        let mut bytes = [0u8; HASH_LEN];
        OsRng.fill_bytes(&mut bytes);
        Hash::from(bytes)
    }

    /// Abbreviated form for terminals: first and last three bytes.
    pub fn terminal_string(&self) -> String {
        let bytes = self.as_slice();
        format!(
            "{}…{}",
            hex::encode(&bytes[..3]),
            hex::encode(&bytes[HASH_LEN - 3..])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::errors::HexError;
    use num_bigint::BigUint;

    const LENGTH_ERR: HexError = HexError::Length { width: HASH_LEN };

    fn json_input(prefix: &str, size: usize) -> Vec<u8> {
        let mut input = prefix.as_bytes().to_vec();
        input.resize(prefix.len() + size, 0);
        input
    }

    #[test]
    fn bytes_conversion() {
        let hash = Hash::from_bytes(&[5]);
        let mut expected = [0u8; HASH_LEN];
        expected[31] = 5;
        assert_eq!(hash, Hash::from(expected));
    }

    #[test]
    fn json_validation() {
        let cases = [
            ("", 2, Err(LENGTH_ERR)),
            ("", 62, Err(LENGTH_ERR)),
            ("", 66, Err(LENGTH_ERR)),
            ("", 65, Err(LENGTH_ERR)),
            ("0X", 64, Ok(())),
            ("0x", 64, Ok(())),
            ("0x", 62, Err(LENGTH_ERR)),
        ];
        let mut hash = Hash::zero();
        for (i, (prefix, size, expected)) in cases.into_iter().enumerate() {
            let result = hash.set_from_json(&json_input(prefix, size));
            assert_eq!(result, expected, "test #{i}");
        }
    }

    #[test]
    fn json_length_gate_does_not_validate_content() {
        let payload = format!("0x{}", "zz".repeat(32));
        let hash = Hash::from_json_bytes(payload.as_bytes()).unwrap();
        assert!(hash.is_zero());
    }

    #[test]
    fn from_str_validates_content() {
        let payload = format!("0x{}", "zz".repeat(32));
        assert!(matches!(
            payload.parse::<Hash>(),
            Err(HexError::InvalidHexCharacter { character: 'z', position: 0 })
        ));
    }

    #[test]
    fn json_round_trip() {
        let hash = Hash::from_bytes(&(1u8..=32).collect::<Vec<_>>());
        let json = hash.to_json();
        assert_eq!(json.len(), 2 + 64);
        assert_eq!(Hash::from_json_bytes(json.as_bytes()), Ok(hash));
    }

    #[test]
    fn set_from_json_keeps_previous_value_on_error() {
        let mut hash = Hash::from_bytes(&[0xaa]);
        assert_eq!(hash.set_from_json(b"0x00"), Err(LENGTH_ERR));
        assert_eq!(hash, Hash::from_bytes(&[0xaa]));
    }

    #[test]
    fn from_hex_is_lenient() {
        assert_eq!(Hash::from_hex("0x1"), Hash::from_bytes(&[1]));
        assert_eq!(Hash::from_hex("abc"), Hash::from_bytes(&[0x0a, 0xbc]));
        assert_eq!(Hash::from_hex("not hex"), Hash::zero());
    }

    #[test]
    fn from_hex_truncates_long_input() {
        let long = format!("0x{}{}", "ff", "11".repeat(32));
        assert_eq!(Hash::from_hex(&long), Hash::from([0x11; HASH_LEN]));
    }

    #[test]
    fn big_integer_view() {
        let hash = Hash::from_big(&BigUint::from(258u32));
        assert_eq!(hash, Hash::from_bytes(&[1, 2]));
        assert_eq!(hash.to_big(), BigUint::from(258u32));
    }

    #[test]
    fn display_and_debug() {
        let hash = Hash::from_bytes(&[0xab]);
        let expected = format!("0x{}ab", "00".repeat(31));
        assert_eq!(hash.to_string(), expected);
        assert_eq!(format!("{:?}", hash), format!("Hash({expected})"));
    }

    #[test]
    fn terminal_string_abbreviates() {
        let hash = Hash::from_bytes(&(0u8..32).collect::<Vec<_>>());
        assert_eq!(hash.terminal_string(), "000102…1d1e1f");
    }

    #[test]
    fn random_hashes_differ() {
        assert_ne!(Hash::random(), Hash::random());
    }

    #[test]
    fn serde_uses_canonical_string() {
        let hash = Hash::from_bytes(&[0xAB, 0xCD]);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"0x{}abcd\"", "00".repeat(30)));
        assert_eq!(serde_json::from_str::<Hash>(&json).unwrap(), hash);
    }

    #[test]
    fn serde_rejects_wrong_length_and_bad_digits() {
        assert!(serde_json::from_str::<Hash>("\"0x00\"").is_err());
        let bad = format!("\"0x{}\"", "g".repeat(64));
        assert!(serde_json::from_str::<Hash>(&bad).is_err());
        assert!(serde_json::from_str::<Hash>("7").is_err());
    }

    #[test]
    fn strict_construction() {
        assert!(Hash::try_from_bytes(&[0u8; 33]).is_err());
        assert_eq!(Hash::try_from_bytes(&[7]).unwrap(), Hash::from_bytes(&[7]));
        assert!(Hash::try_from(&[0u8; 32][..]).is_ok());
    }
}
