//! Ledger identifier library.
//!
//! Provides the fixed-width digest and address identifiers exchanged between
//! ledger nodes, with byte-exact validation of their `0x`-hex JSON form.

pub mod types;
pub mod utils;

pub use types::address::Address;
pub use types::errors::{HexError, TruncationError};
pub use types::fixed_bytes::FixedBytes;
pub use types::hash::Hash;
pub use types::hex_codec::{ContentCheck, HexCodec};
