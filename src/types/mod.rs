//! Fixed-width identifier types and their text encodings.
//!
//! - `FixedBytes<N>`: exactly `N` bytes with right-aligning construction
//! - `HexCodec`: canonical `0x`-hex text form, raw or JSON-quoted
//! - `big_int`: big-endian unsigned integer view
//! - `Hash` (32 bytes) and `Address` (20 bytes): the ledger's identifiers
//!
//! Everything here is a plain value type: no shared state, no I/O, safe to
//! use from any number of threads on independent values.

pub mod address;
pub mod big_int;
pub mod errors;
pub mod fixed_bytes;
pub mod hash;
pub mod hex_codec;
mod identifier;
