//! Derive macros for the ledger-ids crate.
//!
//! Provides:
//! - `#[derive(Error)]` - `Display` and `std::error::Error` for error types

mod error;

use proc_macro::TokenStream;

/// Implements `Display` and `Error` for error types, plus `From` for `#[from]` fields.
#[proc_macro_derive(Error, attributes(error, from))]
pub fn derive_error(input: TokenStream) -> TokenStream {
    error::derive_error(input)
}
