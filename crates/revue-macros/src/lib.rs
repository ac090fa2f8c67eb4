//! Revue proc macros.
//!
//! `#[derive(ReducerView)]` turns a case-routing reducer enum into a
//! companion view type whose body dispatches on the active case and, for
//! cases carrying a feature payload, delegates rendering to that feature's
//! own view through a scoped store.
//!
//! The macro pipeline is strictly staged and deterministic:
//!
//!   parse → validate → expand
//!
//! This crate only enforces syntax and structural correctness. The naming
//! contract the expansion relies on (`FooView`, `FooState`, `FooAction`)
//! is checked later by the compiler against the expanded code.

mod view;

use proc_macro::TokenStream;

/// Derive a companion view for a case-routing reducer enum.
///
/// See `revue::ReducerView` for the naming contract and the shape of the
/// generated code.
#[proc_macro_derive(ReducerView)]
pub fn reducer_view(item: TokenStream) -> TokenStream {
    view::expand_entry(item)
}
