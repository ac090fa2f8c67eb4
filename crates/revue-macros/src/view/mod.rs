//! `ReducerView` derive pipeline.
//!
//! Synthesizes a companion view for a case-routing reducer enum: one
//! dispatch arm per case, in source order, delegating payload-carrying
//! cases to the payload's own view through a scoped store.
//!
//! The pipeline is strictly staged and deterministic:
//!
//!   parse → validate → expand
//!
//! Semantics (that `FooView`, `FooState` and `FooAction` exist and line
//! up) are handled entirely by the compiler against the expanded code.
//! This module only enforces syntax and structural correctness.

mod expand;
mod parse;
mod validate;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

///
/// expand_entry
///
/// Shared entrypoint for the `ReducerView` derive.
///
/// Responsibilities:
/// - parse the enum into an ordered case specification
/// - validate structural invariants
/// - expand into the companion view declaration
///
/// Every failure surfaces as a spanned compile error; there is no silent
/// empty-output path.
///

pub fn expand_entry(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    // ---------------------------------------------------------------------
    // Parse phase (case enumeration + payload classification)
    // ---------------------------------------------------------------------

    let spec = match parse::parse_enum(&input) {
        Ok(v) => v,
        Err(e) => return e.to_compile_error().into(),
    };

    // ---------------------------------------------------------------------
    // Validate phase (structural invariants only)
    // ---------------------------------------------------------------------

    if let Err(e) = validate::validate(&input) {
        return e.to_compile_error().into();
    }

    // ---------------------------------------------------------------------
    // Expansion phase (code generation)
    // ---------------------------------------------------------------------

    expand::expand(&spec).into()
}
