//! Revue facade crate.
//!
//! This crate is the recommended dependency for downstream projects. It
//! re-exports the runtime surface the `ReducerView` expansion links
//! against (`Store`, `View`, `AnyView`) together with the derive itself.
//!
//! # Naming contract
//!
//! `#[derive(ReducerView)]` on an enum `Foo` emits a companion
//! `FooView { store: Store<FooState, FooAction> }`. The expansion assumes,
//! and the compiler later checks, that:
//!
//! - `FooState` and `FooAction` exist and mirror `Foo`'s cases one-to-one,
//!   by name and payload shape;
//! - every feature payload `F` has a view named `FView` with a public
//!   `store` field accepting the scoped store.
//!
//! The derive itself never verifies any of this; it is convention over
//! configuration, resolved during type checking of the expanded code.

pub mod reducer;
pub mod store;
pub mod view;

pub use reducer::Reducer;
pub use store::Store;
pub use view::{AnyView, Text, View};

pub use revue_macros::ReducerView;

pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
