//
// ============================================================================
// DISPATCH SYNTHESIS INVARIANTS
// ============================================================================
//
// This module generates the companion view for a reducer enum. The
// following invariants are intentional and MUST be preserved:
//
// 1. Source-order dispatch
//    --------------------
//    The generated match has exactly one arm per case, in source order,
//    with no default arm. Exhaustiveness over the mirrored state enum is
//    the compiler's job. Arm order is not semantically load-bearing at
//    runtime, but expansion must be byte-identical for identical input.
//
// 2. Additive expansion
//    ------------------
//    The derive emits only the companion view struct and its `View` impl.
//    The input enum is never re-stated or altered.
//
// 3. Naming contract
//    ---------------
//    For an enum `Foo`, the expansion references `FooState`, `FooAction`
//    and `FooView`; for a feature payload `F` it references `FView`.
//    These names are fixed, not configurable. Their existence is checked
//    by the compiler against the expanded code, not here.
//
// 4. Inactive-case fallback
//    ----------------------
//    A feature arm whose scoped store is absent renders nothing. That is
//    the ordinary "case not currently active" path, not an error.
//

use crate::view::parse::{CasePattern, CaseSpec, EnumSpec, PayloadShape};
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::Ident;

//
// ============================================================================
// expand - code generation only
// ============================================================================
//

pub fn expand(spec: &EnumSpec) -> TokenStream2 {
    let vis = &spec.vis;
    let view = format_ident!("{}View", spec.ident);
    let state = format_ident!("{}State", spec.ident);
    let action = format_ident!("{}Action", spec.ident);

    let body = dispatch(spec, &state, &action);

    quote! {
        #vis struct #view {
            #vis store: ::revue::Store<#state, #action>,
        }

        #[automatically_derived]
        impl ::revue::View for #view {
            #[allow(unreachable_patterns)]
            fn body(&self) -> ::revue::AnyView {
                #body
            }
        }
    }
}

//
// ============================================================================
// dispatch synthesis
// ============================================================================
//

fn dispatch(spec: &EnumSpec, state: &Ident, action: &Ident) -> TokenStream2 {
    // Empty-enum fast path: no dispatch structure at all.
    if spec.cases.is_empty() {
        return render_nothing();
    }

    let arms = spec.cases.iter().map(|case| arm(case, state, action));

    quote! {
        match self.store.state() {
            #(#arms)*
        }
    }
}

fn arm(case: &CaseSpec, state: &Ident, action: &Ident) -> TokenStream2 {
    let pattern = arm_pattern(case, state);
    let body = match &case.payload {
        PayloadShape::Feature(feature) => delegate(case, feature, state, action),
        PayloadShape::None | PayloadShape::Opaque => render_nothing(),
    };

    quote! {
        #pattern => {
            #body
        }
    }
}

fn arm_pattern(case: &CaseSpec, state: &Ident) -> TokenStream2 {
    let name = &case.ident;

    match case.pattern {
        CasePattern::Unit => quote!(#state::#name),
        CasePattern::Tuple => quote!(#state::#name(..)),
        CasePattern::Struct => quote!(#state::#name { .. }),
    }
}

/// Scope the store through the case's state extractor and action embedder
/// (both keyed by the *case name*, never the payload type name), then
/// construct the feature's view with the scoped store.
fn delegate(case: &CaseSpec, feature: &Ident, state: &Ident, action: &Ident) -> TokenStream2 {
    let name = &case.ident;
    let feature_view = format_ident!("{}View", feature);

    quote! {
        if let Some(store) = self.store.scope(
            |state| match state {
                #state::#name(child) => Some(child),
                _ => None,
            },
            #action::#name,
        ) {
            ::revue::AnyView::new(#feature_view { store })
        } else {
            ::revue::AnyView::empty()
        }
    }
}

fn render_nothing() -> TokenStream2 {
    quote!(::revue::AnyView::empty())
}
